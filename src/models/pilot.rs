// Parametric pilot configuration and trigger outcome records
use serde::{Deserialize, Serialize};

use crate::risk::RiskError;

/// Upper bound for forecast wind speed input (mph).
pub const MAX_WIND_SPEED_MPH: u32 = 180;

/// Upper bound for forecast confidence input (percent).
pub const MAX_CONFIDENCE_PCT: u32 = 100;

/// Inputs for a liquidity-trigger pilot: funding envelope, per-household
/// transfer, and the current hurricane forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PilotConfig {
    pub budget: f64,
    pub payout_per_household: f64,
    pub wind_speed_mph: u32,
    pub confidence_pct: u32,
}

impl PilotConfig {
    pub fn new(budget: f64, payout_per_household: f64, wind_speed_mph: u32, confidence_pct: u32) -> Self {
        Self {
            budget,
            payout_per_household,
            wind_speed_mph,
            confidence_pct,
        }
    }

    pub fn validate(&self) -> Result<(), RiskError> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(RiskError::InvalidPilotConfig {
                field: "budget".to_string(),
                message: format!("{} must be positive", self.budget),
            });
        }
        if !self.payout_per_household.is_finite() || self.payout_per_household <= 0.0 {
            return Err(RiskError::InvalidPilotConfig {
                field: "payout_per_household".to_string(),
                message: format!("{} must be positive", self.payout_per_household),
            });
        }
        if self.wind_speed_mph > MAX_WIND_SPEED_MPH {
            return Err(RiskError::InvalidPilotConfig {
                field: "wind_speed_mph".to_string(),
                message: format!("{} is above {MAX_WIND_SPEED_MPH}", self.wind_speed_mph),
            });
        }
        if self.confidence_pct > MAX_CONFIDENCE_PCT {
            return Err(RiskError::InvalidPilotConfig {
                field: "confidence_pct".to_string(),
                message: format!("{} is above {MAX_CONFIDENCE_PCT}", self.confidence_pct),
            });
        }
        Ok(())
    }

    /// Households the budget covers at the configured transfer size.
    pub fn target_households(&self) -> u64 {
        (self.budget / self.payout_per_household).floor() as u64
    }
}

/// Tiered payout decision. Tiers rather than a binary cliff keep basis risk
/// manageable: a near-miss forecast still releases partial funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerDecision {
    NoTrigger,
    PartialTrigger,
    FullTrigger,
}

impl TriggerDecision {
    /// Fraction of the budget released by this decision.
    pub fn payout_ratio(self) -> f64 {
        match self {
            TriggerDecision::NoTrigger => 0.0,
            TriggerDecision::PartialTrigger => 0.5,
            TriggerDecision::FullTrigger => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TriggerDecision::NoTrigger => "Monitoring (No Payout)",
            TriggerDecision::PartialTrigger => "Partial Trigger (50% Payout)",
            TriggerDecision::FullTrigger => "Full Trigger (100% Payout)",
        }
    }
}

/// Distribution milestones across the 48-hour pre-landfall window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentWindow {
    T48h,
    T24h,
    T12h,
    Impact,
}

/// Cumulative funds released by a distribution milestone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeploymentPoint {
    pub window: DeploymentWindow,
    pub funds_deployed: f64,
}

/// Calibration feedback for a trigger evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerEfficiency {
    /// No funds deployed; system on standby.
    Standby,
    /// Storm intensity marginal relative to payout cost; threshold
    /// calibration recommended.
    Marginal,
    /// Deployment aligns with high-impact damage prevention.
    Effective,
}

/// Evaluated trigger outcome: the decision, the money it moves, and the
/// projected return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotOutcome {
    pub decision: TriggerDecision,
    pub payout_ratio: f64,
    pub deployed_funds: f64,
    pub damage_avoidance_factor: f64,
    pub estimated_asset_savings: f64,
    pub roi: f64,
    pub households_reached: u64,
    pub schedule: Vec<DeploymentPoint>,
    pub efficiency: TriggerEfficiency,
}
