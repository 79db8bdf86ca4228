// Tiered parametric trigger evaluation with ROI projection
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    DeploymentPoint, DeploymentWindow, PilotConfig, PilotOutcome, TriggerDecision,
    TriggerEfficiency,
};
use crate::risk::RiskError;

/// Wind speed at which structural damage begins; calibration point for the
/// damage-avoidance curve.
const DAMAGE_ONSET_WIND_MPH: f64 = 60.0;

/// Wind damage scales super-linearly with speed.
const DAMAGE_SCALING_EXPONENT: f64 = 2.5;

/// Below this ROI a fired trigger is flagged as marginal.
const MARGINAL_ROI_THRESHOLD: f64 = 2.0;

/// Cumulative share of deployed funds released at each distribution
/// milestone across the 48-hour window.
const DEPLOYMENT_CURVE: [(DeploymentWindow, f64); 4] = [
    (DeploymentWindow::T48h, 0.0),
    (DeploymentWindow::T24h, 0.2),
    (DeploymentWindow::T12h, 0.6),
    (DeploymentWindow::Impact, 1.0),
];

/// Wind speed and forecast confidence thresholds for the payout tiers.
/// Defaults match the pilot design; both tiers are tunable for threshold
/// calibration studies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerThresholds {
    pub full_wind_mph: u32,
    pub full_confidence_pct: u32,
    pub partial_wind_mph: u32,
    pub partial_confidence_pct: u32,
}

impl Default for TriggerThresholds {
    fn default() -> Self {
        Self {
            full_wind_mph: 130,
            full_confidence_pct: 80,
            partial_wind_mph: 90,
            partial_confidence_pct: 60,
        }
    }
}

impl TriggerThresholds {
    /// The partial tier must sit at or below the full tier on both axes,
    /// otherwise the tier ordering is meaningless.
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.partial_wind_mph > self.full_wind_mph {
            return Err(RiskError::ConfigurationError {
                message: format!(
                    "partial wind threshold {} exceeds full threshold {}",
                    self.partial_wind_mph, self.full_wind_mph
                ),
            });
        }
        if self.partial_confidence_pct > self.full_confidence_pct {
            return Err(RiskError::ConfigurationError {
                message: format!(
                    "partial confidence threshold {} exceeds full threshold {}",
                    self.partial_confidence_pct, self.full_confidence_pct
                ),
            });
        }
        if self.full_confidence_pct > 100 {
            return Err(RiskError::ConfigurationError {
                message: format!("confidence threshold {} is above 100", self.full_confidence_pct),
            });
        }
        Ok(())
    }
}

/// Evaluates the tiered payout decision for a hurricane forecast and projects
/// the economics of the resulting deployment.
#[derive(Debug, Clone, Default)]
pub struct TriggerEvaluator {
    thresholds: TriggerThresholds,
}

impl TriggerEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: TriggerThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &TriggerThresholds {
        &self.thresholds
    }

    /// Tiered decision, first match wins.
    pub fn decide(&self, wind_speed_mph: u32, confidence_pct: u32) -> TriggerDecision {
        if wind_speed_mph >= self.thresholds.full_wind_mph
            && confidence_pct > self.thresholds.full_confidence_pct
        {
            TriggerDecision::FullTrigger
        } else if wind_speed_mph >= self.thresholds.partial_wind_mph
            && confidence_pct > self.thresholds.partial_confidence_pct
        {
            TriggerDecision::PartialTrigger
        } else {
            TriggerDecision::NoTrigger
        }
    }

    /// Evaluate a pilot configuration into a full outcome.
    pub fn evaluate(&self, config: &PilotConfig) -> Result<PilotOutcome, RiskError> {
        config.validate()?;

        let decision = self.decide(config.wind_speed_mph, config.confidence_pct);
        let payout_ratio = decision.payout_ratio();
        let deployed_funds = config.budget * payout_ratio;

        // Asset preservation scales super-linearly with hazard intensity:
        // wind damage grows roughly as wind^2.5 past the onset threshold.
        let damage_avoidance_factor =
            (config.wind_speed_mph as f64 / DAMAGE_ONSET_WIND_MPH).powf(DAMAGE_SCALING_EXPONENT);
        let estimated_asset_savings = deployed_funds * damage_avoidance_factor;
        let roi = if deployed_funds > 0.0 {
            estimated_asset_savings / deployed_funds
        } else {
            0.0
        };

        let households_reached =
            (config.target_households() as f64 * payout_ratio).floor() as u64;

        let schedule = DEPLOYMENT_CURVE
            .iter()
            .map(|&(window, share)| DeploymentPoint {
                window,
                funds_deployed: deployed_funds * share,
            })
            .collect();

        let efficiency = if deployed_funds <= 0.0 {
            TriggerEfficiency::Standby
        } else if roi < MARGINAL_ROI_THRESHOLD {
            TriggerEfficiency::Marginal
        } else {
            TriggerEfficiency::Effective
        };

        debug!(
            wind_speed_mph = config.wind_speed_mph,
            confidence_pct = config.confidence_pct,
            decision = decision.label(),
            deployed_funds = %deployed_funds,
            roi = %roi,
            "Evaluated parametric trigger"
        );

        Ok(PilotOutcome {
            decision,
            payout_ratio,
            deployed_funds,
            damage_avoidance_factor,
            estimated_asset_savings,
            roi,
            households_reached,
            schedule,
            efficiency,
        })
    }
}
