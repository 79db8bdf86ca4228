// Scenario assessment record assembled by the risk engine
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    ClimateScenario, CostProjection, HazardProfile, ProjectionSummary, WarmingBand,
};

/// Adaptation urgency derived from the combined risk multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Manageable,
    AdaptationNeeded,
    UrgentTransformation,
}

impl RiskBand {
    pub fn for_multiplier(multiplier: f64) -> Self {
        if multiplier < 1.5 {
            RiskBand::Manageable
        } else if multiplier < 2.5 {
            RiskBand::AdaptationNeeded
        } else {
            RiskBand::UrgentTransformation
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Manageable => "Manageable with current systems",
            RiskBand::AdaptationNeeded => "Adaptation investment needed",
            RiskBand::UrgentTransformation => "Urgent transformation required",
        }
    }
}

/// One full recomputation of the model for the current inputs: combined risk
/// multiplier with its classification, persona hazard context, and the
/// 30-year two-track cost projection. Produced fresh on every input change
/// and discarded after display; never cached or stored.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioAssessment {
    pub id: Uuid,
    pub scenario: ClimateScenario,
    pub risk_multiplier: f64,
    pub risk_band: RiskBand,
    pub warming_band: WarmingBand,
    pub hazard_profile: HazardProfile,
    pub annual_loss_usd: f64,
    pub projection: CostProjection,
    pub summary: Option<ProjectionSummary>,
    pub computed_at: DateTime<Utc>,
}
