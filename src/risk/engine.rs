// Risk engine - recomputes the full model whenever an input changes
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::{
    ClimateScenario, PilotConfig, PilotOutcome, RiskBand, ScenarioAssessment,
};
use crate::risk::{CostCurveSimulator, RiskError, RiskMultiplierCalculator, TriggerEvaluator};

/// Single synchronous entry point for the presentation layer: one call per
/// input change, one fresh assessment back. Holds no mutable state between
/// calls; re-entrant per call.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    multiplier: RiskMultiplierCalculator,
    simulator: CostCurveSimulator,
    trigger: TriggerEvaluator,
}

impl RiskEngine {
    /// Engine with default configuration (30-year horizon, seed 42, pilot
    /// design thresholds).
    pub fn new() -> Self {
        Self {
            multiplier: RiskMultiplierCalculator::new(),
            simulator: CostCurveSimulator::default(),
            trigger: TriggerEvaluator::new(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, RiskError> {
        config.validate()?;
        Ok(Self {
            multiplier: RiskMultiplierCalculator::new(),
            simulator: CostCurveSimulator::new(config.simulation),
            trigger: TriggerEvaluator::with_thresholds(config.trigger),
        })
    }

    /// Recompute the full scenario assessment: combined multiplier, risk and
    /// warming classification, persona hazard context, and the two-track
    /// cost projection with its headline summary.
    pub fn assess_scenario(&self, scenario: &ClimateScenario) -> Result<ScenarioAssessment, RiskError> {
        scenario.validate()?;

        let risk_multiplier = self.multiplier.calculate(scenario);
        let projection = self
            .simulator
            .simulate(risk_multiplier, scenario.storm_frequency_pct)?;
        let summary = projection.summary();

        let assessment = ScenarioAssessment {
            id: Uuid::new_v4(),
            scenario: *scenario,
            risk_multiplier,
            risk_band: RiskBand::for_multiplier(risk_multiplier),
            warming_band: scenario.warming_band(),
            hazard_profile: scenario.persona.hazard_profile(),
            annual_loss_usd: scenario.persona.annual_loss_usd(
                scenario.warming_delta_c,
                scenario.sea_level_rise_cm as f64,
                scenario.storm_frequency_pct as f64,
            ),
            projection,
            summary,
            computed_at: Utc::now(),
        };

        info!(
            assessment_id = %assessment.id,
            persona = scenario.persona.label(),
            risk_multiplier = %assessment.risk_multiplier,
            risk_band = assessment.risk_band.label(),
            crossover_year = ?assessment.projection.crossover_year,
            "Assessed climate scenario"
        );

        Ok(assessment)
    }

    /// Evaluate the liquidity-trigger pilot for the current forecast inputs.
    pub fn evaluate_pilot(&self, config: &PilotConfig) -> Result<PilotOutcome, RiskError> {
        self.trigger.evaluate(config)
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}
