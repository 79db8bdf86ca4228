// Combined scenario risk multiplier
use tracing::debug;

use crate::models::{ClimateScenario, HazardWeights};
use crate::risk::{BASELINE_WARMING_C, MIN_RISK_MULTIPLIER};

/// Sea level rise (cm) that contributes one full weighted unit of risk.
const SEA_LEVEL_NORM_CM: f64 = 50.0;

/// Storm frequency increase (%) that contributes one full weighted unit.
const STORM_NORM_PCT: f64 = 100.0;

/// Combines warming, sea level rise, and storm frequency into a single
/// dimensionless multiplier over baseline risk, weighted by the persona's
/// hazard exposure. The result is floored at 1.0: risk is never rated below
/// baseline.
#[derive(Debug, Clone, Default)]
pub struct RiskMultiplierCalculator;

impl RiskMultiplierCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Multiplier for a scenario, using the persona's exposure weights.
    pub fn calculate(&self, scenario: &ClimateScenario) -> f64 {
        self.calculate_with_weights(
            scenario.warming_delta_c,
            scenario.sea_level_rise_cm as f64,
            scenario.storm_frequency_pct as f64,
            &scenario.persona.weights(),
        )
    }

    /// Raw formula over unvalidated inputs. Total over all finite inputs;
    /// callers bound the ranges.
    pub fn calculate_with_weights(
        &self,
        warming_c: f64,
        sea_level_cm: f64,
        storm_pct: f64,
        weights: &HazardWeights,
    ) -> f64 {
        let base_risk = warming_c / BASELINE_WARMING_C;
        let risk = base_risk
            * (1.0
                + (sea_level_cm / SEA_LEVEL_NORM_CM) * weights.sea
                + (storm_pct / STORM_NORM_PCT) * weights.storm);
        let multiplier = risk.max(MIN_RISK_MULTIPLIER);

        debug!(
            warming_c = %warming_c,
            sea_level_cm = %sea_level_cm,
            storm_pct = %storm_pct,
            weight_sea = %weights.sea,
            weight_storm = %weights.storm,
            multiplier = %multiplier,
            "Calculated combined risk multiplier"
        );

        multiplier
    }
}
