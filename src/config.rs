// Engine configuration
use serde::{Deserialize, Serialize};

use crate::risk::{RiskError, TriggerThresholds};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub simulation: SimulationSettings,
    pub trigger: TriggerThresholds,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Years to project; one record per year.
    pub horizon_years: u32,
    /// Seed for the disaster draw. Fixed by default so reruns over unchanged
    /// inputs render identical charts.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            simulation: SimulationSettings::default(),
            trigger: TriggerThresholds::default(),
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            horizon_years: 30,
            seed: 42,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.simulation.horizon_years == 0 {
            return Err(RiskError::InvalidHorizon { years: 0 });
        }
        self.trigger.validate()
    }
}
