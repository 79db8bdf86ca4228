// Climate scenario inputs and warming classification
use serde::{Deserialize, Serialize};

use crate::models::VulnerabilityProfile;
use crate::risk::RiskError;

/// Declared bounds for scenario inputs. The presentation layer clamps its
/// controls to these ranges; `validate` rejects anything outside them.
pub const MIN_WARMING_C: f64 = 1.0;
pub const MAX_WARMING_C: f64 = 4.0;
pub const MIN_SEA_LEVEL_CM: u32 = 20;
pub const MAX_SEA_LEVEL_CM: u32 = 200;
pub const MAX_STORM_FREQUENCY_PCT: u32 = 100;

/// A climate future: warming above pre-industrial, sea level rise by 2100,
/// extreme storm frequency increase, and who faces it.
///
/// Fields are independently bounded; no cross-field consistency is enforced
/// (sea level may be set inconsistently with warming).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateScenario {
    pub warming_delta_c: f64,
    pub sea_level_rise_cm: u32,
    pub storm_frequency_pct: u32,
    pub persona: VulnerabilityProfile,
}

impl ClimateScenario {
    pub fn new(
        warming_delta_c: f64,
        sea_level_rise_cm: u32,
        storm_frequency_pct: u32,
        persona: VulnerabilityProfile,
    ) -> Self {
        Self {
            warming_delta_c,
            sea_level_rise_cm,
            storm_frequency_pct,
            persona,
        }
    }

    /// Check every field against its declared range.
    pub fn validate(&self) -> Result<(), RiskError> {
        if !self.warming_delta_c.is_finite()
            || self.warming_delta_c < MIN_WARMING_C
            || self.warming_delta_c > MAX_WARMING_C
        {
            return Err(RiskError::InvalidScenario {
                field: "warming_delta_c".to_string(),
                message: format!(
                    "{} is outside [{MIN_WARMING_C}, {MAX_WARMING_C}]",
                    self.warming_delta_c
                ),
            });
        }
        if self.sea_level_rise_cm < MIN_SEA_LEVEL_CM || self.sea_level_rise_cm > MAX_SEA_LEVEL_CM {
            return Err(RiskError::InvalidScenario {
                field: "sea_level_rise_cm".to_string(),
                message: format!(
                    "{} is outside [{MIN_SEA_LEVEL_CM}, {MAX_SEA_LEVEL_CM}]",
                    self.sea_level_rise_cm
                ),
            });
        }
        if self.storm_frequency_pct > MAX_STORM_FREQUENCY_PCT {
            return Err(RiskError::InvalidScenario {
                field: "storm_frequency_pct".to_string(),
                message: format!(
                    "{} is above {MAX_STORM_FREQUENCY_PCT}",
                    self.storm_frequency_pct
                ),
            });
        }
        Ok(())
    }

    /// Warming classification for this scenario.
    pub fn warming_band(&self) -> WarmingBand {
        WarmingBand::for_warming(self.warming_delta_c)
    }
}

/// IPCC-style warming pathway classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarmingBand {
    ParisTarget,
    CurrentTrajectory,
    Catastrophic,
}

impl WarmingBand {
    pub fn for_warming(warming_c: f64) -> Self {
        if warming_c <= 1.5 {
            WarmingBand::ParisTarget
        } else if warming_c <= 2.5 {
            WarmingBand::CurrentTrajectory
        } else {
            WarmingBand::Catastrophic
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WarmingBand::ParisTarget => "Paris Agreement Target",
            WarmingBand::CurrentTrajectory => "Current Trajectory",
            WarmingBand::Catastrophic => "Catastrophic Scenario",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(warming: f64, sea: u32, storm: u32) -> ClimateScenario {
        ClimateScenario::new(warming, sea, storm, VulnerabilityProfile::CoastalHomeowner)
    }

    #[test]
    fn test_valid_scenario_passes() {
        assert!(scenario(1.5, 45, 15).validate().is_ok());
        assert!(scenario(MIN_WARMING_C, MIN_SEA_LEVEL_CM, 0).validate().is_ok());
        assert!(scenario(MAX_WARMING_C, MAX_SEA_LEVEL_CM, MAX_STORM_FREQUENCY_PCT)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_out_of_range_warming_rejected() {
        assert!(scenario(0.9, 45, 15).validate().is_err());
        assert!(scenario(4.1, 45, 15).validate().is_err());
        assert!(scenario(f64::NAN, 45, 15).validate().is_err());
    }

    #[test]
    fn test_out_of_range_sea_level_rejected() {
        assert!(scenario(2.0, 19, 15).validate().is_err());
        assert!(scenario(2.0, 201, 15).validate().is_err());
    }

    #[test]
    fn test_out_of_range_storm_frequency_rejected() {
        assert!(scenario(2.0, 45, 101).validate().is_err());
    }

    #[test]
    fn test_warming_band_boundaries() {
        assert_eq!(WarmingBand::for_warming(1.5), WarmingBand::ParisTarget);
        assert_eq!(WarmingBand::for_warming(1.6), WarmingBand::CurrentTrajectory);
        assert_eq!(WarmingBand::for_warming(2.5), WarmingBand::CurrentTrajectory);
        assert_eq!(WarmingBand::for_warming(2.6), WarmingBand::Catastrophic);
    }
}
