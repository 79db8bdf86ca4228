// Vulnerability persona definitions and hazard exposure weight tables
use serde::{Deserialize, Serialize};

/// Named vulnerability archetype with fixed relative exposure to sea-level,
/// storm, and heat hazards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VulnerabilityProfile {
    CoastalHomeowner,
    SubsistenceFarmer,
    WildlandInterface,
    UrbanHeatIsland,
    MountainCommunity,
}

impl VulnerabilityProfile {
    /// All known personas, in selector order.
    pub const ALL: [VulnerabilityProfile; 5] = [
        VulnerabilityProfile::CoastalHomeowner,
        VulnerabilityProfile::SubsistenceFarmer,
        VulnerabilityProfile::WildlandInterface,
        VulnerabilityProfile::UrbanHeatIsland,
        VulnerabilityProfile::MountainCommunity,
    ];

    /// Display label as shown in the scenario selector.
    pub fn label(self) -> &'static str {
        match self {
            VulnerabilityProfile::CoastalHomeowner => "Coastal Homeowner (Florida)",
            VulnerabilityProfile::SubsistenceFarmer => "Subsistence Farmer (Bangladesh)",
            VulnerabilityProfile::WildlandInterface => "Wildland Interface (California)",
            VulnerabilityProfile::UrbanHeatIsland => "Urban Heat Island (Phoenix)",
            VulnerabilityProfile::MountainCommunity => "Mountain Community (Colorado)",
        }
    }

    /// Parse a selector label. Returns `None` for unrecognized labels;
    /// weight lookups over labels degrade to neutral weights instead of failing.
    pub fn from_label(label: &str) -> Option<Self> {
        VulnerabilityProfile::ALL
            .into_iter()
            .find(|profile| profile.label() == label)
    }

    /// Fixed hazard exposure weights for this persona.
    pub fn weights(self) -> HazardWeights {
        match self {
            VulnerabilityProfile::CoastalHomeowner => HazardWeights { sea: 2.5, storm: 2.0, heat: 1.2 },
            VulnerabilityProfile::SubsistenceFarmer => HazardWeights { sea: 2.8, storm: 2.3, heat: 1.8 },
            VulnerabilityProfile::WildlandInterface => HazardWeights { sea: 0.5, storm: 1.0, heat: 2.5 },
            VulnerabilityProfile::UrbanHeatIsland => HazardWeights { sea: 0.2, storm: 0.8, heat: 3.5 },
            VulnerabilityProfile::MountainCommunity => HazardWeights { sea: 0.1, storm: 1.5, heat: 1.5 },
        }
    }

    /// Qualitative hazard context for this persona.
    pub fn hazard_profile(self) -> HazardProfile {
        match self {
            VulnerabilityProfile::CoastalHomeowner => HazardProfile {
                summary: "High exposure to hurricanes and sea level rise",
                primary_hazards: ["Storm surge", "Hurricane winds", "Flooding"],
                adaptation_needs: "Elevation, storm shutters, flood insurance",
            },
            VulnerabilityProfile::SubsistenceFarmer => HazardProfile {
                summary: "Extreme vulnerability to flooding and cyclones",
                primary_hazards: ["Monsoon flooding", "Cyclones", "Soil erosion"],
                adaptation_needs: "Early warning systems, raised housing, crop insurance",
            },
            VulnerabilityProfile::WildlandInterface => HazardProfile {
                summary: "High wildfire risk with increasing heat",
                primary_hazards: ["Wildfires", "Air quality", "Drought"],
                adaptation_needs: "Defensible space, fire-resistant materials, evacuation routes",
            },
            VulnerabilityProfile::UrbanHeatIsland => HazardProfile {
                summary: "Extreme heat with grid vulnerability",
                primary_hazards: ["Heat waves", "Power outages", "Water stress"],
                adaptation_needs: "Cooling centers, solar+battery, green infrastructure",
            },
            VulnerabilityProfile::MountainCommunity => HazardProfile {
                summary: "Wildfire smoke, avalanche, extreme weather",
                primary_hazards: ["Wildfire smoke", "Avalanche", "Flash floods"],
                adaptation_needs: "Air filtration, emergency access, water storage",
            },
        }
    }

    /// Estimated annual loss in USD for this persona under the given scenario
    /// inputs. Each persona scales differently with warming, sea level, and
    /// storm frequency.
    pub fn annual_loss_usd(self, warming_c: f64, sea_level_cm: f64, storm_pct: f64) -> f64 {
        let warming_factor = warming_c / crate::risk::BASELINE_WARMING_C;
        match self {
            VulnerabilityProfile::CoastalHomeowner => 5_000.0 * warming_factor * (1.0 + sea_level_cm / 100.0),
            VulnerabilityProfile::SubsistenceFarmer => 800.0 * warming_factor * (1.0 + storm_pct / 50.0),
            VulnerabilityProfile::WildlandInterface => 8_000.0 * warming_factor * (1.0 + storm_pct / 100.0),
            VulnerabilityProfile::UrbanHeatIsland => 3_000.0 * warming_factor * warming_factor,
            VulnerabilityProfile::MountainCommunity => 4_000.0 * warming_factor * (1.0 + storm_pct / 80.0),
        }
    }
}

/// Relative exposure weights applied to the scenario hazard terms.
/// Heat exposure does not enter the combined multiplier; it is part of the
/// persona's fixed exposure record and drives persona context displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardWeights {
    pub sea: f64,
    pub storm: f64,
    pub heat: f64,
}

impl HazardWeights {
    /// Weights applied when a persona label is not recognized.
    pub const NEUTRAL: HazardWeights = HazardWeights { sea: 1.0, storm: 1.0, heat: 1.0 };

    /// Look up weights by selector label, falling back to neutral weights for
    /// unrecognized labels.
    pub fn for_label(label: &str) -> HazardWeights {
        VulnerabilityProfile::from_label(label)
            .map(VulnerabilityProfile::weights)
            .unwrap_or(HazardWeights::NEUTRAL)
    }
}

/// Qualitative persona context: exposure summary, dominant hazards, and the
/// adaptation measures that address them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HazardProfile {
    pub summary: &'static str,
    pub primary_hazards: [&'static str; 3],
    pub adaptation_needs: &'static str,
}
