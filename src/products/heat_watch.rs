// Heat wave alert classification from smart meter monitoring
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Temperature above which heat becomes a mass-casualty risk.
const EXTREME_DANGER_THRESHOLD_F: u32 = 105;

/// Temperature above which vulnerable households need monitoring.
const WARNING_THRESHOLD_F: u32 = 95;

/// Vulnerable households flagged with no cooling at each alert level.
const EXTREME_DANGER_HOUSEHOLDS: u32 = 450;
const WARNING_HOUSEHOLDS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeatAlertLevel {
    Safe,
    Warning,
    ExtremeDanger,
}

impl HeatAlertLevel {
    pub fn for_temperature(temperature_f: u32) -> Self {
        if temperature_f > EXTREME_DANGER_THRESHOLD_F {
            HeatAlertLevel::ExtremeDanger
        } else if temperature_f > WARNING_THRESHOLD_F {
            HeatAlertLevel::Warning
        } else {
            HeatAlertLevel::Safe
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeatAlertLevel::Safe => "Safe",
            HeatAlertLevel::Warning => "Warning",
            HeatAlertLevel::ExtremeDanger => "Extreme Danger",
        }
    }
}

/// Current heat status and the households flagged for community response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatAlert {
    pub temperature_f: u32,
    pub level: HeatAlertLevel,
    pub households_at_risk: u32,
}

/// Classify the current temperature into an alert with an at-risk household
/// count. Alerts route to community partners, never law enforcement.
pub fn classify_heat(temperature_f: u32) -> HeatAlert {
    let level = HeatAlertLevel::for_temperature(temperature_f);
    let households_at_risk = match level {
        HeatAlertLevel::Safe => 0,
        HeatAlertLevel::Warning => WARNING_HOUSEHOLDS,
        HeatAlertLevel::ExtremeDanger => EXTREME_DANGER_HOUSEHOLDS,
    };

    debug!(
        temperature_f = temperature_f,
        level = level.label(),
        households_at_risk = households_at_risk,
        "Classified heat alert"
    );

    HeatAlert {
        temperature_f,
        level,
        households_at_risk,
    }
}
