// Climate risk label for real estate listings
use serde::{Deserialize, Serialize};

/// Points of label score per unit of risk multiplier.
const SCORE_PER_MULTIPLIER: f64 = 30.0;

const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabelBand {
    Low,
    Moderate,
    High,
}

impl RiskLabelBand {
    pub fn for_score(score: u8) -> Self {
        if score < 30 {
            RiskLabelBand::Low
        } else if score < 60 {
            RiskLabelBand::Moderate
        } else {
            RiskLabelBand::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLabelBand::Low => "Low Risk",
            RiskLabelBand::Moderate => "Moderate",
            RiskLabelBand::High => "High Risk",
        }
    }
}

/// A 0-100 climate risk score for a listing, derived from the combined
/// scenario risk multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLabel {
    pub score: u8,
    pub band: RiskLabelBand,
}

impl RiskLabel {
    pub fn from_multiplier(risk_multiplier: f64) -> Self {
        let score = (risk_multiplier * SCORE_PER_MULTIPLIER).clamp(0.0, MAX_SCORE) as u8;
        RiskLabel {
            score,
            band: RiskLabelBand::for_score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_scales_with_multiplier() {
        assert_eq!(RiskLabel::from_multiplier(1.0).score, 30);
        assert_eq!(RiskLabel::from_multiplier(2.0).score, 60);
    }

    #[test]
    fn test_score_saturates_at_100() {
        assert_eq!(RiskLabel::from_multiplier(5.0).score, 100);
        assert_eq!(RiskLabel::from_multiplier(50.0).score, 100);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskLabelBand::for_score(29), RiskLabelBand::Low);
        assert_eq!(RiskLabelBand::for_score(30), RiskLabelBand::Moderate);
        assert_eq!(RiskLabelBand::for_score(59), RiskLabelBand::Moderate);
        assert_eq!(RiskLabelBand::for_score(60), RiskLabelBand::High);
    }

    #[test]
    fn test_baseline_multiplier_is_moderate() {
        let label = RiskLabel::from_multiplier(1.0);
        assert_eq!(label.band, RiskLabelBand::Moderate);
    }
}
