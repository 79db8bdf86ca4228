// Defensible space compliance scoring and premium discounts
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::risk::RiskError;

/// Annual wildfire premium before any compliance discount, in USD.
const BASE_ANNUAL_PREMIUM_USD: f64 = 2_400.0;

/// Discount percentage earned per compliance point.
const DISCOUNT_PCT_PER_POINT: f64 = 0.3;

/// Estimated structure-loss risk reduction per compliance point, percent.
const RISK_REDUCTION_PCT_PER_POINT: f64 = 0.9;

const MAX_COMPLIANCE_SCORE: u8 = 100;

/// Verified compliance tier; top tiers earn certificates alongside the
/// premium reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceTier {
    Bronze,
    Silver,
    Gold,
}

impl ComplianceTier {
    pub fn for_score(score: u8) -> Self {
        if score > 80 {
            ComplianceTier::Gold
        } else if score > 60 {
            ComplianceTier::Silver
        } else {
            ComplianceTier::Bronze
        }
    }
}

/// Outcome of a verified brush-clearance assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefensibleSpaceReport {
    pub score: u8,
    pub tier: ComplianceTier,
    pub premium_discount_pct: u32,
    pub premium_discount_usd: f64,
    pub risk_reduction_pct: f64,
}

/// Score a verified 0-100 compliance reading into tier, discount, and risk
/// reduction.
pub fn assess_compliance(score: u8) -> Result<DefensibleSpaceReport, RiskError> {
    if score > MAX_COMPLIANCE_SCORE {
        return Err(RiskError::InvalidInput {
            field: "score".to_string(),
            message: format!("{score} is above {MAX_COMPLIANCE_SCORE}"),
        });
    }

    let premium_discount_pct = (score as f64 * DISCOUNT_PCT_PER_POINT).floor() as u32;
    let report = DefensibleSpaceReport {
        score,
        tier: ComplianceTier::for_score(score),
        premium_discount_pct,
        premium_discount_usd: BASE_ANNUAL_PREMIUM_USD * premium_discount_pct as f64 / 100.0,
        risk_reduction_pct: score as f64 * RISK_REDUCTION_PCT_PER_POINT,
    };

    debug!(
        score = score,
        tier = ?report.tier,
        discount_pct = report.premium_discount_pct,
        "Assessed defensible space compliance"
    );

    Ok(report)
}
