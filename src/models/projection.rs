// Cost projection series produced by the cost curve simulator
use serde::{Deserialize, Serialize};

/// Upfront cost difference between the resilient and BAU builds, in $k.
/// Resilient starts at 280 against a BAU base of 100.
pub const RESILIENT_UPFRONT_PREMIUM: f64 = 180.0;

/// One simulated year. Field presence and ordering are fixed: the downstream
/// renderer consumes `year`, the two cumulative totals, and the event flag
/// positionally; the BAU breakdown follows for stacked-cost charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyCost {
    pub year: u32,
    pub bau_total: f64,
    pub resilient_total: f64,
    pub disaster_event: bool,
    pub bau_base: f64,
    pub bau_insurance: f64,
    pub bau_disasters: f64,
}

/// Full simulated horizon plus the crossover year, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostProjection {
    pub years: Vec<YearlyCost>,
    /// First year index where cumulative BAU cost strictly exceeds the
    /// cumulative resilient cost; `None` if it never happens in the horizon.
    pub crossover_year: Option<u32>,
}

impl CostProjection {
    /// Number of simulated years.
    pub fn horizon(&self) -> usize {
        self.years.len()
    }

    /// Count of years in which a disaster occurred.
    pub fn disaster_years(&self) -> usize {
        self.years.iter().filter(|y| y.disaster_event).count()
    }

    /// Headline metrics over the full horizon. `None` for an empty series.
    pub fn summary(&self) -> Option<ProjectionSummary> {
        let last = self.years.last()?;
        let total_savings = last.bau_total - last.resilient_total;
        Some(ProjectionSummary {
            total_savings,
            savings_pct: total_savings / last.bau_total * 100.0,
            upfront_premium: RESILIENT_UPFRONT_PREMIUM,
            resilience_roi: total_savings / RESILIENT_UPFRONT_PREMIUM,
            crossover_year: self.crossover_year,
        })
    }
}

/// Why-resilience-pays-off metrics: horizon savings, relative reduction, and
/// the return multiple on the upfront resilience premium. Savings can be
/// negative when the BAU track stays cheaper through the whole horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_savings: f64,
    pub savings_pct: f64,
    pub upfront_premium: f64,
    pub resilience_roi: f64,
    pub crossover_year: Option<u32>,
}
