// Two-track 30-year infrastructure cost simulation with disaster events
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::SimulationSettings;
use crate::models::{CostProjection, YearlyCost};
use crate::risk::RiskError;

/// Base annual probability of a disaster year before risk scaling.
const BASE_DISASTER_PROBABILITY: f64 = 0.15;

/// BAU track: starting cost and linear maintenance growth, in $k.
const INITIAL_BAU_COST: f64 = 100.0;
const BAU_MAINTENANCE_GROWTH: f64 = 8.0;

/// BAU insurance premium growth per year, scaled by the risk multiplier.
const BAU_INSURANCE_GROWTH: f64 = 15.0;

/// Resilient track: higher upfront cost, lower growth, flat insurance.
const INITIAL_RESILIENT_COST: f64 = 280.0;
const RESILIENT_MAINTENANCE_GROWTH: f64 = 4.0;
const RESILIENT_INSURANCE_GROWTH: f64 = 5.0;

/// Disaster cost in the event year, before aging and risk scaling.
const DISASTER_BASE_COST: f64 = 150.0;

/// Years of elevated costs following a disaster, and the per-step surcharge
/// unit: offset j costs 30 * (4 - j) for j in 1..=3.
const RIPPLE_YEARS: usize = 3;
const RIPPLE_UNIT_COST: f64 = 30.0;

/// Hardened infrastructure absorbs an event at this flat cost.
const RESILIENT_DISASTER_IMPACT: f64 = 25.0;

/// Annual return foregone on money sunk into disaster recovery.
const OPPORTUNITY_COST_RATE: f64 = 0.05;

/// Simulates cumulative costs for the business-as-usual and resilient
/// strategies over a fixed horizon. Disaster years are drawn from an
/// explicit ChaCha stream seeded per simulation, so equal seeds and inputs
/// produce identical output across calls and platforms.
#[derive(Debug, Clone)]
pub struct CostCurveSimulator {
    horizon_years: u32,
    seed: u64,
}

impl CostCurveSimulator {
    pub fn new(settings: SimulationSettings) -> Self {
        Self {
            horizon_years: settings.horizon_years,
            seed: settings.seed,
        }
    }

    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    /// Run the simulation for the given combined risk multiplier.
    ///
    /// The disaster probability `0.15 * multiplier` is clamped to [0, 1];
    /// past a multiplier of ~6.7 every year is a disaster year.
    pub fn simulate(
        &self,
        risk_multiplier: f64,
        storm_frequency_pct: u32,
    ) -> Result<CostProjection, RiskError> {
        let years = self.horizon_years as usize;
        if years == 0 {
            return Err(RiskError::InvalidHorizon { years: self.horizon_years });
        }

        let probability = (BASE_DISASTER_PROBABILITY * risk_multiplier).clamp(0.0, 1.0);

        debug!(
            risk_multiplier = %risk_multiplier,
            storm_frequency_pct = %storm_frequency_pct,
            disaster_probability = %probability,
            horizon_years = %years,
            seed = %self.seed,
            "Simulating two-track cost curve"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let events: Vec<bool> = (0..years).map(|_| rng.gen_bool(probability)).collect();

        // Event-year costs grow with infrastructure age and risk; each event
        // also raises the next three years. An event year's own cost replaces
        // any ripple surcharge it would have received.
        let mut disaster_costs = vec![0.0; years];
        for year in 0..years {
            if events[year] {
                disaster_costs[year] =
                    DISASTER_BASE_COST * (1.0 + year as f64 / 10.0) * risk_multiplier;
                for offset in 1..=RIPPLE_YEARS {
                    if year + offset < years {
                        disaster_costs[year + offset] +=
                            RIPPLE_UNIT_COST * (RIPPLE_YEARS + 1 - offset) as f64;
                    }
                }
            }
        }

        let mut bau_base_cum = 0.0;
        let mut bau_insurance_cum = 0.0;
        let mut bau_disasters_cum = 0.0;
        let mut resilient_cum = 0.0;
        let mut crossover_year = None;
        let mut records = Vec::with_capacity(years);

        for year in 0..years {
            let y = year as f64;

            bau_base_cum += INITIAL_BAU_COST + BAU_MAINTENANCE_GROWTH * y;
            bau_insurance_cum += BAU_INSURANCE_GROWTH * y * risk_multiplier;
            bau_disasters_cum += disaster_costs[year];
            let opportunity_cost = bau_disasters_cum * OPPORTUNITY_COST_RATE;
            let bau_total = bau_base_cum + bau_insurance_cum + bau_disasters_cum + opportunity_cost;

            resilient_cum += INITIAL_RESILIENT_COST
                + RESILIENT_MAINTENANCE_GROWTH * y
                + RESILIENT_INSURANCE_GROWTH * y;
            if events[year] {
                resilient_cum += RESILIENT_DISASTER_IMPACT;
            }

            if crossover_year.is_none() && bau_total > resilient_cum {
                crossover_year = Some(year as u32);
            }

            records.push(YearlyCost {
                year: year as u32,
                bau_total,
                resilient_total: resilient_cum,
                disaster_event: events[year],
                bau_base: bau_base_cum,
                bau_insurance: bau_insurance_cum,
                bau_disasters: bau_disasters_cum,
            });
        }

        let projection = CostProjection { years: records, crossover_year };

        debug!(
            disaster_years = projection.disaster_years(),
            crossover_year = ?projection.crossover_year,
            "Cost curve simulation complete"
        );

        Ok(projection)
    }
}

impl Default for CostCurveSimulator {
    fn default() -> Self {
        Self::new(SimulationSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator() -> CostCurveSimulator {
        CostCurveSimulator::default()
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let sim = CostCurveSimulator::new(SimulationSettings { horizon_years: 0, seed: 42 });
        assert!(matches!(
            sim.simulate(1.0, 0),
            Err(RiskError::InvalidHorizon { years: 0 })
        ));
    }

    #[test]
    fn test_identical_inputs_are_byte_identical() {
        let a = simulator().simulate(1.0, 0).unwrap();
        let b = simulator().simulate(1.0, 0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_probability_has_no_events_and_no_crossover() {
        // A zero multiplier kills both the disaster draw and BAU insurance;
        // the BAU flow (100 + 8y) stays below the resilient flow (280 + 9y)
        // every single year, so the tracks never cross.
        let projection = simulator().simulate(0.0, 0).unwrap();
        assert_eq!(projection.disaster_years(), 0);
        assert_eq!(projection.crossover_year, None);

        // Closed-form spot checks: no events, no insurance.
        let year1 = &projection.years[1];
        assert_eq!(year1.bau_total, 100.0 + 108.0);
        assert_eq!(year1.resilient_total, 280.0 + 289.0);
        assert_eq!(year1.bau_disasters, 0.0);
    }

    #[test]
    fn test_saturated_probability_clamps_and_floods_every_year() {
        // 0.15 * 10 = 1.5 clamps to 1.0: every year is an event year, and the
        // draw no longer panics on an invalid Bernoulli parameter.
        let projection = simulator().simulate(10.0, 100).unwrap();
        assert_eq!(projection.disaster_years(), 30);
        // Year 0 alone: BAU 100 + 1500 * 1.05 = 1675 vs resilient 305.
        assert_eq!(projection.crossover_year, Some(0));
        let year0 = &projection.years[0];
        assert!((year0.bau_total - 1675.0).abs() < 1e-9);
        assert!((year0.resilient_total - 305.0).abs() < 1e-9);
    }

    #[test]
    fn test_resilient_track_is_monotone() {
        let projection = simulator().simulate(3.0, 60).unwrap();
        for window in projection.years.windows(2) {
            assert!(window[1].resilient_total >= window[0].resilient_total);
        }
    }

    #[test]
    fn test_crossover_is_minimal() {
        let projection = simulator().simulate(3.0, 60).unwrap();
        if let Some(crossover) = projection.crossover_year {
            let crossover = crossover as usize;
            assert!(projection.years[crossover].bau_total > projection.years[crossover].resilient_total);
            for year in &projection.years[..crossover] {
                assert!(year.bau_total <= year.resilient_total);
            }
        }
    }

    #[test]
    fn test_bau_components_sum_to_total() {
        let projection = simulator().simulate(2.0, 30).unwrap();
        for year in &projection.years {
            let expected = year.bau_base
                + year.bau_insurance
                + year.bau_disasters
                + year.bau_disasters * OPPORTUNITY_COST_RATE;
            assert!((year.bau_total - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_horizon_length_matches_settings() {
        let sim = CostCurveSimulator::new(SimulationSettings { horizon_years: 12, seed: 7 });
        let projection = sim.simulate(1.5, 20).unwrap();
        assert_eq!(projection.horizon(), 12);
        assert_eq!(projection.years.last().unwrap().year, 11);
    }
}
