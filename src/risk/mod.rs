// Risk calculators and the engine that composes them
pub mod cost_curve;
pub mod engine;
pub mod errors;
pub mod multiplier;
pub mod trigger;

// Re-export main types
pub use cost_curve::CostCurveSimulator;
pub use engine::RiskEngine;
pub use errors::RiskError;
pub use multiplier::RiskMultiplierCalculator;
pub use trigger::{TriggerEvaluator, TriggerThresholds};

/// Warming level every scenario is normalized against (Paris Agreement
/// baseline, degrees C above pre-industrial).
pub const BASELINE_WARMING_C: f64 = 1.5;

/// Risk is never rated below baseline.
pub const MIN_RISK_MULTIPLIER: f64 = 1.0;
