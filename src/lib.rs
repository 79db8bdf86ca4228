// Climate resilience risk engine: scenario risk multipliers, two-track
// infrastructure cost simulation, and tiered parametric trigger evaluation.
// The presentation layer calls in with current inputs and renders the value
// structures that come back; nothing here does I/O or holds state.
pub mod config;
pub mod models;
pub mod products;
pub mod risk;

pub use config::{EngineConfig, SimulationSettings};
pub use models::{
    ClimateScenario, CostProjection, PilotConfig, PilotOutcome, ProjectionSummary, RiskBand,
    ScenarioAssessment, TriggerDecision, VulnerabilityProfile, WarmingBand, YearlyCost,
};
pub use risk::{
    CostCurveSimulator, RiskEngine, RiskError, RiskMultiplierCalculator, TriggerEvaluator,
    TriggerThresholds,
};
