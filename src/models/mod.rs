// Transient value structures exchanged with the presentation layer
pub mod assessment;
pub mod persona;
pub mod pilot;
pub mod projection;
pub mod scenario;

// Re-export main types
pub use assessment::{RiskBand, ScenarioAssessment};
pub use persona::{HazardProfile, HazardWeights, VulnerabilityProfile};
pub use pilot::{
    DeploymentPoint, DeploymentWindow, PilotConfig, PilotOutcome, TriggerDecision,
    TriggerEfficiency,
};
pub use projection::{CostProjection, ProjectionSummary, YearlyCost, RESILIENT_UPFRONT_PREMIUM};
pub use scenario::{ClimateScenario, WarmingBand};
