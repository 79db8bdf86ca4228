// Auxiliary data product models: risk labels, compliance scoring, heat alerts
pub mod defensible_space;
pub mod heat_watch;
pub mod risk_label;

// Re-export main types
pub use defensible_space::{assess_compliance, ComplianceTier, DefensibleSpaceReport};
pub use heat_watch::{classify_heat, HeatAlert, HeatAlertLevel};
pub use risk_label::{RiskLabel, RiskLabelBand};
