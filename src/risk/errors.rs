// Risk calculation error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("Invalid scenario field {field}: {message}")]
    InvalidScenario { field: String, message: String },

    #[error("Invalid pilot config field {field}: {message}")]
    InvalidPilotConfig { field: String, message: String },

    #[error("Invalid simulation horizon: {years} years")]
    InvalidHorizon { years: u32 },

    #[error("Invalid input {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Generic error: {0}")]
    Generic(String),
}

impl From<String> for RiskError {
    fn from(message: String) -> Self {
        RiskError::Generic(message)
    }
}

impl From<&str> for RiskError {
    fn from(message: &str) -> Self {
        RiskError::Generic(message.to_string())
    }
}
