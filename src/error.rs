//! Error handling module for mealsteps
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The step extractor and navigator never fail; these errors cover the
//! surrounding shell (network, config, terminal).

use thiserror::Error;

/// Main error type for mealsteps
#[derive(Error, Debug)]
pub enum MealStepsError {
    /// IO errors (file operations, terminal, stdin)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport errors talking to the recipe API
    #[error("HTTP error: {0}")]
    Http(String),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (user input such as a blank ingredient)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for mealsteps operations
pub type Result<T> = std::result::Result<T, MealStepsError>;

// Convenient error constructors
impl MealStepsError {
    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

impl From<ureq::Error> for MealStepsError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => {
                Self::http(format!("{} returned status {}", response.get_url(), code))
            }
            ureq::Error::Transport(transport) => Self::http(transport.to_string()),
        }
    }
}
