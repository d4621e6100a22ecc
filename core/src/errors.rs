use thiserror::Error;

/// Message shown for any failure that does not carry backend text
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while fetching the response.";

/// Errors surfaced by the stats client and its configuration layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PremstatsError {
    /// The HTTP exchange could not complete (DNS, connect, transport, bad URL)
    #[error("Network Error: {0}")]
    NetworkError(String),

    /// The reply body was not JSON or matched neither known reply shape
    #[error("Malformed Response: {0}")]
    MalformedResponse(String),

    /// The backend answered with an error-shaped body or a >= 400 status
    #[error("Backend Error: {0}")]
    BackendError(String),

    #[error("Configuration Error: {0}")]
    ConfigError(String),
}

impl PremstatsError {
    /// Text suitable for showing to the person who asked the question.
    pub fn user_message(&self) -> &str {
        match self {
            PremstatsError::BackendError(detail) | PremstatsError::ConfigError(detail) => detail,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Result type for premstats operations
pub type PremstatsResult<T> = Result<T, PremstatsError>;
