//! Error types for the AI gateway.

use thiserror::Error;

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Gateway errors.
///
/// Callers in the creation flow treat every variant the same way; the split
/// exists so logs say what went wrong.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration error (missing API key, unusable client settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Vendor answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Long-running job finished with an error payload
    #[error("Operation failed: {0}")]
    Operation(String),

    /// Video job still running after the configured number of status checks
    #[error("Operation still running after {attempts} status checks")]
    PollLimit { attempts: u32 },

    /// Caller gave up on the video job
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GatewayError::Parse(e.to_string())
        } else {
            GatewayError::Network(e.to_string())
        }
    }
}
