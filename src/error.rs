//! Error types for the rating library
//!
//! Every fallible operation returns [`Result`], whose error side is
//! [`RatingError`].

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RatingError>;

/// Errors raised by rating calculations and configuration loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl RatingError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by a bad call-site argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
