//! Helper error types.

use funcmaps_types::CompareError;
use thiserror::Error;

/// Errors raised while registering or calling helpers.
#[derive(Debug, Error)]
pub enum HelperError {
    /// A helper name is not an identifier.
    #[error("'{0}' is not a valid helper name")]
    InvalidName(String),

    /// No helper is registered under the name.
    #[error("unknown helper '{0}'")]
    UnknownHelper(String),

    /// Wrong number of arguments.
    #[error("{helper}: expected {expected} argument(s), got {got}")]
    Arity {
        helper: &'static str,
        expected: String,
        got: usize,
    },

    /// An argument has the wrong kind.
    #[error("{helper}: argument {index} must be {expected}, got {got}")]
    ArgumentType {
        helper: &'static str,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    /// A helper result would exceed its size limit.
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// A comparison failed.
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// Comparison options could not be parsed.
    #[error("invalid compare options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Helper result type alias.
pub type HelperResult<T> = Result<T, HelperError>;
