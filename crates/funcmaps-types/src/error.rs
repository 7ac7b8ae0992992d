//! Structured comparison failures.

use crate::ComparisonKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an equality check could not be decided.
///
/// These are returned to the caller, which decides whether a failure aborts
/// evaluation or counts as "no match".
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum CompareError {
    /// No candidates were supplied.
    #[error("missing argument for comparison")]
    MissingComparisonOperand,

    /// The value's kind lies outside the comparison set.
    #[error("invalid type for comparison: {type_name}")]
    UnsupportedKind { type_name: String },

    /// Both kinds are supported but cannot be compared with each other.
    /// An absent side is reported as `invalid`.
    #[error("incompatible types for comparison: {left} and {right}")]
    IncompatibleKinds {
        left: ComparisonKind,
        right: ComparisonKind,
    },
}

/// Comparison result type alias.
pub type CompareResult<T> = Result<T, CompareError>;
