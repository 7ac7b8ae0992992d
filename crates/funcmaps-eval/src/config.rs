//! Comparison options.
//!
//! By default a multi-candidate comparison stops at the first candidate that
//! cannot be compared. `SkipFailures` keeps going so that a later match still
//! counts; an earlier failure is then only reported when nothing matched.

use crate::error::HelperResult;
use serde::{Deserialize, Serialize};

/// What to do when one candidate of a multi-candidate comparison fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidatePolicy {
    #[default]
    StopAtFirstFailure,
    SkipFailures,
}

/// Options applied by [`crate::equals_with`] and the registry's comparison helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    pub candidate_policy: CandidatePolicy,
}

impl CompareOptions {
    /// Options that examine every candidate.
    pub fn lenient() -> Self {
        Self {
            candidate_policy: CandidatePolicy::SkipFailures,
        }
    }

    /// Parse options from a JSON document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> HelperResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
