//! Kind-aware equality.

use crate::config::{CandidatePolicy, CompareOptions};
use crate::kind::classify;
use crate::resolve::{resolve, Resolved};
use funcmaps_types::{CompareError, CompareResult, ComparisonKind, RuntimeValue};
use tracing::trace;

/// Report whether `a` equals any of `candidates`, stopping at the first
/// candidate that cannot be compared.
///
/// * `Ok(true)`: some candidate matched before any failure.
/// * `Ok(false)`: every candidate was compared and none matched.
/// * `Err(_)`: a candidate failed before any match, or `candidates` is empty.
pub fn equals(a: &RuntimeValue, candidates: &[RuntimeValue]) -> CompareResult<bool> {
    equals_with(&CompareOptions::default(), a, candidates)
}

/// [`equals`] under explicit options.
pub fn equals_with(
    options: &CompareOptions,
    a: &RuntimeValue,
    candidates: &[RuntimeValue],
) -> CompareResult<bool> {
    if candidates.is_empty() {
        return Err(CompareError::MissingComparisonOperand);
    }
    let left = resolve(a);
    let mut first_failure = None;
    for (index, candidate) in candidates.iter().enumerate() {
        match compare_pair(left, resolve(candidate)) {
            Ok(true) => return Ok(true),
            Ok(false) => {}
            Err(err) => {
                trace!(index, error = %err, "candidate comparison failed");
                match options.candidate_policy {
                    CandidatePolicy::StopAtFirstFailure => return Err(err),
                    CandidatePolicy::SkipFailures => {
                        first_failure.get_or_insert(err);
                    }
                }
            }
        }
    }
    first_failure.map_or(Ok(false), Err)
}

/// Flat scalar comparison against a list of values.
///
/// Same contract as [`equals`]: per-candidate failures are not swallowed.
pub fn equal_any(v: &RuntimeValue, values: &[RuntimeValue]) -> CompareResult<bool> {
    equals(v, values)
}

/// Compare one resolved pair.
pub(crate) fn compare_pair(a: Resolved<'_>, b: Resolved<'_>) -> CompareResult<bool> {
    let (a, b) = match (a, b) {
        (Resolved::Absent, Resolved::Absent) => return Ok(true),
        (Resolved::Absent, Resolved::Concrete(other)) => {
            return absent_against(classify(other)?, true);
        }
        (Resolved::Concrete(other), Resolved::Absent) => {
            return absent_against(classify(other)?, false);
        }
        (Resolved::Concrete(a), Resolved::Concrete(b)) => (a, b),
    };

    let left = classify(a)?;
    let right = classify(b)?;
    let truth = match (a, b) {
        (RuntimeValue::Invalid, RuntimeValue::Invalid) => true,
        (RuntimeValue::Bool(x), RuntimeValue::Bool(y)) => x == y,
        (RuntimeValue::Int(x), RuntimeValue::Int(y)) => x == y,
        (RuntimeValue::Uint(x), RuntimeValue::Uint(y)) => x == y,
        (RuntimeValue::Float(x), RuntimeValue::Float(y)) => x == y,
        (RuntimeValue::Complex(x), RuntimeValue::Complex(y)) => x == y,
        (RuntimeValue::String(x), RuntimeValue::String(y)) => x == y,
        (RuntimeValue::Int(i), RuntimeValue::Uint(u))
        | (RuntimeValue::Uint(u), RuntimeValue::Int(i)) => signed_eq_unsigned(*i, *u),
        _ => return Err(CompareError::IncompatibleKinds { left, right }),
    };
    Ok(truth)
}

/// An absent value never equals a scalar; against `Invalid` it is simply unequal.
fn absent_against(kind: ComparisonKind, absent_on_left: bool) -> CompareResult<bool> {
    if kind == ComparisonKind::Invalid {
        return Ok(false);
    }
    let (left, right) = if absent_on_left {
        (ComparisonKind::Invalid, kind)
    } else {
        (kind, ComparisonKind::Invalid)
    };
    Err(CompareError::IncompatibleKinds { left, right })
}

fn signed_eq_unsigned(signed: i64, unsigned: u64) -> bool {
    u64::try_from(signed).map_or(false, |s| s == unsigned)
}
