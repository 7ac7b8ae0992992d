//! Formatting helpers built on the printable projection.

use crate::error::{HelperError, HelperResult};
use crate::printable::printable_value;
use crate::resolve::{resolve, Resolved};
use funcmaps_types::RuntimeValue;
use std::collections::BTreeMap;

/// Largest string, in bytes, that [`repeat`] will build.
pub const MAX_REPEAT_BYTES: usize = 1 << 20;

/// The projection of `value` repeated `n` times. Non-positive `n` yields `""`.
///
/// Fails with [`HelperError::LimitExceeded`] when the result would exceed
/// [`MAX_REPEAT_BYTES`].
pub fn repeat(n: i64, value: &RuntimeValue) -> HelperResult<String> {
    let count = usize::try_from(n).unwrap_or(0);
    let text = printable_value(value).to_string();
    match text.len().checked_mul(count) {
        Some(total) if total <= MAX_REPEAT_BYTES => Ok(text.repeat(count)),
        _ => Err(HelperError::LimitExceeded(format!(
            "repeat of {} bytes x {count} exceeds {MAX_REPEAT_BYTES} bytes",
            text.len()
        ))),
    }
}

/// Join the projections of `values` with `sep`.
///
/// Strings join whole; sequences and maps contribute each element (map values
/// in key order). An absent value anywhere makes the whole result empty.
pub fn join_values(sep: &str, values: &[RuntimeValue]) -> String {
    let mut parts = Vec::with_capacity(values.len());
    for value in values {
        let Resolved::Concrete(value) = resolve(value) else {
            return String::new();
        };
        match value {
            RuntimeValue::String(s) => parts.push(s.clone()),
            RuntimeValue::Sequence(items) => {
                parts.extend(items.iter().map(|item| printable_value(item).to_string()));
            }
            RuntimeValue::Map(entries) => {
                parts.extend(entries.values().map(|item| printable_value(item).to_string()));
            }
            other => parts.push(printable_value(other).to_string()),
        }
    }
    parts.join(sep)
}

/// Build a map from alternating keys and values.
///
/// Keys are rendered as text; a trailing key without a value maps to `""`.
pub fn map_of(pairs: &[RuntimeValue]) -> RuntimeValue {
    let mut entries = BTreeMap::new();
    for chunk in pairs.chunks(2) {
        let key = chunk[0].to_string();
        let value = chunk
            .get(1)
            .cloned()
            .unwrap_or_else(|| RuntimeValue::String(String::new()));
        entries.insert(key, value);
    }
    RuntimeValue::Map(entries)
}

/// Deep structural equality of resolved values.
///
/// Unlike [`crate::equals`] this recurses into collections and never fails;
/// kinds must match exactly, so `Int(1)` and `Uint(1)` differ.
pub fn deep_equal(a: &RuntimeValue, b: &RuntimeValue) -> bool {
    let (a, b) = match (resolve(a), resolve(b)) {
        (Resolved::Absent, Resolved::Absent) => return true,
        (Resolved::Concrete(a), Resolved::Concrete(b)) => (a, b),
        _ => return false,
    };
    match (a, b) {
        (RuntimeValue::Sequence(x), RuntimeValue::Sequence(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| deep_equal(a, b))
        }
        (RuntimeValue::Map(x), RuntimeValue::Map(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|v2| deep_equal(v, v2)))
        }
        _ => a == b,
    }
}
