//! Containment tests over strings, sequences and maps.
//!
//! Per-element comparison failures count as "not a match"; membership never
//! reports an error.

use crate::compare::compare_pair;
use crate::kind::collection_shape;
use crate::resolve::{resolve, Resolved};
use funcmaps_types::{CollectionShape, RuntimeValue};
use tracing::trace;

/// Report whether every one of `values` is contained in `collection`.
pub fn has(collection: &RuntimeValue, values: &[RuntimeValue]) -> bool {
    values.iter().all(|value| contains(collection, value))
}

/// Report whether at least one of `values` is contained in `collection`.
pub fn has_any(collection: &RuntimeValue, values: &[RuntimeValue]) -> bool {
    values.iter().any(|value| contains(collection, value))
}

/// Test a single value for membership.
///
/// A string haystack matches any value whose rendering is a substring; a
/// sequence or map matches when one of its elements (map values, not keys)
/// compares equal.
pub fn contains(collection: &RuntimeValue, value: &RuntimeValue) -> bool {
    let Resolved::Concrete(haystack) = resolve(collection) else {
        return false;
    };
    let needle = resolve(value);
    match collection_shape(haystack) {
        CollectionShape::String => haystack
            .as_str()
            .is_some_and(|text| text.contains(render(needle).as_str())),
        CollectionShape::Sequence => haystack.as_sequence().is_some_and(|items| {
            items
                .iter()
                .any(|item| element_matches(needle, resolve(item)))
        }),
        CollectionShape::Map => haystack.as_map().is_some_and(|entries| {
            entries
                .values()
                .any(|item| element_matches(needle, resolve(item)))
        }),
        CollectionShape::Other => false,
    }
}

fn render(value: Resolved<'_>) -> String {
    match value {
        Resolved::Concrete(v) => v.to_string(),
        Resolved::Absent => RuntimeValue::absent().to_string(),
    }
}

fn element_matches(needle: Resolved<'_>, element: Resolved<'_>) -> bool {
    match (needle, element) {
        (Resolved::Absent, Resolved::Absent) => true,
        (Resolved::Concrete(RuntimeValue::Invalid), Resolved::Concrete(RuntimeValue::Invalid)) => {
            true
        }
        _ => compare_pair(needle, element).unwrap_or_else(|err| {
            trace!(error = %err, "skipping incomparable element");
            false
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> RuntimeValue {
        RuntimeValue::Sequence(values.iter().copied().map(RuntimeValue::Int).collect())
    }

    #[test]
    fn test_absent_collection_contains_nothing() {
        assert!(!contains(&RuntimeValue::absent(), &RuntimeValue::absent()));
        assert!(!has_any(&RuntimeValue::absent(), &[RuntimeValue::Int(1)]));
    }

    #[test]
    fn test_other_shape_contains_nothing() {
        assert!(!contains(&RuntimeValue::Int(5), &RuntimeValue::Int(5)));
        assert!(!contains(&RuntimeValue::function("f"), &RuntimeValue::Int(5)));
    }

    #[test]
    fn test_empty_value_lists() {
        assert!(has(&ints(&[1]), &[]));
        assert!(!has_any(&ints(&[1]), &[]));
    }

    #[test]
    fn test_element_failure_does_not_stop_iteration() {
        let mixed = RuntimeValue::Sequence(vec![
            RuntimeValue::from("one"),
            RuntimeValue::Sequence(vec![]),
            RuntimeValue::Int(1),
        ]);
        assert!(contains(&mixed, &RuntimeValue::Int(1)));
    }
}
