//! Truthiness and the combinators built on it.

use crate::resolve::{resolve, Resolved};
use funcmaps_types::RuntimeValue;

/// Report whether a value is meaningful: not the zero value of its kind.
///
/// Absent, invalid, `false`, zero numbers, empty strings and empty
/// collections are false; everything else is true. Never fails.
pub fn is_true(value: &RuntimeValue) -> bool {
    let Resolved::Concrete(value) = resolve(value) else {
        return false;
    };
    match value {
        RuntimeValue::Invalid => false,
        RuntimeValue::Bool(b) => *b,
        RuntimeValue::Int(n) => *n != 0,
        RuntimeValue::Uint(n) => *n != 0,
        RuntimeValue::Float(n) => *n != 0.0,
        RuntimeValue::Complex(c) => !c.is_zero(),
        RuntimeValue::String(s) => !s.is_empty(),
        RuntimeValue::Sequence(items) => !items.is_empty(),
        RuntimeValue::Map(entries) => !entries.is_empty(),
        // resolve never yields a reference
        RuntimeValue::Reference(_)
        | RuntimeValue::Function(_)
        | RuntimeValue::Channel(_)
        | RuntimeValue::Object(_) => true,
    }
}

/// Opposite of [`is_true`].
pub fn is_empty(value: &RuntimeValue) -> bool {
    !is_true(value)
}

/// Ternary: `when_true` if `condition` is true, else `when_false`.
pub fn yes_no<'a>(
    condition: &RuntimeValue,
    when_true: &'a RuntimeValue,
    when_false: &'a RuntimeValue,
) -> &'a RuntimeValue {
    if is_true(condition) {
        when_true
    } else {
        when_false
    }
}

/// First true value in order, or `None` (absent) when there is none.
pub fn coalesce(values: &[RuntimeValue]) -> Option<&RuntimeValue> {
    values.iter().find(|value| is_true(value))
}

/// `default` when `value` is empty, otherwise `value`.
pub fn is_default<'a>(default: &'a RuntimeValue, value: &'a RuntimeValue) -> &'a RuntimeValue {
    if is_empty(value) {
        default
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funcmaps_types::Complex;

    #[test]
    fn test_zero_values_are_false() {
        for value in [
            RuntimeValue::Invalid,
            RuntimeValue::absent(),
            RuntimeValue::Bool(false),
            RuntimeValue::Int(0),
            RuntimeValue::Uint(0),
            RuntimeValue::Float(0.0),
            RuntimeValue::Float(-0.0),
            RuntimeValue::Complex(Complex::new(0.0, 0.0)),
            RuntimeValue::from(""),
            RuntimeValue::Sequence(vec![]),
            RuntimeValue::map(Vec::<(String, RuntimeValue)>::new()),
        ] {
            assert!(!is_true(&value), "{value:?} should be false");
        }
    }

    #[test]
    fn test_non_zero_values_are_true() {
        for value in [
            RuntimeValue::Bool(true),
            RuntimeValue::Int(-1),
            RuntimeValue::Uint(3),
            RuntimeValue::Float(f64::NAN),
            RuntimeValue::Complex(Complex::new(0.0, 1.0)),
            RuntimeValue::from(" "),
            RuntimeValue::Sequence(vec![RuntimeValue::absent()]),
            RuntimeValue::function("f"),
            RuntimeValue::channel("c"),
        ] {
            assert!(is_true(&value), "{value:?} should be true");
        }
    }

    #[test]
    fn test_reference_is_judged_by_target() {
        assert!(!is_true(&RuntimeValue::reference(RuntimeValue::Int(0))));
        assert!(is_true(&RuntimeValue::reference(RuntimeValue::Int(2))));
    }

    #[test]
    fn test_yes_no() {
        let y = RuntimeValue::from("yes");
        let n = RuntimeValue::from("no");
        assert_eq!(yes_no(&RuntimeValue::Int(1), &y, &n), &y);
        assert_eq!(yes_no(&RuntimeValue::absent(), &y, &n), &n);
    }

    #[test]
    fn test_coalesce_none_qualify() {
        assert_eq!(coalesce(&[RuntimeValue::Int(0), RuntimeValue::from("")]), None);
        assert_eq!(coalesce(&[]), None);
    }
}
