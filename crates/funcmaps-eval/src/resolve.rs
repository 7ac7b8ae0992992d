//! Reference indirection.

use funcmaps_types::RuntimeValue;

/// Outcome of following references from a value.
///
/// Never holds a [`RuntimeValue::Reference`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Concrete(&'a RuntimeValue),
    Absent,
}

impl<'a> Resolved<'a> {
    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn concrete(self) -> Option<&'a RuntimeValue> {
        match self {
            Self::Concrete(v) => Some(v),
            Self::Absent => None,
        }
    }
}

/// Unwrap reference layers until a concrete value or an absence is reached.
/// Stops at the first reference to nothing.
pub fn resolve(value: &RuntimeValue) -> Resolved<'_> {
    let mut current = value;
    loop {
        match current {
            RuntimeValue::Reference(Some(inner)) => current = inner,
            RuntimeValue::Reference(None) => return Resolved::Absent,
            _ => return Resolved::Concrete(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_concrete_is_identity() {
        let v = RuntimeValue::Int(3);
        assert_eq!(resolve(&v), Resolved::Concrete(&v));
    }

    #[test]
    fn test_resolve_nested_references() {
        let v = RuntimeValue::reference(RuntimeValue::reference(RuntimeValue::from("x")));
        assert_eq!(resolve(&v).concrete(), Some(&RuntimeValue::from("x")));
    }

    #[test]
    fn test_resolve_absent_at_any_depth() {
        assert!(resolve(&RuntimeValue::absent()).is_absent());
        let v = RuntimeValue::reference(RuntimeValue::reference(RuntimeValue::absent()));
        assert!(resolve(&v).is_absent());
    }

    #[test]
    fn test_resolve_keeps_collections() {
        let v = RuntimeValue::reference(RuntimeValue::Sequence(vec![RuntimeValue::absent()]));
        match resolve(&v) {
            Resolved::Concrete(RuntimeValue::Sequence(items)) => assert_eq!(items.len(), 1),
            other => panic!("expected sequence, got {other:?}"),
        }
    }
}
