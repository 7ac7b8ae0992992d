//! Comparison kinds and collection shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of kinds that scalar equality understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonKind {
    Invalid,
    Boolean,
    SignedInteger,
    UnsignedInteger,
    Float,
    Complex,
    String,
}

impl ComparisonKind {
    /// Signed and unsigned integers compare across kinds.
    pub fn is_integral(self) -> bool {
        matches!(self, Self::SignedInteger | Self::UnsignedInteger)
    }
}

impl fmt::Display for ComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invalid => "invalid",
            Self::Boolean => "bool",
            Self::SignedInteger => "int",
            Self::UnsignedInteger => "uint",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::String => "string",
        };
        f.write_str(name)
    }
}

/// How a value behaves as the haystack of a membership test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionShape {
    String,
    Sequence,
    Map,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_kinds() {
        assert!(ComparisonKind::SignedInteger.is_integral());
        assert!(ComparisonKind::UnsignedInteger.is_integral());
        assert!(!ComparisonKind::Float.is_integral());
        assert!(!ComparisonKind::Invalid.is_integral());
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ComparisonKind::UnsignedInteger).unwrap();
        assert_eq!(json, "\"unsigned_integer\"");
        let shape: CollectionShape = serde_json::from_str("\"sequence\"").unwrap();
        assert_eq!(shape, CollectionShape::Sequence);
    }
}
