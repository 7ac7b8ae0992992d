//! Classification of resolved values.

use funcmaps_types::{CollectionShape, CompareError, CompareResult, ComparisonKind, RuntimeValue};

/// Map a resolved value to its comparison kind.
///
/// Collections, functions, channels and host objects are unsupported, so
/// collection comparison has to go through membership instead.
pub fn classify(value: &RuntimeValue) -> CompareResult<ComparisonKind> {
    match value {
        RuntimeValue::Invalid => Ok(ComparisonKind::Invalid),
        RuntimeValue::Bool(_) => Ok(ComparisonKind::Boolean),
        RuntimeValue::Int(_) => Ok(ComparisonKind::SignedInteger),
        RuntimeValue::Uint(_) => Ok(ComparisonKind::UnsignedInteger),
        RuntimeValue::Float(_) => Ok(ComparisonKind::Float),
        RuntimeValue::Complex(_) => Ok(ComparisonKind::Complex),
        RuntimeValue::String(_) => Ok(ComparisonKind::String),
        RuntimeValue::Sequence(_)
        | RuntimeValue::Map(_)
        | RuntimeValue::Reference(_)
        | RuntimeValue::Function(_)
        | RuntimeValue::Channel(_)
        | RuntimeValue::Object(_) => Err(CompareError::UnsupportedKind {
            type_name: value.type_name().to_string(),
        }),
    }
}

/// Shape of a resolved value when used as a membership haystack.
pub fn collection_shape(value: &RuntimeValue) -> CollectionShape {
    match value {
        RuntimeValue::String(_) => CollectionShape::String,
        RuntimeValue::Sequence(_) => CollectionShape::Sequence,
        RuntimeValue::Map(_) => CollectionShape::Map,
        _ => CollectionShape::Other,
    }
}
