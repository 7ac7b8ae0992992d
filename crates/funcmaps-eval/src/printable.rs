//! Textual projection of values for rendering.

use crate::resolve::{resolve, Resolved};
use funcmaps_types::RuntimeValue;
use std::fmt;

/// The best textual representation of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Printable {
    Text(String),
    /// The value cannot be rendered (functions, channels).
    NoValue,
}

impl Printable {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::NoValue => None,
        }
    }
}

impl fmt::Display for Printable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::NoValue => f.write_str("<no value>"),
        }
    }
}

/// Project a value to text.
///
/// Absent and invalid values render empty. Host objects render through their
/// error or text capability.
pub fn printable_value(value: &RuntimeValue) -> Printable {
    match resolve(value) {
        Resolved::Absent | Resolved::Concrete(RuntimeValue::Invalid) => {
            Printable::Text(String::new())
        }
        Resolved::Concrete(RuntimeValue::Function(_) | RuntimeValue::Channel(_)) => {
            Printable::NoValue
        }
        Resolved::Concrete(other) => Printable::Text(other.to_string()),
    }
}
