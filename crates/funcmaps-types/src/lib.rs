//! Shared types for funcmaps.
//!
//! This crate defines the runtime value model handed over by the template
//! evaluator, the closed set of comparison kinds, and the structured
//! comparison errors used by `funcmaps-eval`.

mod error;
mod json;
mod kind;
mod value;

pub use error::{CompareError, CompareResult};
pub use kind::{CollectionShape, ComparisonKind};
pub use value::{
    ChannelHandle, Complex, ErrorLike, FunctionHandle, HostObject, RuntimeValue, TextRenderable,
};
