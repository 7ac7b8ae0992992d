//! Dynamic value helpers for a template evaluator.
//!
//! The evaluator hands over [`RuntimeValue`]s whose shape is only known at
//! runtime. This crate answers three questions about them:
//!
//! - **equality**: [`equals`], [`equal_any`]: kind-aware, reports failures
//! - **membership**: [`has`], [`has_any`]: never fails
//! - **truthiness**: [`is_true`], [`is_empty`], [`yes_no`], [`coalesce`],
//!   [`is_default`]: total
//!
//! plus the textual projection used when rendering ([`printable_value`]) and
//! a named helper table ([`FuncMap`]) exposing all of it to templates.
//!
//! Every operation is a pure function over borrowed values.

mod builtins;
pub mod compare;
pub mod config;
pub mod error;
pub mod helpers;
pub mod kind;
pub mod membership;
pub mod printable;
pub mod registry;
pub mod resolve;
pub mod truth;

pub use compare::{equal_any, equals, equals_with};
pub use config::{CandidatePolicy, CompareOptions};
pub use error::{HelperError, HelperResult};
pub use funcmaps_types::{
    CollectionShape, CompareError, CompareResult, ComparisonKind, RuntimeValue,
};
pub use helpers::{deep_equal, join_values, map_of, repeat, MAX_REPEAT_BYTES};
pub use kind::{classify, collection_shape};
pub use membership::{contains, has, has_any};
pub use printable::{printable_value, Printable};
pub use registry::{FuncMap, Helper};
pub use resolve::{resolve, Resolved};
pub use truth::{coalesce, is_default, is_empty, is_true, yes_no};
