//! Runtime values handed to the helpers by the evaluator boundary.
//!
//! [`RuntimeValue`] is built once when the evaluator adapts its own value
//! representation; the helpers only ever borrow it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

// ══════════════════════════════════════════════════════════════════════════════
// Capabilities
// ══════════════════════════════════════════════════════════════════════════════

/// A host value that can describe itself as text.
pub trait TextRenderable: fmt::Debug + Send + Sync {
    fn render_text(&self) -> String;
}

/// A host value that stands for an error condition.
pub trait ErrorLike: fmt::Debug + Send + Sync {
    fn error_message(&self) -> String;
}

/// An opaque host object with optional text capabilities.
///
/// Capabilities are attached by the boundary adapter; they are never
/// discovered at runtime.
#[derive(Debug, Clone)]
pub struct HostObject {
    pub type_name: String,
    text: Option<Arc<dyn TextRenderable>>,
    error: Option<Arc<dyn ErrorLike>>,
}

impl HostObject {
    /// Create a host object without capabilities.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            text: None,
            error: None,
        }
    }

    /// Attach a text-rendering capability.
    pub fn with_text(mut self, text: Arc<dyn TextRenderable>) -> Self {
        self.text = Some(text);
        self
    }

    /// Attach an error capability.
    pub fn with_error(mut self, error: Arc<dyn ErrorLike>) -> Self {
        self.error = Some(error);
        self
    }

    /// The self-description of this object, if it has one.
    /// The error message wins over plain text rendering.
    pub fn description(&self) -> Option<String> {
        if let Some(err) = &self.error {
            return Some(err.error_message());
        }
        self.text.as_ref().map(|t| t.render_text())
    }
}

impl PartialEq for HostObject {
    fn eq(&self, other: &Self) -> bool {
        fn same<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
            match (a, b) {
                (Some(x), Some(y)) => Arc::ptr_eq(x, y),
                (None, None) => true,
                _ => false,
            }
        }
        self.type_name == other.type_name
            && same(&self.text, &other.text)
            && same(&self.error, &other.error)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Scalars & handles
// ══════════════════════════════════════════════════════════════════════════════

/// A complex number with `f64` parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "({}{}i)", self.re, self.im)
        } else {
            write!(f, "({}+{}i)", self.re, self.im)
        }
    }
}

/// A callable owned by the host. Never comparable, never renderable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionHandle {
    pub name: String,
}

/// A communication channel owned by the host. Never comparable, never renderable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHandle {
    pub name: String,
}

// ══════════════════════════════════════════════════════════════════════════════
// RuntimeValue
// ══════════════════════════════════════════════════════════════════════════════

/// A value of unknown static shape.
///
/// The derived `PartialEq` is structural and meant for tests and caches;
/// template equality goes through the kind-aware comparison helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeValue {
    /// A value the boundary could not represent.
    Invalid,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(Complex),
    String(String),
    Sequence(Vec<RuntimeValue>),
    /// Associative collection, iterated in key order.
    Map(BTreeMap<String, RuntimeValue>),
    /// Reference to another value; `None` is the absent value.
    Reference(Option<Box<RuntimeValue>>),
    Function(FunctionHandle),
    Channel(ChannelHandle),
    Object(HostObject),
}

impl RuntimeValue {
    /// The absent value (a reference to nothing).
    pub fn absent() -> Self {
        Self::Reference(None)
    }

    /// Wrap a value in one reference layer.
    pub fn reference(inner: RuntimeValue) -> Self {
        Self::Reference(Some(Box::new(inner)))
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(FunctionHandle { name: name.into() })
    }

    pub fn channel(name: impl Into<String>) -> Self {
        Self::Channel(ChannelHandle { name: name.into() })
    }

    pub fn object(object: HostObject) -> Self {
        Self::Object(object)
    }

    /// Build a map from `(key, value)` pairs.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, RuntimeValue)>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Complex(_) => "complex",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Map(_) => "map",
            Self::Reference(_) => "reference",
            Self::Function(_) => "function",
            Self::Channel(_) => "channel",
            Self::Object(_) => "object",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[RuntimeValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, RuntimeValue>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "<invalid>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::String(s) => f.write_str(s),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    f.write_str(if i > 0 { ", " } else { " " })?;
                    write!(f, "{k}: {v}")?;
                }
                if entries.is_empty() {
                    f.write_str("}")
                } else {
                    f.write_str(" }")
                }
            }
            Self::Reference(None) => write!(f, "nil"),
            Self::Reference(Some(inner)) => write!(f, "{inner}"),
            Self::Function(h) => write!(f, "<function {}>", h.name),
            Self::Channel(h) => write!(f, "<channel {}>", h.name),
            Self::Object(obj) => match obj.description() {
                Some(text) => f.write_str(&text),
                None => write!(f, "<{}>", obj.type_name),
            },
        }
    }
}

// ── Boundary conversions ─────────────────────────────────────────────────────

impl From<bool> for RuntimeValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for RuntimeValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for RuntimeValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u64> for RuntimeValue {
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

impl From<u32> for RuntimeValue {
    fn from(n: u32) -> Self {
        Self::Uint(u64::from(n))
    }
}

impl From<f64> for RuntimeValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<Complex> for RuntimeValue {
    fn from(c: Complex) -> Self {
        Self::Complex(c)
    }
}

impl From<&str> for RuntimeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for RuntimeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<RuntimeValue>> for RuntimeValue {
    fn from(items: Vec<RuntimeValue>) -> Self {
        Self::Sequence(items)
    }
}

impl<T: Into<RuntimeValue>> From<Option<T>> for RuntimeValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Self::reference(v.into()),
            None => Self::absent(),
        }
    }
}
