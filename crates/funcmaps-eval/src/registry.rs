//! Named helper tables.

use crate::builtins::BUILTINS;
use crate::config::CompareOptions;
use crate::error::{HelperError, HelperResult};
use funcmaps_types::RuntimeValue;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// A helper callable from templates: options of the owning map, then arguments.
pub type Helper = fn(&CompareOptions, &[RuntimeValue]) -> HelperResult<RuntimeValue>;

/// A table of helpers keyed by name.
///
/// Names are validated on insertion; lookups are by exact name.
#[derive(Debug, Clone, Default)]
pub struct FuncMap {
    helpers: BTreeMap<String, Helper>,
    /// `None` until set through [`FuncMap::with_options`].
    options: Option<CompareOptions>,
}

impl FuncMap {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin helper table.
    pub fn builtin() -> Self {
        let mut map = Self::new();
        for (name, helper) in BUILTINS {
            map.helpers.insert((*name).to_string(), *helper);
        }
        map
    }

    /// Merge tables in order; later tables override earlier ones.
    /// Options come from the last table that set them explicitly.
    pub fn combined(maps: impl IntoIterator<Item = FuncMap>) -> Self {
        let mut out = Self::new();
        for map in maps {
            out.helpers.extend(map.helpers);
            if map.options.is_some() {
                out.options = map.options;
            }
        }
        out
    }

    /// Replace the comparison options passed to helpers.
    pub fn with_options(mut self, options: CompareOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Options passed to helpers; the defaults unless set explicitly.
    pub fn options(&self) -> CompareOptions {
        self.options.unwrap_or_default()
    }

    /// Register a helper, replacing any helper of the same name.
    pub fn insert(&mut self, name: &str, helper: Helper) -> HelperResult<()> {
        if !is_valid_name(name) {
            debug!(name, "rejected helper name");
            return Err(HelperError::InvalidName(name.to_string()));
        }
        self.helpers.insert(name.to_string(), helper);
        Ok(())
    }

    /// Register several helpers. Stops at the first invalid name; helpers
    /// before it stay registered.
    pub fn add_funcs<'n>(
        &mut self,
        funcs: impl IntoIterator<Item = (&'n str, Helper)>,
    ) -> HelperResult<()> {
        for (name, helper) in funcs {
            self.insert(name, helper)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Helper> {
        self.helpers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.helpers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Call a helper by name.
    pub fn call(&self, name: &str, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
        let helper = self
            .get(name)
            .ok_or_else(|| HelperError::UnknownHelper(name.to_string()))?;
        trace!(helper = name, args = args.len(), "calling helper");
        helper(&self.options(), args)
    }
}

/// An identifier: a letter or `_` first, then letters, ASCII digits or `_`.
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    name.chars()
        .enumerate()
        .all(|(i, c)| c == '_' || c.is_alphabetic() || (i > 0 && c.is_ascii_digit()))
}
