//! Tagged value type for heterogeneous pools.
//!
//! `choice` and `choice_n` are generic and work on any element type,
//! but callers who want one pool holding a mix of scalars use [`Value`].
//! The untagged serde representation maps JSON scalars and arrays
//! directly onto the variants.

use serde::{Deserialize, Serialize};

/// A dynamically-typed pool element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer outside `i64` range.
    Uint(u64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A nested list. Composite: rejected by without-replacement
    /// selection, which deduplicates by value equality.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` for variants that without-replacement selection
    /// refuses to deduplicate.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}
