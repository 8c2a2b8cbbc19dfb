/*
 * value.rs
 * Copyright (c) 2026 tagtree contributors
 */

//! The markup value model.
//!
//! A markup node is an ordered, heterogeneous sequence: position 0 is the
//! tag (opaque — any value, not interpreted here), position 1 is
//! *optionally* an attribute mapping, and all remaining positions are
//! children. A node that always carries an attribute map (even an empty
//! one) is "normalized"; one that omits the map when trivial is not. Both
//! encodings are supported transparently everywhere: classification is
//! purely structural — is position 1 a map?
//!
//! Anything that is not a sequence is a leaf and is never descended into.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// An attribute mapping. Insertion order is preserved so that trees
/// round-trip through serialization byte-for-byte.
pub type AttrMap = LinkedHashMap<String, Value>;

/// A value in a markup tree: a branch (`Seq`), an attribute map, or a
/// scalar leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(AttrMap),
}

impl Value {
    /// Whether this value is a branch, i.e. capable of having children.
    /// Structurally, any sequence is a branch.
    pub fn is_branch(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// The tag of a node: position 0 of a sequence. `None` for leaves.
    pub fn tag(&self) -> Option<&Value> {
        match self {
            Value::Seq(items) => items.first(),
            _ => None,
        }
    }

    /// The attribute map of a node, if position 1 carries one. `None` for
    /// leaves and for unnormalized nodes without attributes.
    pub fn attrs(&self) -> Option<&AttrMap> {
        match self {
            Value::Seq(items) => match items.get(1) {
                Some(Value::Map(map)) => Some(map),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Seq(value)
    }
}

impl From<AttrMap> for Value {
    fn from(value: AttrMap) -> Self {
        Value::Map(value)
    }
}
