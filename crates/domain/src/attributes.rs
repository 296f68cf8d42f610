// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single scalar attribute of a project.
///
/// Attribute values arrive from differently-typed sources: booleans, numbers,
/// and free text (which may itself hold `"true"` or `"600"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A boolean flag.
    Bool(bool),
    /// A numeric measurement.
    Number(f64),
    /// Free text.
    Text(String),
}

impl AttributeValue {
    /// Returns the numeric interpretation of this value, if any.
    ///
    /// Text is parsed after trimming whitespace. Booleans have no numeric
    /// interpretation. Non-finite results are rejected.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let number: f64 = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Bool(_) => return None,
        };
        number.is_finite().then_some(number)
    }

    /// Returns the string form used for equality comparisons.
    ///
    /// Booleans become `"true"`/`"false"` and numbers their shortest decimal
    /// form (`600`, not `600.0`).
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The attribute snapshot of a project, keyed by attribute name.
///
/// Built per evaluation from a project record; never persisted on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectAttributes {
    values: BTreeMap<String, AttributeValue>,
}

impl ProjectAttributes {
    /// Creates an empty attribute snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Sets an attribute, returning the updated snapshot.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets an attribute, replacing any previous value.
    pub fn insert(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the snapshot holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for ProjectAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
