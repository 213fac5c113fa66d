//! Loosely-typed attribute values for record images.
//!
//! Change feeds deliver record snapshots as maps from attribute name to a
//! string-or-number value. `AttrValue` preserves that shape without true
//! dynamic typing: two variants, untagged serde, and lenient numeric access
//! for feeds that render numbers as strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A record snapshot: attribute name to value.
pub type AttrMap = BTreeMap<String, AttrValue>;

/// A single attribute value in a record image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    String(String),
    Number(f64),
}

impl AttrValue {
    /// The string form, or `None` for numeric values.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// The numeric form.
    ///
    /// String values that parse as a number are accepted — feeds that
    /// serialize numbers as strings deliver `"42"` for `42`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(s) => s.parse().ok(),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Read a string attribute from an image.
#[must_use]
pub fn string_attr<'a>(image: &'a AttrMap, name: &str) -> Option<&'a str> {
    image.get(name).and_then(AttrValue::as_string)
}

/// Read a numeric attribute from an image (lenient, see [`AttrValue::as_number`]).
#[must_use]
pub fn number_attr(image: &AttrMap, name: &str) -> Option<f64> {
    image.get(name).and_then(AttrValue::as_number)
}
