//! Edition attribute map for descriptive printing data.
//!
//! Printings carry descriptive data the engine itself never interprets:
//! watermark, promo type, frame style, border color, language, and so on.
//! Selection predicates test membership against these attributes; nothing
//! in the core assigns them meaning.
//!
//! ## AttributeValue Types
//!
//! - `Text`: Strings (watermark, frame, language)
//! - `Bool`: Flags (full-art, promo, reserved-list)
//! - `Int`: Numbers (multiverse id, frame year)
//! - `TextList`: String lists (promo types, finishes)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing edition attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value for an edition attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Text value (watermark, frame style, language code).
    Text(String),
    /// Boolean flag (full-art, promo).
    Bool(bool),
    /// Integer value (multiverse id, frame year).
    Int(i64),
    /// List of strings (promo types, finishes).
    TextList(Vec<String>),
}

impl AttributeValue {
    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as text list reference if this is a TextList value.
    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::TextList(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(v: Vec<String>) -> Self {
        AttributeValue::TextList(v)
    }
}

/// Collection of edition attributes.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;
