//! Field values handed over by the host
//!
//! A form field can hold text, a number, a checkbox state, a picked file or a date.
//! [`FieldValue`] is the single input type every rule predicate accepts.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// FILE INFO
// ============================================================================

/// Metadata of a file picked in a file field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// File name as reported by the host.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type, if known.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

impl FileInfo {
    /// Creates file metadata without a MIME type.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mime: None,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// The current value of a form field.
///
/// Deserializes untagged from JSON: `null`, booleans, numbers and strings map to
/// the obvious variants and an object with `name` and `size` becomes a [`FileInfo`].
/// [`FieldValue::Date`] is never produced by deserialization (a JSON string is text);
/// hosts with a native date picker construct it directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value at all.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    File(FileInfo),
    Date(NaiveDateTime),
}

impl FieldValue {
    /// Returns the text if this is a [`FieldValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric reading of the value.
    ///
    /// Finite numbers and text that parses as a finite float (surrounding whitespace
    /// ignored) qualify. Everything else, including empty text, is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(text) => parse_finite(text),
            _ => None,
        }
    }

    /// Returns the file metadata if this is a [`FieldValue::File`].
    pub fn as_file(&self) -> Option<&FileInfo> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// True when the field holds nothing a user typed or picked.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(n) => n.is_nan(),
            Self::File(file) => file.name.is_empty(),
            Self::Bool(_) | Self::Date(_) => false,
        }
    }

    /// Short name of the variant, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::File(_) => "file",
            Self::Date(_) => "date",
        }
    }
}

pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
            Self::File(file) => f.write_str(&file.name),
            Self::Date(date) => write!(f, "{date}"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<FileInfo> for FieldValue {
    fn from(value: FileInfo) -> Self {
        Self::File(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value.and_time(chrono::NaiveTime::MIN))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// TESTS
// ============================================================================
