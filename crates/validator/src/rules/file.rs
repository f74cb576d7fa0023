//! File rules
//!
//! Sizes are written as a number with an optional binary unit: `512`, `200KB`, `1.5MB`, `2GB`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConfigError, Result};
use crate::value::FieldValue;

use super::required_arg;

static SIZE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(b|kb|mb|gb)?$").expect("size pattern is valid")
});

/// Parses a size argument into bytes.
pub fn parse_size(rule: &'static str, raw: &str) -> Result<f64> {
    let caps = SIZE_REGEX.captures(raw.trim()).ok_or_else(|| {
        ConfigError::invalid_argument(rule, raw, "expected a size such as 512, 200KB or 2MB")
    })?;
    let amount: f64 = caps[1]
        .parse()
        .map_err(|_| ConfigError::non_numeric(rule, raw))?;
    let multiplier = match caps
        .get(2)
        .map(|unit| unit.as_str().to_ascii_lowercase())
        .as_deref()
    {
        Some("kb") => 1024.0,
        Some("mb") => 1024.0 * 1024.0,
        Some("gb") => 1024.0 * 1024.0 * 1024.0,
        _ => 1.0,
    };
    Ok(amount * multiplier)
}

fn size_arg(rule: &'static str, args: &[String]) -> Result<f64> {
    parse_size(rule, required_arg(rule, args, 0)?)
}

pub fn file(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(value.as_file().is_some())
}

/// `maxFileSize:s`. Non-files fail.
pub fn max_file_size(value: &FieldValue, args: &[String]) -> Result<bool> {
    let limit = size_arg("maxFileSize", args)?;
    Ok(value.as_file().is_some_and(|f| f.size as f64 <= limit))
}

/// `minFileSize:s`. Non-files fail.
pub fn min_file_size(value: &FieldValue, args: &[String]) -> Result<bool> {
    let limit = size_arg("minFileSize", args)?;
    Ok(value.as_file().is_some_and(|f| f.size as f64 >= limit))
}

/// `size:s`, an upper bound on bytes for files, chars for text and value for numbers.
pub fn size(value: &FieldValue, args: &[String]) -> Result<bool> {
    let limit = size_arg("size", args)?;
    Ok(match value {
        FieldValue::Null => true,
        FieldValue::File(f) => f.size as f64 <= limit,
        FieldValue::Text(text) => text.chars().count() as f64 <= limit,
        FieldValue::Number(n) => *n <= limit,
        FieldValue::Bool(_) | FieldValue::Date(_) => false,
    })
}
