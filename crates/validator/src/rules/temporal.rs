//! Date and time rules
//!
//! Text dates use ISO-like layouts: `2024-03-01`, `2024-03-01T09:30`,
//! `2024-03-01 09:30:15`. `before` / `after` also accept `now` and `today`.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::error::{ConfigError, Result};
use crate::value::FieldValue;

use super::required_arg;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

static TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d(?::[0-5]\d)?$").expect("time pattern is valid")
});

/// Parses one of the supported text layouts.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn value_datetime(value: &FieldValue) -> Option<NaiveDateTime> {
    match value {
        FieldValue::Date(date) => Some(*date),
        FieldValue::Text(text) => parse_datetime(text),
        _ => None,
    }
}

fn bound_arg(rule: &'static str, args: &[String]) -> Result<NaiveDateTime> {
    let raw = required_arg(rule, args, 0)?;
    match raw.to_ascii_lowercase().as_str() {
        "now" => Ok(Local::now().naive_local()),
        "today" => Ok(Local::now().date_naive().and_time(NaiveTime::MIN)),
        _ => parse_datetime(raw).ok_or_else(|| {
            ConfigError::invalid_argument(rule, raw, "expected a date such as 2024-03-01")
        }),
    }
}

pub fn date(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(value_datetime(value).is_some())
}

/// `before:d`, strictly earlier than `d`.
pub fn before(value: &FieldValue, args: &[String]) -> Result<bool> {
    let bound = bound_arg("before", args)?;
    Ok(value_datetime(value).is_some_and(|d| d < bound))
}

/// `after:d`, strictly later than `d`.
pub fn after(value: &FieldValue, args: &[String]) -> Result<bool> {
    let bound = bound_arg("after", args)?;
    Ok(value_datetime(value).is_some_and(|d| d > bound))
}

/// 24-hour `HH:MM` or `HH:MM:SS`.
pub fn time(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(value
        .as_text()
        .is_some_and(|text| TIME_REGEX.is_match(text.trim())))
}
