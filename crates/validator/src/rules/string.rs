//! String rules
//!
//! Length bounds, affixes, membership, character classes and fixed patterns.
//! Apart from `maxlength` (which lets an empty field through) every rule here
//! fails on non-text values instead of raising an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConfigError, Result};
use crate::value::FieldValue;

use super::{candidates, count_arg};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*|".+")@(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|(?:[a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,})$"#,
    )
    .expect("email pattern is valid")
});

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(?:ftp|http|https)://[^ "]+$"#).expect("url pattern is valid"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ().\-]+$").expect("phone pattern is valid"));

/// Symbols accepted by the `password` rule.
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

/// Minimum `password` length, in chars.
pub const PASSWORD_MIN_LENGTH: usize = 8;

fn text(value: &FieldValue) -> Option<&str> {
    value.as_text()
}

fn non_empty_text(value: &FieldValue) -> Option<&str> {
    value.as_text().filter(|text| !text.is_empty())
}

// ============================================================================
// LENGTH
// ============================================================================

/// `minlength:n`. Empty text fails.
pub fn minlength(value: &FieldValue, args: &[String]) -> Result<bool> {
    let bound = count_arg("minlength", args, 0)?;
    Ok(non_empty_text(value).is_some_and(|text| text.chars().count() >= bound))
}

/// `maxlength:n`. An empty field passes.
pub fn maxlength(value: &FieldValue, args: &[String]) -> Result<bool> {
    let bound = count_arg("maxlength", args, 0)?;
    if value.is_empty() {
        return Ok(true);
    }
    Ok(text(value).is_some_and(|text| text.chars().count() <= bound))
}

/// `length:n`. Text, or the decimal rendering of a number, has exactly `n` chars.
pub fn length(value: &FieldValue, args: &[String]) -> Result<bool> {
    let size = count_arg("length", args, 0)?;
    Ok(match value {
        FieldValue::Text(text) => text.chars().count() == size,
        FieldValue::Number(n) if n.is_finite() => n.to_string().chars().count() == size,
        _ => false,
    })
}

// ============================================================================
// AFFIX / MEMBERSHIP
// ============================================================================

/// `startWith:a,b`. Passes if the text starts with any candidate.
pub fn start_with(value: &FieldValue, args: &[String]) -> Result<bool> {
    let prefixes = candidates("startWith", args)?;
    Ok(text(value).is_some_and(|text| prefixes.iter().any(|p| text.starts_with(p))))
}

/// `endWith:a,b`. Passes if the text ends with any candidate.
pub fn end_with(value: &FieldValue, args: &[String]) -> Result<bool> {
    let suffixes = candidates("endWith", args)?;
    Ok(text(value).is_some_and(|text| suffixes.iter().any(|s| text.ends_with(s))))
}

/// `contains:a,b`. Passes if the text contains every candidate.
pub fn contains(value: &FieldValue, args: &[String]) -> Result<bool> {
    let needles = candidates("contains", args)?;
    Ok(text(value).is_some_and(|text| needles.iter().all(|n| text.contains(n))))
}

/// `excludes:a,b`. Exactly the negation of [`contains`] over the same candidates.
pub fn excludes(value: &FieldValue, args: &[String]) -> Result<bool> {
    candidates("excludes", args)?;
    contains(value, args).map(|found| !found)
}

/// `in:a,b,c`. The value, rendered as text, equals one of the candidates.
pub fn one_of(value: &FieldValue, args: &[String]) -> Result<bool> {
    let allowed = candidates("in", args)?;
    Ok(match value {
        FieldValue::Text(text) => allowed.contains(&text.trim()),
        FieldValue::Number(_) | FieldValue::Bool(_) => {
            let rendered = value.to_string();
            allowed.contains(&rendered.as_str())
        }
        _ => false,
    })
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

pub fn start_with_upper(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(non_empty_text(value).is_some_and(|text| starts_with_class(text, char::is_ascii_uppercase)))
}

pub fn start_with_lower(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(non_empty_text(value).is_some_and(|text| starts_with_class(text, char::is_ascii_lowercase)))
}

pub fn start_with_letter(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(non_empty_text(value).is_some_and(|text| starts_with_class(text, char::is_ascii_alphabetic)))
}

fn starts_with_class(text: &str, class: fn(&char) -> bool) -> bool {
    text.chars().next().is_some_and(|c| class(&c))
}

/// `hasLetter` / `containsLetter`: at least one ASCII letter anywhere.
pub fn has_letter(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(text(value).is_some_and(|text| text.chars().any(|c| c.is_ascii_alphabetic())))
}

/// The text is unchanged by upper-casing.
pub fn upper(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(non_empty_text(value).is_some_and(|text| text == text.to_uppercase()))
}

/// The text is unchanged by lower-casing.
pub fn lower(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(non_empty_text(value).is_some_and(|text| text == text.to_lowercase()))
}

/// At least [`PASSWORD_MIN_LENGTH`] chars with an upper, a lower, a digit and a symbol.
pub fn password(value: &FieldValue, _args: &[String]) -> Result<bool> {
    let Some(text) = text(value) else {
        return Ok(false);
    };
    Ok(text.chars().count() >= PASSWORD_MIN_LENGTH
        && text.chars().any(|c| c.is_ascii_uppercase())
        && text.chars().any(|c| c.is_ascii_lowercase())
        && text.chars().any(|c| c.is_ascii_digit())
        && text.chars().any(|c| PASSWORD_SYMBOLS.contains(c)))
}

// ============================================================================
// PATTERNS
// ============================================================================

pub fn email(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(text(value).is_some_and(|text| EMAIL_REGEX.is_match(text)))
}

pub fn url(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(text(value).is_some_and(|text| URL_REGEX.is_match(text)))
}

/// Digits with optional `+`, spaces, dashes, dots and parentheses; 7 to 15 digits.
pub fn phone(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(text(value).is_some_and(|text| {
        let digits = text.chars().filter(char::is_ascii_digit).count();
        PHONE_REGEX.is_match(text.trim()) && (7..=15).contains(&digits)
    }))
}

/// `regex:pattern`.
///
/// The registry hands over the argument text unsplit, so `\d{2,4}` and `, ` survive.
/// Split arguments from direct callers are joined back with commas.
pub fn regex(value: &FieldValue, args: &[String]) -> Result<bool> {
    let pattern = args.join(",");
    if pattern.trim().is_empty() {
        return Err(ConfigError::missing_argument("regex"));
    }
    let compiled = Regex::new(&pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.clone(),
        source,
    })?;
    Ok(text(value).is_some_and(|text| compiled.is_match(text)))
}

// ============================================================================
// TESTS
// ============================================================================
