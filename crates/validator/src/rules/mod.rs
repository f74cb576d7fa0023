//! Predicate library
//!
//! Every rule is a plain function `(value, args) -> Result<bool>` registered under a
//! name. `Ok(false)` means the value failed the rule, which is an ordinary outcome.
//! `Err` is reserved for configuration mistakes such as a missing or non-numeric
//! argument.
//!
//! # Categories
//!
//! - **Presence / shape**: `required`, `nullable`, `string`, `number`, `integer`, `boolean`
//! - **Numeric**: `min`, `max`, `between`, `modulo`
//! - **String**: lengths, affixes, character classes, `password`, `email`, `url`, `phone`, `regex`
//! - **File**: `file`, `maxFileSize`, `minFileSize`, `size`
//! - **Temporal**: `date`, `before`, `after`, `time`
//!
//! # Examples
//!
//! ```
//! use quickv_validator::rules::RuleRegistry;
//! use quickv_validator::value::FieldValue;
//!
//! let registry = RuleRegistry::builtin().with("even", |value: &FieldValue, _: &[String]| {
//!     Ok(value.as_number().is_some_and(|n| n % 2.0 == 0.0))
//! });
//! assert!(registry.contains("even"));
//! assert!(registry.contains("required"));
//! ```

pub mod file;
pub mod numeric;
pub mod presence;
pub mod registry;
pub mod string;
pub mod temporal;

pub use registry::{ArgumentMode, Predicate, PredicateFn, RuleRegistry};

use crate::error::{ConfigError, Result};

// ============================================================================
// ARGUMENT HELPERS
// ============================================================================

/// Returns the non-empty candidates of a comma-accepting rule.
///
/// Fails with [`ConfigError::MissingArgument`] when nothing usable was supplied.
pub(crate) fn candidates<'a>(rule: &'static str, args: &'a [String]) -> Result<Vec<&'a str>> {
    let found: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| !arg.is_empty())
        .collect();
    if found.is_empty() {
        return Err(ConfigError::missing_argument(rule));
    }
    Ok(found)
}

/// Reads argument `index` as a finite number.
pub(crate) fn number_arg(rule: &'static str, args: &[String], index: usize) -> Result<f64> {
    let raw = required_arg(rule, args, index)?;
    crate::value::parse_finite(raw).ok_or_else(|| ConfigError::non_numeric(rule, raw))
}

/// Reads argument `index` as a non-negative integer count.
pub(crate) fn count_arg(rule: &'static str, args: &[String], index: usize) -> Result<usize> {
    let raw = required_arg(rule, args, index)?;
    raw.parse::<usize>()
        .map_err(|_| ConfigError::non_numeric(rule, raw))
}

/// Reads argument `index`, failing when it is absent or blank.
pub(crate) fn required_arg<'a>(
    rule: &'static str,
    args: &'a [String],
    index: usize,
) -> Result<&'a str> {
    match args.get(index).map(|arg| arg.trim()) {
        Some(arg) if !arg.is_empty() => Ok(arg),
        _ => Err(ConfigError::missing_argument(rule)),
    }
}

#[cfg(test)]
pub(crate) fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_owned()).collect()
}
