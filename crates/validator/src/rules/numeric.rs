//! Numeric comparison rules
//!
//! Numeric values (numbers and numeric text) are compared by value. Any other text
//! is compared by its character count, so `min:3` on a name means "at least three
//! characters" while on an age it means "at least 3".

use crate::error::{ConfigError, Result};
use crate::value::FieldValue;

use super::{number_arg, required_arg};

/// Value used for comparisons, see the module docs.
fn magnitude(value: &FieldValue) -> Option<f64> {
    value
        .as_number()
        .or_else(|| value.as_text().map(|text| text.chars().count() as f64))
}

/// `min:n`. Empty values fail.
pub fn min(value: &FieldValue, args: &[String]) -> Result<bool> {
    let bound = number_arg("min", args, 0)?;
    if value.is_empty() {
        return Ok(false);
    }
    Ok(magnitude(value).is_some_and(|m| m >= bound))
}

/// `max:n`. Empty values pass.
pub fn max(value: &FieldValue, args: &[String]) -> Result<bool> {
    let bound = number_arg("max", args, 0)?;
    if value.is_empty() {
        return Ok(true);
    }
    Ok(magnitude(value).is_some_and(|m| m <= bound))
}

/// `between:a,b`, inclusive on both ends.
pub fn between(value: &FieldValue, args: &[String]) -> Result<bool> {
    let low = number_arg("between", args, 0)?;
    let high = number_arg("between", args, 1)?;
    if value.is_empty() {
        return Ok(false);
    }
    Ok(magnitude(value).is_some_and(|m| (low..=high).contains(&m)))
}

/// `modulo:n`, the value is a multiple of `n`.
pub fn modulo(value: &FieldValue, args: &[String]) -> Result<bool> {
    let divisor = number_arg("modulo", args, 0)?;
    if divisor == 0.0 {
        let raw = required_arg("modulo", args, 0)?;
        return Err(ConfigError::invalid_argument("modulo", raw, "divisor must not be zero"));
    }
    Ok(value.as_number().is_some_and(|n| {
        let quotient = n / divisor;
        (quotient - quotient.round()).abs() < 1e-9
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::args;

    #[test]
    fn test_min_numeric_text() {
        let three = args(&["3"]);
        assert!(min(&FieldValue::from("4"), &three).unwrap());
        assert!(min(&FieldValue::from(3), &three).unwrap());
        assert!(!min(&FieldValue::from("2"), &three).unwrap());
        assert!(!min(&FieldValue::from(""), &three).unwrap());
        assert!(!min(&FieldValue::Null, &three).unwrap());
    }

    #[test]
    fn test_min_counts_chars_of_words() {
        let three = args(&["3"]);
        assert!(min(&FieldValue::from("test"), &three).unwrap());
        assert!(!min(&FieldValue::from("ab"), &three).unwrap());
    }

    #[test]
    fn test_max() {
        let sixty = args(&["60"]);
        assert!(max(&FieldValue::from(""), &sixty).unwrap());
        assert!(max(&FieldValue::from("60"), &sixty).unwrap());
        assert!(!max(&FieldValue::from(61), &sixty).unwrap());
        assert!(!max(&FieldValue::from(true), &sixty).unwrap());
    }

    #[test]
    fn test_between() {
        let range = args(&["1", "5"]);
        assert!(between(&FieldValue::from(1), &range).unwrap());
        assert!(between(&FieldValue::from("5"), &range).unwrap());
        assert!(!between(&FieldValue::from(6), &range).unwrap());
        assert!(matches!(
            between(&FieldValue::from(2), &args(&["1"])),
            Err(ConfigError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_modulo() {
        assert!(modulo(&FieldValue::from(9), &args(&["3"])).unwrap());
        assert!(modulo(&FieldValue::from(0.3), &args(&["0.1"])).unwrap());
        assert!(!modulo(&FieldValue::from(10), &args(&["3"])).unwrap());
        assert!(!modulo(&FieldValue::from("abc"), &args(&["3"])).unwrap());
        assert!(modulo(&FieldValue::from(1), &args(&["0"])).is_err());
    }

    #[test]
    fn test_zero_divisor_reported_as_written() {
        let err = modulo(&FieldValue::from(4), &args(&["0.0"])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidArgument { ref value, .. } if value == "0.0"
        ));
        assert_eq!(
            err.to_string(),
            "invalid argument `0.0` for the modulo rule: divisor must not be zero"
        );
    }

    #[test]
    fn test_non_numeric_bound_is_config_error() {
        assert!(matches!(
            min(&FieldValue::from(1), &args(&["abc"])),
            Err(ConfigError::NonNumericArgument { .. })
        ));
    }
}
