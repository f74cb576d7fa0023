//! Presence and shape rules
//!
//! These look at what kind of value the field holds and take no arguments.

use crate::error::Result;
use crate::value::FieldValue;

/// The field holds something: not null, not blank text, not a nameless file.
pub fn required(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(!value.is_empty())
}

/// Always passes. The session treats its presence as "skip the other rules when empty".
pub fn nullable(_value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(true)
}

pub fn string(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(matches!(value, FieldValue::Text(_)))
}

/// A finite number, or text that reads as one.
pub fn number(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(value.as_number().is_some())
}

/// A whole number, or text that parses as a signed integer.
pub fn integer(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(match value {
        FieldValue::Number(n) => n.is_finite() && n.fract() == 0.0,
        FieldValue::Text(text) => text.trim().parse::<i64>().is_ok(),
        _ => false,
    })
}

/// A boolean, `0`/`1`, or one of the usual yes/no spellings.
pub fn boolean(value: &FieldValue, _args: &[String]) -> Result<bool> {
    Ok(match value {
        FieldValue::Bool(_) => true,
        FieldValue::Number(n) => *n == 0.0 || *n == 1.0,
        FieldValue::Text(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "false" | "1" | "0" | "yes" | "no" | "on" | "off"
        ),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FileInfo;
    use rstest::rstest;

    #[rstest]
    #[case(FieldValue::Null, false)]
    #[case(FieldValue::from(""), false)]
    #[case(FieldValue::from("  "), false)]
    #[case(FieldValue::from("x"), true)]
    #[case(FieldValue::from(0), true)]
    #[case(FieldValue::from(false), true)]
    #[case(FieldValue::from(FileInfo::new("", 0)), false)]
    #[case(FieldValue::from(FileInfo::new("a.png", 10)), true)]
    fn test_required(#[case] value: FieldValue, #[case] expected: bool) {
        assert_eq!(required(&value, &[]).unwrap(), expected);
    }

    #[rstest]
    #[case(FieldValue::from(3), true)]
    #[case(FieldValue::from(3.5), false)]
    #[case(FieldValue::from("-42"), true)]
    #[case(FieldValue::from("4.2"), false)]
    #[case(FieldValue::from(""), false)]
    #[case(FieldValue::from(true), false)]
    fn test_integer(#[case] value: FieldValue, #[case] expected: bool) {
        assert_eq!(integer(&value, &[]).unwrap(), expected);
    }

    #[test]
    fn test_number() {
        assert!(number(&FieldValue::from("1e3"), &[]).unwrap());
        assert!(number(&FieldValue::from(2.5), &[]).unwrap());
        assert!(!number(&FieldValue::from("twelve"), &[]).unwrap());
        assert!(!number(&FieldValue::Number(f64::INFINITY), &[]).unwrap());
    }

    #[test]
    fn test_boolean() {
        for yes in ["true", "No", " on ", "0"] {
            assert!(boolean(&FieldValue::from(yes), &[]).unwrap(), "{yes}");
        }
        assert!(boolean(&FieldValue::from(false), &[]).unwrap());
        assert!(boolean(&FieldValue::from(1), &[]).unwrap());
        assert!(!boolean(&FieldValue::from(2), &[]).unwrap());
        assert!(!boolean(&FieldValue::from("maybe"), &[]).unwrap());
    }

    #[test]
    fn test_string_and_nullable() {
        assert!(string(&FieldValue::from(""), &[]).unwrap());
        assert!(!string(&FieldValue::from(1), &[]).unwrap());
        assert!(nullable(&FieldValue::Null, &[]).unwrap());
    }
}
