//! Configuration errors
//!
//! A failed rule is *data*: it ends up in a [`ValidationOutcome`](crate::session::ValidationOutcome).
//! Everything in this module is the other kind of failure, a mistake made by whoever
//! wrote the rule expression, the custom messages or the locale dictionary. These are
//! returned as `Err` right away and are never shown to the end user as a validation message.

use std::borrow::Cow;

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// An integrator mistake detected while building or running a field validator.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The rule expression names a rule that is not in the registry.
    #[error("unknown validation rule `{name}`")]
    UnknownRule {
        /// The unrecognised rule name.
        name: String,
    },

    /// A rule that needs arguments was used without them.
    #[error("missing required argument: {rule}")]
    MissingArgument {
        /// The rule that was invoked.
        rule: Cow<'static, str>,
    },

    /// A rule expected a numeric argument and got something else.
    #[error("the {rule} rule argument must be a number, got `{value}`")]
    NonNumericArgument {
        /// The rule that was invoked.
        rule: Cow<'static, str>,
        /// The offending argument, verbatim.
        value: String,
    },

    /// An argument parsed but makes no sense for the rule (`modulo:0`, `size:12XB`, ...).
    #[error("invalid argument `{value}` for the {rule} rule: {reason}")]
    InvalidArgument {
        /// The rule that was invoked.
        rule: Cow<'static, str>,
        /// The offending argument, verbatim.
        value: String,
        /// Why it was rejected.
        reason: Cow<'static, str>,
    },

    /// The `regex` rule was given a pattern that does not compile.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        /// The pattern as written in the rule expression.
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A compensation entry in the custom messages has a broken `{...}` prefix.
    #[error("malformed message index set in `{entry}`: {reason}")]
    MalformedIndexSet {
        /// The whole custom message entry.
        entry: String,
        /// What is wrong with it.
        reason: Cow<'static, str>,
    },

    /// A locale dictionary could not be parsed.
    #[error("invalid locale dictionary for `{locale}`")]
    InvalidLocale {
        /// The language the dictionary was registered under.
        locale: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Creates a [`ConfigError::MissingArgument`] for `rule`.
    pub fn missing_argument(rule: impl Into<Cow<'static, str>>) -> Self {
        Self::MissingArgument { rule: rule.into() }
    }

    /// Creates a [`ConfigError::NonNumericArgument`] for `rule`.
    pub fn non_numeric(rule: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self::NonNumericArgument {
            rule: rule.into(),
            value: value.into(),
        }
    }

    /// Creates a [`ConfigError::InvalidArgument`] for `rule`.
    pub fn invalid_argument(
        rule: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidArgument {
            rule: rule.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`ConfigError::MalformedIndexSet`] for a custom message entry.
    pub fn malformed_index_set(
        entry: impl Into<String>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::MalformedIndexSet {
            entry: entry.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for operations that can hit a [`ConfigError`].
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message() {
        let error = ConfigError::missing_argument("startWith");
        assert_eq!(error.to_string(), "missing required argument: startWith");
    }

    #[test]
    fn test_non_numeric_message() {
        let error = ConfigError::non_numeric("length", "abc");
        assert_eq!(
            error.to_string(),
            "the length rule argument must be a number, got `abc`"
        );
    }

    #[test]
    fn test_static_rule_name_is_borrowed() {
        let ConfigError::MissingArgument { rule } = ConfigError::missing_argument("contains")
        else {
            panic!("wrong variant");
        };
        assert!(matches!(rule, Cow::Borrowed(_)));
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = ConfigError::InvalidPattern {
            pattern: "(".into(),
            source,
        };
        assert!(std::error::Error::source(&error).is_some());
    }
}
