//! Field validator configuration

use serde::{Deserialize, Serialize};

/// Whether [`valid`](crate::session::FieldValidator::valid) behaves like a pure query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HookPolicy {
    /// `valid()` neither fires hooks nor replaces the stored outcome.
    #[default]
    Suppress,
    /// `valid()` is the same call as `validate()`.
    Invoke,
}

/// Per-field settings.
///
/// Deserializes from camelCase JSON; missing keys take their defaults:
///
/// ```
/// use quickv_validator::config::FieldConfig;
///
/// let json = r#"{"failsOnFirst": false, "locale": "fr"}"#;
/// let config: FieldConfig = serde_json::from_str(json).unwrap();
/// assert!(!config.fails_on_first);
/// assert_eq!(config.invalid_class, "qv-invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Stop at the first failing rule.
    #[serde(alias = "failsOnfirst")]
    pub fails_on_first: bool,
    /// Language used for catalog messages.
    pub locale: String,
    /// Class handed to the hooks when the field passes.
    pub valid_class: String,
    /// Class handed to the hooks when the field fails.
    pub invalid_class: String,
    pub hook_policy: HookPolicy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            fails_on_first: true,
            locale: "en".to_owned(),
            valid_class: "qv-valid".to_owned(),
            invalid_class: "qv-invalid".to_owned(),
            hook_policy: HookPolicy::Suppress,
        }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops at the first failure. Same as the default.
    pub fn fail_fast() -> Self {
        Self::default()
    }

    /// Evaluates every rule and reports each failure.
    pub fn collect_all() -> Self {
        Self {
            fails_on_first: false,
            ..Self::default()
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_fails_on_first(mut self, fails_on_first: bool) -> Self {
        self.fails_on_first = fails_on_first;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_classes(mut self, valid: impl Into<String>, invalid: impl Into<String>) -> Self {
        self.valid_class = valid.into();
        self.invalid_class = invalid.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_hook_policy(mut self, hook_policy: HookPolicy) -> Self {
        self.hook_policy = hook_policy;
        self
    }

    /// The class matching a pass/fail result.
    pub fn class_for(&self, valid: bool) -> &str {
        if valid {
            &self.valid_class
        } else {
            &self.invalid_class
        }
    }
}
