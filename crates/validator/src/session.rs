//! Field validation sessions
//!
//! A [`FieldValidator`] owns one field's rule list, its custom messages and its
//! configuration. Each [`validate`](FieldValidator::validate) call evaluates the
//! rules in order and replaces the stored [`ValidationOutcome`].
//!
//! ```
//! use quickv_validator::prelude::*;
//!
//! let mut validator = FieldValidator::builder("name")
//!     .rules("required|min:3")
//!     .build()?;
//!
//! assert!(!validator.validate(&FieldValue::from(""))?);
//! assert_eq!(validator.messages(), ["The name field is required"]);
//!
//! assert!(validator.validate(&FieldValue::from("4"))?);
//! assert!(validator.errors().is_empty());
//! # Ok::<(), quickv_validator::ConfigError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, instrument, trace, warn};

use crate::config::{FieldConfig, HookPolicy};
use crate::error::Result;
use crate::messages::{CustomMessages, MessageCatalog, MessageResolver};
use crate::parser::{self, RuleInvocation};
use crate::rules::RuleRegistry;
use crate::value::FieldValue;

const NULLABLE: &str = "nullable";

// ============================================================================
// HOOKS
// ============================================================================

/// Receives the result of every committed validation.
///
/// Both methods default to doing nothing, so implementors pick what they need.
pub trait SessionHooks: Send {
    /// Called with the configured valid or invalid class.
    fn apply_class(&mut self, _class: &str, _valid: bool) {}

    /// Called after the outcome has been replaced.
    fn changed(&mut self, _outcome: &ValidationOutcome) {}
}

/// Hooks that ignore everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl SessionHooks for NoopHooks {}

// ============================================================================
// STATE AND OUTCOME
// ============================================================================

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SessionState {
    /// No validation has completed since construction or the last reset.
    #[default]
    Unvalidated,
    /// Rules are being evaluated. Only observable from hooks and predicates.
    Validating,
    Valid,
    Invalid,
}

/// Failed rules of one validation, keyed by rule name in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    errors: IndexMap<String, String>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rule name to message.
    pub fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    /// The message recorded for `rule`.
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.errors.get(rule).map(String::as_str)
    }

    /// Messages in evaluation order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.values().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records a failure unless `rule` already failed earlier in this run.
    fn record(&mut self, rule: &str, message: String) {
        self.errors.entry(rule.to_owned()).or_insert(message);
    }
}

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// Validation session for a single field.
pub struct FieldValidator {
    field: String,
    rules: Vec<RuleInvocation>,
    custom: CustomMessages,
    config: FieldConfig,
    registry: Arc<RuleRegistry>,
    catalog: Arc<MessageCatalog>,
    hooks: Box<dyn SessionHooks>,
    outcome: ValidationOutcome,
    state: SessionState,
}

impl FieldValidator {
    /// A validator with the built-in rules, catalog and default configuration.
    pub fn new(field: impl Into<String>, rules: impl Into<String>) -> Result<Self> {
        Self::builder(field).rules(rules).build()
    }

    pub fn builder(field: impl Into<String>) -> FieldValidatorBuilder {
        FieldValidatorBuilder::new(field)
    }

    // ------------------------------------------------------------------------
    // Rule list
    // ------------------------------------------------------------------------

    /// Rule names in declaration order.
    pub fn rules(&self) -> Vec<&str> {
        self.rules.iter().map(RuleInvocation::name).collect()
    }

    /// Rule segments as written, e.g. `["required", "min:30"]`.
    pub fn raw_rules(&self) -> Vec<String> {
        self.rules.iter().map(ToString::to_string).collect()
    }

    pub fn invocations(&self) -> &[RuleInvocation] {
        &self.rules
    }

    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Replaces the rule list and forgets the previous outcome.
    ///
    /// On error the session is left as it was.
    pub fn set_rules(&mut self, expr: &str) -> Result<()> {
        let rules = parser::parse(expr);
        self.registry.ensure_known(&rules)?;
        self.rules = rules;
        self.reset();
        Ok(())
    }

    /// Replaces the custom messages and forgets the previous outcome.
    ///
    /// On error the session is left as it was.
    pub fn set_messages(&mut self, source: &str) -> Result<()> {
        self.custom = CustomMessages::parse(source)?;
        self.reset();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Evaluates the rules against `value`, stores the outcome and notifies the hooks.
    ///
    /// Returns `true` when no rule failed. A configuration error aborts the call and
    /// leaves the previous outcome and state in place.
    #[instrument(
        level = "debug",
        skip(self, value),
        fields(field = %self.field, kind = value.kind())
    )]
    pub fn validate(&mut self, value: &FieldValue) -> Result<bool> {
        let previous = std::mem::replace(&mut self.state, SessionState::Validating);
        match self.evaluate(value) {
            Ok(outcome) => Ok(self.commit(outcome)),
            Err(error) => {
                warn!(field = %self.field, %error, "validation aborted by a configuration error");
                self.state = previous;
                Err(error)
            }
        }
    }

    /// Same answer as [`validate`](Self::validate).
    ///
    /// Under [`HookPolicy::Suppress`] the stored outcome, the state and the hooks are
    /// left alone.
    pub fn valid(&mut self, value: &FieldValue) -> Result<bool> {
        match self.config.hook_policy {
            HookPolicy::Suppress => Ok(self.evaluate(value)?.is_valid()),
            HookPolicy::Invoke => self.validate(value),
        }
    }

    /// Runs the rules without touching the session.
    pub fn evaluate(&self, value: &FieldValue) -> Result<ValidationOutcome> {
        let mut outcome = ValidationOutcome::default();
        if value.is_empty() && self.is_nullable() {
            trace!(field = %self.field, "empty nullable field, skipping rules");
            return Ok(outcome);
        }

        let templates = self.catalog.locale(&self.config.locale);
        let mut resolver = MessageResolver::new(templates);
        if !self.custom.is_empty() {
            resolver = resolver.with_custom(&self.custom);
        }

        for (slot, rule) in self.rules.iter().enumerate() {
            if self.registry.check(rule, value)? {
                continue;
            }
            debug!(field = %self.field, rule = rule.name(), slot, "rule failed");
            let message = resolver.resolve(rule.name(), rule.args(), &self.field, slot);
            outcome.record(rule.name(), message);
            if self.config.fails_on_first {
                break;
            }
        }
        Ok(outcome)
    }

    fn commit(&mut self, outcome: ValidationOutcome) -> bool {
        let valid = outcome.is_valid();
        self.outcome = outcome;
        self.state = if valid {
            SessionState::Valid
        } else {
            SessionState::Invalid
        };
        self.hooks.apply_class(self.config.class_for(valid), valid);
        self.hooks.changed(&self.outcome);
        valid
    }

    fn reset(&mut self) {
        self.outcome = ValidationOutcome::default();
        self.state = SessionState::Unvalidated;
    }

    fn is_nullable(&self) -> bool {
        self.rules.iter().any(|rule| rule.name() == NULLABLE)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Failures of the last committed validation. Empty before the first one.
    pub fn errors(&self) -> &IndexMap<String, String> {
        self.outcome.errors()
    }

    /// Messages of the last committed validation, in evaluation order.
    pub fn messages(&self) -> Vec<&str> {
        self.outcome.messages()
    }

    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn custom_messages(&self) -> &CustomMessages {
        &self.custom
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("field", &self.field)
            .field("rules", &self.raw_rules())
            .field("config", &self.config)
            .field("state", &self.state)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`FieldValidator`].
#[must_use = "builder does nothing until .build() is called"]
pub struct FieldValidatorBuilder {
    field: String,
    rules: String,
    messages: Option<String>,
    config: FieldConfig,
    registry: Option<Arc<RuleRegistry>>,
    catalog: Option<Arc<MessageCatalog>>,
    hooks: Option<Box<dyn SessionHooks>>,
}

impl FieldValidatorBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rules: String::new(),
            messages: None,
            config: FieldConfig::default(),
            registry: None,
            catalog: None,
            hooks: None,
        }
    }

    /// Rule expression, e.g. `required|min:3`.
    pub fn rules(mut self, expr: impl Into<String>) -> Self {
        self.rules = expr.into();
        self
    }

    /// Custom message source, e.g. `Required message | {1,2}Too short`.
    pub fn messages(mut self, source: impl Into<String>) -> Self {
        self.messages = Some(source.into());
        self
    }

    pub fn config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn fails_on_first(mut self, fails_on_first: bool) -> Self {
        self.config.fails_on_first = fails_on_first;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    pub fn hook_policy(mut self, hook_policy: HookPolicy) -> Self {
        self.config.hook_policy = hook_policy;
        self
    }

    /// Uses `registry` instead of [`RuleRegistry::global`].
    pub fn registry(mut self, registry: Arc<RuleRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Uses `catalog` instead of [`MessageCatalog::global`].
    pub fn catalog(mut self, catalog: Arc<MessageCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn hooks(mut self, hooks: impl SessionHooks + 'static) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }

    /// Parses the rule expression and custom messages.
    ///
    /// Unknown rule names and malformed index sets are rejected here; argument
    /// problems surface on the first `validate`.
    pub fn build(self) -> Result<FieldValidator> {
        let registry = self.registry.unwrap_or_else(RuleRegistry::global);
        let rules = parser::parse(&self.rules);
        registry.ensure_known(&rules)?;
        let custom = match self.messages.as_deref() {
            Some(source) => CustomMessages::parse(source)?,
            None => CustomMessages::default(),
        };
        debug!(field = %self.field, rules = rules.len(), "field validator built");

        Ok(FieldValidator {
            field: self.field,
            rules,
            custom,
            config: self.config,
            registry,
            catalog: self.catalog.unwrap_or_else(MessageCatalog::global),
            hooks: self.hooks.unwrap_or_else(|| Box::new(NoopHooks)),
            outcome: ValidationOutcome::default(),
            state: SessionState::Unvalidated,
        })
    }
}

impl fmt::Debug for FieldValidatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidatorBuilder")
            .field("field", &self.field)
            .field("rules", &self.rules)
            .field("messages", &self.messages)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::ConfigError;

    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl SessionHooks for Recorder {
        fn apply_class(&mut self, class: &str, valid: bool) {
            self.events.lock().unwrap().push(format!("class {class} {valid}"));
        }

        fn changed(&mut self, outcome: &ValidationOutcome) {
            self.events
                .lock()
                .unwrap()
                .push(format!("changed {}", outcome.len()));
        }
    }

    fn text(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    #[test]
    fn test_initial_state() {
        let validator = FieldValidator::new("name", "required").unwrap();
        assert_eq!(validator.state(), SessionState::Unvalidated);
        assert!(validator.errors().is_empty());
        assert!(validator.has_rules());
    }

    #[test]
    fn test_state_follows_result() {
        let mut validator = FieldValidator::new("name", "required").unwrap();
        assert!(!validator.validate(&text("")).unwrap());
        assert_eq!(validator.state(), SessionState::Invalid);
        assert!(validator.validate(&text("x")).unwrap());
        assert_eq!(validator.state(), SessionState::Valid);
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_unknown_rule_rejected_at_build() {
        let err = FieldValidator::new("name", "required|sparkly").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRule { name } if name == "sparkly"));
    }

    #[test]
    fn test_argument_errors_surface_on_validate() {
        let mut validator = FieldValidator::new("code", "length:abc").unwrap();
        assert!(matches!(
            validator.validate(&text("abc")),
            Err(ConfigError::NonNumericArgument { .. })
        ));
        assert_eq!(validator.state(), SessionState::Unvalidated);
    }

    #[test]
    fn test_config_error_restores_committed_state() {
        let mut validator = FieldValidator::builder("code")
            .rules("required|min:x")
            .build()
            .unwrap();
        // fail-fast stops at `required`, so `min:x` is never evaluated
        assert!(!validator.validate(&text("")).unwrap());
        let before = validator.outcome().clone();

        assert!(matches!(
            validator.validate(&text("5")),
            Err(ConfigError::NonNumericArgument { .. })
        ));
        assert_eq!(validator.state(), SessionState::Invalid);
        assert_eq!(validator.outcome(), &before);
    }

    #[test]
    fn test_fail_fast_stops_at_first() {
        let mut validator = FieldValidator::new("email", "required|minlength:5|email").unwrap();
        assert!(!validator.validate(&text("")).unwrap());
        assert_eq!(validator.rules().len(), 3);
        assert_eq!(validator.errors().len(), 1);
        assert!(validator.errors().contains_key("required"));
    }

    #[test]
    fn test_collect_all_keeps_order() {
        let mut validator = FieldValidator::builder("email")
            .rules("required|minlength:5|email")
            .fails_on_first(false)
            .build()
            .unwrap();
        assert!(!validator.validate(&text("")).unwrap());
        let failed: Vec<&str> = validator.errors().keys().map(String::as_str).collect();
        assert_eq!(failed, ["required", "minlength", "email"]);
    }

    #[test]
    fn test_repeated_rule_keeps_first_failure() {
        let mut validator = FieldValidator::builder("age")
            .rules("min:10|min:20")
            .messages("ten | twenty")
            .fails_on_first(false)
            .build()
            .unwrap();
        assert!(!validator.validate(&FieldValue::from(5)).unwrap());
        assert_eq!(validator.messages(), ["ten"]);
    }

    #[test]
    fn test_nullable_skips_empty_values() {
        let mut validator = FieldValidator::new("nick", "nullable|minlength:3").unwrap();
        assert!(validator.validate(&text("")).unwrap());
        assert!(validator.validate(&FieldValue::Null).unwrap());
        assert!(!validator.validate(&text("ab")).unwrap());
    }

    #[test]
    fn test_hooks_receive_classes() {
        let recorder = Recorder::default();
        let mut validator = FieldValidator::builder("name")
            .rules("required")
            .config(FieldConfig::default().with_classes("ok", "bad"))
            .hooks(recorder.clone())
            .build()
            .unwrap();
        validator.validate(&text("")).unwrap();
        validator.validate(&text("x")).unwrap();
        assert_eq!(
            recorder.events(),
            ["class bad false", "changed 1", "class ok true", "changed 0"]
        );
    }

    #[test]
    fn test_valid_suppressed_is_pure() {
        let recorder = Recorder::default();
        let mut validator = FieldValidator::builder("name")
            .rules("required")
            .hooks(recorder.clone())
            .build()
            .unwrap();
        assert!(!validator.valid(&text("")).unwrap());
        assert_eq!(validator.state(), SessionState::Unvalidated);
        assert!(validator.errors().is_empty());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_valid_invoke_commits() {
        let recorder = Recorder::default();
        let mut validator = FieldValidator::builder("name")
            .rules("required")
            .hook_policy(HookPolicy::Invoke)
            .hooks(recorder.clone())
            .build()
            .unwrap();
        assert!(!validator.valid(&text("")).unwrap());
        assert_eq!(validator.state(), SessionState::Invalid);
        assert_eq!(recorder.events().len(), 2);
    }

    #[test]
    fn test_set_rules_resets() {
        let mut validator = FieldValidator::new("name", "required").unwrap();
        validator.validate(&text("")).unwrap();
        validator.set_rules("required|email").unwrap();
        assert_eq!(validator.state(), SessionState::Unvalidated);
        assert!(validator.errors().is_empty());
        assert_eq!(validator.rules(), ["required", "email"]);
    }

    #[test]
    fn test_set_rules_rejects_unknown_and_keeps_old() {
        let mut validator = FieldValidator::new("name", "required").unwrap();
        assert!(validator.set_rules("required|nope").is_err());
        assert_eq!(validator.rules(), ["required"]);
    }

    #[test]
    fn test_set_messages() {
        let mut validator = FieldValidator::new("name", "required").unwrap();
        validator.set_messages("Please fill in your name").unwrap();
        validator.validate(&text("")).unwrap();
        assert_eq!(validator.messages(), ["Please fill in your name"]);
        assert!(validator.set_messages("{x}broken").is_err());
        assert_eq!(
            validator.custom_messages().get(0),
            Some("Please fill in your name")
        );
    }

    #[test]
    fn test_locale_switch() {
        let mut validator = FieldValidator::builder("nom")
            .rules("required")
            .locale("fr")
            .build()
            .unwrap();
        validator.validate(&text("")).unwrap();
        assert_eq!(validator.messages(), ["Le champ nom est obligatoire"]);
    }

    #[test]
    fn test_custom_registry() {
        let registry = RuleRegistry::builtin().with("even", |value: &FieldValue, _: &[String]| {
            Ok(value.as_number().is_some_and(|n| n % 2.0 == 0.0))
        });
        let mut validator = FieldValidator::builder("count")
            .rules("even")
            .registry(Arc::new(registry))
            .build()
            .unwrap();
        assert!(validator.validate(&FieldValue::from(4)).unwrap());
        assert!(!validator.validate(&FieldValue::from(3)).unwrap());
        assert_eq!(validator.messages(), ["This field is invalid"]);
    }

    #[test]
    fn test_empty_rule_list_always_passes() {
        let mut validator = FieldValidator::new("anything", "").unwrap();
        assert!(!validator.has_rules());
        assert!(validator.validate(&FieldValue::Null).unwrap());
    }
}
