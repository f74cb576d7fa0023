//! Rule registry
//!
//! Maps rule names to predicates. The built-in catalog lives in a process-wide
//! [`RuleRegistry::global`] instance that is never mutated; custom rules are added to
//! a clone of it, which is then handed to the validators that need them.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::error::{ConfigError, Result};
use crate::parser::RuleInvocation;
use crate::value::FieldValue;

use super::{file, numeric, presence, string, temporal};

/// Signature of a built-in predicate.
pub type PredicateFn = fn(&FieldValue, &[String]) -> Result<bool>;

/// A registered predicate. Closures are allowed so rules can capture configuration.
pub type Predicate = Arc<dyn Fn(&FieldValue, &[String]) -> Result<bool> + Send + Sync>;

/// How a rule's argument text reaches its predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ArgumentMode {
    /// Comma-split, trimmed tokens.
    #[default]
    Split,
    /// A single argument holding the text after the first `:` as written.
    Raw,
}

const BUILTIN: &[(&str, PredicateFn)] = &[
    // presence / shape
    ("required", presence::required),
    ("nullable", presence::nullable),
    ("string", presence::string),
    ("number", presence::number),
    ("numeric", presence::number),
    ("integer", presence::integer),
    ("int", presence::integer),
    ("boolean", presence::boolean),
    // numeric
    ("min", numeric::min),
    ("max", numeric::max),
    ("between", numeric::between),
    ("modulo", numeric::modulo),
    // string
    ("minlength", string::minlength),
    ("maxlength", string::maxlength),
    ("length", string::length),
    ("len", string::length),
    ("startWith", string::start_with),
    ("endWith", string::end_with),
    ("contains", string::contains),
    ("excludes", string::excludes),
    ("in", string::one_of),
    ("startWithUpper", string::start_with_upper),
    ("startWithLower", string::start_with_lower),
    ("startWithLetter", string::start_with_letter),
    ("hasLetter", string::has_letter),
    ("containsLetter", string::has_letter),
    ("upper", string::upper),
    ("lower", string::lower),
    ("password", string::password),
    ("email", string::email),
    ("url", string::url),
    ("phone", string::phone),
    // file
    ("file", file::file),
    ("maxFileSize", file::max_file_size),
    ("minFileSize", file::min_file_size),
    ("size", file::size),
    // temporal
    ("date", temporal::date),
    ("before", temporal::before),
    ("after", temporal::after),
    ("time", temporal::time),
];

/// Built-ins that take their argument text unsplit.
const RAW_BUILTIN: &[(&str, PredicateFn)] = &[("regex", string::regex)];

static GLOBAL: LazyLock<Arc<RuleRegistry>> = LazyLock::new(|| Arc::new(RuleRegistry::builtin()));

// ============================================================================
// RULE REGISTRY
// ============================================================================

#[derive(Clone)]
struct Entry {
    predicate: Predicate,
    mode: ArgumentMode,
}

/// Name-to-predicate map consulted by every field validator.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<Cow<'static, str>, Entry>,
}

impl RuleRegistry {
    /// Creates a registry with no rules at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in rule.
    #[must_use]
    pub fn builtin() -> Self {
        let split = BUILTIN.iter().map(|entry| (entry, ArgumentMode::Split));
        let raw = RAW_BUILTIN.iter().map(|entry| (entry, ArgumentMode::Raw));
        let rules = split
            .chain(raw)
            .map(|(&(name, predicate), mode)| {
                let predicate = Arc::new(predicate) as Predicate;
                (Cow::Borrowed(name), Entry { predicate, mode })
            })
            .collect();
        Self { rules }
    }

    /// The shared built-in registry.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Registers `predicate` under `name`, returning the predicate it replaced.
    pub fn register<F>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        predicate: F,
    ) -> Option<Predicate>
    where
        F: Fn(&FieldValue, &[String]) -> Result<bool> + Send + Sync + 'static,
    {
        self.register_with_mode(name, ArgumentMode::Split, predicate)
    }

    /// Registers a predicate that receives its argument text unsplit, as the
    /// only element of the argument slice.
    pub fn register_raw<F>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        predicate: F,
    ) -> Option<Predicate>
    where
        F: Fn(&FieldValue, &[String]) -> Result<bool> + Send + Sync + 'static,
    {
        self.register_with_mode(name, ArgumentMode::Raw, predicate)
    }

    fn register_with_mode<F>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        mode: ArgumentMode,
        predicate: F,
    ) -> Option<Predicate>
    where
        F: Fn(&FieldValue, &[String]) -> Result<bool> + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(rule = %name, ?mode, "registering validation rule");
        let entry = Entry {
            predicate: Arc::new(predicate),
            mode,
        };
        self.rules.insert(name, entry).map(|old| old.predicate)
    }

    /// Builder form of [`register_raw`](Self::register_raw).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_raw<F>(mut self, name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&FieldValue, &[String]) -> Result<bool> + Send + Sync + 'static,
    {
        self.register_raw(name, predicate);
        self
    }

    /// Builder form of [`register`](Self::register).
    #[must_use = "builder methods must be chained or built"]
    pub fn with<F>(mut self, name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&FieldValue, &[String]) -> Result<bool> + Send + Sync + 'static,
    {
        self.register(name, predicate);
        self
    }

    /// Looks up a predicate by rule name.
    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.rules.get(name).map(|entry| &entry.predicate)
    }

    /// How `name` receives its arguments.
    pub fn argument_mode(&self, name: &str) -> Option<ArgumentMode> {
        self.rules.get(name).map(|entry| entry.mode)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(AsRef::as_ref).collect();
        names.sort_unstable();
        names
    }

    /// Fails with [`ConfigError::UnknownRule`] on the first name not in the registry.
    pub fn ensure_known(&self, rules: &[RuleInvocation]) -> Result<()> {
        match rules.iter().find(|rule| !self.contains(rule.name())) {
            Some(rule) => Err(ConfigError::UnknownRule {
                name: rule.name().to_owned(),
            }),
            None => Ok(()),
        }
    }

    /// Runs the predicate for `rule` against `value`.
    pub fn check(&self, rule: &RuleInvocation, value: &FieldValue) -> Result<bool> {
        let entry = self.rules.get(rule.name()).ok_or_else(|| ConfigError::UnknownRule {
            name: rule.name().to_owned(),
        })?;
        match entry.mode {
            ArgumentMode::Split => (entry.predicate)(value, rule.args()),
            ArgumentMode::Raw if rule.raw_args().is_empty() => (entry.predicate)(value, &[]),
            ArgumentMode::Raw => {
                let raw = [rule.raw_args().to_owned()];
                (entry.predicate)(value, &raw)
            }
        }
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
