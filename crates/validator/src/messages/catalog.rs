//! Locale-keyed message templates
//!
//! A [`LocaleMessages`] maps rule names to templates for one language. The
//! [`MessageCatalog`] holds one of those per language and picks the best match
//! for a requested locale.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

use super::lang;

/// Used when neither the rule nor the locale's `default` entry has a template.
pub const DEFAULT_MESSAGE: &str = "This field is invalid";

/// Language used when a requested locale is not in the catalog.
pub const FALLBACK_LOCALE: &str = "en";

/// Key of the per-locale catch-all template.
const DEFAULT_KEY: &str = "default";

static GLOBAL: LazyLock<Arc<MessageCatalog>> =
    LazyLock::new(|| Arc::new(MessageCatalog::builtin()));

static EMPTY: LazyLock<LocaleMessages> = LazyLock::new(LocaleMessages::default);

// ============================================================================
// LOCALE MESSAGES
// ============================================================================

/// Templates for one language, in declaration order.
///
/// Deserializes from a flat JSON object: `{"required": "The :field field is required"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleMessages {
    templates: IndexMap<Cow<'static, str>, Cow<'static, str>>,
}

impl LocaleMessages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from static pairs without allocating the strings.
    pub fn from_static(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            templates: pairs
                .iter()
                .map(|&(rule, template)| (Cow::Borrowed(rule), Cow::Borrowed(template)))
                .collect(),
        }
    }

    /// Sets the template for `rule`, replacing any previous one.
    pub fn insert(
        &mut self,
        rule: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) {
        self.templates.insert(rule.into(), template.into());
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with(
        mut self,
        rule: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.insert(rule, template);
        self
    }

    /// The template registered for `rule`, if any.
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.templates.get(rule).map(AsRef::as_ref)
    }

    /// The locale's catch-all template, or [`DEFAULT_MESSAGE`].
    pub fn default_template(&self) -> &str {
        self.get(DEFAULT_KEY).unwrap_or(DEFAULT_MESSAGE)
    }

    /// The template for `rule`, falling back to [`default_template`](Self::default_template).
    pub fn template(&self, rule: &str) -> &str {
        self.get(rule).unwrap_or_else(|| self.default_template())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    /// Copies every template of `other` over this one.
    pub fn merge(&mut self, other: Self) {
        self.templates.extend(other.templates);
    }
}

// ============================================================================
// MESSAGE CATALOG
// ============================================================================

/// All known languages.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locales: HashMap<String, LocaleMessages>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MessageCatalog {
    /// A catalog with no languages. Every lookup yields [`DEFAULT_MESSAGE`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            locales: HashMap::new(),
        }
    }

    /// The built-in `en` and `fr` dictionaries.
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty()
            .with_locale("en", LocaleMessages::from_static(lang::EN))
            .with_locale("fr", LocaleMessages::from_static(lang::FR))
    }

    /// The shared built-in catalog.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Adds `messages` under `lang`, merging into an existing dictionary.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, lang: impl Into<String>, messages: LocaleMessages) -> Self {
        self.insert_locale(lang, messages);
        self
    }

    /// Adds `messages` under `lang`, merging into an existing dictionary.
    pub fn insert_locale(&mut self, lang: impl Into<String>, messages: LocaleMessages) {
        let lang = normalize(&lang.into());
        tracing::debug!(locale = %lang, templates = messages.len(), "adding locale messages");
        self.locales.entry(lang).or_default().merge(messages);
    }

    /// Parses a JSON dictionary and adds it under `lang`.
    pub fn load_json(&mut self, lang: &str, json: &str) -> Result<()> {
        let messages: LocaleMessages =
            serde_json::from_str(json).map_err(|source| ConfigError::InvalidLocale {
                locale: lang.to_owned(),
                source,
            })?;
        self.insert_locale(lang, messages);
        Ok(())
    }

    pub fn has_locale(&self, lang: &str) -> bool {
        self.locales.contains_key(&normalize(lang))
    }

    /// Registered languages, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Templates for `lang`.
    ///
    /// Tries the exact tag, then its primary subtag (`fr-CA` -> `fr`), then
    /// [`FALLBACK_LOCALE`]. A catalog without any of those yields an empty set,
    /// so every message becomes [`DEFAULT_MESSAGE`].
    pub fn locale(&self, lang: &str) -> &LocaleMessages {
        let lang = normalize(lang);
        let primary = lang.split('-').next().unwrap_or_default();
        self.locales
            .get(&lang)
            .or_else(|| self.locales.get(primary))
            .or_else(|| self.locales.get(FALLBACK_LOCALE))
            .unwrap_or(&EMPTY)
    }
}

/// Lower-cases the tag and uses `-` as the subtag separator.
fn normalize(lang: &str) -> String {
    lang.trim().replace('_', "-").to_ascii_lowercase()
}

// ============================================================================
// TESTS
// ============================================================================
