//! Failure message resolution

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::catalog::LocaleMessages;
use super::custom::CustomMessages;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":(?:(field)|arg(\d+))").expect("placeholder pattern is valid")
});

/// Turns a failed rule into display text.
///
/// A custom message claiming the rule's slot is returned verbatim. Otherwise the
/// locale template is looked up and `:field` / `:argN` are substituted.
#[derive(Debug, Clone, Copy)]
pub struct MessageResolver<'a> {
    templates: &'a LocaleMessages,
    custom: Option<&'a CustomMessages>,
}

impl<'a> MessageResolver<'a> {
    pub fn new(templates: &'a LocaleMessages) -> Self {
        Self {
            templates,
            custom: None,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_custom(mut self, custom: &'a CustomMessages) -> Self {
        self.custom = Some(custom);
        self
    }

    /// Message for `rule` failing at position `slot` of the rule list.
    pub fn resolve(&self, rule: &str, args: &[String], field: &str, slot: usize) -> String {
        if let Some(text) = self.custom.and_then(|custom| custom.get(slot)) {
            return text.to_owned();
        }
        interpolate(self.templates.template(rule), field, args).into_owned()
    }
}

/// Substitutes `:field` and `:argN` in `template`.
///
/// Placeholders pointing past the end of `args` are left untouched.
pub fn interpolate<'t>(template: &'t str, field: &str, args: &[String]) -> Cow<'t, str> {
    PLACEHOLDER_REGEX.replace_all(template, |caps: &Captures<'_>| {
        if caps.get(1).is_some() {
            return field.to_owned();
        }
        caps[2]
            .parse::<usize>()
            .ok()
            .and_then(|index| args.get(index))
            .cloned()
            .unwrap_or_else(|| caps[0].to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageCatalog;
    use crate::rules::args;

    #[test]
    fn test_interpolate() {
        let text = interpolate(
            "The value of :field must be between ':arg0' and ':arg1'",
            "age",
            &args(&["18", "65"]),
        );
        assert_eq!(text, "The value of age must be between '18' and '65'");
    }

    #[test]
    fn test_interpolate_out_of_range_kept() {
        assert_eq!(interpolate("needs :arg3", "x", &args(&["a"])), "needs :arg3");
    }

    #[test]
    fn test_interpolate_without_placeholders_borrows() {
        assert!(matches!(interpolate("plain", "x", &[]), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_resolve_from_catalog() {
        let catalog = MessageCatalog::builtin();
        let resolver = MessageResolver::new(catalog.locale("en"));
        assert_eq!(
            resolver.resolve("min", &args(&["3"]), "name", 0),
            "The name field must be greater than or equal to '3'"
        );
        assert_eq!(resolver.resolve("mystery", &[], "name", 0), "This field is invalid");
    }

    #[test]
    fn test_custom_message_is_verbatim() {
        let catalog = MessageCatalog::builtin();
        let custom = CustomMessages::parse("Pick :field | ").unwrap();
        let resolver = MessageResolver::new(catalog.locale("en")).with_custom(&custom);
        assert_eq!(resolver.resolve("required", &[], "name", 0), "Pick :field");
        assert_eq!(
            resolver.resolve("required", &[], "name", 1),
            "The name field is required"
        );
    }
}
