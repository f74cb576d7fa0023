//! Locale catalogs and custom rules plugged into sessions.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use quickv_validator::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn json_locale_extends_catalog() {
    init_tracing();
    let mut catalog = MessageCatalog::builtin();
    catalog
        .load_json(
            "de",
            r#"{
                "default": "Dieses Feld ist ungültig",
                "required": "Das Feld :field ist erforderlich",
                "between": "Der Wert muss zwischen :arg0 und :arg1 liegen"
            }"#,
        )
        .unwrap();

    let mut validator = FieldValidator::builder("alter")
        .rules("required|between:18,99|email")
        .locale("de-AT")
        .fails_on_first(false)
        .catalog(Arc::new(catalog))
        .build()
        .unwrap();

    validator.validate(&FieldValue::from("")).unwrap();
    assert_eq!(
        validator.messages(),
        [
            "Das Feld alter ist erforderlich",
            "Der Wert muss zwischen 18 und 99 liegen",
            "Dieses Feld ist ungültig",
        ]
    );
}

#[test]
fn unknown_locale_falls_back_to_english() {
    let mut validator = FieldValidator::builder("name")
        .rules("required")
        .locale("pt-BR")
        .build()
        .unwrap();
    validator.validate(&FieldValue::Null).unwrap();
    assert_eq!(validator.messages(), ["The name field is required"]);
}

#[test]
fn invalid_locale_json_is_config_error() {
    let mut catalog = MessageCatalog::empty();
    let err = catalog.load_json("it", r#"{"required": 3}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLocale { .. }));
    assert!(!catalog.has_locale("it"));
}

#[test]
fn custom_rule_with_custom_template() {
    init_tracing();
    let registry = RuleRegistry::builtin().with("slug", |value: &FieldValue, _: &[String]| {
        Ok(value.as_text().is_some_and(|text| {
            !text.is_empty()
                && text
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        }))
    });
    let catalog = MessageCatalog::builtin().with_locale(
        "en",
        LocaleMessages::new().with("slug", "The :field field must be a URL slug"),
    );

    let mut validator = FieldValidator::builder("handle")
        .rules("required|slug")
        .registry(Arc::new(registry))
        .catalog(Arc::new(catalog))
        .build()
        .unwrap();

    assert!(validator.validate(&FieldValue::from("my-post-2")).unwrap());
    assert!(!validator.validate(&FieldValue::from("My Post")).unwrap());
    assert_eq!(validator.messages(), ["The handle field must be a URL slug"]);
}
