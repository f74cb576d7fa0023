//! # quickv-validator
//!
//! Declarative per-field validation: a field gets a pipe-delimited rule expression,
//! optional custom messages and a locale, and every validation call yields a
//! pass/fail result plus an ordered map of failure messages.
//!
//! ## Quick Start
//!
//! ```
//! use quickv_validator::prelude::*;
//!
//! let mut email = FieldValidator::builder("email")
//!     .rules("required|minlength:5|email")
//!     .messages("Please tell us your email | {1,2}That does not look like an email")
//!     .fails_on_first(false)
//!     .build()?;
//!
//! assert!(!email.validate(&FieldValue::from("ab"))?);
//! assert_eq!(email.messages(), ["That does not look like an email"; 2]);
//!
//! assert!(email.validate(&FieldValue::from("me@example.com"))?);
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Layout
//!
//! - [`parser`]: rule expressions into [`RuleInvocation`](parser::RuleInvocation)s
//! - [`rules`]: the predicate library and the open [`RuleRegistry`](rules::RuleRegistry)
//! - [`messages`]: locale catalogs, custom overrides and `:field` / `:argN` substitution
//! - [`session`]: the [`FieldValidator`](session::FieldValidator) state machine and its hooks
//! - [`config`]: [`FieldConfig`](config::FieldConfig), serde-friendly per-field settings
//!
//! Failed rules are data. [`ConfigError`] is only returned for mistakes in the
//! rule expression, the custom messages or a locale dictionary.

pub mod config;
pub mod error;
pub mod messages;
pub mod parser;
pub mod prelude;
pub mod rules;
pub mod session;
pub mod value;

pub use error::{ConfigError, Result};
