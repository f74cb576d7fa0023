//! Failure messages
//!
//! - [`catalog`]: per-language rule templates (`en` and `fr` built in, more via JSON)
//! - [`custom`]: per-field overrides, including compensation entries shared by several rules
//! - [`resolver`]: picks the override or the template and fills in `:field` / `:argN`

pub mod catalog;
pub mod custom;
mod lang;
pub mod resolver;

pub use catalog::{DEFAULT_MESSAGE, FALLBACK_LOCALE, LocaleMessages, MessageCatalog};
pub use custom::{CustomEntry, CustomMessages};
pub use resolver::{MessageResolver, interpolate};
