//! Prelude module for convenient imports.
//!
//! `use quickv_validator::prelude::*;` brings in what a form integration needs:
//! the session and its builder, values, configuration and the error type.
//!
//! # Examples
//!
//! ```
//! use quickv_validator::prelude::*;
//!
//! let mut age = FieldValidator::new("age", "required|integer|between:18,99")?;
//! assert!(age.validate(&FieldValue::from(42))?);
//! # Ok::<(), ConfigError>(())
//! ```

// ============================================================================
// SESSION
// ============================================================================

pub use crate::session::{
    FieldValidator, FieldValidatorBuilder, NoopHooks, SessionHooks, SessionState,
    ValidationOutcome,
};

// ============================================================================
// VALUES AND CONFIGURATION
// ============================================================================

pub use crate::config::{FieldConfig, HookPolicy};
pub use crate::error::ConfigError;
pub use crate::value::{FieldValue, FileInfo};

// ============================================================================
// EXTENSION POINTS
// ============================================================================

pub use crate::messages::{LocaleMessages, MessageCatalog};
pub use crate::rules::RuleRegistry;
