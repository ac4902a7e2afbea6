//! Field-level validation with localized messages.
//!
//! A [`Validator`] collects [`ValidationError`]s for one input. Typed
//! façades ([`Validator::string`], [`Validator::int`], [`Validator::time`]
//! and friends) chain checks against a single field; [`rules`] records the
//! same checks as reusable sets. Each failure is rendered into text by the
//! validator's [`Translator`] from a [`MessageCatalog`] at the moment it is
//! recorded.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{rules, Locale, Validator};
//!
//! let password = rules::string_rules().required().min_length(8).build();
//!
//! let mut v = Validator::with_locale(Locale::ES);
//! v.string("email", "not-an-email").required().email();
//! password.apply(&mut v, "password", "hunter2");
//!
//! assert_eq!(
//!     v.errors().to_string(),
//!     "email: formato de correo electrónico inválido; password: la longitud mínima es 8"
//! );
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod i18n;
pub mod rules;
mod validator;

pub use error::{Error, Result};
pub use i18n::{Locale, MessageCatalog, MessageKey, MessageParams, Translator};
pub use rules::{
    float_rules, number_rules, slice_rules, string_rules, time_rules, RuleBuilder, RuleSet,
};
pub use validator::{ValidationError, ValidationErrors, Validator};
