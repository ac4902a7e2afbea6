//! Internationalization (i18n) module for validation messages.
//!
//! Turns a failure (a symbolic [`MessageKey`] plus [`MessageParams`]) into
//! display text in a selectable locale.
//!
//! # Architecture
//!
//! - `locale`: Validated locale identifiers (`en` baseline, `es` built in)
//! - `message`: Message keys and parameters
//! - `strings`: Built-in English and Spanish templates
//! - `catalog`: Thread-safe template store with the default locale
//! - `template`: Placeholder parsing and positional substitution
//! - `translator`: Resolution with baseline fallback
//! - `metrics`: Hit / fallback / miss counters per catalog
//! - `audit`: Coverage checks of a locale against the baseline
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::i18n::{Locale, MessageCatalog, MessageKey, MessageParams, Translator};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(MessageCatalog::new());
//! let translator = Translator::new(catalog).with_locale(Locale::ES);
//!
//! let params = MessageParams::new().with("v1", 1).with("v2", 10);
//! assert_eq!(
//!     translator.translate_current(&MessageKey::BETWEEN, &params),
//!     "debe estar entre 1 y 10"
//! );
//! ```

mod audit;
mod catalog;
mod locale;
mod message;
mod metrics;
mod strings;
pub mod template;
mod translator;

pub use audit::{AuditReport, CatalogAudit};
pub use catalog::MessageCatalog;
pub use locale::Locale;
pub use message::{MessageKey, MessageParams};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use translator::Translator;
