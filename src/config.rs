//! Validator construction options and process-wide defaults.
//!
//! `ValidatorConfig` collects options for [`Validator::from_config`]. The
//! free functions act on the process-wide catalog returned by
//! [`MessageCatalog::global`]: its default locale (picked up by validators
//! created afterwards) and its templates.

use crate::i18n::{Locale, MessageCatalog, MessageKey, Translator};
use std::sync::Arc;

#[cfg(doc)]
use crate::Validator;

/// Construction options for a [`Validator`].
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Locale for rendered messages; the catalog's default when unset
    pub locale: Option<Locale>,

    /// Catalog to render from; the process-wide catalog when unset
    pub catalog: Option<Arc<MessageCatalog>>,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_catalog(mut self, catalog: Arc<MessageCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the translator these options describe.
    pub fn translator(self) -> Translator {
        let catalog = self.catalog.unwrap_or_else(MessageCatalog::global);
        let translator = Translator::new(catalog);
        match self.locale {
            Some(locale) => translator.with_locale(locale),
            None => translator,
        }
    }
}

/// Default locale of the process-wide catalog.
pub fn default_locale() -> Locale {
    MessageCatalog::global().default_locale()
}

/// Change the default locale of the process-wide catalog.
///
/// Only validators created afterwards are affected.
pub fn set_default_locale(locale: Locale) {
    MessageCatalog::global().set_default_locale(locale);
}

/// Register one template in the process-wide catalog.
pub fn register_translation(locale: Locale, key: MessageKey, template: impl Into<String>) {
    MessageCatalog::global().register(locale, key, template);
}

/// Register many templates in the process-wide catalog as one batch.
///
/// # Returns
/// The number of entries applied.
pub fn register_translations<I, S>(entries: I) -> usize
where
    I: IntoIterator<Item = (Locale, MessageKey, S)>,
    S: Into<String>,
{
    MessageCatalog::global().register_batch(entries)
}
