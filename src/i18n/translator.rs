//! Translator: resolves message keys to display text.
//!
//! A translator pairs a catalog handle with a current locale. Resolution
//! never fails: a key missing from the requested locale falls back to the
//! catalog's baseline locale, and a key missing there too is rendered as the
//! key itself.

use crate::i18n::{template, Locale, MessageCatalog, MessageKey, MessageParams};
use std::sync::Arc;
use tracing::{trace, warn};

/// Stateful wrapper around a [`MessageCatalog`] holding a current locale.
///
/// The locale is local to this translator; changing it does not affect other
/// translators or the catalog's default.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Arc<MessageCatalog>,
    locale: Locale,
}

impl Translator {
    /// Create a translator starting in the catalog's default locale.
    pub fn new(catalog: Arc<MessageCatalog>) -> Self {
        let locale = catalog.default_locale();
        Self { catalog, locale }
    }

    /// Set the starting locale, builder style.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The current locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Change the current locale. Affects subsequent translations only.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// The catalog this translator reads from.
    pub fn catalog(&self) -> &Arc<MessageCatalog> {
        &self.catalog
    }

    /// Resolve a key in an explicit locale.
    ///
    /// # Algorithm
    /// 1. Template for `(locale, key)`, else `(baseline, key)`. Empty
    ///    templates are skipped.
    /// 2. Neither found: the key string.
    /// 3. Empty `params`: the template verbatim.
    /// 4. Otherwise placeholders are filled in order of appearance;
    ///    unresolved ones are left as-is.
    pub fn translate(&self, locale: &Locale, key: &MessageKey, params: &MessageParams) -> String {
        let metrics = self.catalog.metrics();

        // An empty template counts as missing
        let lookup = |locale: &Locale| {
            self.catalog
                .lookup(locale, key)
                .filter(|template| !template.is_empty())
        };

        let template = match lookup(locale) {
            Some(template) => {
                metrics.record_hit();
                template
            }
            None => {
                let baseline = self.catalog.baseline();
                match lookup(baseline) {
                    Some(template) => {
                        trace!(
                            locale = %locale,
                            baseline = %baseline,
                            key = %key,
                            "Falling back to baseline template"
                        );
                        metrics.record_fallback();
                        template
                    }
                    None => {
                        warn!(locale = %locale, key = %key, "No template for message key");
                        metrics.record_miss();
                        return key.to_string();
                    }
                }
            }
        };

        if params.is_empty() {
            return template;
        }

        template::render(&template, params)
    }

    /// Resolve a key in the current locale.
    pub fn translate_current(&self, key: &MessageKey, params: &MessageParams) -> String {
        self.translate(&self.locale, key, params)
    }
}

impl Default for Translator {
    /// Translator over the process-wide catalog, in its default locale.
    fn default() -> Self {
        Self::new(MessageCatalog::global())
    }
}
