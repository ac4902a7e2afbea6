//! Message catalog: the single source of truth for message templates.
//!
//! A catalog maps `(Locale, MessageKey)` to a template and holds the
//! default locale new translators start in. It is the only shared, mutable
//! state in the crate, so both the templates and the default locale sit
//! behind read/write locks held for exactly one lookup, insert or batch.
//!
//! Catalogs are ordinary values passed around as `Arc<MessageCatalog>`, so
//! tests can build isolated ones. A process-wide instance is available from
//! [`MessageCatalog::global`] and is what [`Validator::new`](crate::Validator::new)
//! uses.

use crate::error::{Error, Result};
use crate::i18n::strings::{ENGLISH_STRINGS, SPANISH_STRINGS};
use crate::i18n::{Locale, MessageKey, TranslationMetrics};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

type Templates = HashMap<Locale, HashMap<MessageKey, String>>;

/// Thread-safe store of message templates keyed by locale and key.
#[derive(Debug)]
pub struct MessageCatalog {
    templates: RwLock<Templates>,
    default_locale: RwLock<Locale>,
    baseline: Locale,
    metrics: TranslationMetrics,
}

/// Process-wide catalog (initialized lazily)
static GLOBAL: OnceLock<Arc<MessageCatalog>> = OnceLock::new();

impl MessageCatalog {
    /// Create a catalog loaded with the built-in English and Spanish
    /// templates. English is both the baseline and the default locale.
    pub fn new() -> Self {
        let catalog = Self::empty(Locale::EN);
        {
            let mut templates = catalog.write();
            load(&mut templates, Locale::EN, ENGLISH_STRINGS);
            load(&mut templates, Locale::ES, SPANISH_STRINGS);
        }
        catalog
    }

    /// Create a catalog with no templates.
    ///
    /// # Arguments
    /// * `baseline` - Locale consulted when a key is missing from the
    ///   requested locale; also the initial default locale.
    pub fn empty(baseline: Locale) -> Self {
        Self {
            templates: RwLock::new(HashMap::new()),
            default_locale: RwLock::new(baseline.clone()),
            baseline,
            metrics: TranslationMetrics::new(),
        }
    }

    /// Get the process-wide catalog.
    ///
    /// The catalog is created with the built-in templates on first call;
    /// later calls return handles to the same instance.
    pub fn global() -> Arc<MessageCatalog> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(MessageCatalog::new())))
    }

    /// The fallback locale.
    pub fn baseline(&self) -> &Locale {
        &self.baseline
    }

    /// Insert or overwrite one template.
    pub fn register(&self, locale: Locale, key: MessageKey, template: impl Into<String>) {
        debug!(locale = %locale, key = %key, "Registering message template");
        self.write()
            .entry(locale)
            .or_default()
            .insert(key, template.into());
    }

    /// Insert or overwrite many templates at once.
    ///
    /// All entries are applied under a single write lock, so no reader sees
    /// a partially applied batch.
    ///
    /// # Returns
    /// The number of entries applied.
    pub fn register_batch<I, S>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = (Locale, MessageKey, S)>,
        S: Into<String>,
    {
        // Materialize before locking so caller iterators never run under the lock
        let entries: Vec<(Locale, MessageKey, String)> = entries
            .into_iter()
            .map(|(locale, key, template)| (locale, key, template.into()))
            .collect();
        let count = entries.len();

        let mut templates = self.write();
        for (locale, key, template) in entries {
            templates.entry(locale).or_default().insert(key, template);
        }
        drop(templates);

        debug!(count, "Registered message template batch");
        count
    }

    /// Look up the template for a locale and key, without fallback.
    pub fn lookup(&self, locale: &Locale, key: &MessageKey) -> Option<String> {
        self.read()
            .get(locale)
            .and_then(|messages| messages.get(key))
            .cloned()
    }

    /// Check whether a template exists for a locale and key.
    pub fn contains(&self, locale: &Locale, key: &MessageKey) -> bool {
        self.read()
            .get(locale)
            .map(|messages| messages.contains_key(key))
            .unwrap_or(false)
    }

    /// Check whether any template is registered for a locale.
    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.read()
            .get(locale)
            .map(|messages| !messages.is_empty())
            .unwrap_or(false)
    }

    /// All locales with at least one template, sorted.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self
            .read()
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(locale, _)| locale.clone())
            .collect();
        locales.sort();
        locales
    }

    /// All keys registered for a locale, sorted.
    pub fn keys(&self, locale: &Locale) -> Vec<MessageKey> {
        let mut keys: Vec<MessageKey> = self
            .read()
            .get(locale)
            .map(|messages| messages.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    /// Snapshot of every template registered for a locale, sorted by key.
    pub fn templates(&self, locale: &Locale) -> Vec<(MessageKey, String)> {
        let mut entries: Vec<(MessageKey, String)> = self
            .read()
            .get(locale)
            .map(|messages| {
                messages
                    .iter()
                    .map(|(key, template)| (key.clone(), template.clone()))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Locale that new translators built from this catalog start in.
    pub fn default_locale(&self) -> Locale {
        self.default_locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Change the default locale.
    ///
    /// Existing translators keep their own locale; only translators created
    /// afterwards pick up the new default.
    pub fn set_default_locale(&self, locale: Locale) {
        info!(locale = %locale, "Setting default locale");
        *self
            .default_locale
            .write()
            .unwrap_or_else(PoisonError::into_inner) = locale;
    }

    /// Parse a locale code and require that this catalog has templates for it.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is valid and the locale has templates
    /// * `Err(Error::InvalidLocale)` if the code is malformed
    /// * `Err(Error::UnknownLocale)` if no templates are registered for it
    pub fn resolve_locale(&self, code: &str) -> Result<Locale> {
        let locale = Locale::parse(code)?;
        if self.has_locale(&locale) {
            Ok(locale)
        } else {
            Err(Error::UnknownLocale(locale.code().to_string()))
        }
    }

    /// Resolution counters for translations served from this catalog.
    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    // A panic while holding the lock cannot leave the maps half-updated in a
    // way readers care about, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Templates> {
        self.templates.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Templates> {
        self.templates.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn load(templates: &mut Templates, locale: Locale, table: &[(MessageKey, &str)]) {
    let messages = templates.entry(locale).or_default();
    for (key, template) in table {
        messages.insert(key.clone(), (*template).to_string());
    }
}
