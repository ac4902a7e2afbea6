//! Locale type: a language/region identifier selecting a message set.
//!
//! Locales are plain identifiers; whether a catalog actually has templates
//! for one is decided by [`MessageCatalog`](crate::i18n::MessageCatalog).

use crate::error::{Error, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A language or language-region identifier (e.g. `"en"`, `"pt-BR"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// English. Baseline locale of the built-in catalog.
    pub const EN: Locale = Locale(Cow::Borrowed("en"));

    /// Spanish. Built-in alternate locale.
    pub const ES: Locale = Locale(Cow::Borrowed("es"));

    /// Create a locale from a code without validating it.
    ///
    /// Use this for codes that are already known to be well-formed, such as
    /// locales registered by the application itself.
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Locale(code.into())
    }

    /// Parse and normalize a locale code.
    ///
    /// Accepts `-` or `_` as the subtag separator and normalizes case:
    /// language lowercase, script titlecase, region uppercase. So `"pt_br"`
    /// becomes `"pt-BR"` and `"zh-hant-tw"` becomes `"zh-Hant-TW"`.
    ///
    /// # Returns
    /// * `Ok(Locale)` with the normalized code
    /// * `Err(Error::InvalidLocale)` if the code is empty or malformed
    pub fn parse(code: &str) -> Result<Locale> {
        let trimmed = code.trim();
        let mut subtags = trimmed.split(['-', '_']);

        let language = match subtags.next() {
            Some(lang)
                if (2..=3).contains(&lang.len())
                    && lang.chars().all(|c| c.is_ascii_alphabetic()) =>
            {
                lang.to_ascii_lowercase()
            }
            _ => return Err(Error::InvalidLocale(code.to_string())),
        };

        let mut normalized = language;
        for subtag in subtags {
            let part = normalize_subtag(subtag)
                .ok_or_else(|| Error::InvalidLocale(code.to_string()))?;
            normalized.push('-');
            normalized.push_str(&part);
        }

        Ok(Locale(Cow::Owned(normalized)))
    }

    /// The baseline locale used for fallback by the built-in catalog.
    pub fn baseline() -> Locale {
        Self::EN
    }

    /// The full locale code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// The language subtag (`"pt"` for `"pt-BR"`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

fn normalize_subtag(subtag: &str) -> Option<String> {
    let len = subtag.len();
    if len == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
        // Region
        return Some(subtag.to_ascii_uppercase());
    }
    if len == 3 && subtag.chars().all(|c| c.is_ascii_digit()) {
        // Numeric region (e.g. "419")
        return Some(subtag.to_string());
    }
    if len == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
        // Script
        let mut chars = subtag.chars();
        let first = chars.next()?.to_ascii_uppercase();
        let rest: String = chars.map(|c| c.to_ascii_lowercase()).collect();
        return Some(format!("{}{}", first, rest));
    }
    if (5..=8).contains(&len) && subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
        // Variant
        return Some(subtag.to_ascii_lowercase());
    }
    None
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl From<&'static str> for Locale {
    fn from(code: &'static str) -> Self {
        Locale::new(code)
    }
}
