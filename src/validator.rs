//! Validator: the error sink every check reports into.
//!
//! A `Validator` lives for one validation session (one record or request).
//! Façades created from it borrow it mutably for the duration of a check
//! chain and call [`Validator::add_error`] on each failure. Errors are
//! rendered through the validator's [`Translator`] at the moment they are
//! recorded and are never edited or removed afterwards.

use crate::check::{Number, NumberCheck, SliceCheck, StringCheck, TimeCheck};
use crate::config::ValidatorConfig;
use crate::i18n::{Locale, MessageKey, MessageParams, Translator};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// A single recorded validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    field: String,
    message_key: MessageKey,
    message: String,
    params: MessageParams,
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Kind of failure.
    pub fn message_key(&self) -> &MessageKey {
        &self.message_key
    }

    /// Rendered, localized message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parameters the message was rendered with.
    pub fn params(&self) -> &MessageParams {
        &self.params
    }
}

/// Ordered collection of validation failures.
///
/// Order is the order in which checks ran. Entries are never deduplicated
/// or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ValidationError> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }

    /// Errors recorded for one field, in order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.0.iter().filter(move |error| error.field == field)
    }

    /// Distinct field names in order of first failure.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.0 {
            if !fields.contains(&error.field.as_str()) {
                fields.push(&error.field);
            }
        }
        fields
    }

    /// Messages grouped by field name.
    pub fn by_field(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in &self.0 {
            grouped
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        grouped
    }

    fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }
}

impl fmt::Display for ValidationErrors {
    /// `"field: message; other: message"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Error sink for one validation session.
///
/// There is deliberately no way to clear recorded errors: build a new
/// validator to validate a new input.
#[derive(Debug)]
pub struct Validator {
    errors: ValidationErrors,
    translator: Translator,
}

impl Validator {
    /// Create a validator over the process-wide catalog, in its default
    /// locale.
    pub fn new() -> Self {
        Self::with_translator(Translator::default())
    }

    /// Create a validator rendering messages with `translator`.
    pub fn with_translator(translator: Translator) -> Self {
        Self {
            errors: ValidationErrors::default(),
            translator,
        }
    }

    /// Create a validator over the process-wide catalog in `locale`.
    pub fn with_locale(locale: Locale) -> Self {
        Self::with_translator(Translator::default().with_locale(locale))
    }

    /// Create a validator from construction options.
    pub fn from_config(config: ValidatorConfig) -> Self {
        Self::with_translator(config.translator())
    }

    /// Change the locale used for errors recorded from now on.
    pub fn set_locale(&mut self, locale: Locale) {
        self.translator.set_locale(locale);
    }

    pub fn locale(&self) -> &Locale {
        self.translator.locale()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Record one failure.
    ///
    /// The message is rendered immediately in the translator's current
    /// locale. Exactly one error is appended; nothing else changes.
    pub fn add_error(&mut self, field: &str, key: MessageKey, params: MessageParams) {
        let message = self.translator.translate_current(&key, &params);
        debug!(field, key = %key, message = %message, "Validation check failed");

        self.errors.push(ValidationError {
            field: field.to_string(),
            message_key: key,
            message,
            params,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Errors recorded so far, in check order.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// End the session and take the recorded errors.
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// End the session: `Ok(())` if nothing failed, otherwise every error.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    // ==================== Façade Factories ====================

    /// Begin checks on a string field.
    pub fn string<'a>(&'a mut self, field: &'a str, value: &'a str) -> StringCheck<'a> {
        StringCheck::new(self, field, value)
    }

    /// Begin checks on a signed integer field.
    pub fn int<'a>(&'a mut self, field: &'a str, value: i64) -> NumberCheck<'a, i64> {
        NumberCheck::new(self, field, value)
    }

    /// Begin checks on an unsigned integer field.
    pub fn uint<'a>(&'a mut self, field: &'a str, value: u64) -> NumberCheck<'a, u64> {
        NumberCheck::new(self, field, value)
    }

    /// Begin checks on a 64-bit float field.
    pub fn float<'a>(&'a mut self, field: &'a str, value: f64) -> NumberCheck<'a, f64> {
        NumberCheck::new(self, field, value)
    }

    /// Begin checks on a 32-bit float field.
    pub fn float32<'a>(&'a mut self, field: &'a str, value: f32) -> NumberCheck<'a, f32> {
        NumberCheck::new(self, field, value)
    }

    /// Begin checks on a field of any supported numeric type.
    pub fn number<'a, T: Number>(&'a mut self, field: &'a str, value: T) -> NumberCheck<'a, T> {
        NumberCheck::new(self, field, value)
    }

    /// Begin checks on a slice field.
    pub fn slice<'a, T>(&'a mut self, field: &'a str, value: &'a [T]) -> SliceCheck<'a, T> {
        SliceCheck::new(self, field, value)
    }

    /// Begin checks on a timestamp field.
    pub fn time<'a>(&'a mut self, field: &'a str, value: DateTime<Utc>) -> TimeCheck<'a> {
        TimeCheck::new(self, field, value)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MessageCatalog;
    use std::sync::Arc;

    fn validator() -> Validator {
        Validator::with_translator(Translator::new(Arc::new(MessageCatalog::new())))
    }

    // ==================== add_error Tests ====================

    #[test]
    fn test_new_validator_has_no_errors() {
        let v = validator();
        assert!(!v.has_errors());
        assert_eq!(v.error_count(), 0);
        assert!(v.errors().is_empty());
    }

    #[test]
    fn test_add_error_appends_exactly_one() {
        let mut v = validator();
        v.add_error("age", MessageKey::MIN_VALUE, MessageParams::new().with("v", 18));

        assert!(v.has_errors());
        assert_eq!(v.error_count(), 1);

        let error = &v.errors().as_slice()[0];
        assert_eq!(error.field(), "age");
        assert_eq!(error.message_key(), &MessageKey::MIN_VALUE);
        assert_eq!(error.message(), "must be greater than or equal to 18");
        assert_eq!(error.params().get("v"), Some("18"));
    }

    #[test]
    fn test_add_error_renders_translate_result() {
        let mut v = validator();
        let params = MessageParams::new().with("d", 5);
        let expected = v
            .translator()
            .translate(&Locale::EN, &MessageKey::MIN_LENGTH, &params);

        v.add_error("name", MessageKey::MIN_LENGTH, params);
        assert_eq!(v.errors().as_slice()[0].message(), expected);
    }

    #[test]
    fn test_errors_keep_insertion_order_and_duplicates() {
        let mut v = validator();
        v.add_error("b", MessageKey::REQUIRED, MessageParams::new());
        v.add_error("a", MessageKey::REQUIRED, MessageParams::new());
        v.add_error("b", MessageKey::REQUIRED, MessageParams::new());

        let fields: Vec<&str> = v.errors().iter().map(ValidationError::field).collect();
        assert_eq!(fields, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_errors_idempotent() {
        let mut v = validator();
        v.add_error("x", MessageKey::REQUIRED, MessageParams::new());

        let first = v.errors().clone();
        let second = v.errors().clone();
        assert_eq!(first, second);
    }

    // ==================== Locale Tests ====================

    #[test]
    fn test_locale_read_at_record_time() {
        let mut v = validator();
        v.add_error("name", MessageKey::REQUIRED, MessageParams::new());
        v.set_locale(Locale::ES);
        v.add_error("name", MessageKey::REQUIRED, MessageParams::new());

        let messages: Vec<&str> = v.errors().iter().map(ValidationError::message).collect();
        assert_eq!(messages, vec!["field is required", "el campo es requerido"]);
        assert_eq!(v.locale(), &Locale::ES);
    }

    #[test]
    fn test_catalog_change_does_not_touch_recorded_errors() {
        let mut v = validator();
        v.add_error("name", MessageKey::REQUIRED, MessageParams::new());
        v.translator()
            .catalog()
            .register(Locale::EN, MessageKey::REQUIRED, "cannot be blank");
        v.add_error("name", MessageKey::REQUIRED, MessageParams::new());

        let messages: Vec<&str> = v.errors().iter().map(ValidationError::message).collect();
        assert_eq!(messages, vec!["field is required", "cannot be blank"]);
    }

    #[test]
    fn test_empty_template_never_yields_empty_message() {
        let catalog = Arc::new(MessageCatalog::new());
        catalog.register(Locale::ES, MessageKey::REQUIRED, "");

        let mut v = Validator::with_translator(Translator::new(catalog).with_locale(Locale::ES));
        v.string("name", "").required();

        let message = v.errors().as_slice()[0].message();
        assert!(!message.is_empty());
        assert_eq!(message, "field is required");
    }

    // ==================== Rendering Tests ====================

    #[test]
    fn test_display_joins_with_separator() {
        let mut v = validator();
        v.add_error("email", MessageKey::REQUIRED, MessageParams::new());
        v.add_error("email", MessageKey::EMAIL, MessageParams::new());

        assert_eq!(
            v.errors().to_string(),
            "email: field is required; email: invalid email format"
        );
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(ValidationErrors::default().to_string(), "");
    }

    #[test]
    fn test_fields_and_grouping() {
        let mut v = validator();
        v.add_error("email", MessageKey::REQUIRED, MessageParams::new());
        v.add_error("age", MessageKey::REQUIRED, MessageParams::new());
        v.add_error("email", MessageKey::EMAIL, MessageParams::new());

        let errors = v.errors();
        assert_eq!(errors.fields(), vec!["email", "age"]);
        assert_eq!(errors.for_field("email").count(), 2);
        assert_eq!(
            errors.by_field().get("email"),
            Some(&vec![
                "field is required".to_string(),
                "invalid email format".to_string()
            ])
        );
    }

    #[test]
    fn test_serializes_as_structured_list() {
        let mut v = validator();
        v.add_error("age", MessageKey::MIN_VALUE, MessageParams::new().with("v", 18));

        let json = serde_json::to_value(v.errors()).unwrap();
        assert_eq!(json[0]["field"], "age");
        assert_eq!(json[0]["message_key"], "min_value");
        assert_eq!(json[0]["message"], "must be greater than or equal to 18");
        assert_eq!(json[0]["params"]["v"], "18");
    }

    // ==================== Result Tests ====================

    #[test]
    fn test_into_result_ok() {
        assert!(validator().into_result().is_ok());
    }

    #[test]
    fn test_into_result_err() {
        let mut v = validator();
        v.add_error("x", MessageKey::REQUIRED, MessageParams::new());

        let errors = v.into_result().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.to_string(), "x: field is required");
    }
}
