//! String checks.

use crate::i18n::{MessageKey, MessageParams};
use crate::Validator;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;
use url::Url;
use uuid::Uuid;

// Local part, one @, and a dotted domain; no whitespace anywhere
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern compiles")
    })
}

/// Chainable checks over one string value.
///
/// Lengths are counted in characters, not bytes.
pub struct StringCheck<'a> {
    validator: &'a mut Validator,
    field: &'a str,
    value: &'a str,
}

impl<'a> StringCheck<'a> {
    pub(crate) fn new(validator: &'a mut Validator, field: &'a str, value: &'a str) -> Self {
        Self {
            validator,
            field,
            value,
        }
    }

    pub fn field(&self) -> &str {
        self.field
    }

    pub fn value(&self) -> &str {
        self.value
    }

    /// Record a failure for this field. Used by custom checks.
    pub fn report(&mut self, key: MessageKey, params: MessageParams) -> &mut Self {
        self.validator.add_error(self.field, key, params);
        self
    }

    /// Run an ad-hoc check against this façade.
    pub fn custom<F>(&mut self, check: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        check(self);
        self
    }

    /// Fails when the string is empty.
    pub fn required(&mut self) -> &mut Self {
        if self.value.is_empty() {
            self.report(MessageKey::REQUIRED, MessageParams::new());
        }
        self
    }

    pub fn min_length(&mut self, min: usize) -> &mut Self {
        if self.char_count() < min {
            self.report(MessageKey::MIN_LENGTH, MessageParams::new().with("d", min));
        }
        self
    }

    pub fn max_length(&mut self, max: usize) -> &mut Self {
        if self.char_count() > max {
            self.report(MessageKey::MAX_LENGTH, MessageParams::new().with("d", max));
        }
        self
    }

    /// Fails unless the string has exactly `len` characters.
    pub fn length(&mut self, len: usize) -> &mut Self {
        if self.char_count() != len {
            self.report(MessageKey::LENGTH, MessageParams::new().with("d", len));
        }
        self
    }

    /// Fails unless the value looks like `local@domain.tld`.
    pub fn email(&mut self) -> &mut Self {
        if !email_regex().is_match(self.value) {
            self.report(MessageKey::EMAIL, MessageParams::new());
        }
        self
    }

    /// Fails unless the value is an absolute URL with a host.
    pub fn url(&mut self) -> &mut Self {
        let valid = Url::parse(self.value)
            .map(|url| url.has_host())
            .unwrap_or(false);
        if !valid {
            self.report(MessageKey::URL, MessageParams::new());
        }
        self
    }

    pub fn uuid(&mut self) -> &mut Self {
        if Uuid::parse_str(self.value).is_err() {
            self.report(MessageKey::UUID, MessageParams::new());
        }
        self
    }

    /// Fails unless the value matches `pattern`.
    ///
    /// A pattern that does not compile is reported exactly like a value
    /// that does not match.
    pub fn pattern(&mut self, pattern: &str) -> &mut Self {
        match Regex::new(pattern) {
            Ok(regex) => self.matches(&regex),
            Err(err) => {
                warn!(
                    field = self.field,
                    pattern,
                    error = %err,
                    "Invalid pattern, recording as a failed match"
                );
                self.report(MessageKey::PATTERN, MessageParams::new())
            }
        }
    }

    /// Fails unless the value matches a precompiled regex.
    pub fn matches(&mut self, regex: &Regex) -> &mut Self {
        if !regex.is_match(self.value) {
            self.report(MessageKey::PATTERN, MessageParams::new());
        }
        self
    }

    /// Fails unless the value equals one of `options`.
    pub fn one_of<S: AsRef<str>>(&mut self, options: &[S]) -> &mut Self {
        if !options.iter().any(|option| option.as_ref() == self.value) {
            let allowed = options
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(", ");
            self.report(MessageKey::ONE_OF, MessageParams::new().with("v", allowed));
        }
        self
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}
