//! Message keys and parameters.
//!
//! A [`MessageKey`] names a kind of failure independently of any rendered
//! text. [`MessageParams`] carries the values substituted into the
//! template the key resolves to.

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Symbolic identifier for a kind of validation failure.
///
/// The baseline set is exposed as associated constants; applications add
/// their own keys with [`MessageKey::new`] and register templates for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MessageKey(Cow<'static, str>);

macro_rules! message_keys {
    ($($(#[$doc:meta])* $name:ident => $key:literal,)+) => {
        impl MessageKey {
            $(
                $(#[$doc])*
                pub const $name: MessageKey = MessageKey(Cow::Borrowed($key));
            )+

            /// Every baseline key, in declaration order.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$name),+];
        }
    };
}

message_keys! {
    /// Value is empty or zero.
    REQUIRED => "required",
    /// String shorter than `d` characters.
    MIN_LENGTH => "min_length",
    /// String longer than `d` characters.
    MAX_LENGTH => "max_length",
    /// String not exactly `d` characters.
    LENGTH => "length",
    EMAIL => "email",
    URL => "url",
    UUID => "uuid",
    /// No match for a caller-supplied pattern (or the pattern is invalid).
    PATTERN => "pattern",
    /// Value not among the allowed options `v`.
    ONE_OF => "one_of",
    MIN_VALUE => "min_value",
    MAX_VALUE => "max_value",
    /// Outside the inclusive range `v1..=v2`.
    BETWEEN => "between",
    POSITIVE => "positive",
    NEGATIVE => "negative",
    MULTIPLE_OF => "multiple_of",
    POWER_OF_TWO => "power_of_two",
    MAX_BITS => "max_bits",
    PORT => "port",
    /// More than `d` decimal places.
    PRECISION => "precision",
    FINITE => "finite",
    PAST => "past",
    FUTURE => "future",
    AFTER => "after",
    BEFORE => "before",
    BETWEEN_DATES => "between_dates",
    WEEKDAY => "weekday",
    MIN_AGE => "min_age",
    MAX_AGE => "max_age",
    SLICE_REQUIRED => "slice_required",
    SLICE_MIN_LENGTH => "slice_min_length",
    SLICE_MAX_LENGTH => "slice_max_length",
    SLICE_LENGTH => "slice_length",
    /// Element at index `d` below `v`.
    SLICE_MIN => "slice_min",
    /// Element at index `d` above `v`.
    SLICE_MAX => "slice_max",
    /// Element at index `d` outside `v1..=v2`.
    SLICE_BETWEEN => "slice_between",
    /// Duplicate element at index `d`.
    UNIQUE => "unique",
}

impl MessageKey {
    /// Create a key, typically for an application-defined failure kind.
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        MessageKey(key.into())
    }

    /// The key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MessageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for MessageKey {
    fn from(key: &'static str) -> Self {
        MessageKey::new(key)
    }
}

/// Named values substituted into a message template.
///
/// Values are rendered with [`Display`](fmt::Display) when inserted, so the
/// map only ever holds strings. Iteration order is by name and has no
/// bearing on substitution order, which follows the template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageParams(BTreeMap<String, String>);

impl MessageParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.0.insert(name.into(), value.to_string());
    }

    /// Rendered value of a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for MessageParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = MessageParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
