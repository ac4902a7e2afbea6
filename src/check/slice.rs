//! Slice checks.

use crate::check::Number;
use crate::i18n::{MessageKey, MessageParams};
use crate::Validator;

/// Chainable checks over a slice value.
pub struct SliceCheck<'a, T> {
    validator: &'a mut Validator,
    field: &'a str,
    value: &'a [T],
}

impl<'a, T> SliceCheck<'a, T> {
    pub(crate) fn new(validator: &'a mut Validator, field: &'a str, value: &'a [T]) -> Self {
        Self {
            validator,
            field,
            value,
        }
    }

    pub fn field(&self) -> &str {
        self.field
    }

    pub fn value(&self) -> &[T] {
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

    /// Fails when the slice is empty.
    pub fn required(&mut self) -> &mut Self {
        if self.value.is_empty() {
            self.report(MessageKey::SLICE_REQUIRED, MessageParams::new());
        }
        self
    }

    pub fn min_length(&mut self, min: usize) -> &mut Self {
        if self.value.len() < min {
            self.report(MessageKey::SLICE_MIN_LENGTH, MessageParams::new().with("d", min));
        }
        self
    }

    pub fn max_length(&mut self, max: usize) -> &mut Self {
        if self.value.len() > max {
            self.report(MessageKey::SLICE_MAX_LENGTH, MessageParams::new().with("d", max));
        }
        self
    }

    /// Fails unless the slice has exactly `len` elements.
    pub fn length(&mut self, len: usize) -> &mut Self {
        if self.value.len() != len {
            self.report(MessageKey::SLICE_LENGTH, MessageParams::new().with("d", len));
        }
        self
    }

    /// Run `check` on every element with its index.
    ///
    /// The callback gets the validator itself, so it can open nested
    /// façades (e.g. `v.string(...)`) for each element.
    pub fn each<F>(&mut self, mut check: F) -> &mut Self
    where
        F: FnMut(&mut Validator, usize, &T),
    {
        for (index, item) in self.value.iter().enumerate() {
            check(&mut *self.validator, index, item);
        }
        self
    }
}

impl<'a, T: PartialEq> SliceCheck<'a, T> {
    /// Fails when any element repeats an earlier one.
    ///
    /// Only the first repeat is reported, with its index.
    pub fn unique(&mut self) -> &mut Self {
        let duplicate = self
            .value
            .iter()
            .enumerate()
            .find(|(index, item)| self.value[..*index].contains(*item))
            .map(|(index, _)| index);

        if let Some(index) = duplicate {
            self.report(MessageKey::UNIQUE, MessageParams::new().with("d", index));
        }
        self
    }
}

impl<'a, T: Number> SliceCheck<'a, T> {
    /// Fails once for every element below `min`.
    pub fn min(&mut self, min: T) -> &mut Self {
        for index in self.positions(|item| item < min) {
            self.report(
                MessageKey::SLICE_MIN,
                MessageParams::new().with("d", index).with("v", min),
            );
        }
        self
    }

    /// Fails once for every element above `max`.
    pub fn max(&mut self, max: T) -> &mut Self {
        for index in self.positions(|item| item > max) {
            self.report(
                MessageKey::SLICE_MAX,
                MessageParams::new().with("d", index).with("v", max),
            );
        }
        self
    }

    /// Fails once for every element outside `min..=max`.
    pub fn between(&mut self, min: T, max: T) -> &mut Self {
        for index in self.positions(|item| item < min || item > max) {
            self.report(
                MessageKey::SLICE_BETWEEN,
                MessageParams::new()
                    .with("d", index)
                    .with("v1", min)
                    .with("v2", max),
            );
        }
        self
    }

    fn positions(&self, failing: impl Fn(T) -> bool) -> Vec<usize> {
        self.value
            .iter()
            .enumerate()
            .filter(|(_, item)| failing(**item))
            .map(|(index, _)| index)
            .collect()
    }
}
