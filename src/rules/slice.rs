use crate::check::{Number, SliceCheck};
use crate::rules::{CustomRule, RuleBuilder, RuleSet};
use crate::Validator;
use std::fmt;
use std::sync::Arc;

/// Closure type behind [`SliceRule::Custom`].
pub type SliceRuleFn<T> = dyn for<'c> Fn(&mut SliceCheck<'c, T>) + Send + Sync;

/// Per-element callback behind [`SliceRule::Each`].
pub type SliceEachFn<T> = dyn Fn(&mut Validator, usize, &T) + Send + Sync;

/// One recorded slice check.
///
/// Checks that need more from the element type than the rule itself
/// (`unique`, element bounds) are recorded as `Custom` rules by the builder.
pub enum SliceRule<T> {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Length(usize),
    Each(CustomRule<SliceEachFn<T>>),
    Custom(CustomRule<SliceRuleFn<T>>),
}

impl<T> SliceRule<T> {
    /// Run this rule against a façade.
    pub fn apply_to(&self, check: &mut SliceCheck<'_, T>) {
        match self {
            SliceRule::Required => check.required(),
            SliceRule::MinLength(min) => check.min_length(*min),
            SliceRule::MaxLength(max) => check.max_length(*max),
            SliceRule::Length(len) => check.length(*len),
            SliceRule::Each(rule) => check.each(|validator, index, item| {
                (rule.get())(validator, index, item)
            }),
            SliceRule::Custom(rule) => check.custom(|check| (rule.get())(check)),
        };
    }
}

// Manual impls: the element type itself need not be Clone or Debug.
impl<T> Clone for SliceRule<T> {
    fn clone(&self) -> Self {
        match self {
            SliceRule::Required => SliceRule::Required,
            SliceRule::MinLength(min) => SliceRule::MinLength(*min),
            SliceRule::MaxLength(max) => SliceRule::MaxLength(*max),
            SliceRule::Length(len) => SliceRule::Length(*len),
            SliceRule::Each(rule) => SliceRule::Each(rule.clone()),
            SliceRule::Custom(rule) => SliceRule::Custom(rule.clone()),
        }
    }
}

impl<T> fmt::Debug for SliceRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceRule::Required => f.write_str("Required"),
            SliceRule::MinLength(min) => f.debug_tuple("MinLength").field(min).finish(),
            SliceRule::MaxLength(max) => f.debug_tuple("MaxLength").field(max).finish(),
            SliceRule::Length(len) => f.debug_tuple("Length").field(len).finish(),
            SliceRule::Each(rule) => f.debug_tuple("Each").field(rule).finish(),
            SliceRule::Custom(rule) => f.debug_tuple("Custom").field(rule).finish(),
        }
    }
}

impl<T: 'static> RuleBuilder<SliceRule<T>> {
    pub fn required(self) -> Self {
        self.rule(SliceRule::Required)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.rule(SliceRule::MinLength(min))
    }

    pub fn max_length(self, max: usize) -> Self {
        self.rule(SliceRule::MaxLength(max))
    }

    pub fn length(self, len: usize) -> Self {
        self.rule(SliceRule::Length(len))
    }

    /// Record a callback run on every element with its index.
    pub fn each<F>(self, check: F) -> Self
    where
        F: Fn(&mut Validator, usize, &T) + Send + Sync + 'static,
    {
        let check: Arc<SliceEachFn<T>> = Arc::new(check);
        self.rule(SliceRule::Each(CustomRule(check)))
    }

    /// Record an ad-hoc check.
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&mut SliceCheck<'_, T>) + Send + Sync + 'static,
    {
        let check: Arc<SliceRuleFn<T>> = Arc::new(check);
        self.rule(SliceRule::Custom(CustomRule(check)))
    }
}

impl<T: PartialEq + 'static> RuleBuilder<SliceRule<T>> {
    pub fn unique(self) -> Self {
        self.custom(|check| {
            check.unique();
        })
    }
}

impl<T: Number> RuleBuilder<SliceRule<T>> {
    pub fn min(self, min: T) -> Self {
        self.custom(move |check| {
            check.min(min);
        })
    }

    pub fn max(self, max: T) -> Self {
        self.custom(move |check| {
            check.max(max);
        })
    }

    pub fn between(self, min: T, max: T) -> Self {
        self.custom(move |check| {
            check.between(min, max);
        })
    }
}

impl<T> RuleSet<SliceRule<T>> {
    /// Run every rule, in order, against one slice.
    pub fn apply(&self, validator: &mut Validator, field: &str, value: &[T]) {
        let mut check = validator.slice(field, value);
        for rule in self.iter() {
            rule.apply_to(&mut check);
        }
    }
}
