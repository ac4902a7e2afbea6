use crate::check::{Float, NumberCheck};
use crate::rules::{CustomRule, RuleBuilder, RuleSet};
use crate::Validator;
use std::sync::Arc;

/// Closure type behind [`FloatRule::Custom`].
pub type FloatRuleFn<T> = dyn for<'c> Fn(&mut NumberCheck<'c, T>) + Send + Sync;

/// One recorded float check.
#[derive(Debug, Clone)]
pub enum FloatRule<T> {
    Required,
    Min(T),
    Max(T),
    Between(T, T),
    Precision(u32),
    Finite,
    Custom(CustomRule<FloatRuleFn<T>>),
}

impl<T: Float> FloatRule<T> {
    /// Run this rule against a façade.
    pub fn apply_to(&self, check: &mut NumberCheck<'_, T>) {
        match self {
            FloatRule::Required => check.required(),
            FloatRule::Min(min) => check.min(*min),
            FloatRule::Max(max) => check.max(*max),
            FloatRule::Between(min, max) => check.between(*min, *max),
            FloatRule::Precision(decimals) => check.precision(*decimals),
            FloatRule::Finite => check.finite(),
            FloatRule::Custom(rule) => check.custom(|check| (rule.get())(check)),
        };
    }
}

impl<T: Float> RuleBuilder<FloatRule<T>> {
    pub fn required(self) -> Self {
        self.rule(FloatRule::Required)
    }

    pub fn min(self, min: T) -> Self {
        self.rule(FloatRule::Min(min))
    }

    pub fn max(self, max: T) -> Self {
        self.rule(FloatRule::Max(max))
    }

    pub fn between(self, min: T, max: T) -> Self {
        self.rule(FloatRule::Between(min, max))
    }

    pub fn precision(self, decimals: u32) -> Self {
        self.rule(FloatRule::Precision(decimals))
    }

    pub fn finite(self) -> Self {
        self.rule(FloatRule::Finite)
    }

    /// Record an ad-hoc check.
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&mut NumberCheck<'_, T>) + Send + Sync + 'static,
    {
        let check: Arc<FloatRuleFn<T>> = Arc::new(check);
        self.rule(FloatRule::Custom(CustomRule(check)))
    }
}

impl<T: Float> RuleSet<FloatRule<T>> {
    /// Run every rule, in order, against one float value.
    pub fn apply(&self, validator: &mut Validator, field: &str, value: T) {
        let mut check = validator.number(field, value);
        for rule in self.iter() {
            rule.apply_to(&mut check);
        }
    }
}
