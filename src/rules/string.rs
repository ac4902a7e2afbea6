use crate::check::StringCheck;
use crate::rules::{CustomRule, RuleBuilder, RuleSet};
use crate::Validator;
use regex::Regex;
use std::sync::Arc;

/// Closure type behind [`StringRule::Custom`].
pub type StringRuleFn = dyn for<'c> Fn(&mut StringCheck<'c>) + Send + Sync;

/// One recorded string check.
#[derive(Debug, Clone)]
pub enum StringRule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Length(usize),
    Email,
    Url,
    Uuid,
    /// Precompiled pattern.
    Matches(Regex),
    /// Pattern compiled on every application.
    Pattern(String),
    OneOf(Vec<String>),
    Custom(CustomRule<StringRuleFn>),
}

impl StringRule {
    /// Run this rule against a façade.
    pub fn apply_to(&self, check: &mut StringCheck<'_>) {
        match self {
            StringRule::Required => check.required(),
            StringRule::MinLength(min) => check.min_length(*min),
            StringRule::MaxLength(max) => check.max_length(*max),
            StringRule::Length(len) => check.length(*len),
            StringRule::Email => check.email(),
            StringRule::Url => check.url(),
            StringRule::Uuid => check.uuid(),
            StringRule::Matches(regex) => check.matches(regex),
            StringRule::Pattern(pattern) => check.pattern(pattern),
            StringRule::OneOf(options) => check.one_of(options.as_slice()),
            StringRule::Custom(rule) => check.custom(|check| (rule.get())(check)),
        };
    }
}

impl RuleBuilder<StringRule> {
    pub fn required(self) -> Self {
        self.rule(StringRule::Required)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.rule(StringRule::MinLength(min))
    }

    pub fn max_length(self, max: usize) -> Self {
        self.rule(StringRule::MaxLength(max))
    }

    pub fn length(self, len: usize) -> Self {
        self.rule(StringRule::Length(len))
    }

    pub fn email(self) -> Self {
        self.rule(StringRule::Email)
    }

    pub fn url(self) -> Self {
        self.rule(StringRule::Url)
    }

    pub fn uuid(self) -> Self {
        self.rule(StringRule::Uuid)
    }

    /// Record a pattern check. The pattern is compiled when the set is
    /// applied; an invalid pattern fails like a mismatch.
    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.rule(StringRule::Pattern(pattern.into()))
    }

    pub fn matches(self, regex: Regex) -> Self {
        self.rule(StringRule::Matches(regex))
    }

    pub fn one_of<I, S>(self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule(StringRule::OneOf(
            options.into_iter().map(Into::into).collect(),
        ))
    }

    /// Record an ad-hoc check.
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&mut StringCheck<'_>) + Send + Sync + 'static,
    {
        let check: Arc<StringRuleFn> = Arc::new(check);
        self.rule(StringRule::Custom(CustomRule(check)))
    }
}

impl RuleSet<StringRule> {
    /// Run every rule, in order, against one string value.
    pub fn apply(&self, validator: &mut Validator, field: &str, value: &str) {
        let mut check = validator.string(field, value);
        for rule in self.iter() {
            rule.apply_to(&mut check);
        }
    }
}
