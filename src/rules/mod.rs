//! Reusable rule sets.
//!
//! A rule set records checks ahead of time and replays them against any
//! number of values. Builders never evaluate anything; [`RuleSet::apply`]
//! opens a fresh façade on the validator and runs every rule in order, so
//! applying a set is equivalent to chaining the same checks by hand.
//!
//! ```rust
//! use fieldcheck::{rules, Validator};
//!
//! let age_rules = rules::number_rules::<i64>().required().min(18).build();
//!
//! let mut v = Validator::new();
//! age_rules.apply(&mut v, "age", 15);
//! assert_eq!(v.error_count(), 1);
//! ```

mod float;
mod number;
mod slice;
mod string;
mod time;

pub use float::{FloatRule, FloatRuleFn};
pub use number::{NumberRule, NumberRuleFn};
pub use slice::{SliceEachFn, SliceRule, SliceRuleFn};
pub use string::{StringRule, StringRuleFn};
pub use time::{TimeRule, TimeRuleFn};

use crate::check::{Float, Integer};
use std::fmt;
use std::sync::Arc;

/// Start a rule set for string fields.
pub fn string_rules() -> RuleBuilder<StringRule> {
    RuleBuilder::new()
}

/// Start a rule set for integer fields of type `T`.
pub fn number_rules<T: Integer>() -> RuleBuilder<NumberRule<T>> {
    RuleBuilder::new()
}

/// Start a rule set for float fields of type `T`.
pub fn float_rules<T: Float>() -> RuleBuilder<FloatRule<T>> {
    RuleBuilder::new()
}

/// Start a rule set for slices of `T`.
pub fn slice_rules<T>() -> RuleBuilder<SliceRule<T>> {
    RuleBuilder::new()
}

/// Start a rule set for timestamp fields.
pub fn time_rules() -> RuleBuilder<TimeRule> {
    RuleBuilder::new()
}

/// Accumulates rules in order. Category-specific methods live on
/// `RuleBuilder<StringRule>`, `RuleBuilder<NumberRule<T>>` and so on.
#[derive(Debug)]
pub struct RuleBuilder<R> {
    rules: Vec<R>,
}

impl<R> RuleBuilder<R> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a prebuilt rule.
    pub fn rule(mut self, rule: R) -> Self {
        self.rules.push(rule);
        self
    }

    /// Freeze the recorded rules.
    pub fn build(self) -> RuleSet<R> {
        RuleSet {
            rules: self.rules.into(),
        }
    }
}

impl<R: Clone> RuleBuilder<R> {
    /// Append every rule of an existing set, after the rules already added.
    pub fn extend(mut self, set: &RuleSet<R>) -> Self {
        self.rules.extend(set.iter().cloned());
        self
    }
}

impl<R> Default for RuleBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable, shareable list of rules.
///
/// Cloning is cheap (reference counted). A set holds no per-application
/// state and can be applied from several threads at once.
pub struct RuleSet<R> {
    rules: Arc<[R]>,
}

impl<R> RuleSet<R> {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rules.iter()
    }
}

impl<R> Clone for RuleSet<R> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for RuleSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}

/// Closure held by a `Custom` rule variant.
pub struct CustomRule<F: ?Sized>(Arc<F>);

impl<F: ?Sized> CustomRule<F> {
    pub fn get(&self) -> &F {
        &self.0
    }
}

impl<F: ?Sized> Clone for CustomRule<F> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<F: ?Sized> fmt::Debug for CustomRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRule(..)")
    }
}
