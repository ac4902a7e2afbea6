use crate::check::{Integer, NumberCheck};
use crate::rules::{CustomRule, RuleBuilder, RuleSet};
use crate::Validator;
use std::sync::Arc;

/// Closure type behind [`NumberRule::Custom`].
pub type NumberRuleFn<T> = dyn for<'c> Fn(&mut NumberCheck<'c, T>) + Send + Sync;

/// One recorded integer check.
#[derive(Debug, Clone)]
pub enum NumberRule<T> {
    Required,
    Min(T),
    Max(T),
    Between(T, T),
    Positive,
    Negative,
    MultipleOf(T),
    PowerOfTwo,
    MaxBits(u32),
    Port,
    Custom(CustomRule<NumberRuleFn<T>>),
}

impl<T: Integer> NumberRule<T> {
    /// Run this rule against a façade.
    pub fn apply_to(&self, check: &mut NumberCheck<'_, T>) {
        match self {
            NumberRule::Required => check.required(),
            NumberRule::Min(min) => check.min(*min),
            NumberRule::Max(max) => check.max(*max),
            NumberRule::Between(min, max) => check.between(*min, *max),
            NumberRule::Positive => check.positive(),
            NumberRule::Negative => check.negative(),
            NumberRule::MultipleOf(base) => check.multiple_of(*base),
            NumberRule::PowerOfTwo => check.power_of_two(),
            NumberRule::MaxBits(bits) => check.max_bits(*bits),
            NumberRule::Port => check.port(),
            NumberRule::Custom(rule) => check.custom(|check| (rule.get())(check)),
        };
    }
}

impl<T: Integer> RuleBuilder<NumberRule<T>> {
    pub fn required(self) -> Self {
        self.rule(NumberRule::Required)
    }

    pub fn min(self, min: T) -> Self {
        self.rule(NumberRule::Min(min))
    }

    pub fn max(self, max: T) -> Self {
        self.rule(NumberRule::Max(max))
    }

    pub fn between(self, min: T, max: T) -> Self {
        self.rule(NumberRule::Between(min, max))
    }

    pub fn positive(self) -> Self {
        self.rule(NumberRule::Positive)
    }

    pub fn negative(self) -> Self {
        self.rule(NumberRule::Negative)
    }

    pub fn multiple_of(self, base: T) -> Self {
        self.rule(NumberRule::MultipleOf(base))
    }

    pub fn power_of_two(self) -> Self {
        self.rule(NumberRule::PowerOfTwo)
    }

    pub fn max_bits(self, bits: u32) -> Self {
        self.rule(NumberRule::MaxBits(bits))
    }

    pub fn port(self) -> Self {
        self.rule(NumberRule::Port)
    }

    /// Record an ad-hoc check.
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&mut NumberCheck<'_, T>) + Send + Sync + 'static,
    {
        let check: Arc<NumberRuleFn<T>> = Arc::new(check);
        self.rule(NumberRule::Custom(CustomRule(check)))
    }
}

impl<T: Integer> RuleSet<NumberRule<T>> {
    /// Run every rule, in order, against one integer value.
    pub fn apply(&self, validator: &mut Validator, field: &str, value: T) {
        let mut check = validator.number(field, value);
        for rule in self.iter() {
            rule.apply_to(&mut check);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::i18n::{MessageCatalog, MessageKey, MessageParams, Translator};
    use crate::rules;
    use crate::Validator;
    use std::sync::Arc;

    fn validator() -> Validator {
        Validator::with_translator(Translator::new(Arc::new(MessageCatalog::new())))
    }

    // ==================== Equivalence Tests ====================

    #[test]
    fn test_apply_matches_hand_chaining() {
        let set = rules::number_rules::<i64>()
            .required()
            .between(-100, 100)
            .multiple_of(4)
            .positive()
            .build();

        for value in [0, -8, 7, 12, 400] {
            let mut by_rules = validator();
            set.apply(&mut by_rules, "n", value);

            let mut by_hand = validator();
            by_hand
                .int("n", value)
                .required()
                .between(-100, 100)
                .multiple_of(4)
                .positive();

            assert_eq!(by_rules.errors(), by_hand.errors(), "value {}", value);
        }
    }

    #[test]
    fn test_age_below_minimum() {
        let set = rules::number_rules::<i64>().required().min(18).build();
        let mut v = validator();
        set.apply(&mut v, "age", 15);

        assert_eq!(v.error_count(), 1);
        let error = &v.errors().as_slice()[0];
        assert_eq!(error.message_key(), &MessageKey::MIN_VALUE);
        assert_eq!(error.params().get("v"), Some("18"));
    }

    #[test]
    fn test_unsigned_rules() {
        let set = rules::number_rules::<u16>()
            .port()
            .power_of_two()
            .max_bits(10)
            .negative()
            .build();

        let mut v = validator();
        set.apply(&mut v, "port", 1024);
        let keys: Vec<&str> = v.errors().iter().map(|e| e.message_key().as_str()).collect();
        assert_eq!(keys, vec!["max_bits", "negative"]);
    }

    #[test]
    fn test_max_rule() {
        let set = rules::number_rules::<u8>().max(10).build();
        let mut v = validator();
        set.apply(&mut v, "retries", 11);
        assert_eq!(
            v.errors().as_slice()[0].message(),
            "must be less than or equal to 10"
        );
    }

    #[test]
    fn test_custom_rule() {
        let set = rules::number_rules::<i32>()
            .custom(|check| {
                if check.value() % 2 != 0 {
                    check.report(MessageKey::new("even"), MessageParams::new());
                }
            })
            .build();

        let mut v = validator();
        set.apply(&mut v, "n", 3);
        set.apply(&mut v, "n", 4);
        assert_eq!(v.error_count(), 1);
    }
}
