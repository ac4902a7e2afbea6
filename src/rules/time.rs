use crate::check::TimeCheck;
use crate::rules::{CustomRule, RuleBuilder, RuleSet};
use crate::Validator;
use chrono::{DateTime, Utc, Weekday};
use std::sync::Arc;

/// Closure type behind [`TimeRule::Custom`].
pub type TimeRuleFn = dyn for<'c> Fn(&mut TimeCheck<'c>) + Send + Sync;

/// One recorded timestamp check.
///
/// `Past`, `Future` and the age rules compare against the clock at the
/// moment the set is applied, not when it was built.
#[derive(Debug, Clone)]
pub enum TimeRule {
    Required,
    Past,
    Future,
    After(DateTime<Utc>),
    Before(DateTime<Utc>),
    Between(DateTime<Utc>, DateTime<Utc>),
    WeekDay(Vec<Weekday>),
    MinAge(u32),
    MaxAge(u32),
    Custom(CustomRule<TimeRuleFn>),
}

impl TimeRule {
    /// Run this rule against a façade.
    pub fn apply_to(&self, check: &mut TimeCheck<'_>) {
        match self {
            TimeRule::Required => check.required(),
            TimeRule::Past => check.past(),
            TimeRule::Future => check.future(),
            TimeRule::After(moment) => check.after(*moment),
            TimeRule::Before(moment) => check.before(*moment),
            TimeRule::Between(start, end) => check.between(*start, *end),
            TimeRule::WeekDay(days) => check.week_day(days),
            TimeRule::MinAge(years) => check.min_age(*years),
            TimeRule::MaxAge(years) => check.max_age(*years),
            TimeRule::Custom(rule) => check.custom(|check| (rule.get())(check)),
        };
    }
}

impl RuleBuilder<TimeRule> {
    pub fn required(self) -> Self {
        self.rule(TimeRule::Required)
    }

    pub fn past(self) -> Self {
        self.rule(TimeRule::Past)
    }

    pub fn future(self) -> Self {
        self.rule(TimeRule::Future)
    }

    pub fn after(self, moment: DateTime<Utc>) -> Self {
        self.rule(TimeRule::After(moment))
    }

    pub fn before(self, moment: DateTime<Utc>) -> Self {
        self.rule(TimeRule::Before(moment))
    }

    pub fn between(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.rule(TimeRule::Between(start, end))
    }

    pub fn week_day(self, days: &[Weekday]) -> Self {
        self.rule(TimeRule::WeekDay(days.to_vec()))
    }

    pub fn min_age(self, years: u32) -> Self {
        self.rule(TimeRule::MinAge(years))
    }

    pub fn max_age(self, years: u32) -> Self {
        self.rule(TimeRule::MaxAge(years))
    }

    /// Record an ad-hoc check.
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&mut TimeCheck<'_>) + Send + Sync + 'static,
    {
        let check: Arc<TimeRuleFn> = Arc::new(check);
        self.rule(TimeRule::Custom(CustomRule(check)))
    }
}

impl RuleSet<TimeRule> {
    /// Run every rule, in order, against one timestamp.
    pub fn apply(&self, validator: &mut Validator, field: &str, value: DateTime<Utc>) {
        let mut check = validator.time(field, value);
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
    use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};
    use std::sync::Arc;

    fn validator() -> Validator {
        Validator::with_translator(Translator::new(Arc::new(MessageCatalog::new())))
    }

    // ==================== Equivalence Tests ====================

    #[test]
    fn test_apply_matches_hand_chaining() {
        let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        let set = rules::time_rules()
            .required()
            .past()
            .after(start)
            .before(end)
            .between(start, end)
            .week_day(&[Weekday::Sat, Weekday::Sun])
            .build();

        let inputs = [
            DateTime::<Utc>::default(),
            Utc.with_ymd_and_hms(2005, 6, 4, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2015, 6, 3, 12, 0, 0).unwrap(),
        ];
        for input in inputs {
            let mut by_rules = validator();
            set.apply(&mut by_rules, "at", input);

            let mut by_hand = validator();
            by_hand
                .time("at", input)
                .required()
                .past()
                .after(start)
                .before(end)
                .between(start, end)
                .week_day(&[Weekday::Sat, Weekday::Sun]);

            assert_eq!(by_rules.errors(), by_hand.errors(), "input {}", input);
        }
    }

    #[test]
    fn test_age_rules() {
        let set = rules::time_rules().min_age(18).max_age(120).build();
        let mut v = validator();
        set.apply(&mut v, "birth", Utc::now() - Duration::days(365 * 10));
        set.apply(&mut v, "birth", Utc::now() - Duration::days(365 * 40));

        let keys: Vec<&str> = v.errors().iter().map(|e| e.message_key().as_str()).collect();
        assert_eq!(keys, vec!["min_age"]);
    }

    #[test]
    fn test_future_rule_uses_application_time() {
        let set = rules::time_rules().future().build();
        let soon = Utc::now() + Duration::hours(1);

        let mut v = validator();
        set.apply(&mut v, "deadline", soon);
        assert!(!v.has_errors());
    }

    #[test]
    fn test_custom_rule() {
        let set = rules::time_rules()
            .custom(|check| {
                if check.value().day() != 1 {
                    check.report(MessageKey::new("first_of_month"), MessageParams::new());
                }
            })
            .build();

        let mut v = validator();
        set.apply(&mut v, "billing", Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap());
        assert_eq!(v.error_count(), 1);
    }
}
