//! Timestamp checks.
//!
//! Every check that compares against "now" samples the clock itself, so two
//! checks in one chain may see slightly different instants.

use crate::i18n::{MessageKey, MessageParams};
use crate::Validator;
use chrono::{DateTime, Datelike, Months, SecondsFormat, Utc, Weekday};

/// Chainable checks over one UTC timestamp.
pub struct TimeCheck<'a> {
    validator: &'a mut Validator,
    field: &'a str,
    value: DateTime<Utc>,
}

impl<'a> TimeCheck<'a> {
    pub(crate) fn new(validator: &'a mut Validator, field: &'a str, value: DateTime<Utc>) -> Self {
        Self {
            validator,
            field,
            value,
        }
    }

    pub fn field(&self) -> &str {
        self.field
    }

    pub fn value(&self) -> DateTime<Utc> {
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

    /// Fails on the zero timestamp (the Unix epoch).
    pub fn required(&mut self) -> &mut Self {
        if self.value == DateTime::<Utc>::default() {
            self.report(MessageKey::REQUIRED, MessageParams::new());
        }
        self
    }

    /// Fails when the value is after now.
    pub fn past(&mut self) -> &mut Self {
        if is_after(self.value, Utc::now()) {
            self.report(MessageKey::PAST, MessageParams::new());
        }
        self
    }

    /// Fails when the value is before now.
    pub fn future(&mut self) -> &mut Self {
        if is_before(self.value, Utc::now()) {
            self.report(MessageKey::FUTURE, MessageParams::new());
        }
        self
    }

    pub fn after(&mut self, moment: DateTime<Utc>) -> &mut Self {
        if self.value <= moment {
            self.report(MessageKey::AFTER, MessageParams::new().with("v", format_time(moment)));
        }
        self
    }

    pub fn before(&mut self, moment: DateTime<Utc>) -> &mut Self {
        if self.value >= moment {
            self.report(MessageKey::BEFORE, MessageParams::new().with("v", format_time(moment)));
        }
        self
    }

    /// Fails when the value is outside `start..=end`.
    pub fn between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> &mut Self {
        if self.value < start || self.value > end {
            self.report(
                MessageKey::BETWEEN_DATES,
                MessageParams::new()
                    .with("v1", format_time(start))
                    .with("v2", format_time(end)),
            );
        }
        self
    }

    /// Fails unless the value falls on one of `days`.
    pub fn week_day(&mut self, days: &[Weekday]) -> &mut Self {
        if !days.contains(&self.value.weekday()) {
            self.report(MessageKey::WEEKDAY, MessageParams::new());
        }
        self
    }

    /// Fails when the value, read as a birth date, is less than `years`
    /// years ago.
    pub fn min_age(&mut self, years: u32) -> &mut Self {
        let old_enough = match years_ago(years) {
            Some(cutoff) => self.value <= cutoff,
            None => false,
        };
        if !old_enough {
            self.report(MessageKey::MIN_AGE, MessageParams::new().with("d", years));
        }
        self
    }

    /// Fails when the value, read as a birth date, is more than `years`
    /// years ago.
    pub fn max_age(&mut self, years: u32) -> &mut Self {
        let young_enough = match years_ago(years) {
            Some(cutoff) => self.value >= cutoff,
            None => true,
        };
        if !young_enough {
            self.report(MessageKey::MAX_AGE, MessageParams::new().with("d", years));
        }
        self
    }
}

fn is_after(value: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    value > now
}

fn is_before(value: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    value < now
}

/// `None` when the cutoff would fall before the earliest representable date.
fn years_ago(years: u32) -> Option<DateTime<Utc>> {
    Utc::now().checked_sub_months(Months::new(years.saturating_mul(12)))
}

fn format_time(moment: DateTime<Utc>) -> String {
    moment.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::{is_after, is_before};
    use crate::i18n::{MessageCatalog, Translator};
    use crate::Validator;
    use chrono::{DateTime, Duration, TimeZone, Utc, Weekday};
    use std::sync::Arc;

    fn validator() -> Validator {
        Validator::with_translator(Translator::new(Arc::new(MessageCatalog::new())))
    }

    fn keys(v: &Validator) -> Vec<&str> {
        v.errors().iter().map(|e| e.message_key().as_str()).collect()
    }

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    // ==================== Required Tests ====================

    #[test]
    fn test_required_epoch() {
        let mut v = validator();
        v.time("created", DateTime::<Utc>::default()).required();
        v.time("created", Utc::now()).required();
        assert_eq!(keys(&v), vec!["required"]);
    }

    // ==================== Relative Tests ====================

    #[test]
    fn test_past_and_future() {
        let mut v = validator();
        let yesterday = Utc::now() - Duration::days(1);
        let tomorrow = Utc::now() + Duration::days(1);

        v.time("t", yesterday).past().future();
        v.time("t", tomorrow).past().future();
        assert_eq!(keys(&v), vec!["future", "past"]);
    }

    #[test]
    fn test_past_and_future_accept_the_current_instant() {
        let now = date(2024, 5, 1);
        assert!(!is_after(now, now));
        assert!(!is_before(now, now));
        assert!(is_after(now + Duration::seconds(1), now));
        assert!(is_before(now - Duration::seconds(1), now));
    }

    #[test]
    fn test_after_is_strict() {
        let mut v = validator();
        let moment = date(2024, 1, 1);
        v.time("t", moment).after(moment);
        v.time("t", moment + Duration::seconds(1)).after(moment);
        assert_eq!(keys(&v), vec!["after"]);
        assert_eq!(
            v.errors().as_slice()[0].message(),
            "must be after 2024-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_before_is_strict() {
        let mut v = validator();
        let moment = date(2024, 1, 1);
        v.time("t", moment).before(moment);
        v.time("t", moment - Duration::seconds(1)).before(moment);
        assert_eq!(keys(&v), vec!["before"]);
    }

    #[test]
    fn test_between_inclusive() {
        let mut v = validator();
        let start = date(2024, 1, 1);
        let end = date(2024, 12, 31);

        v.time("t", start).between(start, end);
        v.time("t", end).between(start, end);
        v.time("t", date(2025, 1, 1)).between(start, end);

        assert_eq!(keys(&v), vec!["between_dates"]);
        assert_eq!(
            v.errors().as_slice()[0].message(),
            "must be between 2024-01-01T00:00:00Z and 2024-12-31T00:00:00Z"
        );
    }

    #[test]
    fn test_week_day() {
        let mut v = validator();
        let weekdays = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ];
        // 2024-06-03 is a Monday, 2024-06-08 a Saturday
        v.time("meeting", date(2024, 6, 3)).week_day(&weekdays);
        v.time("meeting", date(2024, 6, 8)).week_day(&weekdays);
        assert_eq!(keys(&v), vec!["weekday"]);
    }

    // ==================== Age Tests ====================

    #[test]
    fn test_min_age() {
        let mut v = validator();
        let adult = Utc::now() - Duration::days(365 * 30);
        let teen = Utc::now() - Duration::days(365 * 15);

        v.time("birth", adult).min_age(18);
        v.time("birth", teen).min_age(18);
        assert_eq!(keys(&v), vec!["min_age"]);
        assert_eq!(
            v.errors().as_slice()[0].message(),
            "age must be at least 18 years"
        );
    }

    #[test]
    fn test_max_age() {
        let mut v = validator();
        let young = Utc::now() - Duration::days(365 * 30);
        let old = Utc::now() - Duration::days(365 * 130);

        v.time("birth", young).max_age(120);
        v.time("birth", old).max_age(120);
        assert_eq!(keys(&v), vec!["max_age"]);
    }

    #[test]
    fn test_age_beyond_representable_range() {
        let mut v = validator();
        v.time("birth", date(1990, 1, 1)).min_age(u32::MAX).max_age(u32::MAX);
        assert_eq!(keys(&v), vec!["min_age"]);
    }

    // ==================== Custom Tests ====================

    #[test]
    fn test_custom_sees_value() {
        let mut v = validator();
        let moment = date(2024, 2, 29);
        v.time("t", moment).custom(|check| {
            assert_eq!(check.value(), moment);
            assert_eq!(check.field(), "t");
        });
        assert!(!v.has_errors());
    }
}
