//! Deadline Proximity
//!
//! Client-side labeling of how close a task's deadline is to now.

use chrono::NaiveDate;

const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Proximity bucket for a task deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    Missed,
    Approaching,
}

impl DeadlineStatus {
    pub fn label(self) -> &'static str {
        match self {
            DeadlineStatus::Missed => "Deadline missed",
            DeadlineStatus::Approaching => "Deadline approaching",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DeadlineStatus::Missed => "deadline-missed",
            DeadlineStatus::Approaching => "deadline-approaching",
        }
    }
}

/// Parse an ISO date as UTC midnight, in milliseconds since the epoch
pub fn deadline_ms(deadline: &str) -> Option<f64> {
    let date = NaiveDate::parse_from_str(deadline, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp_millis() as f64)
}

/// Bucket a deadline against the current wall-clock time (`now_ms`,
/// milliseconds since the epoch as reported by `js_sys::Date::now()`).
/// Less than zero days away is missed, under three days is approaching,
/// anything else (including an unparseable date) gets no label.
pub fn deadline_status(deadline: &str, now_ms: f64) -> Option<DeadlineStatus> {
    let days = (deadline_ms(deadline)? - now_ms) / MS_PER_DAY;
    if days < 0.0 {
        Some(DeadlineStatus::Missed)
    } else if days < 3.0 {
        Some(DeadlineStatus::Approaching)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEADLINE: &str = "2099-01-01";

    fn midnight_ms() -> f64 {
        deadline_ms(DEADLINE).unwrap()
    }

    #[test]
    fn test_one_second_past_is_missed() {
        let now = midnight_ms() + 1000.0;
        assert_eq!(
            deadline_status(DEADLINE, now),
            Some(DeadlineStatus::Missed)
        );
    }

    #[test]
    fn test_two_days_out_is_approaching() {
        let now = midnight_ms() - 2.0 * MS_PER_DAY;
        assert_eq!(
            deadline_status(DEADLINE, now),
            Some(DeadlineStatus::Approaching)
        );
    }

    #[test]
    fn test_exactly_now_is_approaching() {
        assert_eq!(
            deadline_status(DEADLINE, midnight_ms()),
            Some(DeadlineStatus::Approaching)
        );
    }

    #[test]
    fn test_four_days_out_has_no_label() {
        let now = midnight_ms() - 4.0 * MS_PER_DAY;
        assert_eq!(deadline_status(DEADLINE, now), None);
    }

    #[test]
    fn test_exactly_three_days_out_has_no_label() {
        let now = midnight_ms() - 3.0 * MS_PER_DAY;
        assert_eq!(deadline_status(DEADLINE, now), None);
    }

    #[test]
    fn test_unparseable_deadline_has_no_label() {
        assert_eq!(deadline_status("someday", 0.0), None);
        assert_eq!(deadline_status("", 0.0), None);
    }

    #[test]
    fn test_labels_and_classes() {
        assert_eq!(DeadlineStatus::Missed.label(), "Deadline missed");
        assert_eq!(DeadlineStatus::Approaching.label(), "Deadline approaching");
        assert_eq!(DeadlineStatus::Missed.css_class(), "deadline-missed");
        assert_eq!(
            DeadlineStatus::Approaching.css_class(),
            "deadline-approaching"
        );
    }
}
