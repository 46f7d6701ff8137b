use chrono::{Datelike, DateTime, NaiveDate, Utc, Weekday};

/// The year recurring dates are projected onto before being compared. It is a
/// leap year so Feb 29 always has somewhere to land.
pub(crate) const REFERENCE_YEAR: i32 = 2000;

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Whether a date falls on Saturday or Sunday.
pub fn is_weekend(date: &NaiveDate) -> bool {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => true,
        _ => false,
    }
}

/// Move a date's month/day onto the reference year, dropping its own year.
pub(crate) fn project(date: &NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, date.month(), date.day())
}

/// Checks whether `date` falls within `start..=end` with the years of all three
/// ignored. If `start` lands after `end` once projected, the range wraps
/// around the end of the year (ie Dec 20 - Jan 5).
pub(crate) fn in_annual_range(date: &NaiveDate, start: &NaiveDate, end: &NaiveDate) -> bool {
    let (check, start, end) = match (project(date), project(start), project(end)) {
        (Some(check), Some(start), Some(end)) => (check, start, end),
        _ => return false,
    };
    if start <= end {
        check >= start && check <= end
    } else {
        check >= start || check <= end
    }
}

/// Whole calendar days from `start` to `end`. Negative if `end` comes first.
pub fn days_between(start: &NaiveDate, end: &NaiveDate) -> i64 {
    end.signed_duration_since(*start).num_days()
}
