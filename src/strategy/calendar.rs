//! Calendar helpers for expiration handling

use chrono::{Datelike, Duration, NaiveDate};

/// Whole calendar days between two dates, order-independent
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Date of the next Friday strictly after `from`.
///
/// Weekly equity options expire on Fridays; front-ends default the
/// expiration field to this.
pub fn next_friday(from: NaiveDate) -> NaiveDate {
    let day = from.weekday().num_days_from_sunday() as i64;
    let mut ahead = (5 - day).rem_euclid(7);
    if ahead == 0 {
        ahead = 7;
    }
    from + Duration::days(ahead)
}
