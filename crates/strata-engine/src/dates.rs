//! Shared date arithmetic and best-effort parsing.
//!
//! Stored records reach the engine with dates as strings; the parsers here
//! return `Option` so a malformed record degrades to "no value" instead of
//! aborting a whole calendar or forecast render.

use chrono::{Datelike, NaiveDate, NaiveTime};

/// Parse a stored calendar day (`2024-03-01`). Returns `None` for malformed input.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a stored wall-clock time, accepting `HH:MM` or `HH:MM:SS`.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Whole calendar years elapsed from `earlier` to `later`.
///
/// The year difference is decremented when the anniversary of `earlier` has not
/// yet been reached in `later`'s year. Returns 0 when `later` precedes `earlier`.
pub fn whole_years_between(earlier: NaiveDate, later: NaiveDate) -> u32 {
    if later < earlier {
        return 0;
    }
    let mut years = later.year() - earlier.year();
    if (later.month(), later.day()) < (earlier.month(), earlier.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Signed month difference: `(later.year - earlier.year) * 12 + (later.month - earlier.month)`.
///
/// Days of month are deliberately ignored; periodic recurrence anchors on the
/// day-of-month separately.
pub fn months_between(earlier: NaiveDate, later: NaiveDate) -> i32 {
    (later.year() - earlier.year()) * 12 + (later.month() as i32 - earlier.month() as i32)
}

/// Number of days in the given month, leap-aware.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(first_of_next) => first_of_next.pred_opt().map(|d| d.day()).unwrap_or(0),
        None => 0,
    }
}
