//! Recurrence rules — decide whether a calendar date is an occurrence of a
//! periodic maintenance pattern.
//!
//! Rules are anchored to a start date's day-of-month rather than expanded into
//! a full occurrence series, so evaluating one rendered day is O(1). Months
//! shorter than the anchor day are never matched (no end-of-month clamping);
//! a rule anchored on the 31st simply skips 30-day months.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::{self, months_between};

/// How often a recurring schedule repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrencePeriod {
    OneTime,
    Monthly,
    BiMonthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl RecurrencePeriod {
    /// Month interval between occurrences, `None` for one-time and yearly
    /// (yearly matches on calendar month rather than a modulo).
    fn month_interval(self) -> Option<i32> {
        match self {
            RecurrencePeriod::OneTime | RecurrencePeriod::Yearly => None,
            RecurrencePeriod::Monthly => Some(1),
            RecurrencePeriod::BiMonthly => Some(2),
            RecurrencePeriod::Quarterly => Some(3),
            RecurrencePeriod::HalfYearly => Some(6),
        }
    }
}

/// A periodic pattern anchored to a start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// When set, the end date is ignored for upper-bound filtering.
    pub never_expires: bool,
    pub period: RecurrencePeriod,
}

impl RecurrenceRule {
    pub fn new(
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        never_expires: bool,
        period: RecurrencePeriod,
    ) -> Self {
        Self {
            start_date,
            end_date,
            never_expires,
            period,
        }
    }

    /// Build a rule from stored string dates, best-effort.
    ///
    /// A malformed start date yields `None` — the record simply never occurs,
    /// so one bad row cannot break the whole calendar. A malformed end date is
    /// treated as absent.
    pub fn from_stored(
        start: &str,
        end: Option<&str>,
        never_expires: bool,
        period: RecurrencePeriod,
    ) -> Option<Self> {
        let start_date = dates::parse_day(start)?;
        let end_date = end.and_then(dates::parse_day);
        Some(Self::new(start_date, end_date, never_expires, period))
    }

    /// Whether `query` is an occurrence of this rule.
    ///
    /// The rule's defining endpoints are themselves always occurrences: the
    /// start date matches every period, and the end date matches even though
    /// it sits on the expiry boundary.
    pub fn occurs_on(&self, query: NaiveDate) -> bool {
        if query < self.start_date {
            return false;
        }
        // Exact boundary dates match regardless of period or expiry.
        if query == self.start_date || Some(query) == self.end_date {
            return true;
        }
        if !self.never_expires {
            if let Some(end) = self.end_date {
                if query > end {
                    return false;
                }
            }
        }

        // Periodic rules anchor on the start date's day-of-month.
        if query.day() != self.start_date.day() {
            return false;
        }
        match self.period {
            // One-time rules match only their endpoints, handled above.
            RecurrencePeriod::OneTime => false,
            RecurrencePeriod::Yearly => query.month() == self.start_date.month(),
            _ => {
                let diff = months_between(self.start_date, query);
                match self.period.month_interval() {
                    Some(interval) => diff % interval == 0,
                    None => false,
                }
            }
        }
    }

    /// All occurrences within `[from, to]`, inclusive both ends.
    ///
    /// Walks candidate months rather than testing every day: each month in the
    /// range contributes at most one candidate (the anchor day-of-month), and
    /// the end date is appended when it falls in range on an off-anchor day.
    pub fn occurrences_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        if from > to {
            return out;
        }

        let anchor_day = self.start_date.day();
        let mut year = from.year();
        let mut month = from.month();
        loop {
            let cursor = NaiveDate::from_ymd_opt(year, month, 1);
            match cursor {
                Some(first) if first <= to => {}
                _ => break,
            }
            // from_ymd_opt is None when the anchor day does not exist in this
            // month, which is exactly the no-clamping skip.
            if let Some(candidate) = NaiveDate::from_ymd_opt(year, month, anchor_day) {
                if candidate >= from && candidate <= to && self.occurs_on(candidate) {
                    out.push(candidate);
                }
            }
            if month == 12 {
                year += 1;
                month = 1;
            } else {
                month += 1;
            }
        }

        // The end date is an occurrence even off the anchor day.
        if let Some(end) = self.end_date {
            if end >= from && end <= to && end.day() != anchor_day && self.occurs_on(end) {
                out.push(end);
                out.sort_unstable();
            }
        }

        out
    }
}
