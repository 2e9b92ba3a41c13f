//! Tests for recurrence rule evaluation.

use chrono::NaiveDate;
use strata_engine::recurrence::{RecurrencePeriod, RecurrenceRule};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rule(
    start: NaiveDate,
    end: Option<NaiveDate>,
    never_expires: bool,
    period: RecurrencePeriod,
) -> RecurrenceRule {
    RecurrenceRule::new(start, end, never_expires, period)
}

// ---------------------------------------------------------------------------
// Boundary dates
// ---------------------------------------------------------------------------

#[test]
fn start_date_always_occurs() {
    for period in [
        RecurrencePeriod::OneTime,
        RecurrencePeriod::Monthly,
        RecurrencePeriod::Quarterly,
        RecurrencePeriod::Yearly,
    ] {
        let r = rule(day(2024, 1, 15), None, false, period);
        assert!(r.occurs_on(day(2024, 1, 15)), "{period:?}");
    }
}

#[test]
fn end_date_occurs_even_on_expiry_boundary() {
    let r = rule(
        day(2024, 1, 15),
        Some(day(2024, 6, 15)),
        false,
        RecurrencePeriod::Monthly,
    );
    assert!(r.occurs_on(day(2024, 6, 15)));
    assert!(!r.occurs_on(day(2024, 7, 15)));
}

#[test]
fn end_date_off_anchor_day_still_occurs() {
    // End date on a different day-of-month than the anchor is still a
    // defining endpoint of the rule.
    let r = rule(
        day(2024, 1, 15),
        Some(day(2024, 6, 20)),
        false,
        RecurrencePeriod::Monthly,
    );
    assert!(r.occurs_on(day(2024, 6, 20)));
}

#[test]
fn dates_before_start_never_occur() {
    let r = rule(day(2024, 3, 10), None, true, RecurrencePeriod::Monthly);
    assert!(!r.occurs_on(day(2024, 2, 10)));
    assert!(!r.occurs_on(day(2024, 3, 9)));
}

#[test]
fn never_expires_ignores_end_date_upper_bound() {
    let r = rule(
        day(2024, 1, 15),
        Some(day(2024, 6, 15)),
        true,
        RecurrencePeriod::Monthly,
    );
    assert!(r.occurs_on(day(2024, 7, 15)));
    assert!(r.occurs_on(day(2030, 12, 15)));
}

// ---------------------------------------------------------------------------
// Periods
// ---------------------------------------------------------------------------

#[test]
fn one_time_matches_only_its_anchors() {
    let r = rule(day(2024, 5, 1), None, false, RecurrencePeriod::OneTime);
    assert!(r.occurs_on(day(2024, 5, 1)));
    assert!(!r.occurs_on(day(2024, 6, 1)));
    assert!(!r.occurs_on(day(2025, 5, 1)));
}

#[test]
fn monthly_matches_every_anchor_day() {
    let r = rule(day(2024, 1, 15), None, true, RecurrencePeriod::Monthly);
    assert!(r.occurs_on(day(2024, 2, 15)));
    assert!(r.occurs_on(day(2024, 3, 15)));
    assert!(r.occurs_on(day(2025, 8, 15)));
    assert!(!r.occurs_on(day(2024, 2, 14)));
    assert!(!r.occurs_on(day(2024, 2, 16)));
}

#[test]
fn bi_monthly_requires_even_month_difference() {
    let r = rule(day(2024, 1, 15), None, true, RecurrencePeriod::BiMonthly);
    assert!(r.occurs_on(day(2024, 3, 15))); // diff 2
    assert!(r.occurs_on(day(2024, 5, 15))); // diff 4
    assert!(!r.occurs_on(day(2024, 2, 15))); // diff 1
    assert!(!r.occurs_on(day(2024, 4, 15))); // diff 3
}

#[test]
fn quarterly_requires_month_difference_divisible_by_three() {
    let r = rule(
        day(2024, 1, 15),
        Some(day(2024, 6, 15)),
        false,
        RecurrencePeriod::Quarterly,
    );
    assert!(r.occurs_on(day(2024, 4, 15))); // diff 3
    assert!(!r.occurs_on(day(2024, 3, 15))); // diff 2
    assert!(!r.occurs_on(day(2024, 2, 15))); // diff 1
}

#[test]
fn half_yearly_requires_month_difference_divisible_by_six() {
    let r = rule(day(2024, 1, 15), None, true, RecurrencePeriod::HalfYearly);
    assert!(r.occurs_on(day(2024, 7, 15))); // diff 6
    assert!(r.occurs_on(day(2025, 1, 15))); // diff 12
    assert!(!r.occurs_on(day(2024, 4, 15))); // diff 3
}

#[test]
fn yearly_matches_same_month_and_day_any_year() {
    let r = rule(day(2024, 3, 10), None, true, RecurrencePeriod::Yearly);
    assert!(r.occurs_on(day(2025, 3, 10)));
    assert!(r.occurs_on(day(2030, 3, 10)));
    assert!(!r.occurs_on(day(2025, 4, 10)));
    assert!(!r.occurs_on(day(2025, 3, 11)));
}

#[test]
fn anchor_on_day_31_skips_shorter_months() {
    // No end-of-month clamping: a monthly rule anchored on the 31st never
    // fires in 30-day months or February.
    let r = rule(day(2024, 1, 31), None, true, RecurrencePeriod::Monthly);
    assert!(r.occurs_on(day(2024, 3, 31)));
    assert!(r.occurs_on(day(2024, 5, 31)));
    assert!(!r.occurs_on(day(2024, 2, 29)));
    assert!(!r.occurs_on(day(2024, 4, 30)));
}

// ---------------------------------------------------------------------------
// Stored-record construction
// ---------------------------------------------------------------------------

#[test]
fn from_stored_parses_well_formed_dates() {
    let r = RecurrenceRule::from_stored(
        "2024-01-15",
        Some("2024-06-15"),
        false,
        RecurrencePeriod::Monthly,
    )
    .unwrap();
    assert_eq!(r.start_date, day(2024, 1, 15));
    assert_eq!(r.end_date, Some(day(2024, 6, 15)));
}

#[test]
fn malformed_start_date_means_no_rule() {
    // One bad stored record must not break the calendar: it just never occurs.
    assert!(RecurrenceRule::from_stored(
        "15/01/2024",
        None,
        false,
        RecurrencePeriod::Monthly
    )
    .is_none());
}

#[test]
fn malformed_end_date_is_treated_as_absent() {
    let r = RecurrenceRule::from_stored(
        "2024-01-15",
        Some("whenever"),
        false,
        RecurrencePeriod::Monthly,
    )
    .unwrap();
    assert_eq!(r.end_date, None);
}

#[test]
fn period_keywords_serialize_snake_case() {
    // Schedules are stored with snake_case period keywords.
    assert_eq!(
        serde_json::to_string(&RecurrencePeriod::BiMonthly).unwrap(),
        "\"bi_monthly\""
    );
    assert_eq!(
        serde_json::from_str::<RecurrencePeriod>("\"half_yearly\"").unwrap(),
        RecurrencePeriod::HalfYearly
    );
}

// ---------------------------------------------------------------------------
// Range expansion
// ---------------------------------------------------------------------------

#[test]
fn occurrences_between_expands_a_quarterly_rule() {
    let r = rule(day(2024, 1, 15), None, true, RecurrencePeriod::Quarterly);
    let hits = r.occurrences_between(day(2024, 1, 1), day(2024, 12, 31));
    assert_eq!(
        hits,
        vec![
            day(2024, 1, 15),
            day(2024, 4, 15),
            day(2024, 7, 15),
            day(2024, 10, 15),
        ]
    );
}

#[test]
fn occurrences_between_includes_off_anchor_end_date() {
    let r = rule(
        day(2024, 1, 15),
        Some(day(2024, 3, 20)),
        false,
        RecurrencePeriod::Monthly,
    );
    let hits = r.occurrences_between(day(2024, 1, 1), day(2024, 12, 31));
    assert_eq!(
        hits,
        vec![
            day(2024, 1, 15),
            day(2024, 2, 15),
            day(2024, 3, 15),
            day(2024, 3, 20),
        ]
    );
}

#[test]
fn occurrences_between_empty_for_inverted_range() {
    let r = rule(day(2024, 1, 15), None, true, RecurrencePeriod::Monthly);
    assert!(r
        .occurrences_between(day(2024, 6, 1), day(2024, 1, 1))
        .is_empty());
}
