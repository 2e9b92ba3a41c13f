//! Reservation conflict checks and the bookable-grid composition.
//!
//! A slot is unavailable when any active reservation on the same date overlaps
//! it under half-open interval semantics. Touching intervals (one ends exactly
//! when the other starts) do NOT conflict.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::slots::{generate_slots, Slot};

/// Lifecycle status of a booking.
///
/// Closed enumeration so that a new status added upstream is a compile error at
/// every site that filters on it, rather than a silently passing string compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl ReservationStatus {
    /// Whether a reservation in this status blocks other bookings.
    pub fn is_active(self) -> bool {
        match self {
            ReservationStatus::Pending | ReservationStatus::Approved => true,
            ReservationStatus::Rejected | ReservationStatus::Cancelled => false,
        }
    }
}

/// An existing booking, read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: ReservationStatus,
}

/// A generated slot tagged with its availability for a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub slot: Slot,
    pub available: bool,
}

/// Half-open interval overlap: `[a1, a2)` and `[b1, b2)` overlap iff
/// `a1 < b2 && b1 < a2`. Covers partial overlap, containment in either
/// direction, and identity; excludes the adjacent case where `a2 == b1`.
pub fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether `slot` is free on `date` given the existing reservations.
///
/// Cancelled and rejected reservations never block; reservations on other
/// dates never block. Pure predicate, no side effects.
pub fn is_available(slot: &Slot, date: NaiveDate, reservations: &[Reservation]) -> bool {
    !reservations.iter().any(|r| {
        r.status.is_active() && r.date == date && overlaps(slot.start, slot.end, r.start, r.end)
    })
}

/// Submit-time re-check that a chosen slot is still free.
///
/// Same predicate as [`is_available`], named for its role at the submission
/// seam: the booking workflow must re-run this against a fresh reservation
/// snapshot before persisting, so two users racing for the same slot cannot
/// both succeed off a stale client-side grid.
pub fn confirm_slot_free(slot: &Slot, date: NaiveDate, reservations: &[Reservation]) -> bool {
    is_available(slot, date, reservations)
}

/// Build the full bookable grid for one amenity on one date: every generated
/// slot tagged with its availability against the day's reservations.
///
/// # Errors
/// Propagates `EngineError::InvalidWindow` from slot generation when
/// `open > close`.
pub fn day_grid(
    open: NaiveTime,
    close: NaiveTime,
    slot_duration_hours: f64,
    date: NaiveDate,
    reservations: &[Reservation],
) -> Result<Vec<SlotAvailability>> {
    let slots = generate_slots(open, close, slot_duration_hours)?;
    Ok(slots
        .into_iter()
        .map(|slot| SlotAvailability {
            available: is_available(&slot, date, reservations),
            slot,
        })
        .collect())
}
