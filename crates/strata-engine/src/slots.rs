//! Slot generation — converts an amenity's operating window into candidate
//! bookable intervals.
//!
//! Slots are half-open `[start, end)` wall-clock intervals on an implicit date.
//! Generation is deterministic: the same window and duration always reproduce
//! the identical sequence.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A candidate bookable interval `[start, end)` on an implicit date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    /// Length of the slot in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Generate the ordered sequence of candidate slots for an operating window.
///
/// Starting at `open`, emits slots of `slot_duration_hours` back to back until
/// the next slot's end would pass `close`. Fractional hours are valid (1.5 →
/// 90-minute slots); the fractional part is carried into minutes. A trailing
/// partial slot that would overflow the close time is dropped, not truncated.
///
/// Degenerate inputs produce an empty sequence rather than an error: a
/// zero-width window (`open == close`) or a non-positive/non-finite duration.
///
/// # Errors
/// Returns `EngineError::InvalidWindow` if `open > close` — that is a caller
/// contract breach, not a data-quality issue.
pub fn generate_slots(
    open: NaiveTime,
    close: NaiveTime,
    slot_duration_hours: f64,
) -> Result<Vec<Slot>> {
    if open > close {
        return Err(EngineError::InvalidWindow { open, close });
    }
    if open == close || !slot_duration_hours.is_finite() || slot_duration_hours <= 0.0 {
        return Ok(Vec::new());
    }

    let step_minutes = (slot_duration_hours * 60.0).round() as i64;
    if step_minutes <= 0 {
        return Ok(Vec::new());
    }
    let step = Duration::minutes(step_minutes);

    let mut slots = Vec::new();
    let mut cursor = open;
    loop {
        // NaiveTime arithmetic wraps at midnight; a non-zero wrap means the
        // candidate end crossed 24:00 and must be rejected like any overflow.
        let (end, wrap) = cursor.overflowing_add_signed(step);
        if wrap != 0 || end > close {
            break;
        }
        slots.push(Slot { start: cursor, end });
        cursor = end;
    }

    Ok(slots)
}
