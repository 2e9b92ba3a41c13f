//! # strata-engine
//!
//! Deterministic scheduling and lifecycle computation for building management.
//!
//! The engine turns an amenity's operating hours into bookable slots and
//! detects reservation conflicts, evaluates recurrence rules against calendar
//! days, converts asset install dates and lifespans into replacement
//! forecasts, and projects heterogeneous event sources onto a month grid.
//!
//! Everything here is a pure, synchronous function over caller-supplied
//! collections: persistence, identity, and rendering live in the surrounding
//! application. "Now" is always an injected `as_of` argument, never a clock
//! read, so every result is reproducible.
//!
//! ## Modules
//!
//! - [`slots`] — operating window → ordered candidate slots
//! - [`availability`] — reservation overlap checks and the bookable grid
//! - [`recurrence`] — periodic rule evaluation (monthly through yearly)
//! - [`lifecycle`] — asset age/remaining-life and capital-forecast buckets
//! - [`projector`] — per-day merge of events, tasks, maintenance, moves
//! - [`dates`] — shared date arithmetic and best-effort parsing
//! - [`error`] — error types

pub mod availability;
pub mod dates;
pub mod error;
pub mod lifecycle;
pub mod projector;
pub mod recurrence;
pub mod slots;

pub use availability::{
    confirm_slot_free, day_grid, is_available, overlaps, Reservation, ReservationStatus,
    SlotAvailability,
};
pub use error::EngineError;
pub use lifecycle::{
    compute_lifecycle, forecast_buckets, AssetRecord, ForecastBucket, LifecycleStatus,
};
pub use projector::{events_on_day, project_month, DayEntry, EntryCategory, EventSources};
pub use recurrence::{RecurrencePeriod, RecurrenceRule};
pub use slots::{generate_slots, Slot};
