//! Calendar projection — merges heterogeneous event sources into a per-day
//! view for the rendered month grid.
//!
//! Each source is evaluated independently and the results are concatenated in
//! a fixed category order (events, tasks, maintenance, resident activity) so
//! rendering is stable across queries. No caching: every visible day is
//! re-evaluated per query, which is fine because each source check is O(k) in
//! the number of records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::days_in_month;
use crate::recurrence::RecurrenceRule;

/// An ad hoc calendar event pinned to one exact date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub date: NaiveDate,
}

/// A task or work order; it shows on the grid on any of its created, start,
/// or due dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub title: String,
    pub created: Option<NaiveDate>,
    pub start: Option<NaiveDate>,
    pub due: Option<NaiveDate>,
}

impl WorkItem {
    fn touches(&self, day: NaiveDate) -> bool {
        [self.created, self.start, self.due]
            .into_iter()
            .flatten()
            .any(|d| d == day)
    }
}

/// A recurring maintenance schedule; occurrence is delegated to its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub title: String,
    pub rule: RecurrenceRule,
}

/// Direction of a resident move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    In,
    Out,
}

/// A resident moving in or out on an exact date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentMove {
    pub resident: String,
    pub date: NaiveDate,
    pub direction: MoveDirection,
}

/// The caller-supplied bundle of event sources for one projection query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSources {
    pub events: Vec<CalendarEvent>,
    pub tasks: Vec<WorkItem>,
    pub maintenance: Vec<MaintenanceSchedule>,
    pub resident_moves: Vec<ResidentMove>,
}

/// Which source a projected entry came from. Variant order is the rendering
/// order of the per-day list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryCategory {
    Event,
    Task,
    Maintenance,
    ResidentActivity,
}

/// One entry on one day of the rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub category: EntryCategory,
    pub label: String,
}

/// Everything that happened or will happen on `day`, grouped by category.
///
/// A day with no matches yields an empty list, not an error. Within a
/// category, entries keep the order of the supplied records.
pub fn events_on_day(day: NaiveDate, sources: &EventSources) -> Vec<DayEntry> {
    let mut entries = Vec::new();

    for event in sources.events.iter().filter(|e| e.date == day) {
        entries.push(DayEntry {
            category: EntryCategory::Event,
            label: event.title.clone(),
        });
    }

    for task in sources.tasks.iter().filter(|t| t.touches(day)) {
        entries.push(DayEntry {
            category: EntryCategory::Task,
            label: task.title.clone(),
        });
    }

    for schedule in sources.maintenance.iter().filter(|m| m.rule.occurs_on(day)) {
        entries.push(DayEntry {
            category: EntryCategory::Maintenance,
            label: schedule.title.clone(),
        });
    }

    for mv in sources.resident_moves.iter().filter(|m| m.date == day) {
        let tag = match mv.direction {
            MoveDirection::In => "move-in",
            MoveDirection::Out => "move-out",
        };
        entries.push(DayEntry {
            category: EntryCategory::ResidentActivity,
            label: format!("{} ({})", mv.resident, tag),
        });
    }

    entries
}

/// Project a whole visible month: one `(day, entries)` pair per calendar day,
/// leap-aware. Days without matches carry an empty list so the grid renders
/// every cell.
pub fn project_month(
    year: i32,
    month: u32,
    sources: &EventSources,
) -> Vec<(NaiveDate, Vec<DayEntry>)> {
    let mut out = Vec::new();
    for day_num in 1..=days_in_month(year, month) {
        if let Some(day) = NaiveDate::from_ymd_opt(year, month, day_num) {
            out.push((day, events_on_day(day, sources)));
        }
    }
    out
}
