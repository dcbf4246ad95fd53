//! Projection of a timetable entry list onto the fixed weekly grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::timetable::{GridCellView, TimetableEntry};
use crate::schedule::time::slot_matches;

/// A school day. Columns of the weekly grid, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const WEEK: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    pub fn parse(s: &str) -> Option<Day> {
        Day::WEEK.iter().copied().find(|d| d.as_str() == s)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical period start times for the class timetable rows.
pub const CLASS_SLOTS: [&str; 7] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00",
];

/// Canonical period start times for the teacher schedule rows. Teachers
/// can be scheduled one period earlier than any single class.
pub const TEACHER_SLOTS: [&str; 8] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00",
];

/// The derived, read-only weekly grid: a mapping from (day, slot) to zero
/// or one timetable entry.
///
/// Owns no state of its own; it borrows the entry list it was built from
/// and is rebuilt in full whenever that list changes. Entry sets are small
/// (bounded by days x slots), so there is no incremental diffing.
#[derive(Debug)]
pub struct WeeklyGrid<'a> {
    days: &'a [Day],
    slots: &'a [&'a str],
    // row-major: one row of cells per day
    cells: Vec<Option<&'a TimetableEntry>>,
}

impl<'a> WeeklyGrid<'a> {
    /// Builds the grid. Pure: for every (day, slot) pair, picks the entry
    /// whose day matches and whose start time shares the slot's minute
    /// prefix.
    ///
    /// At most one entry is expected per cell. Should the entry set carry
    /// duplicates for a key, the first match in input order wins; that is
    /// a defined tie-break, not an error.
    pub fn build(entries: &'a [TimetableEntry], days: &'a [Day], slots: &'a [&'a str]) -> Self {
        let mut cells = Vec::with_capacity(days.len() * slots.len());
        for day in days {
            for slot in slots {
                cells.push(entries.iter().find(|entry| {
                    entry.day_of_week == day.as_str() && slot_matches(&entry.start_time, slot)
                }));
            }
        }
        Self { days, slots, cells }
    }

    pub fn entry_at(&self, day: Day, slot: &str) -> Option<&'a TimetableEntry> {
        let row = self.days.iter().position(|d| *d == day)?;
        let col = self.slots.iter().position(|s| *s == slot)?;
        self.cells[row * self.slots.len() + col]
    }

    pub fn populated_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Flattens the grid into serializable cells, day-major, for the
    /// schedule endpoints.
    pub fn to_cells(&self) -> Vec<GridCellView> {
        let mut views = Vec::with_capacity(self.cells.len());
        for (row, day) in self.days.iter().enumerate() {
            for (col, slot) in self.slots.iter().enumerate() {
                views.push(GridCellView {
                    day: day.to_string(),
                    slot: (*slot).to_string(),
                    entry: self.cells[row * self.slots.len() + col].cloned(),
                });
            }
        }
        views
    }
}
