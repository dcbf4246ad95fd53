//! The timetable scheduling core: time-of-day normalization, the weekly
//! (day x slot) grid projection, and the edit workflow state machine.

pub mod grid;
pub mod time;
pub mod workflow;
