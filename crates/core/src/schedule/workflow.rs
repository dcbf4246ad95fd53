//! The edit workflow for a single timetable entry:
//! `Idle -> FormOpen -> Submitting -> (Idle on success | FormOpen on
//! failure)`. Validation runs before anything reaches storage, and a
//! failed submission hands the entered form back for correction.

use crate::errors::{SchoolError, SchoolResult};
use crate::models::timetable::SaveTimetableRequest;

/// The entry form. All four fields are required for submission; the
/// optional ids model the unselected state of the subject and teacher
/// pickers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleForm {
    pub day_of_week: String,
    pub start_time: String,
    pub subject_id: Option<i32>,
    pub teacher_id: Option<i32>,
}

impl ScheduleForm {
    /// Checks that every required field is filled, reporting the first
    /// missing one. A validation failure blocks submission; no storage
    /// call is issued.
    pub fn validate(&self) -> SchoolResult<()> {
        if self.day_of_week.is_empty() {
            return Err(SchoolError::Validation("day_of_week is required".into()));
        }
        if self.start_time.is_empty() {
            return Err(SchoolError::Validation("start_time is required".into()));
        }
        if self.subject_id.is_none() {
            return Err(SchoolError::Validation("subject_id is required".into()));
        }
        if self.teacher_id.is_none() {
            return Err(SchoolError::Validation("teacher_id is required".into()));
        }
        Ok(())
    }
}

impl From<SaveTimetableRequest> for ScheduleForm {
    fn from(req: SaveTimetableRequest) -> Self {
        Self {
            day_of_week: req.day_of_week,
            start_time: req.start_time,
            subject_id: req.subject_id,
            teacher_id: req.teacher_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditState {
    /// Grid displayed, no form open.
    Idle,
    /// Form open, pre-populated with defaults or the clicked cell.
    FormOpen(ScheduleForm),
    /// Validated form handed off to the entry store.
    Submitting(ScheduleForm),
}

/// State machine driving "open form -> validate -> upsert -> refresh" for
/// one timetable entry.
#[derive(Debug)]
pub struct EditWorkflow {
    state: EditState,
}

impl EditWorkflow {
    pub fn new() -> Self {
        Self {
            state: EditState::Idle,
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Opens the form. Re-opening over an already-open form replaces its
    /// contents (clicking another cell).
    pub fn open(&mut self, form: ScheduleForm) {
        self.state = EditState::FormOpen(form);
    }

    /// Closes the form without saving.
    pub fn cancel(&mut self) {
        if matches!(self.state, EditState::FormOpen(_)) {
            self.state = EditState::Idle;
        }
    }

    /// Validates the open form and moves to `Submitting`, returning the
    /// form for the upsert call. On validation failure the form stays
    /// open, with the entered values intact, so the user can correct and
    /// resubmit.
    pub fn submit(&mut self) -> SchoolResult<ScheduleForm> {
        let form = match &self.state {
            EditState::FormOpen(form) => form.clone(),
            _ => {
                return Err(SchoolError::Validation("no form is open".into()));
            }
        };
        form.validate()?;
        self.state = EditState::Submitting(form.clone());
        Ok(form)
    }

    /// Marks the submission as stored: the modal closes and the caller
    /// re-fetches the entry set in full (no optimistic patch).
    pub fn complete(&mut self) {
        if matches!(self.state, EditState::Submitting(_)) {
            self.state = EditState::Idle;
        }
    }

    /// Returns a failed submission to the open form, preserving input.
    /// Nothing retries automatically.
    pub fn fail(&mut self) {
        if let EditState::Submitting(form) = &self.state {
            self.state = EditState::FormOpen(form.clone());
        }
    }
}

impl Default for EditWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
