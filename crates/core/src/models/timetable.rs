use serde::{Deserialize, Serialize};

/// One scheduled period. The natural key is
/// `(class_id, day_of_week, start_time)`; `timetable_id` is a surrogate
/// that stays stable when the same key is saved again.
///
/// The display fields are resolved at fetch time: `subject` and `teacher`
/// for the class perspective, `subject` and `class_name` for the teacher
/// perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub timetable_id: i32,
    pub class_id: i32,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub subject_id: i32,
    pub teacher_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Payload of `PUT /api/timetable/class/:id`. All fields are required for
/// submission; the optional ids mirror the unselected state of the form so
/// validation can report which field is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTimetableRequest {
    pub day_of_week: String,
    pub start_time: String,
    pub subject_id: Option<i32>,
    pub teacher_id: Option<i32>,
}

/// One cell of the rendered weekly grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridCellView {
    pub day: String,
    pub slot: String,
    pub entry: Option<TimetableEntry>,
}

/// The rendered weekly grid plus the raw entry list it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub days: Vec<String>,
    pub slots: Vec<String>,
    pub cells: Vec<GridCellView>,
    pub timetable: Vec<TimetableEntry>,
}
