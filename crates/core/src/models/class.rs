use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSection {
    pub class_id: i32,
    pub class_name: String,
    pub year_level: i32,
    pub created_at: DateTime<Utc>,
}

/// Class section with its enrolled-student count, as returned by the list
/// endpoint. The count comes from a single grouped join rather than one
/// query per row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    #[serde(flatten)]
    pub class: ClassSection,
    pub student_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassRequest {
    pub class_name: String,
    pub year_level: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateClassRequest {
    pub class_name: Option<String>,
    pub year_level: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassListResponse {
    pub classes: Vec<ClassSummary>,
}
