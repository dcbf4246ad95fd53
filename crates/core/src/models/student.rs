use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_contact: Option<String>,
    pub class_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Student annotated with its class section, as returned by list/get
/// endpoints. The class fields come from a join and are absent for
/// unassigned students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentWithClass {
    #[serde(flatten)]
    pub student: Student,
    pub class_name: Option<String>,
    pub year_level: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_contact: Option<String>,
    pub class_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_contact: Option<String>,
    pub class_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentListResponse {
    pub students: Vec<StudentWithClass>,
}
