use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use schoolsync_core::models::{
    class::{ClassSection, ClassSummary},
    student::{Student, StudentWithClass},
    subject::Subject,
    teacher::Teacher,
    timetable::TimetableEntry,
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudent {
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
    pub updated_at: DateTime<Utc>,
}

/// Student row joined with its class section (left join; the class
/// columns are NULL for unassigned students).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudentWithClass {
    #[sqlx(flatten)]
    pub student: DbStudent,
    pub class_name: Option<String>,
    pub year_level: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub teacher_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub department: Option<String>,
    pub qualification: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClass {
    pub class_id: i32,
    pub class_name: String,
    pub year_level: i32,
    pub created_at: DateTime<Utc>,
}

/// Class row annotated with its enrolled-student count from the grouped
/// join in `list_classes`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClassWithCount {
    #[sqlx(flatten)]
    pub class: DbClass,
    pub student_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSubject {
    pub subject_id: i32,
    pub subject_name: String,
    pub subject_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSetting {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimetableEntry {
    pub timetable_id: i32,
    pub class_id: i32,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub subject_id: i32,
    pub teacher_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Timetable row for the class perspective: subject name and teacher name
/// resolved at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClassTimetableRow {
    #[sqlx(flatten)]
    pub entry: DbTimetableEntry,
    pub subject_name: Option<String>,
    pub teacher_first_name: Option<String>,
    pub teacher_last_name: Option<String>,
}

/// Timetable row for the teacher perspective: subject name and class name
/// resolved at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacherTimetableRow {
    #[sqlx(flatten)]
    pub entry: DbTimetableEntry,
    pub subject_name: Option<String>,
    pub class_name: Option<String>,
}

impl DbStudentWithClass {
    pub fn into_model(self) -> StudentWithClass {
        let s = self.student;
        StudentWithClass {
            student: Student {
                student_id: s.student_id,
                first_name: s.first_name,
                last_name: s.last_name,
                email: s.email,
                phone_number: s.phone_number,
                date_of_birth: s.date_of_birth,
                gender: s.gender,
                address: s.address,
                guardian_name: s.guardian_name,
                guardian_contact: s.guardian_contact,
                class_id: s.class_id,
                created_at: s.created_at,
            },
            class_name: self.class_name,
            year_level: self.year_level,
        }
    }
}

impl DbTeacher {
    pub fn into_model(self) -> Teacher {
        Teacher {
            teacher_id: self.teacher_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            department: self.department,
            qualification: self.qualification,
            created_at: self.created_at,
        }
    }
}

impl DbClass {
    pub fn into_model(self) -> ClassSection {
        ClassSection {
            class_id: self.class_id,
            class_name: self.class_name,
            year_level: self.year_level,
            created_at: self.created_at,
        }
    }
}

impl DbClassWithCount {
    pub fn into_model(self) -> ClassSummary {
        ClassSummary {
            class: self.class.into_model(),
            student_count: self.student_count,
        }
    }
}

impl DbSubject {
    pub fn into_model(self) -> Subject {
        Subject {
            subject_id: self.subject_id,
            subject_name: self.subject_name,
            subject_code: self.subject_code,
        }
    }
}

impl DbTimetableEntry {
    fn into_bare_entry(self) -> TimetableEntry {
        TimetableEntry {
            timetable_id: self.timetable_id,
            class_id: self.class_id,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            subject_id: self.subject_id,
            teacher_id: self.teacher_id,
            subject: None,
            teacher: None,
            class_name: None,
        }
    }
}

impl DbClassTimetableRow {
    pub fn into_entry(self) -> TimetableEntry {
        let teacher = match (&self.teacher_first_name, &self.teacher_last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        };
        TimetableEntry {
            subject: self.subject_name,
            teacher,
            ..self.entry.into_bare_entry()
        }
    }
}

impl DbTeacherTimetableRow {
    pub fn into_entry(self) -> TimetableEntry {
        TimetableEntry {
            subject: self.subject_name,
            class_name: self.class_name,
            ..self.entry.into_bare_entry()
        }
    }
}
