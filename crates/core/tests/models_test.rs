use chrono::Utc;
use pretty_assertions::assert_eq;
use schoolsync_core::models::{
    class::{ClassSection, ClassSummary},
    student::{Student, StudentWithClass},
    teacher::Teacher,
    timetable::{SaveTimetableRequest, TimetableEntry},
};
use serde_json::{from_str, json, to_value};

#[test]
fn test_timetable_entry_omits_unresolved_display_fields() {
    let entry = TimetableEntry {
        timetable_id: 1,
        class_id: 2,
        day_of_week: "Monday".to_string(),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        subject_id: 5,
        teacher_id: 3,
        subject: Some("Math".to_string()),
        teacher: Some("Jane Doe".to_string()),
        class_name: None,
    };

    let value = to_value(&entry).unwrap();
    assert_eq!(value["subject"], json!("Math"));
    assert_eq!(value["teacher"], json!("Jane Doe"));
    // The class perspective never resolves its own class name.
    assert!(value.get("class_name").is_none());
}

#[test]
fn test_save_request_accepts_unselected_pickers() {
    let request: SaveTimetableRequest = from_str(
        r#"{"day_of_week":"Monday","start_time":"09:00","subject_id":null,"teacher_id":5}"#,
    )
    .unwrap();

    assert_eq!(request.subject_id, None);
    assert_eq!(request.teacher_id, Some(5));
}

#[test]
fn test_student_with_class_flattens_join_fields() {
    let student = StudentWithClass {
        student: Student {
            student_id: 10,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: None,
            phone_number: None,
            date_of_birth: None,
            gender: None,
            address: None,
            guardian_name: None,
            guardian_contact: None,
            class_id: Some(4),
            created_at: Utc::now(),
        },
        class_name: Some("7A".to_string()),
        year_level: Some(7),
    };

    let value = to_value(&student).unwrap();
    // Flattened: the join fields sit next to the student's own columns.
    assert_eq!(value["student_id"], json!(10));
    assert_eq!(value["class_name"], json!("7A"));
}

#[test]
fn test_class_summary_carries_student_count() {
    let summary = ClassSummary {
        class: ClassSection {
            class_id: 4,
            class_name: "7A".to_string(),
            year_level: 7,
            created_at: Utc::now(),
        },
        student_count: 28,
    };

    let value = to_value(&summary).unwrap();
    assert_eq!(value["class_name"], json!("7A"));
    assert_eq!(value["student_count"], json!(28));
}

#[test]
fn test_teacher_full_name() {
    let teacher = Teacher {
        teacher_id: 1,
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: None,
        phone_number: None,
        department: None,
        qualification: None,
        created_at: Utc::now(),
    };

    assert_eq!(teacher.full_name(), "Grace Hopper");
}
