use axum::Json;
use chrono::Utc;
use pretty_assertions::assert_eq;

use schoolsync_api::middleware::{auth::ActorRole, error_handling::AppError};
use schoolsync_core::{
    errors::SchoolError,
    models::student::{CreateStudentRequest, Student, StudentListResponse},
};
use schoolsync_db::models::{DbStudent, DbStudentWithClass};

use crate::test_utils::TestContext;

fn db_student(student_id: i32, first_name: &str, last_name: &str, class_id: Option<i32>) -> DbStudent {
    let now = Utc::now();
    DbStudent {
        student_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: None,
        phone_number: None,
        date_of_birth: None,
        gender: None,
        address: None,
        guardian_name: None,
        guardian_contact: None,
        class_id,
        created_at: now,
        updated_at: now,
    }
}

fn create_request(first_name: &str, last_name: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: None,
        phone_number: None,
        date_of_birth: None,
        gender: None,
        address: None,
        guardian_name: None,
        guardian_contact: None,
        class_id: None,
    }
}

async fn list_students_wrapper(
    ctx: &mut TestContext,
) -> Result<Json<StudentListResponse>, AppError> {
    let students = ctx.student_repo.list_students().await?;

    Ok(Json(StudentListResponse {
        students: students.into_iter().map(|row| row.into_model()).collect(),
    }))
}

async fn create_student_wrapper(
    ctx: &mut TestContext,
    role: ActorRole,
    payload: CreateStudentRequest,
) -> Result<Json<Student>, AppError> {
    role.require_admin()?;

    if payload.first_name.is_empty() || payload.last_name.is_empty() {
        return Err(AppError(SchoolError::Validation(
            "first_name and last_name are required".to_string(),
        )));
    }

    let student = ctx.student_repo.create_student(payload).await?;

    Ok(Json(Student {
        student_id: student.student_id,
        first_name: student.first_name,
        last_name: student.last_name,
        email: student.email,
        phone_number: student.phone_number,
        date_of_birth: student.date_of_birth,
        gender: student.gender,
        address: student.address,
        guardian_name: student.guardian_name,
        guardian_contact: student.guardian_contact,
        class_id: student.class_id,
        created_at: student.created_at,
    }))
}

#[tokio::test]
async fn test_list_students_joins_class_columns() {
    let mut ctx = TestContext::new();

    ctx.student_repo.expect_list_students().returning(|| {
        Ok(vec![
            DbStudentWithClass {
                student: db_student(1, "Alice", "Nguyen", Some(3)),
                class_name: Some("7A".to_string()),
                year_level: Some(7),
            },
            DbStudentWithClass {
                student: db_student(2, "Ben", "Okafor", None),
                class_name: None,
                year_level: None,
            },
        ])
    });

    let Json(response) = list_students_wrapper(&mut ctx).await.unwrap();

    assert_eq!(response.students.len(), 2);
    assert_eq!(response.students[0].class_name.as_deref(), Some("7A"));
    // Unassigned student keeps NULL class columns.
    assert_eq!(response.students[1].class_name, None);
    assert_eq!(response.students[1].year_level, None);
}

#[tokio::test]
async fn test_create_student_returns_new_row() {
    let mut ctx = TestContext::new();

    ctx.student_repo
        .expect_create_student()
        .times(1)
        .returning(|request| {
            Ok(db_student(7, &request.first_name, &request.last_name, request.class_id))
        });

    let Json(student) =
        create_student_wrapper(&mut ctx, ActorRole::Admin, create_request("Alice", "Nguyen"))
            .await
            .unwrap();

    assert_eq!(student.student_id, 7);
    assert_eq!(student.first_name, "Alice");
}

#[tokio::test]
async fn test_create_student_rejects_blank_name() {
    // No expectation on the repo: a storage call would fail the test.
    let mut ctx = TestContext::new();

    let err = create_student_wrapper(&mut ctx, ActorRole::Admin, create_request("", "Nguyen"))
        .await
        .unwrap_err();

    assert!(matches!(err.0, SchoolError::Validation(_)));
}

#[tokio::test]
async fn test_create_student_requires_admin() {
    let mut ctx = TestContext::new();

    let err = create_student_wrapper(&mut ctx, ActorRole::Teacher, create_request("Alice", "Nguyen"))
        .await
        .unwrap_err();

    assert!(matches!(err.0, SchoolError::Authorization(_)));
}
