use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use std::sync::Arc;

use schoolsync_core::{
    errors::SchoolError,
    models::student::{
        CreateStudentRequest, Student, StudentListResponse, StudentWithClass, UpdateStudentRequest,
    },
};

use crate::{
    ApiState,
    middleware::{auth::ActorRole, error_handling::AppError},
};

fn into_student(db: schoolsync_db::models::DbStudent) -> Student {
    Student {
        student_id: db.student_id,
        first_name: db.first_name,
        last_name: db.last_name,
        email: db.email,
        phone_number: db.phone_number,
        date_of_birth: db.date_of_birth,
        gender: db.gender,
        address: db.address,
        guardian_name: db.guardian_name,
        guardian_contact: db.guardian_contact,
        class_id: db.class_id,
        created_at: db.created_at,
    }
}

#[axum::debug_handler]
pub async fn list_students(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<StudentListResponse>, AppError> {
    let students = schoolsync_db::repositories::student::list_students(&state.db_pool)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(StudentListResponse {
        students: students.into_iter().map(|row| row.into_model()).collect(),
    }))
}

#[axum::debug_handler]
pub async fn get_student(
    State(state): State<Arc<ApiState>>,
    Path(student_id): Path<i32>,
) -> Result<Json<StudentWithClass>, AppError> {
    let student = schoolsync_db::repositories::student::get_student_by_id(&state.db_pool, student_id)
        .await
        .map_err(SchoolError::Database)?
        .ok_or_else(|| SchoolError::NotFound(format!("Student with ID {student_id} not found")))?;

    Ok(Json(student.into_model()))
}

#[axum::debug_handler]
pub async fn create_student(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<Json<Student>, AppError> {
    role.require_admin()?;

    if payload.first_name.is_empty() || payload.last_name.is_empty() {
        return Err(AppError(SchoolError::Validation(
            "first_name and last_name are required".to_string(),
        )));
    }

    let student = schoolsync_db::repositories::student::create_student(&state.db_pool, &payload)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(into_student(student)))
}

#[axum::debug_handler]
pub async fn update_student(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Path(student_id): Path<i32>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<Json<Student>, AppError> {
    role.require_admin()?;

    let existing = schoolsync_db::repositories::student::get_student_by_id(&state.db_pool, student_id)
        .await
        .map_err(SchoolError::Database)?;
    if existing.is_none() {
        return Err(AppError(SchoolError::NotFound(format!(
            "Student with ID {student_id} not found"
        ))));
    }

    let student =
        schoolsync_db::repositories::student::update_student(&state.db_pool, student_id, &payload)
            .await
            .map_err(SchoolError::Database)?;

    Ok(Json(into_student(student)))
}

#[axum::debug_handler]
pub async fn delete_student(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Path(student_id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    role.require_admin()?;

    let deleted = schoolsync_db::repositories::student::delete_student(&state.db_pool, student_id)
        .await
        .map_err(SchoolError::Database)?;
    if !deleted {
        return Err(AppError(SchoolError::NotFound(format!(
            "Student with ID {student_id} not found"
        ))));
    }

    Ok(Json(json!({ "success": true })))
}
