use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use std::sync::Arc;

use schoolsync_core::{
    errors::SchoolError,
    models::teacher::{CreateTeacherRequest, Teacher, TeacherListResponse, UpdateTeacherRequest},
};

use crate::{
    ApiState,
    middleware::{auth::ActorRole, error_handling::AppError},
};

#[axum::debug_handler]
pub async fn list_teachers(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<TeacherListResponse>, AppError> {
    let teachers = schoolsync_db::repositories::teacher::list_teachers(&state.db_pool)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(TeacherListResponse {
        teachers: teachers.into_iter().map(|row| row.into_model()).collect(),
    }))
}

#[axum::debug_handler]
pub async fn get_teacher(
    State(state): State<Arc<ApiState>>,
    Path(teacher_id): Path<i32>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = schoolsync_db::repositories::teacher::get_teacher_by_id(&state.db_pool, teacher_id)
        .await
        .map_err(SchoolError::Database)?
        .ok_or_else(|| SchoolError::NotFound(format!("Teacher with ID {teacher_id} not found")))?;

    Ok(Json(teacher.into_model()))
}

#[axum::debug_handler]
pub async fn create_teacher(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Json(payload): Json<CreateTeacherRequest>,
) -> Result<Json<Teacher>, AppError> {
    role.require_admin()?;

    if payload.first_name.is_empty() || payload.last_name.is_empty() {
        return Err(AppError(SchoolError::Validation(
            "first_name and last_name are required".to_string(),
        )));
    }

    let teacher = schoolsync_db::repositories::teacher::create_teacher(&state.db_pool, &payload)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(teacher.into_model()))
}

#[axum::debug_handler]
pub async fn update_teacher(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Path(teacher_id): Path<i32>,
    Json(payload): Json<UpdateTeacherRequest>,
) -> Result<Json<Teacher>, AppError> {
    role.require_admin()?;

    let existing = schoolsync_db::repositories::teacher::get_teacher_by_id(&state.db_pool, teacher_id)
        .await
        .map_err(SchoolError::Database)?;
    if existing.is_none() {
        return Err(AppError(SchoolError::NotFound(format!(
            "Teacher with ID {teacher_id} not found"
        ))));
    }

    let teacher =
        schoolsync_db::repositories::teacher::update_teacher(&state.db_pool, teacher_id, &payload)
            .await
            .map_err(SchoolError::Database)?;

    Ok(Json(teacher.into_model()))
}

#[axum::debug_handler]
pub async fn delete_teacher(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Path(teacher_id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    role.require_admin()?;

    let deleted = schoolsync_db::repositories::teacher::delete_teacher(&state.db_pool, teacher_id)
        .await
        .map_err(SchoolError::Database)?;
    if !deleted {
        return Err(AppError(SchoolError::NotFound(format!(
            "Teacher with ID {teacher_id} not found"
        ))));
    }

    Ok(Json(json!({ "success": true })))
}
