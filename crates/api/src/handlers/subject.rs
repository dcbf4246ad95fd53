use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use std::sync::Arc;

use schoolsync_core::{
    errors::SchoolError,
    models::subject::{CreateSubjectRequest, Subject, SubjectListResponse},
};

use crate::{
    ApiState,
    middleware::{auth::ActorRole, error_handling::AppError},
};

#[axum::debug_handler]
pub async fn list_subjects(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<SubjectListResponse>, AppError> {
    let subjects = schoolsync_db::repositories::subject::list_subjects(&state.db_pool)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(SubjectListResponse {
        subjects: subjects.into_iter().map(|row| row.into_model()).collect(),
    }))
}

#[axum::debug_handler]
pub async fn create_subject(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Json(payload): Json<CreateSubjectRequest>,
) -> Result<Json<Subject>, AppError> {
    role.require_admin()?;

    if payload.subject_name.is_empty() {
        return Err(AppError(SchoolError::Validation(
            "subject_name is required".to_string(),
        )));
    }

    let subject = schoolsync_db::repositories::subject::create_subject(&state.db_pool, &payload)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(subject.into_model()))
}

#[axum::debug_handler]
pub async fn delete_subject(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Path(subject_id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    role.require_admin()?;

    let deleted = schoolsync_db::repositories::subject::delete_subject(&state.db_pool, subject_id)
        .await
        .map_err(SchoolError::Database)?;
    if !deleted {
        return Err(AppError(SchoolError::NotFound(format!(
            "Subject with ID {subject_id} not found"
        ))));
    }

    Ok(Json(json!({ "success": true })))
}
