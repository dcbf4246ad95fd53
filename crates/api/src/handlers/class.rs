use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use std::sync::Arc;

use schoolsync_core::{
    errors::SchoolError,
    models::class::{ClassListResponse, ClassSection, CreateClassRequest, UpdateClassRequest},
};

use crate::{
    ApiState,
    middleware::{auth::ActorRole, error_handling::AppError},
};

#[axum::debug_handler]
pub async fn list_classes(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ClassListResponse>, AppError> {
    let classes = schoolsync_db::repositories::class::list_classes(&state.db_pool)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(ClassListResponse {
        classes: classes.into_iter().map(|row| row.into_model()).collect(),
    }))
}

#[axum::debug_handler]
pub async fn get_class(
    State(state): State<Arc<ApiState>>,
    Path(class_id): Path<i32>,
) -> Result<Json<ClassSection>, AppError> {
    let class = schoolsync_db::repositories::class::get_class_by_id(&state.db_pool, class_id)
        .await
        .map_err(SchoolError::Database)?
        .ok_or_else(|| SchoolError::NotFound(format!("Class with ID {class_id} not found")))?;

    Ok(Json(class.into_model()))
}

#[axum::debug_handler]
pub async fn create_class(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Json(payload): Json<CreateClassRequest>,
) -> Result<Json<ClassSection>, AppError> {
    role.require_admin()?;

    if payload.class_name.is_empty() {
        return Err(AppError(SchoolError::Validation(
            "class_name is required".to_string(),
        )));
    }

    let class = schoolsync_db::repositories::class::create_class(&state.db_pool, &payload)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(class.into_model()))
}

#[axum::debug_handler]
pub async fn update_class(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Path(class_id): Path<i32>,
    Json(payload): Json<UpdateClassRequest>,
) -> Result<Json<ClassSection>, AppError> {
    role.require_admin()?;

    let existing = schoolsync_db::repositories::class::get_class_by_id(&state.db_pool, class_id)
        .await
        .map_err(SchoolError::Database)?;
    if existing.is_none() {
        return Err(AppError(SchoolError::NotFound(format!(
            "Class with ID {class_id} not found"
        ))));
    }

    let class = schoolsync_db::repositories::class::update_class(&state.db_pool, class_id, &payload)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(class.into_model()))
}

#[axum::debug_handler]
pub async fn delete_class(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Path(class_id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    role.require_admin()?;

    let deleted = schoolsync_db::repositories::class::delete_class(&state.db_pool, class_id)
        .await
        .map_err(SchoolError::Database)?;
    if !deleted {
        return Err(AppError(SchoolError::NotFound(format!(
            "Class with ID {class_id} not found"
        ))));
    }

    Ok(Json(json!({ "success": true })))
}
