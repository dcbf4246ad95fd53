use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use schoolsync_core::{
    errors::SchoolError,
    models::settings::{SettingsResponse, UpdateSettingRequest},
};

use crate::{
    ApiState,
    middleware::{auth::ActorRole, error_handling::AppError},
};

/// Returns every stored setting as a key/value map. Clients load this once
/// at startup instead of keeping ambient global flags.
#[axum::debug_handler]
pub async fn get_settings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<SettingsResponse>, AppError> {
    let settings = schoolsync_db::repositories::settings::list_settings(&state.db_pool)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(SettingsResponse {
        settings: settings.into_iter().map(|s| (s.key, s.value)).collect(),
    }))
}

/// Saves one setting on change.
#[axum::debug_handler]
pub async fn put_setting(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Path(key): Path<String>,
    Json(payload): Json<UpdateSettingRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    role.require_admin()?;

    if key.is_empty() {
        return Err(AppError(SchoolError::Validation(
            "Setting key is required".to_string(),
        )));
    }

    schoolsync_db::repositories::settings::upsert_setting(&state.db_pool, &key, &payload.value)
        .await
        .map_err(SchoolError::Database)?;

    let settings = schoolsync_db::repositories::settings::list_settings(&state.db_pool)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(SettingsResponse {
        settings: settings.into_iter().map(|s| (s.key, s.value)).collect(),
    }))
}
