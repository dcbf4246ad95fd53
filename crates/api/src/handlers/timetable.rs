use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use std::sync::Arc;

use schoolsync_core::{
    errors::SchoolError,
    models::timetable::{SaveTimetableRequest, ScheduleResponse, TimetableEntry},
    schedule::{
        grid::{CLASS_SLOTS, Day, TEACHER_SLOTS, WeeklyGrid},
        time::end_of_period,
        workflow::ScheduleForm,
    },
};

use crate::{
    ApiState,
    middleware::{auth::ActorRole, error_handling::AppError},
};

/// Projects an entry list onto the weekly grid and packages both for the
/// client. The grid is rebuilt in full on every request; the entry sets
/// are tiny.
fn grid_response(entries: Vec<TimetableEntry>, slots: &'static [&'static str]) -> ScheduleResponse {
    let grid = WeeklyGrid::build(&entries, &Day::WEEK, slots);
    let cells = grid.to_cells();

    ScheduleResponse {
        days: Day::WEEK.iter().map(|day| day.to_string()).collect(),
        slots: slots.iter().map(|slot| (*slot).to_string()).collect(),
        cells,
        timetable: entries,
    }
}

#[axum::debug_handler]
pub async fn get_class_schedule(
    State(state): State<Arc<ApiState>>,
    Path(class_id): Path<i32>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let class = schoolsync_db::repositories::class::get_class_by_id(&state.db_pool, class_id)
        .await
        .map_err(SchoolError::Database)?;
    if class.is_none() {
        return Err(AppError(SchoolError::NotFound(format!(
            "Class with ID {class_id} not found"
        ))));
    }

    let rows = schoolsync_db::repositories::timetable::list_for_class(&state.db_pool, class_id)
        .await
        .map_err(SchoolError::Database)?;
    let entries: Vec<TimetableEntry> = rows.into_iter().map(|row| row.into_entry()).collect();

    Ok(Json(grid_response(entries, &CLASS_SLOTS)))
}

#[axum::debug_handler]
pub async fn get_teacher_schedule(
    State(state): State<Arc<ApiState>>,
    Path(teacher_id): Path<i32>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let teacher =
        schoolsync_db::repositories::teacher::get_teacher_by_id(&state.db_pool, teacher_id)
            .await
            .map_err(SchoolError::Database)?;
    if teacher.is_none() {
        return Err(AppError(SchoolError::NotFound(format!(
            "Teacher with ID {teacher_id} not found"
        ))));
    }

    let rows = schoolsync_db::repositories::timetable::list_for_teacher(&state.db_pool, teacher_id)
        .await
        .map_err(SchoolError::Database)?;
    let entries: Vec<TimetableEntry> = rows.into_iter().map(|row| row.into_entry()).collect();

    Ok(Json(grid_response(entries, &TEACHER_SLOTS)))
}

/// Saves one timetable entry for the class and returns the refreshed grid.
///
/// This is the submit step of the edit workflow: validate the form, derive
/// the end time, upsert by the natural key, then re-fetch the entry set in
/// full rather than patching the previous response.
#[axum::debug_handler]
pub async fn save_class_schedule(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Path(class_id): Path<i32>,
    Json(payload): Json<SaveTimetableRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    // The teacher perspective is read-only; only the admin screens mutate.
    role.require_admin()?;

    let form = ScheduleForm::from(payload);
    form.validate()?;

    // Periods are exactly one hour; the stored end time is derived, never
    // supplied by the client.
    let end_time = end_of_period(&form.start_time).ok_or_else(|| {
        SchoolError::Validation(format!("Invalid start time: {}", form.start_time))
    })?;

    let (Some(subject_id), Some(teacher_id)) = (form.subject_id, form.teacher_id) else {
        return Err(AppError(SchoolError::Validation(
            "subject_id and teacher_id are required".to_string(),
        )));
    };

    schoolsync_db::repositories::timetable::upsert_entry(
        &state.db_pool,
        class_id,
        &form.day_of_week,
        &form.start_time,
        &end_time,
        subject_id,
        teacher_id,
    )
    .await
    .map_err(SchoolError::Database)?;

    // Refresh the timetable
    let rows = schoolsync_db::repositories::timetable::list_for_class(&state.db_pool, class_id)
        .await
        .map_err(SchoolError::Database)?;
    let entries: Vec<TimetableEntry> = rows.into_iter().map(|row| row.into_entry()).collect();

    Ok(Json(grid_response(entries, &CLASS_SLOTS)))
}

#[axum::debug_handler]
pub async fn delete_entry(
    State(state): State<Arc<ApiState>>,
    role: ActorRole,
    Path(timetable_id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    role.require_admin()?;

    let deleted =
        schoolsync_db::repositories::timetable::delete_entry(&state.db_pool, timetable_id)
            .await
            .map_err(SchoolError::Database)?;
    if !deleted {
        return Err(AppError(SchoolError::NotFound(format!(
            "Timetable entry with ID {timetable_id} not found"
        ))));
    }

    Ok(Json(json!({ "success": true })))
}
