use axum::{
    Router,
    routing::{delete, get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/timetable/class/:id",
            get(handlers::timetable::get_class_schedule),
        )
        .route(
            "/api/timetable/class/:id",
            put(handlers::timetable::save_class_schedule),
        )
        .route(
            "/api/timetable/teacher/:id",
            get(handlers::timetable::get_teacher_schedule),
        )
        .route(
            "/api/timetable/:id",
            delete(handlers::timetable::delete_entry),
        )
}
