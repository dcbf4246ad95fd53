use axum::{
    Router,
    routing::{delete, get},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/subjects",
            get(handlers::subject::list_subjects).post(handlers::subject::create_subject),
        )
        .route("/api/subjects/:id", delete(handlers::subject::delete_subject))
}
