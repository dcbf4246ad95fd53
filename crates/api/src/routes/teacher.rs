use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/teachers",
            get(handlers::teacher::list_teachers).post(handlers::teacher::create_teacher),
        )
        .route(
            "/api/teachers/:id",
            get(handlers::teacher::get_teacher)
                .put(handlers::teacher::update_teacher)
                .delete(handlers::teacher::delete_teacher),
        )
}
