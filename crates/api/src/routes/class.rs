use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/classes",
            get(handlers::class::list_classes).post(handlers::class::create_class),
        )
        .route(
            "/api/classes/:id",
            get(handlers::class::get_class)
                .put(handlers::class::update_class)
                .delete(handlers::class::delete_class),
        )
}
