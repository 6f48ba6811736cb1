use axum::{
    Router,
    routing::{delete, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/subjects/:id/events",
            post(handlers::event::create_event),
        )
        .route(
            "/api/subjects/:id/events/:event_id",
            put(handlers::event::update_event),
        )
        .route("/api/events/:id", delete(handlers::event::delete_event))
}
