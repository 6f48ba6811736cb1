use axum::{
    Router,
    routing::{delete, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/subjects/:id/schedule",
            post(handlers::enrollment::schedule_subject),
        )
        .route(
            "/api/subjects/:id/schedule",
            delete(handlers::enrollment::unschedule_subject),
        )
}
