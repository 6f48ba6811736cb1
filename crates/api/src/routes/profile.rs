use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/students", post(handlers::profile::create_student))
        .route("/api/students/me", get(handlers::profile::get_my_student))
        .route("/api/teachers", post(handlers::profile::create_teacher))
        .route("/api/teachers/me", get(handlers::profile::get_my_teacher))
}
