use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/calendar/events",
            get(handlers::calendar::get_calendar_events),
        )
        .route("/api/dashboard", get(handlers::calendar::get_dashboard))
}
