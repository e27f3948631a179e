use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/feedback",
            get(handlers::feedback::get_all_feedback).post(handlers::feedback::create_feedback),
        )
        .route(
            "/api/feedback/:id",
            get(handlers::feedback::get_feedback).delete(handlers::feedback::delete_feedback),
        )
        .route(
            "/api/feedback/appointment/:appointment_id",
            get(handlers::feedback::get_feedback_by_appointment),
        )
}
