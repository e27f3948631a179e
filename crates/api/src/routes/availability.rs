use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability",
            get(handlers::availability::get_all_availabilities)
                .post(handlers::availability::add_availability),
        )
        .route(
            "/api/availability/:id",
            get(handlers::availability::get_availability_by_id)
                .put(handlers::availability::update_availability)
                .delete(handlers::availability::delete_availability),
        )
        .route(
            "/api/availability/caregiver/:caregiver_id",
            get(handlers::availability::get_availabilities_by_caregiver_id),
        )
}
