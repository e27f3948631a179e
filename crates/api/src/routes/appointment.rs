use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments",
            get(handlers::appointment::get_all_appointments)
                .post(handlers::appointment::create_appointment),
        )
        .route(
            "/api/appointments/:id",
            get(handlers::appointment::get_appointment)
                .delete(handlers::appointment::delete_appointment),
        )
        .route(
            "/api/appointments/:id/status",
            put(handlers::appointment::update_appointment_status),
        )
        .route(
            "/api/appointments/caregiver/:caregiver_id",
            get(handlers::appointment::get_appointments_by_caregiver),
        )
        .route(
            "/api/appointments/patient/:patient_id",
            get(handlers::appointment::get_appointments_by_patient),
        )
}
