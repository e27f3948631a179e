//! # Appointment Handlers
//!
//! Booking goes through [`caresync_core::booking`], which runs the field and
//! conflict checks before anything is written. The remaining handlers are
//! straight reads and deletes against the appointment store.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use caresync_core::{
    booking,
    errors::CareError,
    models::appointment::{Appointment, NewAppointment, UpdateStatusRequest},
};
use std::sync::Arc;
use tracing::info;

use crate::{ApiState, middleware::error_handling::AppError};

const INVALID_STATUS: &str = "Invalid status data.";

fn not_found(id: i32) -> AppError {
    AppError(CareError::NotFound(format!("Appointment with ID {} not found", id)))
}

/// Creates an appointment
///
/// A missing or unreadable body is reported as `Invalid appointment data.`
/// rather than as a JSON rejection, so every client sees the same literal
/// messages.
///
/// # Endpoint
///
/// ```text
/// POST /api/appointments
/// ```
///
/// # Responses
///
/// * `201 Created` with the stored appointment and a `Location` header
/// * `400 Bad Request` when the body is absent or a required id is missing
/// * `409 Conflict` when the caregiver is already booked at that time
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    payload: Option<Json<NewAppointment>>,
) -> Result<impl IntoResponse, AppError> {
    let candidate = payload.map(|Json(candidate)| candidate);

    let appointment = booking::create_appointment(state.appointments.as_ref(), candidate).await?;
    info!(
        "Appointment {} booked: caregiver_id={}, date_time={}",
        appointment.id, appointment.caregiver_id, appointment.date_time
    );

    let location = format!("/api/appointments/{}", appointment.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(appointment),
    ))
}

#[axum::debug_handler]
pub async fn get_all_appointments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    Ok(Json(state.appointments.get_all().await?))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state
        .appointments
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn get_appointments_by_caregiver(
    State(state): State<Arc<ApiState>>,
    Path(caregiver_id): Path<i32>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    Ok(Json(state.appointments.get_by_caregiver_id(caregiver_id).await?))
}

#[axum::debug_handler]
pub async fn get_appointments_by_patient(
    State(state): State<Arc<ApiState>>,
    Path(patient_id): Path<i32>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    Ok(Json(state.appointments.get_by_patient_id(patient_id).await?))
}

/// Moves an appointment to a new status
///
/// Only scheduled appointments can change status; completed and cancelled
/// appointments are final.
#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
    payload: Option<Json<UpdateStatusRequest>>,
) -> Result<Json<Appointment>, AppError> {
    let Some(Json(payload)) = payload else {
        return Err(AppError(CareError::InvalidInput(INVALID_STATUS.to_string())));
    };
    let appointment = booking::change_status(state.appointments.as_ref(), id, payload.status).await?;
    info!("Appointment {} is now {:?}", id, appointment.status);

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state.appointments.delete(id).await? {
        return Err(not_found(id));
    }

    info!("Appointment {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
