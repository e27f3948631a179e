//! # Availability Handlers
//!
//! Caregivers publish the slots they can be booked in. Each availability
//! record belongs to one caregiver and holds its slots ordered by date.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use caresync_core::{
    errors::CareError,
    models::availability::{Availability, NewAvailability, UpdateAvailabilityRequest},
    validation::validate_availability,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{ApiState, middleware::error_handling::AppError};

const INVALID_AVAILABILITY: &str = "Invalid availability data.";

fn not_found(id: i32) -> AppError {
    AppError(CareError::NotFound(format!("Availability with ID {} not found", id)))
}

/// Adds an availability record for a caregiver
///
/// # Endpoint
///
/// ```text
/// POST /api/availability
/// ```
///
/// # Responses
///
/// * `201 Created` with the stored record and a `Location` header
/// * `400 Bad Request` with `Invalid availability data.` for an absent body,
///   or `CaregiverId is required.`
#[axum::debug_handler]
pub async fn add_availability(
    State(state): State<Arc<ApiState>>,
    payload: Option<Json<NewAvailability>>,
) -> Result<impl IntoResponse, AppError> {
    let candidate = validate_availability(payload.map(|Json(candidate)| candidate))
        .inspect_err(|e| warn!("Rejected availability: {}", e))?;

    let availability = state.availabilities.create(candidate).await?;
    info!(
        "Availability {} added for caregiver {} with {} slots",
        availability.id,
        availability.caregiver_id,
        availability.available_slots.len()
    );

    let location = format!("/api/availability/{}", availability.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(availability),
    ))
}

#[axum::debug_handler]
pub async fn get_all_availabilities(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Availability>>, AppError> {
    Ok(Json(state.availabilities.get_all().await?))
}

#[axum::debug_handler]
pub async fn get_availability_by_id(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<Availability>, AppError> {
    let availability = state
        .availabilities
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(availability))
}

#[axum::debug_handler]
pub async fn get_availabilities_by_caregiver_id(
    State(state): State<Arc<ApiState>>,
    Path(caregiver_id): Path<i32>,
) -> Result<Json<Vec<Availability>>, AppError> {
    Ok(Json(
        state
            .availabilities
            .get_by_caregiver_id(caregiver_id)
            .await?,
    ))
}

/// Replaces the slots of an availability record
#[axum::debug_handler]
pub async fn update_availability(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
    payload: Option<Json<UpdateAvailabilityRequest>>,
) -> Result<Json<Availability>, AppError> {
    let Some(Json(payload)) = payload else {
        return Err(AppError(CareError::InvalidInput(INVALID_AVAILABILITY.to_string())));
    };
    let availability = state
        .availabilities
        .update_slots(id, payload.available_slots)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(availability))
}

#[axum::debug_handler]
pub async fn delete_availability(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    // Look the record up first so a missing id is a 404, not a silent no-op
    state
        .availabilities
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !state.availabilities.delete(id).await? {
        return Err(not_found(id));
    }

    info!("Availability {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
