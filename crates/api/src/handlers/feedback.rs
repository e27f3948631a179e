use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use caresync_core::{
    errors::CareError,
    models::feedback::{Feedback, NewFeedback},
    validation::validate_feedback,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{ApiState, middleware::error_handling::AppError};

fn not_found(id: i32) -> AppError {
    AppError(CareError::NotFound(format!("Feedback with ID {} not found", id)))
}

/// Records a patient's feedback on an appointment
#[axum::debug_handler]
pub async fn create_feedback(
    State(state): State<Arc<ApiState>>,
    payload: Option<Json<NewFeedback>>,
) -> Result<impl IntoResponse, AppError> {
    let candidate = validate_feedback(payload.map(|Json(candidate)| candidate))
        .inspect_err(|e| warn!("Rejected feedback: {}", e))?;

    let feedback = state.feedback.create(candidate).await?;
    info!(
        "Feedback {} recorded for appointment {}",
        feedback.id, feedback.appointment_id
    );

    let location = format!("/api/feedback/{}", feedback.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(feedback)))
}

#[axum::debug_handler]
pub async fn get_all_feedback(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Feedback>>, AppError> {
    Ok(Json(state.feedback.get_all().await?))
}

#[axum::debug_handler]
pub async fn get_feedback(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<Feedback>, AppError> {
    let feedback = state
        .feedback
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(feedback))
}

#[axum::debug_handler]
pub async fn get_feedback_by_appointment(
    State(state): State<Arc<ApiState>>,
    Path(appointment_id): Path<i32>,
) -> Result<Json<Vec<Feedback>>, AppError> {
    Ok(Json(state.feedback.get_by_appointment_id(appointment_id).await?))
}

#[axum::debug_handler]
pub async fn delete_feedback(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state.feedback.delete(id).await? {
        return Err(not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}
