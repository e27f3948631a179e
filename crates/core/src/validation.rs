//! # Request Validation
//!
//! Pure checks run before anything is written. The appointment rules are the
//! heart of the scheduler: a candidate must name both a caregiver and a
//! patient, and must not land on a caregiver's time that is already taken by
//! an appointment that has not been cancelled.
//!
//! Nothing here touches storage. Callers fetch the caregiver's existing
//! appointments themselves and hand them in.

use thiserror::Error;

use crate::{
    errors::{CareError, CareResult},
    models::{
        appointment::{Appointment, NewAppointment},
        availability::NewAvailability,
        feedback::NewFeedback,
        user::{MAX_USERNAME_LEN, RegisterRequest},
    },
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid appointment data.")]
    InvalidInput,

    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Appointment already exists for the selected caregiver and time.")]
    Conflict,
}

/// Checks that a candidate is present and names a caregiver and a patient.
pub fn require_fields(candidate: Option<NewAppointment>) -> Result<NewAppointment, ValidationError> {
    let candidate = candidate.ok_or(ValidationError::InvalidInput)?;

    if candidate.caregiver_id <= 0 {
        return Err(ValidationError::MissingField("CaregiverId"));
    }
    if candidate.patient_id <= 0 {
        return Err(ValidationError::MissingField("PatientId"));
    }

    Ok(candidate)
}

/// Returns the first live appointment occupying the candidate's caregiver and time.
///
/// `existing_for_caregiver` is expected to hold one caregiver's appointments;
/// entries for any other caregiver never block the candidate.
pub fn find_conflict<'a>(
    candidate: &NewAppointment,
    existing_for_caregiver: &'a [Appointment],
) -> Option<&'a Appointment> {
    existing_for_caregiver.iter().find(|existing| {
        existing.caregiver_id == candidate.caregiver_id
            && existing.date_time == candidate.date_time
            && !existing.status.is_cancelled()
    })
}

/// Decides whether `candidate` may be booked given the caregiver's current
/// appointments, returning it unchanged when it can.
pub fn validate_and_prepare(
    candidate: Option<NewAppointment>,
    existing_for_caregiver: &[Appointment],
) -> Result<NewAppointment, ValidationError> {
    let candidate = require_fields(candidate)?;

    if find_conflict(&candidate, existing_for_caregiver).is_some() {
        return Err(ValidationError::Conflict);
    }

    Ok(candidate)
}

pub fn validate_availability(candidate: Option<NewAvailability>) -> CareResult<NewAvailability> {
    let candidate = candidate
        .ok_or_else(|| CareError::InvalidInput("Invalid availability data.".to_string()))?;

    if candidate.caregiver_id <= 0 {
        return Err(CareError::MissingField("CaregiverId is required.".to_string()));
    }

    Ok(candidate)
}

pub fn validate_feedback(candidate: Option<NewFeedback>) -> CareResult<NewFeedback> {
    let candidate =
        candidate.ok_or_else(|| CareError::InvalidInput("Invalid feedback data.".to_string()))?;

    if candidate.appointment_id <= 0 {
        return Err(CareError::MissingField("AppointmentId is required.".to_string()));
    }
    if candidate.patient_id <= 0 {
        return Err(CareError::MissingField("PatientId is required.".to_string()));
    }
    if candidate.comment.trim().is_empty() {
        return Err(CareError::MissingField("Comment is required.".to_string()));
    }

    Ok(candidate)
}

pub fn validate_registration(candidate: Option<RegisterRequest>) -> CareResult<RegisterRequest> {
    let candidate =
        candidate.ok_or_else(|| CareError::InvalidInput("Invalid user data.".to_string()))?;

    let username = candidate.username.trim();
    if username.is_empty() {
        return Err(CareError::MissingField("Username is required.".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(CareError::Validation(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LEN
        )));
    }
    if candidate.password.is_empty() {
        return Err(CareError::MissingField("Password is required.".to_string()));
    }

    Ok(candidate)
}
