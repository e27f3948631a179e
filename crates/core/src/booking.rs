//! # Booking
//!
//! The create and status-change flows for appointments.
//!
//! The conflict check reads the caregiver's appointments and then writes, with
//! no lock held in between. Two concurrent requests for the same caregiver and
//! time can both pass [`validate_and_prepare`]; the store is expected to
//! reject the second insert (the Postgres store does so with a partial unique
//! index) and report it as `CareError::Conflict`.

use tracing::{debug, warn};

use crate::{
    errors::{CareError, CareResult},
    models::appointment::{Appointment, AppointmentStatus, NewAppointment},
    store::AppointmentStore,
    validation::{require_fields, validate_and_prepare},
};

/// Validates `candidate` against the caregiver's existing appointments and
/// persists it. The store's `create` is called at most once, and only for a
/// candidate that passed validation.
pub async fn create_appointment(
    store: &dyn AppointmentStore,
    candidate: Option<NewAppointment>,
) -> CareResult<Appointment> {
    let candidate = require_fields(candidate).inspect_err(|e| warn!("Rejected appointment: {}", e))?;

    let existing = store.get_by_caregiver_id(candidate.caregiver_id).await?;
    debug!(
        "Caregiver {} has {} existing appointments",
        candidate.caregiver_id,
        existing.len()
    );

    let prepared = validate_and_prepare(Some(candidate), &existing)
        .inspect_err(|e| warn!("Rejected appointment: {}", e))?;

    store.create(prepared).await
}

/// Moves an appointment to `status` if its current status allows it.
pub async fn change_status(
    store: &dyn AppointmentStore,
    id: i32,
    status: AppointmentStatus,
) -> CareResult<Appointment> {
    let current = store
        .get_by_id(id)
        .await?
        .ok_or_else(|| CareError::NotFound(format!("Appointment with ID {} not found", id)))?;

    if !current.status.can_transition_to(status) {
        return Err(CareError::Validation(format!(
            "Cannot change appointment status from {:?} to {:?}",
            current.status, status
        )));
    }
    if current.status == status {
        return Ok(current);
    }

    store
        .update_status(id, status)
        .await?
        .ok_or_else(|| CareError::NotFound(format!("Appointment with ID {} not found", id)))
}
