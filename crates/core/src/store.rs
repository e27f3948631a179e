//! # Store Access
//!
//! Narrow persistence capabilities the scheduling rules are written against.
//! The Postgres implementations live in `caresync-db`; tests substitute
//! mockall doubles.

use async_trait::async_trait;

use crate::{
    errors::CareResult,
    models::{
        appointment::{Appointment, AppointmentStatus, NewAppointment},
        availability::{Availability, AvailableSlot, NewAvailability},
        feedback::{Feedback, NewFeedback},
        user::{NewUser, User},
    },
};

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn get_all(&self) -> CareResult<Vec<Appointment>>;

    async fn get_by_id(&self, id: i32) -> CareResult<Option<Appointment>>;

    async fn get_by_caregiver_id(&self, caregiver_id: i32) -> CareResult<Vec<Appointment>>;

    async fn get_by_patient_id(&self, patient_id: i32) -> CareResult<Vec<Appointment>>;

    /// Persists a new appointment and returns it with its assigned id.
    ///
    /// Fails with `CareError::Conflict` when the caregiver already holds a
    /// live appointment at the same time.
    async fn create(&self, appointment: NewAppointment) -> CareResult<Appointment>;

    /// Returns `None` when no appointment has the given id.
    async fn update_status(
        &self,
        id: i32,
        status: AppointmentStatus,
    ) -> CareResult<Option<Appointment>>;

    /// Returns whether a row was deleted.
    async fn delete(&self, id: i32) -> CareResult<bool>;
}

#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    async fn get_all(&self) -> CareResult<Vec<Availability>>;

    async fn get_by_id(&self, id: i32) -> CareResult<Option<Availability>>;

    async fn get_by_caregiver_id(&self, caregiver_id: i32) -> CareResult<Vec<Availability>>;

    async fn create(&self, availability: NewAvailability) -> CareResult<Availability>;

    async fn update_slots(
        &self,
        id: i32,
        slots: Vec<AvailableSlot>,
    ) -> CareResult<Option<Availability>>;

    async fn delete(&self, id: i32) -> CareResult<bool>;
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn get_all(&self) -> CareResult<Vec<Feedback>>;

    async fn get_by_id(&self, id: i32) -> CareResult<Option<Feedback>>;

    async fn get_by_appointment_id(&self, appointment_id: i32) -> CareResult<Vec<Feedback>>;

    async fn create(&self, feedback: NewFeedback) -> CareResult<Feedback>;

    async fn delete(&self, id: i32) -> CareResult<bool>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_all(&self) -> CareResult<Vec<User>>;

    async fn get_by_id(&self, id: i32) -> CareResult<Option<User>>;

    async fn get_by_username(&self, username: &str) -> CareResult<Option<User>>;

    /// Fails with `CareError::Conflict` when the username is taken.
    async fn create(&self, user: NewUser) -> CareResult<User>;

    async fn delete(&self, id: i32) -> CareResult<bool>;
}
