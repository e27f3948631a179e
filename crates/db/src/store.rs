//! Postgres-backed implementations of the `caresync_core::store` traits.
//!
//! Each store is a thin adapter over the free functions in
//! [`crate::repositories`], converting rows into domain models and unique
//! violations into `CareError::Conflict`.

use async_trait::async_trait;
use caresync_core::{
    errors::{CareError, CareResult},
    models::{
        appointment::{Appointment, AppointmentStatus, NewAppointment},
        availability::{Availability, AvailableSlot, NewAvailability},
        feedback::{Feedback, NewFeedback},
        user::{NewUser, User},
    },
    store::{AppointmentStore, AvailabilityStore, FeedbackStore, UserStore},
    validation::ValidationError,
};
use tracing::warn;

use crate::{
    DbPool,
    models::DbAppointment,
    repositories::{self, is_unique_violation},
};

fn into_appointments(rows: Vec<DbAppointment>) -> CareResult<Vec<Appointment>> {
    rows.into_iter()
        .map(|row| row.into_domain().map_err(CareError::Database))
        .collect()
}

#[derive(Clone)]
pub struct PgAppointmentStore {
    pool: DbPool,
}

impl PgAppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn get_all(&self) -> CareResult<Vec<Appointment>> {
        into_appointments(repositories::appointment::get_all_appointments(&self.pool).await?)
    }

    async fn get_by_id(&self, id: i32) -> CareResult<Option<Appointment>> {
        repositories::appointment::get_appointment_by_id(&self.pool, id)
            .await?
            .map(|row| row.into_domain().map_err(CareError::Database))
            .transpose()
    }

    async fn get_by_caregiver_id(&self, caregiver_id: i32) -> CareResult<Vec<Appointment>> {
        into_appointments(
            repositories::appointment::get_appointments_by_caregiver_id(&self.pool, caregiver_id)
                .await?,
        )
    }

    async fn get_by_patient_id(&self, patient_id: i32) -> CareResult<Vec<Appointment>> {
        into_appointments(
            repositories::appointment::get_appointments_by_patient_id(&self.pool, patient_id)
                .await?,
        )
    }

    async fn create(&self, appointment: NewAppointment) -> CareResult<Appointment> {
        match repositories::appointment::create_appointment(&self.pool, &appointment).await {
            Ok(row) => row.into_domain().map_err(CareError::Database),
            Err(err) if is_unique_violation(&err) => {
                warn!(
                    "Concurrent booking rejected: caregiver_id={}, date_time={}",
                    appointment.caregiver_id, appointment.date_time
                );
                Err(ValidationError::Conflict.into())
            }
            Err(err) => Err(CareError::Database(err)),
        }
    }

    async fn update_status(
        &self,
        id: i32,
        status: AppointmentStatus,
    ) -> CareResult<Option<Appointment>> {
        repositories::appointment::update_appointment_status(&self.pool, id, status)
            .await?
            .map(|row| row.into_domain().map_err(CareError::Database))
            .transpose()
    }

    async fn delete(&self, id: i32) -> CareResult<bool> {
        Ok(repositories::appointment::delete_appointment(&self.pool, id).await?)
    }
}

#[derive(Clone)]
pub struct PgAvailabilityStore {
    pool: DbPool,
}

impl PgAvailabilityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityStore for PgAvailabilityStore {
    async fn get_all(&self) -> CareResult<Vec<Availability>> {
        let rows = repositories::availability::get_all_availabilities(&self.pool).await?;
        Ok(rows.into_iter().map(Availability::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> CareResult<Option<Availability>> {
        let row = repositories::availability::get_availability_by_id(&self.pool, id).await?;
        Ok(row.map(Availability::from))
    }

    async fn get_by_caregiver_id(&self, caregiver_id: i32) -> CareResult<Vec<Availability>> {
        let rows =
            repositories::availability::get_availabilities_by_caregiver_id(&self.pool, caregiver_id)
                .await?;
        Ok(rows.into_iter().map(Availability::from).collect())
    }

    async fn create(&self, availability: NewAvailability) -> CareResult<Availability> {
        let slots = availability.sorted_slots();
        let row = repositories::availability::create_availability(
            &self.pool,
            availability.caregiver_id,
            &slots,
        )
        .await?;
        Ok(row.into())
    }

    async fn update_slots(
        &self,
        id: i32,
        mut slots: Vec<AvailableSlot>,
    ) -> CareResult<Option<Availability>> {
        slots.sort_by_key(|slot| slot.date);
        let row = repositories::availability::update_availability_slots(&self.pool, id, &slots)
            .await?;
        Ok(row.map(Availability::from))
    }

    async fn delete(&self, id: i32) -> CareResult<bool> {
        Ok(repositories::availability::delete_availability(&self.pool, id).await?)
    }
}

#[derive(Clone)]
pub struct PgFeedbackStore {
    pool: DbPool,
}

impl PgFeedbackStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn get_all(&self) -> CareResult<Vec<Feedback>> {
        let rows = repositories::feedback::get_all_feedback(&self.pool).await?;
        Ok(rows.into_iter().map(Feedback::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> CareResult<Option<Feedback>> {
        let row = repositories::feedback::get_feedback_by_id(&self.pool, id).await?;
        Ok(row.map(Feedback::from))
    }

    async fn get_by_appointment_id(&self, appointment_id: i32) -> CareResult<Vec<Feedback>> {
        let rows =
            repositories::feedback::get_feedback_by_appointment_id(&self.pool, appointment_id)
                .await?;
        Ok(rows.into_iter().map(Feedback::from).collect())
    }

    async fn create(&self, feedback: NewFeedback) -> CareResult<Feedback> {
        let row = repositories::feedback::create_feedback(&self.pool, &feedback).await?;
        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> CareResult<bool> {
        Ok(repositories::feedback::delete_feedback(&self.pool, id).await?)
    }
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn get_all(&self) -> CareResult<Vec<User>> {
        let rows = repositories::user::get_all_users(&self.pool).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> CareResult<Option<User>> {
        let row = repositories::user::get_user_by_id(&self.pool, id).await?;
        Ok(row.map(User::from))
    }

    async fn get_by_username(&self, username: &str) -> CareResult<Option<User>> {
        let row = repositories::user::get_user_by_username(&self.pool, username).await?;
        Ok(row.map(User::from))
    }

    async fn create(&self, user: NewUser) -> CareResult<User> {
        match repositories::user::create_user(
            &self.pool,
            &user.username,
            &user.password_hash,
            &user.roles,
        )
        .await
        {
            Ok(row) => Ok(row.into()),
            Err(err) if is_unique_violation(&err) => {
                Err(CareError::Conflict("Username is already taken.".to_string()))
            }
            Err(err) => Err(CareError::Database(err)),
        }
    }

    async fn delete(&self, id: i32) -> CareResult<bool> {
        Ok(repositories::user::delete_user(&self.pool, id).await?)
    }
}
