use chrono::{DateTime, Utc};
use eyre::{Result, eyre};
use sqlx::{FromRow, types::Json};
use caresync_core::models::{
    appointment::{Appointment, AppointmentStatus},
    availability::{Availability, AvailableSlot},
    feedback::Feedback,
    user::{Role, User},
};

#[derive(Debug, Clone, FromRow)]
pub struct DbAppointment {
    pub id: i32,
    pub patient_id: i32,
    pub caregiver_id: i32,
    pub date_time: DateTime<Utc>,
    pub status: i32,
}

impl DbAppointment {
    pub fn into_domain(self) -> Result<Appointment> {
        let status = AppointmentStatus::from_code(self.status)
            .ok_or_else(|| eyre!("Unknown appointment status code {} on row {}", self.status, self.id))?;

        Ok(Appointment {
            id: self.id,
            patient_id: self.patient_id,
            caregiver_id: self.caregiver_id,
            date_time: self.date_time,
            status,
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbAvailability {
    pub id: i32,
    pub caregiver_id: i32,
    pub available_slots: Json<Vec<AvailableSlot>>,
}

impl From<DbAvailability> for Availability {
    fn from(row: DbAvailability) -> Self {
        Self {
            id: row.id,
            caregiver_id: row.caregiver_id,
            available_slots: row.available_slots.0,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbFeedback {
    pub id: i32,
    pub appointment_id: i32,
    pub patient_id: i32,
    pub comment: String,
}

impl From<DbFeedback> for Feedback {
    fn from(row: DbFeedback) -> Self {
        Self {
            id: row.id,
            appointment_id: row.appointment_id,
            patient_id: row.patient_id,
            comment: row.comment,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbUser {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub roles: Json<Vec<Role>>,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            roles: row.roles.0,
        }
    }
}
