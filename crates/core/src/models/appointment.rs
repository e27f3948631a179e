use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Integer code stored in the `appointments.status` column.
    pub fn code(self) -> i32 {
        match self {
            AppointmentStatus::Scheduled => 0,
            AppointmentStatus::Completed => 1,
            AppointmentStatus::Cancelled => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(AppointmentStatus::Scheduled),
            1 => Some(AppointmentStatus::Completed),
            2 => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_cancelled(self) -> bool {
        self == AppointmentStatus::Cancelled
    }

    /// Whether an appointment in this status may move to `next`.
    ///
    /// Only scheduled appointments change status; re-applying the current
    /// status is accepted as a no-op.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        self == next || self == AppointmentStatus::Scheduled
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i32,
    pub patient_id: i32,
    pub caregiver_id: i32,
    pub date_time: DateTime<Utc>,
    pub status: AppointmentStatus,
}

/// An appointment as submitted by a client, before the store assigns an id.
///
/// Missing identifiers deserialize to zero so the validator can report them
/// as missing rather than failing at the JSON layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    #[serde(default)]
    pub patient_id: i32,
    #[serde(default)]
    pub caregiver_id: i32,
    pub date_time: DateTime<Utc>,
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl NewAppointment {
    pub fn into_appointment(self, id: i32) -> Appointment {
        Appointment {
            id,
            patient_id: self.patient_id,
            caregiver_id: self.caregiver_id,
            date_time: self.date_time,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}
