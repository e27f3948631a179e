use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSlot {
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub id: i32,
    pub caregiver_id: i32,
    pub available_slots: Vec<AvailableSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAvailability {
    #[serde(default)]
    pub caregiver_id: i32,
    #[serde(default)]
    pub available_slots: Vec<AvailableSlot>,
}

impl NewAvailability {
    /// Slots ordered by date, the order they are stored and returned in.
    pub fn sorted_slots(&self) -> Vec<AvailableSlot> {
        let mut slots = self.available_slots.clone();
        slots.sort_by_key(|slot| slot.date);
        slots
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub available_slots: Vec<AvailableSlot>,
}
