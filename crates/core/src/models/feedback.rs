use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i32,
    pub appointment_id: i32,
    pub patient_id: i32,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    #[serde(default)]
    pub appointment_id: i32,
    #[serde(default)]
    pub patient_id: i32,
    #[serde(default)]
    pub comment: String,
}
