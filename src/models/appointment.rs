use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;

/// A booked consultation as persisted in the `appointments` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date: String,
    pub time: String,
    pub booked_at: String,
    pub status: AppointmentStatus,
}
