//! Appointment booking and doctor dashboard commands.

use serde::{Deserialize, Serialize};

use crate::appointment::{self, AppointmentForm};
use crate::commands::assessment::{get_stats_summary, StatsSummary};
use crate::core_state::CoreState;
use crate::db::KeyValueStore;
use crate::models::Appointment;

/// Confirmation panel shown after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub title: String,
    pub department: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

/// One row of the dashboard table. `number` starts at 1; `index` is what
/// `mark_appointment_done` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRow {
    pub number: usize,
    pub index: usize,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date: String,
    pub time: String,
    pub status: String,
}

impl AppointmentRow {
    fn new(index: usize, appt: Appointment) -> Self {
        Self {
            number: index + 1,
            index,
            name: appt.name,
            email: appt.email,
            phone: appt.phone,
            department: appt.department,
            date: appt.date,
            time: appt.time,
            status: appt.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub rows: Vec<AppointmentRow>,
    /// True when the "no appointments" message should be shown.
    pub is_empty: bool,
    pub stats: StatsSummary,
}

/// Validates and stores a booking.
pub fn book_appointment<S: KeyValueStore>(
    state: &CoreState<S>,
    form: &AppointmentForm,
) -> Result<BookingConfirmation, String> {
    let appt = appointment::book_appointment(&state.store, form).map_err(|e| e.to_string())?;

    Ok(BookingConfirmation {
        title: "✅ Appointment Booked Successfully!".into(),
        department: appt.department,
        date: appt.date,
        time: appt.time,
        message: "Our doctor will review your appointment shortly.".into(),
    })
}

/// Appointment table plus assessment statistics.
pub fn get_dashboard<S: KeyValueStore>(state: &CoreState<S>) -> Result<DashboardView, String> {
    let rows: Vec<AppointmentRow> = state
        .store
        .appointments()
        .map_err(|e| e.to_string())?
        .into_iter()
        .enumerate()
        .map(|(i, appt)| AppointmentRow::new(i, appt))
        .collect();

    Ok(DashboardView {
        is_empty: rows.is_empty(),
        rows,
        stats: get_stats_summary(state)?,
    })
}

/// Marks the appointment at `index` as done.
pub fn mark_appointment_done<S: KeyValueStore>(
    state: &CoreState<S>,
    index: usize,
) -> Result<(), String> {
    appointment::mark_done(&state.store, index).map_err(|e| e.to_string())
}

/// Static advice for a department.
pub fn get_department_advice(department: &str) -> String {
    appointment::department_advice(department).to_string()
}
