//! Appointment booking and the doctor dashboard's mutations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::{local_timestamp, KeyValueStore, RecordStore, StoreError};
use crate::models::{Appointment, AppointmentStatus};
use crate::validation::{missing_fields, ValidationError};

// ═══════════════════════════════════════════
// Departments
// ═══════════════════════════════════════════

/// Short recommendation shown from the dashboard's "Advice" action.
pub fn department_advice(department: &str) -> &'static str {
    match department.trim().to_lowercase().as_str() {
        "cardiology" => "Review blood pressure, ECG and lipid profile before the visit.",
        "endocrinology" | "diabetology" => {
            "Order fasting blood sugar and HbA1c; ask about thirst, urination and vision changes."
        }
        "neurology" => "Note headache frequency, dizziness episodes and any memory complaints.",
        "pulmonology" => "Check oxygen saturation and ask how long the cough has lasted.",
        "oncology" => "Prioritise examination of any lump and document recent weight loss.",
        "orthopedics" => "Assess joint mobility and posture; consider an X-ray if pain is chronic.",
        "gynecology" => "Record cycle history and screen for PCOS symptoms.",
        "dentistry" | "dental" => "Inspect gums for bleeding and check for tooth infection.",
        _ => "Perform a general examination and basic blood work.",
    }
}

// ═══════════════════════════════════════════
// Booking
// ═══════════════════════════════════════════

/// Raw booking form fields as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date: String,
    pub time: String,
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Check required fields and build the pending appointment.
///
/// Name, email and phone are trimmed; department, date and time are kept as
/// entered.
pub fn validate_booking(form: &AppointmentForm) -> Result<Appointment, ValidationError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();

    let missing = missing_fields(&[
        ("name", name),
        ("email", email),
        ("phone", phone),
        ("date", form.date.as_str()),
    ]);
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequired { fields: missing });
    }

    Ok(Appointment {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        department: form.department.clone(),
        date: form.date.clone(),
        time: form.time.clone(),
        booked_at: local_timestamp(),
        status: AppointmentStatus::Pending,
    })
}

/// Validate and append a booking. Nothing is written when validation fails.
pub fn book_appointment<S: KeyValueStore>(
    store: &RecordStore<S>,
    form: &AppointmentForm,
) -> Result<Appointment, BookingError> {
    let appointment = validate_booking(form)?;
    let index = store.append_appointment(appointment.clone())?;
    tracing::info!(index, department = %appointment.department, "Appointment booked");
    Ok(appointment)
}

/// Dashboard "Mark Done" action.
pub fn mark_done<S: KeyValueStore>(store: &RecordStore<S>, index: usize) -> Result<(), StoreError> {
    store.update_appointment_status(index, AppointmentStatus::Done)
}
