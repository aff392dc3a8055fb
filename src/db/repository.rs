//! Typed collections over a [`KeyValueStore`].
//!
//! Each collection is one JSON value under a fixed key. Every mutation reads
//! the whole value, changes it in memory and writes the whole value back.

use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{KeyValueStore, StoreError};
use crate::config::{APPOINTMENTS_KEY, PATIENTS_KEY, STATS_KEY, TIMESTAMP_FORMAT};
use crate::models::{
    Appointment, AppointmentStatus, AssessmentOutcome, HealthStats, PatientMeta, PatientRecord,
};

/// Current local time in the format used for `timestamp` and `bookedAt`.
pub fn local_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Statistics, patient history and appointments sharing one backend.
pub struct RecordStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Wrap `backend` and create any missing collection.
    pub fn open(backend: S) -> Result<Self, StoreError> {
        let store = Self { backend };
        store.ensure_initialized()?;
        Ok(store)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Write the zero statistics record and empty lists for absent keys.
    /// Existing values, even unparseable ones, are left alone.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        if self.backend.get(STATS_KEY)?.is_none() {
            tracing::info!("Initializing {STATS_KEY}");
            self.write(STATS_KEY, &HealthStats::default())?;
        }
        for key in [PATIENTS_KEY, APPOINTMENTS_KEY] {
            if self.backend.get(key)?.is_none() {
                tracing::info!("Initializing {key}");
                self.backend.set(key, "[]")?;
            }
        }
        Ok(())
    }

    pub fn stats(&self) -> Result<HealthStats, StoreError> {
        self.read_or_default(STATS_KEY)
    }

    pub fn patients(&self) -> Result<Vec<PatientRecord>, StoreError> {
        self.read_or_default(PATIENTS_KEY)
    }

    pub fn appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        self.read_or_default(APPOINTMENTS_KEY)
    }

    /// Count `outcome` in the statistics, then append it to the patient
    /// history. The two writes are independent: if the second fails the
    /// statistics already include this outcome.
    pub fn record_assessment(
        &self,
        outcome: &AssessmentOutcome,
        patient: &PatientMeta,
    ) -> Result<PatientRecord, StoreError> {
        let mut stats = self.stats()?;
        stats.record(outcome.risk_level, outcome.score);
        self.write(STATS_KEY, &stats)?;

        let record = PatientRecord {
            name: patient.name.clone(),
            age: Some(patient.age),
            risk_level: outcome.risk_level,
            score: outcome.score,
            advice: outcome.advice.clone(),
            timestamp: local_timestamp(),
        };
        let mut patients = self.patients()?;
        patients.push(record.clone());
        self.write(PATIENTS_KEY, &patients)?;

        tracing::debug!(
            risk = outcome.risk_level.as_str(),
            score = outcome.score,
            total = stats.total,
            "Recorded assessment"
        );
        Ok(record)
    }

    /// Append a booking. Returns its index in the list.
    pub fn append_appointment(&self, appointment: Appointment) -> Result<usize, StoreError> {
        let mut appointments = self.appointments()?;
        appointments.push(appointment);
        self.write(APPOINTMENTS_KEY, &appointments)?;
        Ok(appointments.len() - 1)
    }

    /// Set the status of the appointment at `index`.
    pub fn update_appointment_status(
        &self,
        index: usize,
        status: AppointmentStatus,
    ) -> Result<(), StoreError> {
        let mut appointments = self.appointments()?;
        let len = appointments.len();
        let appointment = appointments
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange {
                collection: APPOINTMENTS_KEY,
                index,
                len,
            })?;
        appointment.status = status;
        self.write(APPOINTMENTS_KEY, &appointments)
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Unreadable stored value, using default");
                Ok(T::default())
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }
}
