use std::path::PathBuf;
use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "EarlyCare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage key of the aggregate statistics record.
pub const STATS_KEY: &str = "healthStats";
/// Storage key of the patient assessment list.
pub const PATIENTS_KEY: &str = "patients";
/// Storage key of the appointment list.
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Delay between echoing a chat message and showing the assistant reply.
pub const CHAT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Sound played when an assessment lands in the High tier.
pub const ALARM_SOUND_URL: &str = "https://actions.google.com/sounds/v1/alarms/alarm_clock.ogg";

/// Timestamp format for `timestamp` / `bookedAt` fields.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "earlycare_lib=info,warn"
}

/// Get the application data directory
/// ~/EarlyCare/ on all platforms, current directory when no home exists.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the SQLite file backing the local record store
pub fn storage_path() -> PathBuf {
    app_data_dir().join("local_storage.db")
}
