//! Best-effort audible alert for High-risk outcomes.
//!
//! Playback lives in the host environment and may be missing or blocked.
//! Errors stop here: they are logged and never reach the scoring result.

use thiserror::Error;

use crate::config::ALARM_SOUND_URL;
use crate::models::{AssessmentOutcome, RiskLevel};

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Audio playback not supported")]
    Unsupported,

    #[error("Audio playback blocked: {0}")]
    Blocked(String),
}

/// Host capability that can play the alarm.
pub trait AlertNotifier {
    fn notify(&self, level: RiskLevel) -> Result<(), AlertError>;

    /// Sound resource the host should play.
    fn sound_url(&self) -> &str {
        ALARM_SOUND_URL
    }
}

/// Notifier for hosts without audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl AlertNotifier for SilentNotifier {
    fn notify(&self, _level: RiskLevel) -> Result<(), AlertError> {
        Ok(())
    }
}

/// Fire the alarm when `outcome` is High. Returns whether playback succeeded.
pub fn sound_alert(notifier: &dyn AlertNotifier, outcome: &AssessmentOutcome) -> bool {
    if outcome.risk_level != RiskLevel::High {
        return false;
    }
    match notifier.notify(outcome.risk_level) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(url = notifier.sound_url(), "Alert not played: {e}");
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use super::*;

    /// Keeps every level it was asked to announce.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingNotifier {
        fired: Mutex<Vec<RiskLevel>>,
    }

    impl RecordingNotifier {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn fired(&self) -> Vec<RiskLevel> {
            self.fired.lock().map(|f| f.clone()).unwrap_or_default()
        }
    }

    impl AlertNotifier for RecordingNotifier {
        fn notify(&self, level: RiskLevel) -> Result<(), AlertError> {
            if let Ok(mut fired) = self.fired.lock() {
                fired.push(level);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingNotifier;
    use super::*;

    struct BlockedNotifier;

    impl AlertNotifier for BlockedNotifier {
        fn notify(&self, _level: RiskLevel) -> Result<(), AlertError> {
            Err(AlertError::Blocked("autoplay policy".into()))
        }
    }

    fn outcome(level: RiskLevel) -> AssessmentOutcome {
        AssessmentOutcome {
            score: 0,
            risk_level: level,
            advice: level.advice().into(),
        }
    }

    #[test]
    fn only_high_triggers_notifier() {
        let notifier = RecordingNotifier::new();
        assert!(!sound_alert(&notifier, &outcome(RiskLevel::Low)));
        assert!(!sound_alert(&notifier, &outcome(RiskLevel::Medium)));
        assert!(sound_alert(&notifier, &outcome(RiskLevel::High)));
        assert_eq!(notifier.fired(), vec![RiskLevel::High]);
    }

    #[test]
    fn playback_failure_is_swallowed() {
        assert!(!sound_alert(&BlockedNotifier, &outcome(RiskLevel::High)));
    }

    #[test]
    fn default_sound_is_alarm_clock() {
        assert!(SilentNotifier.sound_url().ends_with("alarm_clock.ogg"));
    }
}
