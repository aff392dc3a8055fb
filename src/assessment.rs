//! Health analyzer flow: score the questionnaire, sound the alarm for High
//! risk, then count the outcome and append it to the patient history.

use serde::{Deserialize, Serialize};

use crate::alert::{sound_alert, AlertNotifier};
use crate::db::{KeyValueStore, RecordStore, StoreError};
use crate::intelligence::risk::{self, RiskFactor};
use crate::models::{AnswerSet, AssessmentOutcome, PatientMeta, PatientRecord};

/// Everything produced by one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub outcome: AssessmentOutcome,
    pub factors: Vec<RiskFactor>,
    pub record: PatientRecord,
    pub alert_played: bool,
}

/// Score `answers` and persist the result.
pub fn submit_assessment<S: KeyValueStore>(
    store: &RecordStore<S>,
    notifier: &dyn AlertNotifier,
    answers: &AnswerSet,
) -> Result<AssessmentReport, StoreError> {
    let outcome = risk::score(answers);
    let factors = risk::contributing_factors(answers);
    let alert_played = sound_alert(notifier, &outcome);

    let record = store.record_assessment(&outcome, &PatientMeta::from(answers))?;

    tracing::info!(
        risk = outcome.risk_level.as_str(),
        score = outcome.score,
        "Assessment recorded"
    );

    Ok(AssessmentReport {
        outcome,
        factors,
        record,
        alert_played,
    })
}
