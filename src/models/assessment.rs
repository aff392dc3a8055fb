use serde::{Deserialize, Serialize};

use super::enums::RiskLevel;

/// Questionnaire answers for one submission. Unanswered questions are `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    pub name: String,
    pub age: u32,
    pub family_history: bool,
    pub urination: bool,
    pub chest_pain: bool,
    pub weight_loss: bool,
    pub vision: bool,
}

/// Result of scoring one [`AnswerSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOutcome {
    pub score: u32,
    pub risk_level: RiskLevel,
    pub advice: String,
}

/// Identity of the person an outcome belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientMeta {
    pub name: String,
    pub age: u32,
}

impl From<&AnswerSet> for PatientMeta {
    fn from(answers: &AnswerSet) -> Self {
        Self {
            name: answers.name.clone(),
            age: answers.age,
        }
    }
}

/// Aggregate counters over every assessment ever recorded.
///
/// `low + medium + high == total` always holds for records written by
/// [`HealthStats::record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStats {
    #[serde(rename = "Low")]
    pub low: u64,
    #[serde(rename = "Medium")]
    pub medium: u64,
    #[serde(rename = "High")]
    pub high: u64,
    pub total: u64,
    #[serde(rename = "totalScore")]
    pub total_score: u64,
}

impl HealthStats {
    /// Count one outcome of `level` with `score`. Counters saturate at
    /// `u64::MAX` instead of wrapping.
    pub fn record(&mut self, level: RiskLevel, score: u32) {
        let tier = match level {
            RiskLevel::Low => &mut self.low,
            RiskLevel::Medium => &mut self.medium,
            RiskLevel::High => &mut self.high,
        };
        *tier = tier.saturating_add(1);
        self.total = self.total.saturating_add(1);
        self.total_score = self.total_score.saturating_add(u64::from(score));
    }

    pub fn count(&self, level: RiskLevel) -> u64 {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }

    /// Mean score across all assessments, `None` before the first one.
    pub fn average_score(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.total_score as f64 / self.total as f64)
        }
    }
}

/// One stored assessment, as listed in the patient history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub name: String,
    /// Older entries may carry `null` here when the age field was left blank.
    pub age: Option<u32>,
    pub risk_level: RiskLevel,
    pub score: u32,
    pub advice: String,
    #[serde(alias = "date")]
    pub timestamp: String,
}
