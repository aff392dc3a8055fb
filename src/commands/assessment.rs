//! Health analyzer form commands.

use serde::{Deserialize, Serialize};

use crate::assessment;
use crate::core_state::CoreState;
use crate::db::KeyValueStore;
use crate::models::{AnswerSet, HealthStats, RiskLevel};
use crate::validation::{is_yes, parse_age};

/// Raw analyzer form. Selectors hold `"yes"` / `"no"` or nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentForm {
    pub name: String,
    pub age: String,
    pub family_history: Option<String>,
    pub urination: Option<String>,
    pub chest_pain: Option<String>,
    pub weight_loss: Option<String>,
    pub vision: Option<String>,
}

impl AssessmentForm {
    /// Typed answers; an unanswered selector counts as "no".
    pub fn to_answers(&self) -> Result<AnswerSet, String> {
        Ok(AnswerSet {
            name: self.name.trim().to_string(),
            age: parse_age(&self.age).map_err(|e| e.to_string())?,
            family_history: is_yes(self.family_history.as_deref()),
            urination: is_yes(self.urination.as_deref()),
            chest_pain: is_yes(self.chest_pain.as_deref()),
            weight_loss: is_yes(self.weight_loss.as_deref()),
            vision: is_yes(self.vision.as_deref()),
        })
    }
}

/// Result banner shown under the analyzer form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBanner {
    pub css_class: String,
    pub label: String,
    pub advice: String,
    pub score: u32,
    pub factors: Vec<String>,
}

impl RiskBanner {
    fn new(level: RiskLevel, score: u32, advice: &str, factors: Vec<String>) -> Self {
        Self {
            css_class: level.css_class().to_string(),
            label: format!("{} RISK", level.as_str().to_uppercase()),
            advice: advice.to_string(),
            score,
            factors,
        }
    }
}

/// Dashboard summary of all assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
    pub total: u64,
    pub average_score: Option<f64>,
}

impl From<HealthStats> for StatsSummary {
    fn from(stats: HealthStats) -> Self {
        Self {
            low: stats.low,
            medium: stats.medium,
            high: stats.high,
            total: stats.total,
            average_score: stats.average_score(),
        }
    }
}

/// Scores the form, stores the outcome and returns the banner.
pub fn submit_assessment<S: KeyValueStore>(
    state: &CoreState<S>,
    form: &AssessmentForm,
) -> Result<RiskBanner, String> {
    let answers = form.to_answers()?;

    let report = assessment::submit_assessment(&state.store, &*state.notifier, &answers)
        .map_err(|e| e.to_string())?;

    let factors = report
        .factors
        .iter()
        .map(|f| f.label().to_string())
        .collect();
    Ok(RiskBanner::new(
        report.outcome.risk_level,
        report.outcome.score,
        &report.outcome.advice,
        factors,
    ))
}

/// Aggregate statistics for the dashboard header.
pub fn get_stats_summary<S: KeyValueStore>(state: &CoreState<S>) -> Result<StatsSummary, String> {
    let stats = state.store.stats().map_err(|e| e.to_string())?;
    Ok(StatsSummary::from(stats))
}
