//! Questionnaire risk scoring.
//!
//! Additive score over six fixed weights, banded into three tiers. Pure:
//! no storage, no alerting.

use serde::{Deserialize, Serialize};

use crate::models::{AnswerSet, AssessmentOutcome, RiskLevel};

/// Ages strictly above this add [`AGE_WEIGHT`].
pub const AGE_THRESHOLD: u32 = 60;

pub const AGE_WEIGHT: u32 = 2;
pub const FAMILY_HISTORY_WEIGHT: u32 = 2;
pub const URINATION_WEIGHT: u32 = 2;
pub const CHEST_PAIN_WEIGHT: u32 = 3;
pub const WEIGHT_LOSS_WEIGHT: u32 = 2;
pub const VISION_WEIGHT: u32 = 2;

/// Highest score still banded Low.
pub const LOW_MAX: u32 = 3;
/// Highest score still banded Medium.
pub const MEDIUM_MAX: u32 = 6;

/// A questionnaire item that added to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskFactor {
    AgeOverSixty,
    FamilyHistory,
    FrequentUrination,
    ChestPain,
    WeightLoss,
    BlurredVision,
}

impl RiskFactor {
    pub fn weight(&self) -> u32 {
        match self {
            Self::AgeOverSixty => AGE_WEIGHT,
            Self::FamilyHistory => FAMILY_HISTORY_WEIGHT,
            Self::FrequentUrination => URINATION_WEIGHT,
            Self::ChestPain => CHEST_PAIN_WEIGHT,
            Self::WeightLoss => WEIGHT_LOSS_WEIGHT,
            Self::BlurredVision => VISION_WEIGHT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AgeOverSixty => "Age above 60",
            Self::FamilyHistory => "Family history",
            Self::FrequentUrination => "Frequent urination",
            Self::ChestPain => "Chest pain",
            Self::WeightLoss => "Unexplained weight loss",
            Self::BlurredVision => "Blurred vision",
        }
    }
}

/// Factors present in `answers`, in questionnaire order.
pub fn contributing_factors(answers: &AnswerSet) -> Vec<RiskFactor> {
    [
        (answers.age > AGE_THRESHOLD, RiskFactor::AgeOverSixty),
        (answers.family_history, RiskFactor::FamilyHistory),
        (answers.urination, RiskFactor::FrequentUrination),
        (answers.chest_pain, RiskFactor::ChestPain),
        (answers.weight_loss, RiskFactor::WeightLoss),
        (answers.vision, RiskFactor::BlurredVision),
    ]
    .into_iter()
    .filter_map(|(present, factor)| present.then_some(factor))
    .collect()
}

/// Band a score into its tier.
pub fn tier_for(score: u32) -> RiskLevel {
    if score <= LOW_MAX {
        RiskLevel::Low
    } else if score <= MEDIUM_MAX {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Score one questionnaire submission.
pub fn score(answers: &AnswerSet) -> AssessmentOutcome {
    let score = contributing_factors(answers)
        .iter()
        .map(RiskFactor::weight)
        .sum();
    let risk_level = tier_for(score);
    AssessmentOutcome {
        score,
        risk_level,
        advice: risk_level.advice().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(age: u32) -> AnswerSet {
        AnswerSet {
            name: "Test".into(),
            age,
            ..Default::default()
        }
    }

    #[test]
    fn no_symptoms_scores_zero_low() {
        let outcome = score(&answers(35));
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.risk_level, RiskLevel::Low);
        assert_eq!(outcome.advice, "Maintain healthy diet & regular checkups.");
    }

    #[test]
    fn age_sixty_is_not_over_sixty() {
        assert_eq!(score(&answers(60)).score, 0);
        assert_eq!(score(&answers(61)).score, 2);
    }

    #[test]
    fn each_weight_applies_alone() {
        let cases: [(fn(&mut AnswerSet), u32); 5] = [
            (|a| a.family_history = true, 2),
            (|a| a.urination = true, 2),
            (|a| a.chest_pain = true, 3),
            (|a| a.weight_loss = true, 2),
            (|a| a.vision = true, 2),
        ];
        for (set, expected) in cases {
            let mut a = answers(30);
            set(&mut a);
            assert_eq!(score(&a).score, expected);
        }
    }

    #[test]
    fn every_factor_sums_to_thirteen() {
        let a = AnswerSet {
            name: "All".into(),
            age: 80,
            family_history: true,
            urination: true,
            chest_pain: true,
            weight_loss: true,
            vision: true,
        };
        let outcome = score(&a);
        assert_eq!(outcome.score, 13);
        assert_eq!(outcome.risk_level, RiskLevel::High);
        assert_eq!(outcome.advice, "Urgent medical attention recommended!");
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(tier_for(0), RiskLevel::Low);
        assert_eq!(tier_for(3), RiskLevel::Low);
        assert_eq!(tier_for(4), RiskLevel::Medium);
        assert_eq!(tier_for(6), RiskLevel::Medium);
        assert_eq!(tier_for(7), RiskLevel::High);
    }

    #[test]
    fn older_patient_with_family_history_is_medium() {
        let a = AnswerSet {
            name: "Ravi".into(),
            age: 65,
            family_history: true,
            ..Default::default()
        };
        let outcome = score(&a);
        assert_eq!(outcome.score, 4);
        assert_eq!(outcome.risk_level, RiskLevel::Medium);
        assert_eq!(outcome.advice, "Schedule a general health check-up soon.");
    }

    #[test]
    fn chest_pain_with_vision_and_weight_loss_is_high() {
        let a = AnswerSet {
            chest_pain: true,
            vision: true,
            weight_loss: true,
            ..answers(40)
        };
        assert_eq!(score(&a).score, 7);
        assert_eq!(score(&a).risk_level, RiskLevel::High);
    }

    #[test]
    fn factor_weights_sum_to_score() {
        let a = AnswerSet {
            family_history: true,
            chest_pain: true,
            ..answers(70)
        };
        let factors = contributing_factors(&a);
        assert_eq!(
            factors,
            vec![
                RiskFactor::AgeOverSixty,
                RiskFactor::FamilyHistory,
                RiskFactor::ChestPain
            ]
        );
        let total: u32 = factors.iter().map(RiskFactor::weight).sum();
        assert_eq!(total, score(&a).score);
    }
}
