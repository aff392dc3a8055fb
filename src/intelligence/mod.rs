pub mod classify;
pub mod risk;

pub use classify::{classify, classify_topic, Topic, FALLBACK_RESPONSE, RESPONSE_RULES};
pub use risk::{contributing_factors, score, tier_for, RiskFactor};
