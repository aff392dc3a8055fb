//! Form field checks shared by the assessment and booking flows.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all required fields.")]
    MissingRequired { fields: Vec<&'static str> },

    #[error("Please enter a valid age (got {0:?}).")]
    InvalidAge(String),
}

/// A yes/no selector counts as yes only for the literal `"yes"`.
pub fn is_yes(value: Option<&str>) -> bool {
    value.map(str::trim) == Some("yes")
}

/// Parse the age field as a whole number of years.
pub fn parse_age(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidAge(raw.to_string()))
}

/// Names of the `(name, value)` pairs whose value is blank.
pub fn missing_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}
