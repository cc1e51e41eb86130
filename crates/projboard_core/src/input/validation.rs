//! Form field validation rules.
//!
//! # Invariants
//! - All bounds are inclusive: `min_length <= len <= max_length` and
//!   `min <= value <= max`.
//! - Length bounds apply to text values only; numeric bounds apply to
//!   numbers only.
//! - `required` rejects text that is empty after trimming.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Value under validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

/// Rule set for one form field. Unset bounds are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Rules {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.min_length = Some(value);
        self
    }

    pub fn min(mut self, value: i64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn max(mut self, value: i64) -> Self {
        self.max = Some(value);
        self
    }
}

/// First rule a value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    Required,
    TooShort { min_length: usize, actual: usize },
    TooLong { max_length: usize, actual: usize },
    BelowMin { min: i64, actual: i64 },
    AboveMax { max: i64, actual: i64 },
}

impl Display for RuleViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "a value is required"),
            Self::TooShort { min_length, actual } => write!(
                f,
                "must be at least {min_length} characters long, got {actual}"
            ),
            Self::TooLong { max_length, actual } => write!(
                f,
                "must be at most {max_length} characters long, got {actual}"
            ),
            Self::BelowMin { min, actual } => write!(f, "must be at least {min}, got {actual}"),
            Self::AboveMax { max, actual } => write!(f, "must be at most {max}, got {actual}"),
        }
    }
}

impl Error for RuleViolation {}

/// Checks one value against its rules.
///
/// # Errors
/// - Returns the first violated rule in order: required, length, range.
pub fn validate(value: FieldValue<'_>, rules: &Rules) -> Result<(), RuleViolation> {
    match value {
        FieldValue::Text(text) => {
            if rules.required && text.trim().is_empty() {
                return Err(RuleViolation::Required);
            }
            let actual = text.chars().count();
            if let Some(min_length) = rules.min_length {
                if actual < min_length {
                    return Err(RuleViolation::TooShort { min_length, actual });
                }
            }
            if let Some(max_length) = rules.max_length {
                if actual > max_length {
                    return Err(RuleViolation::TooLong { max_length, actual });
                }
            }
        }
        FieldValue::Number(actual) => {
            if let Some(min) = rules.min {
                if actual < min {
                    return Err(RuleViolation::BelowMin { min, actual });
                }
            }
            if let Some(max) = rules.max {
                if actual > max {
                    return Err(RuleViolation::AboveMax { max, actual });
                }
            }
        }
    }
    Ok(())
}
