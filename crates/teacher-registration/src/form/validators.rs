//! Field validators.

use chrono::NaiveDate;
use thiserror::Error;

/// Date format accepted for date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single validation rule attached to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Value must be present and non-empty.
    Required,
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
    /// ASCII digits only.
    Numeric,
    /// ISO date on or before the given day.
    MaxDate(NaiveDate),
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field is required")]
    Required,

    #[error("must be at least {required} characters, got {actual}")]
    MinLength { required: usize, actual: usize },

    #[error("must be at most {allowed} characters, got {actual}")]
    MaxLength { allowed: usize, actual: usize },

    #[error("must contain digits only")]
    Pattern,

    #[error("not a valid date: {0}")]
    InvalidDate(String),

    #[error("must not be after {max}")]
    AfterMaxDate { max: NaiveDate },
}

impl Validator {
    /// Check a value against this rule.
    ///
    /// Only `Required` rejects an empty value; the other rules skip it.
    pub fn check(&self, value: Option<&str>) -> Result<(), ValidationError> {
        let value = value.unwrap_or_default();

        if value.is_empty() {
            return match self {
                Validator::Required => Err(ValidationError::Required),
                _ => Ok(()),
            };
        }

        match *self {
            Validator::Required => Ok(()),
            Validator::MinLength(required) => {
                let actual = value.chars().count();
                if actual < required {
                    Err(ValidationError::MinLength { required, actual })
                } else {
                    Ok(())
                }
            }
            Validator::MaxLength(allowed) => {
                let actual = value.chars().count();
                if actual > allowed {
                    Err(ValidationError::MaxLength { allowed, actual })
                } else {
                    Ok(())
                }
            }
            Validator::Numeric => {
                if value.chars().all(|c| c.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err(ValidationError::Pattern)
                }
            }
            Validator::MaxDate(max) => {
                let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .map_err(|_| ValidationError::InvalidDate(value.to_string()))?;
                if date > max {
                    Err(ValidationError::AfterMaxDate { max })
                } else {
                    Ok(())
                }
            }
        }
    }
}
