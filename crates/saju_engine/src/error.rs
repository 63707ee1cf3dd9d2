//! Error types for the engine.

use saju_calendar::{TableError, UnsupportedDateError};
use thiserror::Error;

/// Request field named in a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Gender,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Gender => "gender",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// First rule a birth request broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Per-request failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unsupported date: {0}")]
    UnsupportedDate(#[from] UnsupportedDateError),
}

/// Startup failure while constructing a [`crate::SajuEngine`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid engine config: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Table(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message() {
        let e = ValidationError::new(Field::Month, "must be within 1..=12, got 13");
        assert_eq!(e.to_string(), "invalid month: must be within 1..=12, got 13");
    }

    #[test]
    fn unsupported_wraps() {
        let e: SajuError = UnsupportedDateError::MissingMonth {
            year: 2024,
            month: 4,
            leap: true,
        }
        .into();
        assert_eq!(
            e.to_string(),
            "unsupported date: lunar year 2024 has no leap month 4"
        );
    }
}
