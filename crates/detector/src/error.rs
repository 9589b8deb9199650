//! Detection errors

use crate::pipeline::Phase;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectionError {
    #[error("Day {day} has no posts or no tokens")]
    EmptyDay { day: String },

    #[error(
        "Day {day} has {distinct} distinct word-strength scores, at least {required} required"
    )]
    InsufficientData {
        day: String,
        distinct: usize,
        required: usize,
    },

    #[error("Primary word '{word}' matched no posts on day {day}")]
    NoMatchingPosts { day: String, word: String },

    #[error("Pipeline is {actual}, operation requires {expected}")]
    InvalidPhase { expected: Phase, actual: Phase },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DetectionError {
    /// Errors that describe one bad day rather than a broken run.
    /// Only these may be skipped under [`DayErrorPolicy::SkipDay`](crate::DayErrorPolicy).
    pub fn is_day_local(&self) -> bool {
        matches!(
            self,
            DetectionError::EmptyDay { .. }
                | DetectionError::InsufficientData { .. }
                | DetectionError::NoMatchingPosts { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DetectionError>;
