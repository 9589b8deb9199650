//! Error types for the runner crate

use thiserror::Error;
use trendwatch_detector::DetectionError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Detection failed: {0}")]
    Detection(#[from] DetectionError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
