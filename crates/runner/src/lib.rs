//! Trendwatch Runner - ingestion, configuration and output around detection
//!
//! - **Ingest**: `day,id,text` records grouped into day buckets
//! - **Config**: JSON detection configuration with embedded defaults
//! - **Render**: text or JSON view of a detection report
//!
//! ## Flow
//!
//! ```text
//!   history.csv ──┐
//!                 ├──► load_day_buckets ──► DetectionPipeline::run ──► render
//!   current.csv ──┘                                ▲
//!                                                  │
//!   config.json ──────────► load_config ───────────┘
//! ```

pub mod config;
pub mod error;
pub mod ingest;
pub mod render;

// Re-export main types
pub use config::{load_config, load_config_from_str, load_default_config};
pub use error::{Result, RunnerError};
pub use ingest::{group_by_day, load_day_buckets, parse_record, parse_records};
pub use render::{TextReport, render_json, render_text};

use std::path::Path;

use trendwatch_detector::{DetectionConfig, DetectionPipeline, DetectionReport};

/// Load both input files and run detection over them
pub fn run_files<P: AsRef<Path>, Q: AsRef<Path>>(
    config: DetectionConfig,
    history: P,
    current: Q,
) -> Result<DetectionReport> {
    let history = load_day_buckets(history)?;
    let current = load_day_buckets(current)?;
    Ok(DetectionPipeline::run(config, &history, &current)?)
}
