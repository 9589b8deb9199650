//! Trendwatch Detector
//!
//! Finds words that burst in a day's posts relative to a long-run baseline,
//! then mines the words that co-occur with each of them.
//!
//! ## Pipeline
//!
//! ```text
//!   history days ──► DayFrequency ──► VocabularyBaseline (warm-up)
//!                                          │
//!   current day ───► DayFrequency ──► WordStrength ──► ThresholdPair (w, alpha)
//!                         │                │                 │
//!                         │                ▼                 ▼
//!                         │        PrimaryWordDetector  (WS >= alpha)
//!                         │                │
//!                         ▼                ▼
//!                   ContextWordMiner  (WS >= w, P(C|P)) ──► ContextDocument
//!                         │
//!                         └──► VocabularyBaseline::update (after scoring)
//! ```
//!
//! Days are processed strictly in order. The baseline used to score a day
//! only reflects the days before it.

pub mod baseline;
pub mod config;
pub mod context;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod primary;
pub mod strength;
pub mod threshold;

// Re-export main types
pub use baseline::{Vocabulary, VocabularyBaseline};
pub use config::{DayErrorPolicy, DetectionConfig, ThresholdConfig};
pub use context::{ContextWordMiner, PostIndex};
pub use error::{DetectionError, Result};
pub use frequency::DayFrequency;
pub use pipeline::{DayOutcome, DaySummary, DetectionPipeline, DetectionReport, Phase};
pub use primary::{PrimaryWordDetector, PrimaryWordSet};
pub use strength::WordStrength;
pub use threshold::ThresholdPair;
