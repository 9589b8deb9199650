//! Detection configuration

use crate::error::{DetectionError, Result};
use serde::{Deserialize, Serialize};
use trendwatch_core::Smoothing;

/// Weight kept on the prior baseline at each daily update
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.996;

/// Fraction of primary candidates walked before the cutoff
pub const DEFAULT_PRIMARY_FRACTION: f64 = 0.001;

/// Context entries ranked per primary word (the primary itself included)
pub const DEFAULT_CONTEXT_LIMIT: usize = 10;

/// Fewest distinct scores the quartile step accepts
pub const MIN_DISTINCT_SCORES: usize = 4;

/// What the pipeline does when a single day fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayErrorPolicy {
    /// Propagate the first day error to the caller
    #[default]
    Abort,
    /// Withhold the failed day, keep the baseline as accumulated, continue
    SkipDay,
}

/// Boxplot threshold parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// IQR multiplier for the upper whisker `w = Q3 + k * IQR`
    pub whisker_coefficient: f64,
    /// Primary threshold `alpha = m * w`
    pub alpha_multiplier: f64,
    /// Minimum distinct word-strength values for a day to be scored
    pub min_distinct_scores: usize,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            whisker_coefficient: 1.5,
            alpha_multiplier: 2.0,
            min_distinct_scores: MIN_DISTINCT_SCORES,
        }
    }
}

/// Configuration for a detection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Baseline smoothing factor, in `[0, 1)`
    pub smoothing_factor: f64,
    /// Threshold derivation
    pub threshold: ThresholdConfig,
    /// Primary-word cutoff fraction (see [`PrimaryWordDetector`](crate::PrimaryWordDetector))
    pub primary_fraction: f64,
    /// Ranked context entries considered per primary word
    pub context_limit: usize,
    /// Handling of per-day failures in [`DetectionPipeline::run`](crate::DetectionPipeline::run)
    pub on_day_error: DayErrorPolicy,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            threshold: ThresholdConfig::default(),
            primary_fraction: DEFAULT_PRIMARY_FRACTION,
            context_limit: DEFAULT_CONTEXT_LIMIT,
            on_day_error: DayErrorPolicy::default(),
        }
    }
}

impl DetectionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.smoothing()?;

        let t = &self.threshold;
        if !(t.whisker_coefficient >= 0.0) {
            return Err(DetectionError::InvalidConfig(format!(
                "whisker_coefficient must be >= 0, got {}",
                t.whisker_coefficient
            )));
        }
        if !(t.alpha_multiplier > 0.0) {
            return Err(DetectionError::InvalidConfig(format!(
                "alpha_multiplier must be > 0, got {}",
                t.alpha_multiplier
            )));
        }
        if t.min_distinct_scores < MIN_DISTINCT_SCORES {
            return Err(DetectionError::InvalidConfig(format!(
                "min_distinct_scores must be >= {}, got {}",
                MIN_DISTINCT_SCORES, t.min_distinct_scores
            )));
        }
        if !(self.primary_fraction > 0.0) {
            return Err(DetectionError::InvalidConfig(format!(
                "primary_fraction must be > 0, got {}",
                self.primary_fraction
            )));
        }
        Ok(())
    }

    /// Smoother for the configured factor
    pub fn smoothing(&self) -> Result<Smoothing> {
        Smoothing::new(self.smoothing_factor).ok_or_else(|| {
            DetectionError::InvalidConfig(format!(
                "smoothing_factor must be in [0, 1), got {}",
                self.smoothing_factor
            ))
        })
    }

    /// Same configuration with a different day-error policy
    pub fn with_policy(mut self, policy: DayErrorPolicy) -> Self {
        self.on_day_error = policy;
        self
    }
}
