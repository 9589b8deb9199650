//! Percentiles and boxplot quartiles

use serde::{Deserialize, Serialize};

/// Percentile of an ascending slice using midpoint interpolation
///
/// The fractional index is `pct / 100 * (n - 1)`. When it falls between
/// two order statistics the result is their mean, otherwise the order
/// statistic itself. Returns `None` for an empty slice or a percentile
/// outside `[0, 100]`.
pub fn percentile_midpoint(sorted: &[f64], pct: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&pct) {
        return None;
    }
    let index = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = index.floor() as usize;
    let hi = index.ceil() as usize;
    if lo == hi {
        Some(sorted[lo])
    } else {
        Some((sorted[lo] + sorted[hi]) / 2.0)
    }
}

/// First, second and third quartile of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Quartiles of an ascending slice
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        Some(Self {
            q1: percentile_midpoint(sorted, 25.0)?,
            q2: percentile_midpoint(sorted, 50.0)?,
            q3: percentile_midpoint(sorted, 75.0)?,
        })
    }

    /// Quartiles of unsorted values
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Self::from_sorted(&super::sorted(values))
    }

    /// Interquartile range `Q3 - Q1`
    #[inline]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Upper boxplot whisker `Q3 + coefficient * IQR`
    #[inline]
    pub fn upper_whisker(&self, coefficient: f64) -> f64 {
        self.q3 + coefficient * self.iqr()
    }
}
