//! Floating-point statistics for word-frequency modelling
//!
//! # Design
//!
//! - Plain `f64` throughout; frequencies are ratios in `[0, 1]`
//! - Orderings use `f64::total_cmp` so NaN never panics a sort
//! - Percentiles follow the midpoint rule (mean of the two bracketing
//!   order statistics)

mod quantile;
mod smoothing;

pub use quantile::{Quartiles, percentile_midpoint};
pub use smoothing::Smoothing;

/// Sort a copy of the values ascending
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

/// Number of distinct values in an ascending slice
#[inline]
pub fn distinct_sorted(sorted: &[f64]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    1 + sorted.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Number of distinct values in an arbitrary slice
pub fn distinct(values: &[f64]) -> usize {
    distinct_sorted(&sorted(values))
}
