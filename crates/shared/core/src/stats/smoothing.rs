//! One-sided exponential smoothing

use serde::{Deserialize, Serialize};

/// Exponential smoothing with a fixed retention factor
///
/// `smoothed = factor * prior + (1 - factor) * observation`
///
/// The factor is the weight kept on the prior, so values close to 1 move
/// slowly and need a long warm-up. Unlike a classic EMA there is no
/// "first value initialises" step: the prior starts wherever the caller
/// keeps it (0 for an unseen word).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Smoothing {
    factor: f64,
}

impl Smoothing {
    /// Create a smoother. Returns `None` unless `0 <= factor < 1`.
    pub fn new(factor: f64) -> Option<Self> {
        if (0.0..1.0).contains(&factor) {
            Some(Self { factor })
        } else {
            None
        }
    }

    /// Retention factor applied to the prior
    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Weight given to a new observation
    #[inline]
    pub fn gain(&self) -> f64 {
        1.0 - self.factor
    }

    /// Blend an observation into a prior value
    #[inline]
    pub fn apply(&self, prior: f64, observation: f64) -> f64 {
        self.factor * prior + self.gain() * observation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factor_bounds() {
        assert!(Smoothing::new(0.0).is_some());
        assert!(Smoothing::new(0.996).is_some());
        assert!(Smoothing::new(1.0).is_none());
        assert!(Smoothing::new(-0.1).is_none());
        assert!(Smoothing::new(f64::NAN).is_none());
    }

    #[test]
    fn test_single_step_from_zero() {
        let s = Smoothing::new(0.996).unwrap();
        // 0.996 * 0 + 0.004 * (2/3)
        assert_relative_eq!(s.apply(0.0, 2.0 / 3.0), 0.004 * 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_monotonic_convergence() {
        let s = Smoothing::new(0.9).unwrap();
        let target = 0.25;
        let mut value = 0.0;
        let mut last_gap = f64::INFINITY;

        for _ in 0..200 {
            value = s.apply(value, target);
            let gap = target - value;
            assert!(gap >= 0.0, "smoothing overshot the target");
            assert!(gap < last_gap);
            last_gap = gap;
        }
        assert_relative_eq!(value, target, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_factor_tracks_observation() {
        let s = Smoothing::new(0.0).unwrap();
        assert_eq!(s.apply(0.7, 0.1), 0.1);
    }
}
