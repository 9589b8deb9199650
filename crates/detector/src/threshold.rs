//! Adaptive boxplot thresholds

use crate::config::ThresholdConfig;
use crate::error::{DetectionError, Result};
use crate::strength::WordStrength;
use serde::{Deserialize, Serialize};
use trendwatch_core::{Quartiles, stats};

/// Day-specific cutoffs derived from the word-strength distribution
///
/// - `w`: upper boxplot whisker, the context-word threshold
/// - `alpha`: `alpha_multiplier * w`, the primary-word threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPair {
    /// Quartiles the whisker was computed from
    pub quartiles: Quartiles,
    pub w: f64,
    pub alpha: f64,
}

impl ThresholdPair {
    /// Derive thresholds from a day's scores.
    ///
    /// Fails with `InsufficientData` when there are fewer distinct scores
    /// than `config.min_distinct_scores`.
    pub fn compute(strength: &WordStrength, config: &ThresholdConfig) -> Result<Self> {
        let sorted = stats::sorted(&strength.values());
        let distinct = stats::distinct_sorted(&sorted);
        let insufficient = || DetectionError::InsufficientData {
            day: strength.day().to_string(),
            distinct,
            required: config.min_distinct_scores,
        };
        if distinct < config.min_distinct_scores {
            return Err(insufficient());
        }

        let quartiles = Quartiles::from_sorted(&sorted).ok_or_else(insufficient)?;
        let w = quartiles.upper_whisker(config.whisker_coefficient);
        Ok(Self {
            quartiles,
            w,
            alpha: config.alpha_multiplier * w,
        })
    }

    /// Threshold for context-word candidates
    #[inline]
    pub fn context_threshold(&self) -> f64 {
        self.w
    }

    /// Threshold for primary words
    #[inline]
    pub fn primary_threshold(&self) -> f64 {
        self.alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn strength(scores: &[f64]) -> WordStrength {
        WordStrength::from_scores(
            "d1",
            scores.iter().enumerate().map(|(i, &s)| (format!("w{i}"), s)),
        )
    }

    #[test]
    fn test_midpoint_quartiles_and_whisker() {
        let ws = strength(&[1.0, 1.0, 1.0, 2.0, 5.0, 10.0]);
        let t = ThresholdPair::compute(&ws, &ThresholdConfig::default()).unwrap();

        assert_relative_eq!(t.quartiles.q1, 1.0);
        assert_relative_eq!(t.quartiles.q2, 1.5);
        assert_relative_eq!(t.quartiles.q3, 3.5);
        // 3.5 + 1.5 * (3.5 - 1)
        assert_relative_eq!(t.w, 7.25);
        assert_relative_eq!(t.alpha, 14.5);
    }

    #[test]
    fn test_order_of_scores_is_irrelevant() {
        let a = ThresholdPair::compute(
            &strength(&[10.0, 1.0, 5.0, 1.0, 2.0, 1.0]),
            &ThresholdConfig::default(),
        )
        .unwrap();
        let b = ThresholdPair::compute(
            &strength(&[1.0, 1.0, 1.0, 2.0, 5.0, 10.0]),
            &ThresholdConfig::default(),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_alpha_is_twice_w_and_w_above_q3() {
        let samples: [&[f64]; 3] = [
            &[0.5, 1.0, 2.0, 4.0],
            &[1.0, 1.0, 3.0, 3.0, 7.0, 9.0, 9.0, 120.0],
            &[0.01, 0.2, 0.2, 0.3, 1.0, 1.0, 1.0, 2.5, 60.0],
        ];
        for scores in samples {
            let t = ThresholdPair::compute(&strength(scores), &ThresholdConfig::default()).unwrap();
            assert_relative_eq!(t.alpha, 2.0 * t.w);
            assert!(t.w >= t.quartiles.q3);
            assert_eq!(t.context_threshold(), t.w);
            assert_eq!(t.primary_threshold(), t.alpha);
        }
    }

    #[test]
    fn test_fewer_than_four_distinct_scores() {
        let ws = strength(&[1.0, 1.0, 2.0, 3.0, 3.0]);
        assert_eq!(
            ThresholdPair::compute(&ws, &ThresholdConfig::default()),
            Err(DetectionError::InsufficientData {
                day: "d1".into(),
                distinct: 3,
                required: 4,
            })
        );
    }

    #[test]
    fn test_single_score() {
        let ws = strength(&[1.0]);
        assert!(matches!(
            ThresholdPair::compute(&ws, &ThresholdConfig::default()),
            Err(DetectionError::InsufficientData { distinct: 1, .. })
        ));
    }

    #[test]
    fn test_custom_coefficients() {
        let config = ThresholdConfig {
            whisker_coefficient: 0.0,
            alpha_multiplier: 3.0,
            ..Default::default()
        };
        let t = ThresholdPair::compute(&strength(&[1.0, 2.0, 3.0, 4.0]), &config).unwrap();
        assert_relative_eq!(t.w, 3.5);
        assert_relative_eq!(t.alpha, 10.5);
    }
}
