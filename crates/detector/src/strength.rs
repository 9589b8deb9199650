//! Word strength (salience) scoring

use crate::baseline::VocabularyBaseline;
use crate::frequency::DayFrequency;
use indexmap::IndexMap;
use trendwatch_core::{DayLabel, Word};

/// Salience of each word seen today: observed frequency over baseline
///
/// A word with a baseline of exactly 0 scores 1.0. That is a convention
/// for unprecedented words, not a magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct WordStrength {
    day: DayLabel,
    scores: IndexMap<Word, f64>,
}

impl WordStrength {
    /// Score every word of the day against the current baseline
    pub fn score(baseline: &VocabularyBaseline, day: &DayFrequency) -> Self {
        let scores = day
            .iter()
            .map(|(word, frequency)| {
                let expected = baseline.get(word);
                let score = if expected == 0.0 {
                    1.0
                } else {
                    frequency / expected
                };
                (word.to_owned(), score)
            })
            .collect();

        Self {
            day: day.day().to_string(),
            scores,
        }
    }

    /// Build from precomputed scores, keeping the given order
    pub fn from_scores<I, W>(day: impl Into<DayLabel>, scores: I) -> Self
    where
        I: IntoIterator<Item = (W, f64)>,
        W: Into<Word>,
    {
        Self {
            day: day.into(),
            scores: scores.into_iter().map(|(w, s)| (w.into(), s)).collect(),
        }
    }

    /// Day label
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Score of a word, if it appeared today
    #[inline]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// `(word, score)` pairs in the day's first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(w, &s)| (w.as_str(), s))
    }

    /// All scores, unsorted
    pub fn values(&self) -> Vec<f64> {
        self.scores.values().copied().collect()
    }

    /// True when the word scores at or above the threshold
    #[inline]
    pub fn meets(&self, word: &str, threshold: f64) -> bool {
        self.get(word).is_some_and(|score| score >= threshold)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use trendwatch_core::{DayBucket, Smoothing};

    #[test]
    fn test_zero_baseline_scores_one() {
        let baseline = VocabularyBaseline::new(Smoothing::new(0.996).unwrap());
        let freq = DayFrequency::compute(&DayBucket::from_texts("d1", ["a a b"])).unwrap();
        let ws = WordStrength::score(&baseline, &freq);

        assert_eq!(ws.get("a"), Some(1.0));
        assert_eq!(ws.get("b"), Some(1.0));
        assert_eq!(ws.len(), 2);
    }

    #[test]
    fn test_ratio_against_baseline() {
        let mut baseline = VocabularyBaseline::new(Smoothing::new(0.5).unwrap());
        // baseline: a = 0.25, b = 0.25
        baseline.update(&DayFrequency::compute(&DayBucket::from_texts("h", ["a b"])).unwrap());

        // today: a = 0.75, b = 0.25, c unseen
        let today = DayBucket::from_texts("d", ["a a", "a b"]);
        let freq = DayFrequency::compute(&today).unwrap();
        let ws = WordStrength::score(&baseline, &freq);

        assert_relative_eq!(ws.get("a").unwrap(), 3.0);
        assert_relative_eq!(ws.get("b").unwrap(), 1.0);
        assert_eq!(ws.get("c"), None);
        assert!(ws.meets("a", 3.0));
        assert!(!ws.meets("b", 1.5));
        assert!(!ws.meets("c", 0.0));
    }

    #[test]
    fn test_only_todays_words_scored() {
        let mut baseline = VocabularyBaseline::new(Smoothing::new(0.5).unwrap());
        baseline.update(&DayFrequency::compute(&DayBucket::from_texts("h", ["old"])).unwrap());

        let freq = DayFrequency::compute(&DayBucket::from_texts("d", ["new"])).unwrap();
        let ws = WordStrength::score(&baseline, &freq);
        assert_eq!(ws.len(), 1);
        assert_eq!(ws.get("old"), None);
        assert_eq!(ws.day(), "d");
    }
}
