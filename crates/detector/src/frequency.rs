//! Daily corpus frequency

use crate::error::{DetectionError, Result};
use indexmap::IndexMap;
use trendwatch_core::{DayBucket, DayLabel, Word};

/// Relative frequency of every word seen on one day
///
/// `frequency = occurrences / total tokens of the day`. Words iterate in
/// first-appearance order, which is the tie-break for every later ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct DayFrequency {
    day: DayLabel,
    frequencies: IndexMap<Word, f64>,
    total_tokens: usize,
}

impl DayFrequency {
    /// Count the day's tokens and normalise by the day total.
    ///
    /// Fails with `EmptyDay` when the bucket has no posts or no tokens.
    pub fn compute(bucket: &DayBucket) -> Result<Self> {
        let empty = || DetectionError::EmptyDay {
            day: bucket.day().to_string(),
        };
        if bucket.is_empty() {
            return Err(empty());
        }

        let mut counts: IndexMap<Word, usize> = IndexMap::new();
        let mut total = 0usize;
        for token in bucket.tokens() {
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_owned(), 1);
                }
            }
            total += 1;
        }
        if total == 0 {
            return Err(empty());
        }

        let frequencies = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / total as f64))
            .collect();

        Ok(Self {
            day: bucket.day().to_string(),
            frequencies,
            total_tokens: total,
        })
    }

    /// Day label
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Relative frequency of a word, if it appeared today
    #[inline]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.frequencies.get(word).copied()
    }

    /// Check if a word appeared today
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    /// `(word, frequency)` pairs in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.frequencies.iter().map(|(w, &f)| (w.as_str(), f))
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Always false for a successfully computed day
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Token count the frequencies were normalised by
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frequencies_sum_to_one() {
        let bucket = DayBucket::from_texts("d1", ["a a b", "c a"]);
        let freq = DayFrequency::compute(&bucket).unwrap();

        assert_eq!(freq.total_tokens(), 5);
        assert_relative_eq!(freq.get("a").unwrap(), 3.0 / 5.0);
        assert_relative_eq!(freq.get("b").unwrap(), 1.0 / 5.0);
        assert_relative_eq!(freq.get("c").unwrap(), 1.0 / 5.0);
        assert_relative_eq!(freq.iter().map(|(_, f)| f).sum::<f64>(), 1.0);
        assert_eq!(freq.get("missing"), None);
    }

    #[test]
    fn test_first_appearance_order() {
        let bucket = DayBucket::from_texts("d1", ["z y", "x z", "y w"]);
        let freq = DayFrequency::compute(&bucket).unwrap();
        let words: Vec<&str> = freq.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["z", "y", "x", "w"]);
    }

    #[test]
    fn test_no_posts_is_empty_day() {
        let bucket = DayBucket::new("d1");
        assert_eq!(
            DayFrequency::compute(&bucket),
            Err(DetectionError::EmptyDay { day: "d1".into() })
        );
    }

    #[test]
    fn test_whitespace_only_posts_is_empty_day() {
        let bucket = DayBucket::from_texts("d2", ["   ", "\t", ""]);
        assert!(matches!(
            DayFrequency::compute(&bucket),
            Err(DetectionError::EmptyDay { .. })
        ));
    }
}
