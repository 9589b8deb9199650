//! Vocabulary and smoothed baseline frequencies

use crate::frequency::DayFrequency;
use std::collections::{HashMap, HashSet};
use trendwatch_core::{DayBucket, Smoothing, Word};

/// Every distinct word across the history and current corpora
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<Word>,
}

impl Vocabulary {
    /// Union of the words of both corpora
    pub fn build(history: &[DayBucket], current: &[DayBucket]) -> Self {
        Self::from_buckets(history.iter().chain(current))
    }

    /// Union of the words of any sequence of buckets
    pub fn from_buckets<'a>(buckets: impl IntoIterator<Item = &'a DayBucket>) -> Self {
        let mut words = HashSet::new();
        for bucket in buckets {
            for token in bucket.tokens() {
                if !words.contains(token) {
                    words.insert(token.to_owned());
                }
            }
        }
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Long-run expected daily relative frequency of each word
///
/// Updated once per processed day with one-sided exponential smoothing:
/// only words present that day move, absent words keep their value. The
/// baseline is owned by the pipeline and passed by `&mut` into each update.
#[derive(Debug, Clone)]
pub struct VocabularyBaseline {
    smoothing: Smoothing,
    values: HashMap<Word, f64>,
    days_applied: usize,
}

impl VocabularyBaseline {
    /// Empty baseline; every word reads as 0
    pub fn new(smoothing: Smoothing) -> Self {
        Self {
            smoothing,
            values: HashMap::new(),
            days_applied: 0,
        }
    }

    /// Baseline with every vocabulary word initialised to 0
    pub fn from_vocabulary(vocabulary: &Vocabulary, smoothing: Smoothing) -> Self {
        Self {
            smoothing,
            values: vocabulary.iter().map(|w| (w.to_owned(), 0.0)).collect(),
            days_applied: 0,
        }
    }

    /// Baseline value of a word (0 when never seen)
    #[inline]
    pub fn get(&self, word: &str) -> f64 {
        self.values.get(word).copied().unwrap_or(0.0)
    }

    /// Check if the word is tracked
    pub fn contains(&self, word: &str) -> bool {
        self.values.contains_key(word)
    }

    /// Fold one day's frequencies into the baseline.
    ///
    /// A word outside the vocabulary is admitted with a prior of 0.
    pub fn update(&mut self, day: &DayFrequency) {
        for (word, frequency) in day.iter() {
            match self.values.get_mut(word) {
                Some(value) => *value = self.smoothing.apply(*value, frequency),
                None => {
                    log::trace!("Word '{}' not in vocabulary, admitting at 0", word);
                    self.values
                        .insert(word.to_owned(), self.smoothing.apply(0.0, frequency));
                }
            }
        }
        self.days_applied += 1;
    }

    /// Smoother in use
    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    /// Number of days folded in so far
    pub fn days_applied(&self) -> usize {
        self.days_applied
    }

    /// Number of tracked words
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
