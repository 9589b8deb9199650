//! Context word mining
//!
//! For each primary word P, rank the day's context candidates C
//! (`WS >= w`) by `P(C|P) = |posts with P and C| / |posts with P|`.
//! Co-occurrence is computed from an inverted index built in one pass
//! over the day's posts, then sorted-list intersections.

use crate::error::{DetectionError, Result};
use crate::frequency::DayFrequency;
use crate::strength::WordStrength;
use std::collections::HashMap;
use trendwatch_core::{ContextDocument, DayBucket, PrimaryWord};

/// Inverted index from word to the ascending indices of posts containing it
#[derive(Debug, Clone, Default)]
pub struct PostIndex<'a> {
    postings: HashMap<&'a str, Vec<usize>>,
    post_count: usize,
}

impl<'a> PostIndex<'a> {
    /// Index every post of a day
    pub fn build(bucket: &'a DayBucket) -> Self {
        let mut postings: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (post, tokens) in bucket.posts_tokens().enumerate() {
            for token in tokens {
                let list = postings.entry(token).or_default();
                // a word repeated inside one post counts once
                if list.last() != Some(&post) {
                    list.push(post);
                }
            }
        }
        Self {
            postings,
            post_count: bucket.len(),
        }
    }

    /// Posts containing the word, ascending
    pub fn posts_with(&self, word: &str) -> &[usize] {
        self.postings.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of posts containing both words
    pub fn co_occurrences(&self, a: &str, b: &str) -> usize {
        intersection_len(self.posts_with(a), self.posts_with(b))
    }

    /// Number of indexed posts
    pub fn post_count(&self) -> usize {
        self.post_count
    }
}

/// Size of the intersection of two ascending lists
fn intersection_len(a: &[usize], b: &[usize]) -> usize {
    let (mut i, mut j, mut n) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                n += 1;
                i += 1;
                j += 1;
            }
        }
    }
    n
}

/// Builds one [`ContextDocument`] per primary word
#[derive(Debug, Clone, Copy)]
pub struct ContextWordMiner {
    limit: usize,
}

impl ContextWordMiner {
    /// `limit` is the number of ranked entries considered per primary word.
    /// The primary word itself is dropped from them if present.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Context candidates for the day: words with `WS >= w`,
    /// in first-appearance order
    pub fn candidates<'f>(
        &self,
        frequency: &'f DayFrequency,
        strength: &WordStrength,
        w: f64,
    ) -> Vec<&'f str> {
        frequency
            .iter()
            .map(|(word, _)| word)
            .filter(|word| strength.meets(word, w))
            .collect()
    }

    /// Mine context documents for the day's primary words, in primary order.
    ///
    /// Fails with `NoMatchingPosts` if a primary word occurs in no post.
    pub fn mine(
        &self,
        frequency: &DayFrequency,
        strength: &WordStrength,
        w: f64,
        primaries: &[PrimaryWord],
        bucket: &DayBucket,
    ) -> Result<Vec<ContextDocument>> {
        if primaries.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.candidates(frequency, strength, w);
        let index = PostIndex::build(bucket);

        primaries
            .iter()
            .map(|primary| self.document_for(&primary.word, &candidates, &index, bucket.day()))
            .collect()
    }

    fn document_for(
        &self,
        primary: &str,
        candidates: &[&str],
        index: &PostIndex<'_>,
        day: &str,
    ) -> Result<ContextDocument> {
        let with_primary = index.posts_with(primary);
        if with_primary.is_empty() {
            return Err(DetectionError::NoMatchingPosts {
                day: day.to_string(),
                word: primary.to_string(),
            });
        }
        let denominator = with_primary.len() as f64;

        let mut ranked: Vec<(&str, f64)> = candidates
            .iter()
            .map(|&candidate| {
                let shared = intersection_len(with_primary, index.posts_with(candidate));
                (candidate, shared as f64 / denominator)
            })
            .collect();
        // stable: equal probabilities keep candidate order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut document = ContextDocument::new(day, primary);
        for (word, probability) in ranked
            .into_iter()
            .take(self.limit)
            .filter(|(word, _)| *word != primary)
        {
            document.push_context(word, probability);
        }

        log::trace!(
            "Day {}: '{}' -> {} context words",
            day,
            primary,
            document.context().len()
        );
        Ok(document)
    }
}
