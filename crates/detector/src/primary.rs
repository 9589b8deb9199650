//! Primary (bursting) word selection

use crate::frequency::DayFrequency;
use crate::strength::WordStrength;
use trendwatch_core::PrimaryWord;

/// Primary words of a day, frequency descending
pub type PrimaryWordSet = Vec<PrimaryWord>;

/// Selects the day's most salient words
///
/// Candidates are words with `WS >= alpha`, sorted by day frequency
/// descending (ties keep first-appearance order). The walk over the sorted
/// candidates stops at the first 1-based position `count` with
/// `count >= candidates * fraction`, and that position is not emitted.
/// With the default fraction of 0.001 a day needs more than 1000
/// candidates before anything is emitted.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryWordDetector {
    fraction: f64,
}

impl PrimaryWordDetector {
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Walk length for a given number of candidates
    #[inline]
    pub fn cutoff_length(&self, candidates: usize) -> f64 {
        candidates as f64 * self.fraction
    }

    /// All words at or above `alpha`, frequency descending
    pub fn candidates(
        &self,
        frequency: &DayFrequency,
        strength: &WordStrength,
        alpha: f64,
    ) -> PrimaryWordSet {
        let mut candidates: PrimaryWordSet = frequency
            .iter()
            .filter(|(word, _)| strength.meets(word, alpha))
            .map(|(word, f)| PrimaryWord::new(word, f))
            .collect();
        // stable: equal frequencies keep first-appearance order
        candidates.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
        candidates
    }

    /// Candidates truncated by the cutoff walk
    pub fn detect(
        &self,
        frequency: &DayFrequency,
        strength: &WordStrength,
        alpha: f64,
    ) -> PrimaryWordSet {
        let candidates = self.candidates(frequency, strength, alpha);
        let length = self.cutoff_length(candidates.len());

        let selected: PrimaryWordSet = candidates
            .into_iter()
            .enumerate()
            .take_while(|(i, _)| ((i + 1) as f64) < length)
            .map(|(_, word)| word)
            .collect();

        log::debug!(
            "Day {}: {} primary words (alpha={:.4}, cutoff length={:.3})",
            frequency.day(),
            selected.len(),
            alpha,
            length
        );
        selected
    }
}
