use serde::{Deserialize, Serialize};

use crate::values::{DayLabel, Probability, Word};

/// A word detected as bursting on a given day, with its day frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryWord {
    pub word: Word,
    /// Relative frequency of the word on its day
    pub frequency: f64,
}

impl PrimaryWord {
    pub fn new(word: impl Into<Word>, frequency: f64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// One `(word, probability)` pair of a context document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub word: Word,
    pub probability: Probability,
}

impl ContextEntry {
    pub fn new(word: impl Into<Word>, probability: Probability) -> Self {
        Self {
            word: word.into(),
            probability,
        }
    }
}

/// Primary word plus the words that co-occur with it most often that day
///
/// The first entry is always `(primary, 1.0)`. Context entries follow in
/// descending probability and never repeat the primary word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContextDocument")]
pub struct ContextDocument {
    /// Day the document was mined from
    pub day: DayLabel,
    entries: Vec<ContextEntry>,
}

/// Unchecked wire form of [`ContextDocument`]
#[derive(Deserialize)]
struct RawContextDocument {
    day: DayLabel,
    entries: Vec<ContextEntry>,
}

impl TryFrom<RawContextDocument> for ContextDocument {
    type Error = String;

    fn try_from(raw: RawContextDocument) -> Result<Self, Self::Error> {
        let Some(head) = raw.entries.first() else {
            return Err(format!("document for day {} has no entries", raw.day));
        };
        if head.probability != 1.0 {
            return Err(format!(
                "document for day {} must start with probability 1.0, got {}",
                raw.day, head.probability
            ));
        }
        if raw.entries[1..].iter().any(|e| e.word == head.word) {
            return Err(format!(
                "document for day {} repeats its primary word '{}'",
                raw.day, head.word
            ));
        }
        Ok(Self {
            day: raw.day,
            entries: raw.entries,
        })
    }
}

impl ContextDocument {
    /// Start a document for a primary word
    pub fn new(day: impl Into<DayLabel>, primary: impl Into<Word>) -> Self {
        Self {
            day: day.into(),
            entries: vec![ContextEntry::new(primary, 1.0)],
        }
    }

    /// Append a context word. The caller supplies entries in ranked order.
    pub fn push_context(&mut self, word: impl Into<Word>, probability: Probability) {
        self.entries.push(ContextEntry::new(word, probability));
    }

    /// The primary word this document describes
    pub fn primary(&self) -> &str {
        &self.entries[0].word
    }

    /// All entries, primary first
    pub fn entries(&self) -> &[ContextEntry] {
        &self.entries
    }

    /// Context entries only (primary excluded)
    pub fn context(&self) -> &[ContextEntry] {
        &self.entries[1..]
    }
}
