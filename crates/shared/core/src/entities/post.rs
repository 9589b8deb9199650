use serde::{Deserialize, Serialize};

use crate::values::DayLabel;

/// Split a post into tokens. Whitespace is the only delimiter.
#[inline]
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// A single short text record as delivered by ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Day the post belongs to
    pub day: DayLabel,
    /// Source record identifier (opaque, carried for diagnostics only)
    pub id: String,
    /// Raw post text
    pub text: String,
}

impl Post {
    pub fn new(day: impl Into<DayLabel>, id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            id: id.into(),
            text: text.into(),
        }
    }

    /// Whitespace tokens of this post
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        tokenize(&self.text)
    }
}

/// All posts of one calendar day, in arrival order
///
/// Built by the ingestion side and consumed read-only by detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    day: DayLabel,
    posts: Vec<String>,
}

impl DayBucket {
    /// Create an empty bucket for a day
    pub fn new(day: impl Into<DayLabel>) -> Self {
        Self {
            day: day.into(),
            posts: Vec::new(),
        }
    }

    /// Create a bucket from post texts
    pub fn from_texts<I, S>(day: impl Into<DayLabel>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            day: day.into(),
            posts: texts.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a post text
    pub fn push(&mut self, text: impl Into<String>) {
        self.posts.push(text.into());
    }

    /// Day label
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Post texts in arrival order
    pub fn posts(&self) -> &[String] {
        &self.posts
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Check if the bucket has no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Tokens of every post, flattened in arrival order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.posts.iter().flat_map(|text| tokenize(text))
    }

    /// Tokens of each post, one iterator per post
    pub fn posts_tokens(&self) -> impl Iterator<Item = impl Iterator<Item = &str>> {
        self.posts.iter().map(|text| tokenize(text))
    }

    /// Total token count for the day
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }
}
