//! Trendwatch Core Domain
//!
//! Pure domain types shared by the detector and the runner: posts grouped
//! into day buckets on the way in, context documents on the way out, and
//! the floating-point statistics the detector is built from.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod stats;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{ContextDocument, ContextEntry, DayBucket, Post, PrimaryWord};
pub use stats::{Quartiles, Smoothing};
pub use values::{DayLabel, Probability, Word};
