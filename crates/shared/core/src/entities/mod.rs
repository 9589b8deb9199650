mod document;
mod post;

pub use document::{ContextDocument, ContextEntry, PrimaryWord};
pub use post::{DayBucket, Post};
