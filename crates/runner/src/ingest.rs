//! Post ingestion
//!
//! Input is one post per line: `day,id,text`. Only the first two commas
//! separate fields, the text keeps any further commas. The stream is
//! expected to be sorted by day already; grouping only looks at
//! neighbouring records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use trendwatch_core::{DayBucket, Post};

use crate::error::{Result, RunnerError};

/// Parse a single line. Blank lines yield `None`.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_record(line_no: usize, line: &str) -> Result<Option<Post>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = line.splitn(3, ',');
    let (Some(day), Some(id), Some(text)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(RunnerError::MalformedRecord {
            line: line_no,
            reason: format!(
                "expected `day,id,text`, found {} field(s)",
                line.split(',').count()
            ),
        });
    };
    if day.is_empty() {
        return Err(RunnerError::MalformedRecord {
            line: line_no,
            reason: "empty day label".to_string(),
        });
    }

    Ok(Some(Post::new(day, id, text)))
}

/// Parse every line of a reader into posts
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if let Some(post) = parse_record(idx + 1, &line?)? {
            posts.push(post);
        }
    }
    Ok(posts)
}

/// Partition posts into contiguous runs of equal day label.
///
/// Order is preserved and nothing is sorted: a day label that shows up
/// again after another day starts a new bucket.
pub fn group_by_day(posts: impl IntoIterator<Item = Post>) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = Vec::new();
    for post in posts {
        if let Some(bucket) = buckets.last_mut().filter(|b| b.day() == post.day) {
            bucket.push(post.text);
            continue;
        }
        let mut bucket = DayBucket::new(post.day);
        bucket.push(post.text);
        buckets.push(bucket);
    }
    buckets
}

/// Read, parse and group a posts file
pub fn load_day_buckets<P: AsRef<Path>>(path: P) -> Result<Vec<DayBucket>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let posts = parse_records(BufReader::new(file))?;
    let buckets = group_by_day(posts);

    log::info!(
        "Loaded {} posts in {} days from {}",
        buckets.iter().map(DayBucket::len).sum::<usize>(),
        buckets.len(),
        path.display()
    );
    Ok(buckets)
}
