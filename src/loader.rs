//! Loading and merging post documents.
//!
//! A run usually spans several `your_posts_*.json` documents, possibly from
//! several export archives that overlap. [`load_and_merge`] reads them in the
//! given order, extracts posts from each, and keeps only the first post seen
//! for every timestamp across all documents.
//!
//! A document that can't be read or parsed is recorded in
//! [`LoadReport::failures`] and skipped; the rest of the run continues.
//!
//! # Example
//!
//! ```rust,no_run
//! use postpack::loader::load_and_merge;
//! use postpack::core::sort_by_timestamp;
//!
//! let report = load_and_merge(&["your_posts_1.json", "your_posts_2.json"]);
//! for (path, err) in &report.failures {
//!     eprintln!("Error reading {}: {}", path.display(), err);
//! }
//! let posts = sort_by_timestamp(report.posts);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::Post;
use crate::core::processor::{ProcessingStats, SeenTimestamps};
use crate::error::{PostpackError, Result};
use crate::parsing::extract_posts;
use crate::progress::{Progress, ProgressCallback, no_progress};

const FORMAT: &str = "posts JSON";

/// Result of loading a set of post documents.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Accepted posts, in document order then record order. Not sorted.
    pub posts: Vec<Post>,
    /// Documents that were skipped, with the reason.
    pub failures: Vec<(PathBuf, PostpackError)>,
    /// Counters for the run.
    pub stats: ProcessingStats,
}

impl LoadReport {
    /// Returns true if every document loaded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parses a posts document from a string.
///
/// The top level must be a list of records.
pub fn parse_posts_str(content: &str) -> Result<Vec<Post>> {
    parse_document(content, None)
}

/// Reads and parses one posts document.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Post>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_document(&content, Some(path))
}

fn parse_document(content: &str, path: Option<&Path>) -> Result<Vec<Post>> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| PostpackError::json_parse(e, path.map(Path::to_path_buf)))?;

    match document {
        Value::Array(records) => Ok(extract_posts(&records)),
        other => Err(PostpackError::invalid_format(
            FORMAT,
            format!("expected a list of records, found {}", value_kind(&other)),
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Loads every document and merges the posts, first document wins.
pub fn load_and_merge<P: AsRef<Path>>(paths: &[P]) -> LoadReport {
    load_and_merge_with_progress(paths, &no_progress())
}

/// Like [`load_and_merge`], calling `progress` after every document.
pub fn load_and_merge_with_progress<P: AsRef<Path>>(
    paths: &[P],
    progress: &ProgressCallback,
) -> LoadReport {
    let mut report = LoadReport::default();
    let mut seen = SeenTimestamps::new();
    let total = paths.len();

    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let update = match load_file(path) {
            Ok(posts) => {
                report.stats.files += 1;
                report.stats.extracted += posts.len();
                for post in posts {
                    if seen.insert(post.timestamp()) {
                        report.posts.push(post);
                    } else {
                        report.stats.duplicates += 1;
                    }
                }
                Progress::new(path, index + 1, total, report.posts.len())
            }
            Err(err) => {
                report.stats.failed_files += 1;
                report.failures.push((path.to_path_buf(), err));
                Progress::new(path, index + 1, total, report.posts.len()).with_failure()
            }
        };
        progress(update);
    }

    report.stats.unique = report.posts.len();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    #[test]
    fn test_parse_posts_str() {
        let posts = parse_posts_str(r#"[{"timestamp": 1, "data": [{"post": "hi"}]}]"#).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].text(), "hi");
    }

    #[test]
    fn test_parse_posts_str_empty_list() {
        assert!(parse_posts_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_posts_str_malformed() {
        let err = parse_posts_str("[{").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_parse_posts_str_object_top_level() {
        let err = parse_posts_str(r#"{"status_updates": []}"#).unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_load_file_missing() {
        let err = load_file("/definitely/not/here.json").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_load_file_parse_error_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("your_posts_1.json");
        fs::write(&path, "not json").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("your_posts_1.json"));
    }

    #[test]
    fn test_cross_file_first_wins() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        fs::write(&a, r#"[{"timestamp": 10, "data": [{"post": "hi"}]}]"#).unwrap();
        fs::write(
            &b,
            r#"[{"timestamp": 10, "data": [{"post": "dup"}]}, {"timestamp": 20, "data": [{"post": "bye"}]}]"#,
        )
        .unwrap();

        let report = load_and_merge(&[&a, &b]);
        let texts: Vec<&str> = report.posts.iter().map(Post::text).collect();
        assert_eq!(texts, ["hi", "bye"]);
        assert_eq!(report.stats.extracted, 3);
        assert_eq!(report.stats.duplicates, 1);
        assert_eq!(report.stats.unique, 2);
        assert!(report.is_clean());
    }

    #[test]
    fn test_bad_file_is_not_fatal() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        let good = dir.path().join("good.json");
        fs::write(&bad, "{ broken").unwrap();
        fs::write(&good, r#"[{"timestamp": 1, "data": [{"post": "ok"}]}]"#).unwrap();

        let report = load_and_merge(&[&bad, &good]);
        assert_eq!(report.posts.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, bad);
        assert_eq!(report.stats.files, 1);
        assert_eq!(report.stats.failed_files, 1);
    }

    #[test]
    fn test_progress_called_per_file() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let missing = dir.path().join("missing.json");
        fs::write(&a, r#"[{"timestamp": 1, "data": [{"post": "ok"}]}]"#).unwrap();

        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = updates.clone();
        let callback: ProgressCallback = Arc::new(move |p: Progress| sink.lock().unwrap().push(p));

        load_and_merge_with_progress(&[&a, &missing], &callback);

        let updates = updates.lock().unwrap();
        assert_eq!(updates.len(), 2);
        assert!(!updates[0].failed);
        assert_eq!(updates[0].posts_accepted, 1);
        assert!(updates[1].failed);
        assert!(updates[1].is_complete());
    }
}
