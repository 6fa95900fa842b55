//! Deduplication, ordering and statistics for post collections.

use std::collections::HashSet;

use crate::Post;

/// A deduplication scope keyed by post timestamp.
///
/// Extraction keeps one of these per document and the loader keeps another
/// across all documents. The two scopes are independent.
#[derive(Debug, Clone, Default)]
pub struct SeenTimestamps {
    seen: HashSet<i64>,
}

impl SeenTimestamps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this timestamp was already accepted in this scope.
    pub fn contains(&self, timestamp: i64) -> bool {
        self.seen.contains(&timestamp)
    }

    /// Marks a timestamp as accepted.
    ///
    /// Returns `false` if it was already present.
    pub fn insert(&mut self, timestamp: i64) -> bool {
        self.seen.insert(timestamp)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Sorts posts newest-first.
///
/// The sort is stable: posts sharing a timestamp keep their relative order.
///
/// # Example
/// Input:  [100, 300, 200]
/// Output: [300, 200, 100]
pub fn sort_by_timestamp(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    posts
}

/// Statistics about a loading run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Documents read successfully.
    pub files: usize,
    /// Documents skipped because they couldn't be read or parsed.
    pub failed_files: usize,
    /// Posts extracted across all documents, before cross-file dedup.
    pub extracted: usize,
    /// Posts dropped because an earlier document had the same timestamp.
    pub duplicates: usize,
    /// Posts in the final collection.
    pub unique: usize,
}

impl ProcessingStats {
    /// Percentage of extracted posts removed as cross-file duplicates.
    pub fn duplicate_ratio(&self) -> f64 {
        if self.extracted == 0 {
            return 0.0;
        }
        (self.duplicates as f64 / self.extracted as f64) * 100.0
    }
}
