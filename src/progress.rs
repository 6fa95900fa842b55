//! Progress reporting for the loading stage.
//!
//! The library never prints. Callers that want per-file updates pass a
//! [`ProgressCallback`] to
//! [`load_and_merge_with_progress`](crate::loader::load_and_merge_with_progress),
//! which invokes it once after every document.
//!
//! # Example
//!
//! ```rust
//! use postpack::progress::{Progress, ProgressCallback};
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|progress: Progress| {
//!     println!(
//!         "[{}/{}] {}",
//!         progress.files_processed,
//!         progress.total_files,
//!         progress.current_file.display()
//!     );
//! });
//!
//! callback(Progress::new("your_posts_1.json", 1, 3, 42));
//! ```

use std::path::PathBuf;
use std::sync::Arc;

/// Progress information after one document has been loaded.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    /// The document that was just handled.
    pub current_file: PathBuf,

    /// Documents handled so far, including this one.
    pub files_processed: usize,

    /// Documents in this run.
    pub total_files: usize,

    /// Posts accepted into the merged collection so far.
    pub posts_accepted: usize,

    /// Whether this document was skipped because it couldn't be read or parsed.
    pub failed: bool,
}

impl Progress {
    /// Creates a progress instance for a successfully loaded document.
    pub fn new(
        current_file: impl Into<PathBuf>,
        files_processed: usize,
        total_files: usize,
        posts_accepted: usize,
    ) -> Self {
        Self {
            current_file: current_file.into(),
            files_processed,
            total_files,
            posts_accepted,
            failed: false,
        }
    }

    /// Marks the current document as failed.
    #[must_use]
    pub fn with_failure(mut self) -> Self {
        self.failed = true;
        self
    }

    /// Returns the share of documents handled (0.0 - 100.0).
    ///
    /// An empty run counts as complete.
    ///
    /// ```rust
    /// use postpack::progress::Progress;
    ///
    /// assert_eq!(Progress::new("a.json", 1, 4, 0).percentage(), 25.0);
    /// assert_eq!(Progress::default().percentage(), 100.0);
    /// ```
    pub fn percentage(&self) -> f64 {
        if self.total_files == 0 {
            100.0
        } else {
            (self.files_processed as f64 / self.total_files as f64) * 100.0
        }
    }

    /// Returns whether every document has been handled.
    pub fn is_complete(&self) -> bool {
        self.files_processed >= self.total_files
    }
}

/// Callback type for receiving progress updates.
pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Creates a no-op progress callback.
pub fn no_progress() -> ProgressCallback {
    Arc::new(|_: Progress| {})
}
