//! # Postpack
//!
//! A Rust library for turning a Facebook "Download Your Information" export
//! into a clean, deduplicated list of your posts, written as a CSV file and a
//! static HTML gallery with the photos copied next to it.
//!
//! ## Overview
//!
//! An export is a set of zip archives. Posts live in `your_posts_*.json`
//! documents, each a list of loosely structured records, and the same post
//! often appears in more than one archive. Postpack:
//!
//! 1. Extracts the post documents and post media from the archives
//! 2. Maps each record into a [`Post`], repairing Meta's mis-encoded text
//! 3. Drops duplicates by timestamp, first document wins
//! 4. Sorts newest-first
//! 5. Writes a CSV export and an HTML page
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "archive", feature = "csv-output", feature = "html-output"))]
//! # fn main() -> postpack::Result<()> {
//! use postpack::prelude::*;
//!
//! let extracted = extract_archives("downloaded_facebook_data", "extracted_data", &ExtractConfig::new())?;
//! let report = load_and_merge(&extracted.post_documents);
//! for (path, err) in &report.failures {
//!     eprintln!("Error reading {}: {}", path.display(), err);
//! }
//!
//! let posts = sort_by_timestamp(report.posts);
//! write_csv(&posts, "facebook_posts.csv")?;
//! render_html(&posts, "extracted_data", "website", &HtmlConfig::new())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "archive", feature = "csv-output", feature = "html-output")))]
//! # fn main() {}
//! ```
//!
//! ## Working With Records Directly
//!
//! ```rust
//! use postpack::parsing::extract_posts;
//! use serde_json::json;
//!
//! let records = vec![json!({
//!     "timestamp": 1705314600,
//!     "data": [{"post": "Ahoj, ako sa mÃ¡Å¡?"}],
//!     "tags": [{"name": "Bob"}]
//! })];
//!
//! let posts = extract_posts(&records);
//! assert_eq!(posts[0].text(), "Ahoj, ako sa máš?");
//! assert_eq!(posts[0].tags(), ["Bob"]);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `csv-output` | CSV exporter | `csv` |
//! | `html-output` | HTML gallery | `maud` |
//! | `archive` | Zip extraction | `zip` |
//! | `cli` | The `postpack` binary | `clap` |
//! | `full` | All of the above (default) | all |
//!
//! ## Module Structure
//!
//! - [`post`] — [`Post`], the normalized entity
//! - [`parsing`] — Mojibake repair, shape-tolerant record access, post extraction
//! - [`loader`] — Reading documents and cross-document deduplication
//! - [`core`] — Ordering, statistics, and the output writers
//! - `archive` — Zip extraction of the raw export
//! - [`config`] — [`ExtractConfig`](config::ExtractConfig), [`HtmlConfig`](config::HtmlConfig)
//! - [`progress`] — Per-document progress callbacks
//! - `cli` — CLI argument types
//! - [`error`] — Unified error types ([`PostpackError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "archive")]
pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod parsing;
pub mod post;
pub mod progress;

// Re-export the main types at the crate root for convenience
pub use error::{PostpackError, Result};
pub use post::Post;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use postpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Post;

    pub use crate::error::{PostpackError, Result};

    pub use crate::config::{ExtractConfig, HtmlConfig};

    pub use crate::parsing::{extract_posts, fix_mojibake_encoding};

    pub use crate::loader::{LoadReport, load_and_merge, load_file};

    pub use crate::core::processor::{ProcessingStats, sort_by_timestamp};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};

    #[cfg(feature = "html-output")]
    pub use crate::core::output::{HtmlReport, render_html};

    #[cfg(feature = "archive")]
    pub use crate::archive::{ExtractedArchives, extract_archives, find_post_documents};
}
