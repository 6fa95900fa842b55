//! Core processing logic for postpack.
//!
//! This module contains:
//! - [`processor`] - Timestamp deduplication scopes, ordering and statistics
//! - [`output`] - Format writers (CSV, HTML)

pub mod output;
pub mod processor;

// Re-export Post from the crate root
pub use crate::Post;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "html-output")]
pub use output::{HtmlReport, render_html};

pub use processor::{ProcessingStats, SeenTimestamps, sort_by_timestamp};
