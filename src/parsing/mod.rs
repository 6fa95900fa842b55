//! Record-level parsing for post exports.
//!
//! This module turns raw JSON records into [`Post`](crate::Post)s:
//! - [`encoding`] - Mojibake repair for Meta's Latin-1 mis-encoding
//! - [`record`] - Shape-tolerant field access over `serde_json::Value`
//! - [`posts`] - Record → post mapping with per-batch deduplication

pub mod encoding;
pub mod posts;
pub mod record;

// Re-export commonly used items
pub use encoding::fix_mojibake_encoding;
pub use posts::{extract_posts, parse_post_record, record_timestamp};
pub use record::RecordExt;
