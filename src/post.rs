//! The normalized post type.
//!
//! This module provides [`Post`], the uniform representation every raw export
//! record is mapped into. Both exporters (CSV and HTML) consume it.
//!
//! # Overview
//!
//! A post consists of:
//! - **Identity**: `timestamp` (seconds since epoch, unique after merge)
//! - **Content**: `text`, `title`, `tags`, `external_url`
//! - **Media**: `photo_paths` plus the derived `photo_filenames`
//! - **Display**: the derived `date_string`
//!
//! Derived fields are computed once in [`Post::new`], and a post is immutable
//! afterwards, so `photo_filenames` always mirrors `photo_paths`.
//!
//! # Examples
//!
//! ```
//! use postpack::Post;
//!
//! let post = Post::new(1_700_000_000, "Hello", "", vec!["media/a/b.jpg".into()], vec![], "");
//! assert_eq!(post.photo_filenames(), ["b.jpg"]);
//! assert!(!post.date_string().is_empty());
//! ```

use std::path::Path;

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Display format used for [`Post::date_string`].
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A normalized, deduplicated post from a social-media export.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `i64` | Seconds since epoch, the deduplication key |
/// | `text` | `String` | Post body, may be empty |
/// | `title` | `String` | Short caption, may be empty |
/// | `photo_paths` | `Vec<String>` | Archive-relative media paths |
/// | `photo_filenames` | `Vec<String>` | Basenames of `photo_paths`, same order |
/// | `date_string` | `String` | Local `YYYY-MM-DD HH:MM:SS`, empty for timestamp 0 |
/// | `tags` | `Vec<String>` | Tagged names |
/// | `external_url` | `String` | Shared link, empty when absent |
///
/// # Serialization
///
/// Deserializing recomputes the derived fields from `timestamp` and
/// `photo_paths`, so serialized values can't smuggle in inconsistent data.
///
/// ```
/// use postpack::Post;
///
/// let post = Post::new(10, "hi", "", vec![], vec!["Alice".into()], "");
/// let json = serde_json::to_string(&post)?;
/// let parsed: Post = serde_json::from_str(&json)?;
/// assert_eq!(post, parsed);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PostData")]
pub struct Post {
    timestamp: i64,
    text: String,
    title: String,
    photo_paths: Vec<String>,
    photo_filenames: Vec<String>,
    date_string: String,
    tags: Vec<String>,
    external_url: String,
}

/// Serialized shape of a post without its derived fields.
#[derive(Deserialize)]
struct PostData {
    timestamp: i64,
    #[serde(default)]
    text: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    photo_paths: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    external_url: String,
}

impl From<PostData> for Post {
    fn from(data: PostData) -> Self {
        Post::new(
            data.timestamp,
            data.text,
            data.title,
            data.photo_paths,
            data.tags,
            data.external_url,
        )
    }
}

impl Post {
    /// Creates a post, deriving `photo_filenames` and `date_string`.
    pub fn new(
        timestamp: i64,
        text: impl Into<String>,
        title: impl Into<String>,
        photo_paths: Vec<String>,
        tags: Vec<String>,
        external_url: impl Into<String>,
    ) -> Self {
        let photo_filenames = photo_paths.iter().map(|p| basename(p)).collect();
        Self {
            timestamp,
            text: text.into(),
            title: title.into(),
            photo_paths,
            photo_filenames,
            date_string: format_timestamp(timestamp),
            tags,
            external_url: external_url.into(),
        }
    }

    /// Seconds since epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Post body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caption line, e.g. "Alice updated her status."
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn photo_paths(&self) -> &[String] {
        &self.photo_paths
    }

    pub fn photo_filenames(&self) -> &[String] {
        &self.photo_filenames
    }

    /// Local display date, empty when the timestamp is zero.
    pub fn date_string(&self) -> &str {
        &self.date_string
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Shared link, empty when the post has none.
    pub fn external_url(&self) -> &str {
        &self.external_url
    }

    /// Returns true if the post references at least one photo.
    pub fn has_photos(&self) -> bool {
        !self.photo_paths.is_empty()
    }

    /// Returns true if the post would survive the extraction filter.
    pub fn has_content(&self) -> bool {
        !self.text.is_empty() || self.has_photos()
    }
}

/// Formats a unix timestamp as a local date string.
///
/// Zero (and timestamps outside chrono's range) yield an empty string.
pub fn format_timestamp(timestamp: i64) -> String {
    if timestamp == 0 {
        return String::new();
    }
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Final path component of an archive-relative path.
fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
