//! Configuration types for extraction and output.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ExtractConfig`] - Which archive entries count as post documents and media
//! - [`HtmlConfig`] - Page title and labels for the HTML gallery
//!
//! # Example
//!
//! ```rust
//! use postpack::config::HtmlConfig;
//!
//! let config = HtmlConfig::new()
//!     .with_title("Archív príspevkov")
//!     .with_lang("sk");
//! assert_eq!(config.lang, "sk");
//! ```

use serde::{Deserialize, Serialize};

/// Selection rules for entries inside export archives.
///
/// An entry is a post document when its name ends with
/// [`document_extension`](Self::document_extension) and contains every
/// substring in [`document_markers`](Self::document_markers). Otherwise it is
/// media when its name contains [`media_marker`](Self::media_marker).
///
/// # Example
///
/// ```rust
/// use postpack::config::ExtractConfig;
///
/// let config = ExtractConfig::new();
/// assert!(config.is_post_document("your_facebook_activity/posts/your_posts__check_ins_photos_and_videos_1.json"));
/// assert!(config.is_media("your_facebook_activity/posts/media/Album_1/123.jpg"));
/// assert!(!config.is_post_document("your_facebook_activity/comments/comments.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Required file extension for post documents (default: ".json")
    pub document_extension: String,

    /// Substrings a post document's path must all contain
    /// (default: "posts", "your_posts")
    pub document_markers: Vec<String>,

    /// Substring identifying media files to extract (default: "/posts/media/")
    pub media_marker: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            document_extension: ".json".to_string(),
            document_markers: vec!["posts".to_string(), "your_posts".to_string()],
            media_marker: "/posts/media/".to_string(),
        }
    }
}

impl ExtractConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the substrings a post document must contain.
    #[must_use]
    pub fn with_document_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the substring identifying media entries.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_marker = marker.into();
        self
    }

    /// Returns true if an archive path names a post document.
    pub fn is_post_document(&self, name: &str) -> bool {
        name.ends_with(&self.document_extension)
            && self.document_markers.iter().all(|m| name.contains(m.as_str()))
    }

    /// Returns true if an archive path names a post media file.
    pub fn is_media(&self, name: &str) -> bool {
        name.contains(&self.media_marker)
    }
}

/// Configuration for the HTML gallery.
///
/// All strings are passed through to the page unchanged (and escaped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlConfig {
    /// Page title and heading (default: "Facebook Posts Archive")
    pub title: String,

    /// Value of the document's `lang` attribute (default: "en")
    pub lang: String,

    /// Label before the post count (default: "Total posts")
    pub total_label: String,

    /// Label before the tagged names (default: "Tagged")
    pub tags_label: String,

    /// Text of the external link (default: "External link")
    pub link_label: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title: "Facebook Posts Archive".to_string(),
            lang: "en".to_string(),
            total_label: "Total posts".to_string(),
            tags_label: "Tagged".to_string(),
            link_label: "External link".to_string(),
        }
    }
}

impl HtmlConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the document language.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Sets the label shown before the post count.
    #[must_use]
    pub fn with_total_label(mut self, label: impl Into<String>) -> Self {
        self.total_label = label.into();
        self
    }

    /// Sets the label shown before tagged names.
    #[must_use]
    pub fn with_tags_label(mut self, label: impl Into<String>) -> Self {
        self.tags_label = label.into();
        self
    }

    /// Sets the external link text.
    #[must_use]
    pub fn with_link_label(mut self, label: impl Into<String>) -> Self {
        self.link_label = label.into();
        self
    }
}
