//! Unified error types for postpack.
//!
//! This module provides a single [`PostpackError`] enum that covers all error
//! cases in the library, following the pattern used by `serde_json` and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Bad input documents** are recoverable: the loader records them and moves on
//! - **Output failures** (permissions, full disk) propagate and end the run
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for postpack operations.
///
/// # Example
///
/// ```rust
/// use postpack::error::Result;
/// use postpack::Post;
///
/// fn my_function() -> Result<Vec<Post>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, PostpackError>;

/// The error type for all postpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PostpackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - An input file doesn't exist or can't be read
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse an input document.
    ///
    /// Contains the format being parsed, the underlying parse error,
    /// and optionally the file path.
    #[error("Failed to parse {format}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g., "posts JSON")
        format: &'static str,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The document parsed but doesn't have the expected shape.
    ///
    /// This occurs when a posts document's top level is not a list of records.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A zip archive could not be opened or read.
    #[cfg(feature = "archive")]
    #[error("Failed to read archive {}: {source}", path.display())]
    Archive {
        /// The archive being read
        path: PathBuf,
        /// The underlying zip error
        #[source]
        source: zip::result::ZipError,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl PostpackError {
    /// Creates a parse error for a posts JSON document.
    pub fn json_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        PostpackError::Parse {
            format: "posts JSON",
            source,
            path,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        PostpackError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an archive error for the given zip file.
    #[cfg(feature = "archive")]
    pub fn archive(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        PostpackError::Archive {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, PostpackError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, PostpackError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, PostpackError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = PostpackError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_parse_error_with_path() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = PostpackError::json_parse(json_err, Some(PathBuf::from("/path/to/your_posts_1.json")));
        let display = err.to_string();
        assert!(display.contains("posts JSON"));
        assert!(display.contains("/path/to/your_posts_1.json"));
    }

    #[test]
    fn test_parse_error_without_path() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1,]").unwrap_err();
        let detail = json_err.to_string();
        let err = PostpackError::json_parse(json_err, None);
        let display = err.to_string();
        assert!(display.contains("posts JSON"));
        assert!(display.contains(&detail));
        assert!(!display.contains("file:"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = PostpackError::invalid_format("posts JSON", "expected a list of records");
        assert_eq!(
            err.to_string(),
            "Invalid posts JSON format: expected a list of records"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PostpackError::json_parse(json_err, None);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io = PostpackError::from(io::Error::other("boom"));
        assert!(io.is_io());
        assert!(!io.is_parse());

        let format = PostpackError::invalid_format("posts JSON", "nope");
        assert!(format.is_invalid_format());
        assert!(!format.is_io());

        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        assert!(PostpackError::json_parse(json_err, None).is_parse());
    }

    #[cfg(feature = "archive")]
    #[test]
    fn test_archive_error_display() {
        let err = PostpackError::archive(
            "downloads/export-1.zip",
            zip::result::ZipError::FileNotFound,
        );
        let display = err.to_string();
        assert!(display.contains("export-1.zip"));
        assert!(err.source().is_some());
    }
}
