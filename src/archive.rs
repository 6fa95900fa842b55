//! Export archive extraction.
//!
//! A data download arrives as one or more zip files. Only two kinds of entries
//! matter here: the `your_posts_*.json` documents and the media under
//! `posts/media/`. Everything else (messages, comments, profile data) is left
//! in the archive.
//!
//! # Example
//!
//! ```rust,no_run
//! use postpack::archive::extract_archives;
//! use postpack::config::ExtractConfig;
//!
//! let extracted = extract_archives("downloaded_facebook_data", "extracted_data", &ExtractConfig::new())?;
//! println!("{} post documents", extracted.post_documents.len());
//! # Ok::<(), postpack::PostpackError>(())
//! ```

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ExtractConfig;
use crate::error::{PostpackError, Result};

/// What one archive contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveContents {
    /// Extracted post documents, in archive order.
    pub post_documents: Vec<PathBuf>,
    /// Number of media files extracted.
    pub media_files: usize,
}

/// What a whole extraction run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedArchives {
    /// Number of zip files read.
    pub archives: usize,
    /// Extracted post documents, in archive order then entry order.
    pub post_documents: Vec<PathBuf>,
    /// Number of media files extracted.
    pub media_files: usize,
}

/// Callback invoked after each archive with its path and what it contributed.
pub type ArchiveCallback = Arc<dyn Fn(&Path, &ArchiveContents) + Send + Sync>;

/// Lists the `*.zip` files directly inside `zip_dir`, sorted by name.
pub fn list_archives(zip_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(zip_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "zip") {
            archives.push(path);
        }
    }
    archives.sort();
    Ok(archives)
}

/// Extracts post documents and post media from one archive.
///
/// Entries whose names would resolve outside `extract_dir` are skipped.
/// Existing files are overwritten.
pub fn extract_archive(
    zip_path: impl AsRef<Path>,
    extract_dir: impl AsRef<Path>,
    config: &ExtractConfig,
) -> Result<ArchiveContents> {
    let zip_path = zip_path.as_ref();
    let extract_dir = extract_dir.as_ref();

    let file = File::open(zip_path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| PostpackError::archive(zip_path, e))?;

    let mut contents = ArchiveContents::default();
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| PostpackError::archive(zip_path, e))?;
        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        let is_document = config.is_post_document(&name);
        if !is_document && !config.is_media(&name) {
            continue;
        }
        let Some(relative) = entry.enclosed_name() else {
            continue;
        };

        let destination = extract_dir.join(relative);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&destination)?;
        io::copy(&mut entry, &mut out)?;

        if is_document {
            contents.post_documents.push(destination);
        } else {
            contents.media_files += 1;
        }
    }

    Ok(contents)
}

/// Extracts every archive in `zip_dir` into `extract_dir`.
///
/// Archives are processed in name order. Creates `extract_dir` if needed.
pub fn extract_archives(
    zip_dir: impl AsRef<Path>,
    extract_dir: impl AsRef<Path>,
    config: &ExtractConfig,
) -> Result<ExtractedArchives> {
    let quiet: ArchiveCallback = Arc::new(|_: &Path, _: &ArchiveContents| {});
    extract_archives_with_progress(zip_dir, extract_dir, config, &quiet)
}

/// Like [`extract_archives`], calling `on_archive` after every archive.
pub fn extract_archives_with_progress(
    zip_dir: impl AsRef<Path>,
    extract_dir: impl AsRef<Path>,
    config: &ExtractConfig,
    on_archive: &ArchiveCallback,
) -> Result<ExtractedArchives> {
    let extract_dir = extract_dir.as_ref();
    fs::create_dir_all(extract_dir)?;

    let mut extracted = ExtractedArchives::default();
    for zip_path in list_archives(zip_dir)? {
        let contents = extract_archive(&zip_path, extract_dir, config)?;
        on_archive(&zip_path, &contents);
        extracted.archives += 1;
        extracted.media_files += contents.media_files;
        extracted.post_documents.extend(contents.post_documents);
    }
    Ok(extracted)
}

/// Finds post documents in an already extracted directory, sorted by path.
///
/// Paths are matched relative to `dir` with `/` separators, using the same
/// rules as extraction.
pub fn find_post_documents(dir: impl AsRef<Path>, config: &ExtractConfig) -> Result<Vec<PathBuf>> {
    let root = dir.as_ref();
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            let relative = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/");
            if config.is_post_document(&relative) {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}
