//! HTML gallery writer.
//!
//! Produces `<output_dir>/index.html` plus a `photos/` folder holding copies
//! of every referenced photo that exists under the media root. The page only
//! uses relative paths, so the output directory can be moved or zipped as-is.
//!
//! Markup is built with `maud`, which escapes every interpolated value; post
//! text, titles, tags and links can never inject markup.

use std::fs;
use std::path::{Component, Path, PathBuf};

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::Post;
use crate::config::HtmlConfig;
use crate::error::Result;

/// Name of the photos folder inside the output directory.
pub const PHOTOS_DIR: &str = "photos";

/// Name of the generated page.
pub const INDEX_FILE: &str = "index.html";

const STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    background-color: #f0f2f5;
    padding: 20px;
    color: #1c1e21;
}
.container { max-width: 680px; margin: 0 auto; }
h1 { text-align: center; margin-bottom: 20px; color: #1877f2; }
.stats { text-align: center; margin-bottom: 20px; color: #65676b; }
.post {
    background: white;
    border-radius: 8px;
    box-shadow: 0 1px 2px rgba(0,0,0,0.1);
    margin-bottom: 15px;
    padding: 15px;
}
.post-header { margin-bottom: 10px; }
.date { color: #65676b; font-size: 0.9em; }
.title { color: #65676b; font-size: 0.85em; margin-bottom: 8px; }
.post-text {
    font-size: 15px;
    line-height: 1.5;
    margin-bottom: 10px;
    white-space: pre-wrap;
    word-wrap: break-word;
}
.photos { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 10px; }
.post-photo { max-width: 100%; max-height: 500px; border-radius: 8px; object-fit: contain; }
.tags { margin-top: 10px; color: #1877f2; font-size: 0.9em; }
.external-link { display: inline-block; margin-top: 10px; color: #1877f2; text-decoration: none; }
.external-link:hover { text-decoration: underline; }
"#;

/// A post paired with the relative paths of its copied photos.
#[derive(Debug, Clone)]
pub struct RenderedPost<'a> {
    pub post: &'a Post,
    /// Page-relative photo references, e.g. `photos/123.jpg`.
    pub photos: Vec<String>,
}

impl<'a> RenderedPost<'a> {
    pub fn new(post: &'a Post, photos: Vec<String>) -> Self {
        Self { post, photos }
    }
}

/// What [`render_html`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlReport {
    /// Path of the generated page.
    pub index_path: PathBuf,
    /// Posts on the page.
    pub posts_rendered: usize,
    /// Photos copied into `photos/` by this run.
    pub photos_copied: usize,
    /// Photos already present in `photos/` and left untouched.
    pub photos_reused: usize,
    /// Referenced photos not found under the media root.
    pub photos_missing: usize,
}

/// Renders the gallery into `output_dir`, copying photos from `media_root`.
///
/// Photo paths are resolved relative to `media_root`. Missing photos, and
/// paths that would leave `media_root`, are left out of the page.
/// Existing files in `photos/` are never overwritten.
/// Filesystem errors while creating directories, copying or writing the page
/// are returned.
pub fn render_html(
    posts: &[Post],
    media_root: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &HtmlConfig,
) -> Result<HtmlReport> {
    let media_root = media_root.as_ref();
    let output_dir = output_dir.as_ref();
    let photos_dir = output_dir.join(PHOTOS_DIR);
    fs::create_dir_all(&photos_dir)?;

    let mut report = HtmlReport::default();
    let mut rendered = Vec::with_capacity(posts.len());

    for post in posts {
        let mut photos = Vec::new();
        for photo_path in post.photo_paths() {
            if let Some(reference) = copy_photo(media_root, &photos_dir, photo_path, &mut report)? {
                photos.push(reference);
            }
        }
        rendered.push(RenderedPost::new(post, photos));
    }

    let index_path = output_dir.join(INDEX_FILE);
    fs::write(&index_path, render_page(&rendered, config))?;

    report.index_path = index_path;
    report.posts_rendered = rendered.len();
    Ok(report)
}

/// Copies one photo into `photos_dir` and returns its page-relative path.
///
/// Returns `None` if the source file doesn't exist or the path would resolve
/// outside `media_root`.
fn copy_photo(
    media_root: &Path,
    photos_dir: &Path,
    photo_path: &str,
    report: &mut HtmlReport,
) -> Result<Option<String>> {
    let Some(relative) = enclosed_photo_path(photo_path) else {
        report.photos_missing += 1;
        return Ok(None);
    };
    let source = media_root.join(relative);
    let Some(file_name) = source.file_name().filter(|_| source.is_file()) else {
        report.photos_missing += 1;
        return Ok(None);
    };

    let destination = photos_dir.join(file_name);
    if destination.exists() {
        report.photos_reused += 1;
    } else {
        fs::copy(&source, &destination)?;
        report.photos_copied += 1;
    }

    Ok(Some(format!("{}/{}", PHOTOS_DIR, file_name.to_string_lossy())))
}

/// Returns the path if it stays inside the media root once joined.
///
/// Absolute paths, drive prefixes and `..` components are rejected.
fn enclosed_photo_path(photo_path: &str) -> Option<&Path> {
    let path = Path::new(photo_path);
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        .then_some(path)
}

/// Renders the full page for already-resolved posts.
///
/// # Example
///
/// ```
/// use postpack::Post;
/// use postpack::config::HtmlConfig;
/// use postpack::core::output::{RenderedPost, render_page};
///
/// let post = Post::new(0, "<b>hi</b>", "", vec![], vec![], "");
/// let page = render_page(&[RenderedPost::new(&post, vec![])], &HtmlConfig::new());
/// assert!(page.contains("&lt;b&gt;hi&lt;/b&gt;"));
/// assert!(page.contains("Total posts: 1"));
/// ```
pub fn render_page(posts: &[RenderedPost<'_>], config: &HtmlConfig) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang=(config.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                div.container {
                    h1 { (config.title) }
                    p.stats { (config.total_label) ": " (posts.len()) }
                    @for post in posts {
                        (render_post(post, config))
                    }
                }
            }
        }
    };
    markup.into_string()
}

fn render_post(rendered: &RenderedPost<'_>, config: &HtmlConfig) -> Markup {
    let post = rendered.post;
    html! {
        div.post {
            div."post-header" {
                @if !post.date_string().is_empty() {
                    span.date { (post.date_string()) }
                }
            }
            @if !post.title().is_empty() {
                p.title { (post.title()) }
            }
            @if !post.text().is_empty() {
                p."post-text" { (post.text()) }
            }
            @if !rendered.photos.is_empty() {
                div.photos {
                    @for src in &rendered.photos {
                        img."post-photo" src=(src) alt="Photo";
                    }
                }
            }
            @if !post.tags().is_empty() {
                div.tags { (config.tags_label) ": " (post.tags().join(", ")) }
            }
            @if !post.external_url().is_empty() {
                a."external-link" href=(post.external_url()) target="_blank" rel="noopener" {
                    (config.link_label)
                }
            }
        }
    }
}
