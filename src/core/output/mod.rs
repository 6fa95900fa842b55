//! Output writers.
//!
//! This module provides the two exporters for a sorted post collection:
//! - `write_csv` / `to_csv` - Flat 8-column CSV - requires `csv-output` feature
//! - `render_html` / `render_page` - Static gallery with copied photos - requires `html-output` feature
//!
//! The writers are independent: neither reorders nor mutates the posts, so
//! they can run in any order over the same slice.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "html-output"))]
//! # fn main() -> postpack::Result<()> {
//! use postpack::config::HtmlConfig;
//! use postpack::core::output::{render_html, write_csv};
//! use postpack::loader::load_and_merge;
//! use postpack::core::sort_by_timestamp;
//!
//! let report = load_and_merge(&["extracted_data/posts/your_posts_1.json"]);
//! let posts = sort_by_timestamp(report.posts);
//!
//! write_csv(&posts, "facebook_posts.csv")?;
//! let html = render_html(&posts, "extracted_data", "website", &HtmlConfig::new())?;
//! println!("{} posts rendered", html.posts_rendered);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "html-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "html-output")]
mod html_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, LIST_SEPARATOR, to_csv, write_csv};
#[cfg(feature = "html-output")]
pub use html_writer::{HtmlReport, INDEX_FILE, PHOTOS_DIR, RenderedPost, render_html, render_page};
