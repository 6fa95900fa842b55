//! Post extraction from raw export records.
//!
//! A record in a `your_posts_*.json` document looks roughly like this:
//!
//! ```json
//! {
//!   "timestamp": 1705314600,
//!   "title": "Alice updated her status.",
//!   "data": [{"post": "Hello!"}, {"update_timestamp": 1705314700}],
//!   "attachments": [
//!     {"data": [{"media": {"uri": "posts/media/Album/123.jpg"}}]},
//!     {"data": [{"external_context": {"url": "https://example.com"}}]}
//!   ],
//!   "tags": [{"name": "Bob"}]
//! }
//! ```
//!
//! None of these keys are guaranteed, and their shapes vary across export
//! versions, so everything goes through [`RecordExt`].

use serde_json::Value;

use super::encoding::fix_mojibake_encoding;
use super::record::RecordExt;
use crate::Post;
use crate::core::processor::SeenTimestamps;

/// Substring that marks sticker media, which is never treated as a photo.
const STICKER_MARKER: &str = "sticker";

/// Reads a record's timestamp, defaulting to 0.
pub fn record_timestamp(record: &Value) -> i64 {
    record.int_field("timestamp").unwrap_or(0)
}

/// Maps one raw record into a [`Post`].
///
/// Returns `None` if the record has neither text nor photos.
/// No deduplication happens here; see [`extract_posts`].
pub fn parse_post_record(record: &Value) -> Option<Post> {
    let text = record
        .list_field("data")
        .iter()
        .find_map(|entry| entry.non_empty_str_field("post"))
        .map(fix_mojibake_encoding)
        .unwrap_or_default();

    let mut photo_paths = Vec::new();
    let mut external_url = String::new();

    for entry in record
        .list_field("attachments")
        .iter()
        .flat_map(|attachment| attachment.list_field("data"))
    {
        if let Some(uri) = entry
            .object_field("media")
            .and_then(|media| media.non_empty_str_field("uri"))
        {
            if !uri.to_lowercase().contains(STICKER_MARKER) {
                photo_paths.push(uri.to_string());
            }
        }

        // Last one wins; records carry at most one in practice
        if let Some(url) = entry
            .object_field("external_context")
            .and_then(|ctx| ctx.str_field("url"))
        {
            external_url = url.to_string();
        }
    }

    if text.is_empty() && photo_paths.is_empty() {
        return None;
    }

    let title = fix_mojibake_encoding(record.str_field("title").unwrap_or_default());

    let tags = record
        .list_field("tags")
        .iter()
        .map(|tag| {
            let name = tag.str_field("name").or_else(|| tag.as_str()).unwrap_or_default();
            fix_mojibake_encoding(name)
        })
        .collect();

    Some(Post::new(
        record_timestamp(record),
        text,
        title,
        photo_paths,
        tags,
        external_url,
    ))
}

/// Extracts posts from one document's records.
///
/// Records whose timestamp was already accepted earlier in the same batch are
/// dropped (first occurrence wins). Records without text or photos are
/// skipped and don't claim their timestamp, so a later valid record with the
/// same timestamp is still accepted.
///
/// # Example
///
/// ```
/// use postpack::parsing::extract_posts;
/// use serde_json::json;
///
/// let records = vec![
///     json!({"timestamp": 10, "data": [{"post": "hi"}]}),
///     json!({"timestamp": 10, "data": [{"post": "again"}]}),
///     json!({"timestamp": 20, "title": "no content"}),
/// ];
/// let posts = extract_posts(&records);
/// assert_eq!(posts.len(), 1);
/// assert_eq!(posts[0].text(), "hi");
/// ```
pub fn extract_posts(records: &[Value]) -> Vec<Post> {
    let mut seen = SeenTimestamps::new();
    let mut posts = Vec::new();

    for record in records {
        if seen.contains(record_timestamp(record)) {
            continue;
        }
        if let Some(post) = parse_post_record(record) {
            seen.insert(post.timestamp());
            posts.push(post);
        }
    }

    posts
}
