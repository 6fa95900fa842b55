//! CSV output writer.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::Post;
use crate::error::Result;

/// Column names, in output order.
pub const CSV_HEADER: [&str; 8] = [
    "timestamp",
    "date",
    "post_text",
    "title",
    "photo_paths",
    "photo_filenames",
    "tags",
    "external_url",
];

/// Separator used to flatten list columns.
///
/// Entries containing a `|` themselves are not escaped, so splitting such a
/// column is lossy.
pub const LIST_SEPARATOR: &str = "|";

/// Writes posts to a CSV file, replacing it if it exists.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: [`CSV_HEADER`]
/// - List columns joined with [`LIST_SEPARATOR`]
/// - Rows in the given order
/// - Encoding: UTF-8
pub fn write_csv(posts: &[Post], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(posts, file)
}

/// Renders posts as a CSV string.
///
/// # Example
///
/// ```
/// use postpack::Post;
/// use postpack::core::output::to_csv;
///
/// let post = Post::new(0, "hi", "", vec![], vec!["a".into(), "b".into()], "");
/// let csv = to_csv(&[post])?;
/// assert!(csv.ends_with("0,,hi,,,,a|b,\n"));
/// # Ok::<(), postpack::PostpackError>(())
/// ```
pub fn to_csv(posts: &[Post]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(posts, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn write_records<W: Write>(posts: &[Post], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for post in posts {
        writer.write_record(build_record(post))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV record for a single post.
fn build_record(post: &Post) -> [String; 8] {
    [
        post.timestamp().to_string(),
        post.date_string().to_string(),
        post.text().to_string(),
        post.title().to_string(),
        post.photo_paths().join(LIST_SEPARATOR),
        post.photo_filenames().join(LIST_SEPARATOR),
        post.tags().join(LIST_SEPARATOR),
        post.external_url().to_string(),
    ]
}
