//! Property-based tests for postpack.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;
use serde_json::{Value, json};
use std::collections::HashSet;

use postpack::Post;
use postpack::core::sort_by_timestamp;
use postpack::parsing::{extract_posts, fix_mojibake_encoding};

/// Generate a loosely shaped post record, including shapes that get dropped.
fn arb_record() -> impl Strategy<Value = Value> {
    (
        0i64..50,
        prop::sample::select(vec![
            String::new(),
            "Hello".to_string(),
            "Ahoj, ako sa mÃ¡Å¡?".to_string(),
            "Привет мир".to_string(),
            "Special,chars\"here\nnewline".to_string(),
            "🎉🔥 emoji".to_string(),
        ]),
        prop::sample::select(vec![
            vec![],
            vec!["posts/media/A/1.jpg".to_string()],
            vec!["posts/media/stickers_used/s.png".to_string()],
            vec![
                "posts/media/A/2.jpg".to_string(),
                "posts/media/A/3.jpg".to_string(),
            ],
        ]),
        any::<bool>(),
    )
        .prop_map(|(timestamp, text, uris, tagged)| {
            let media: Vec<Value> = uris
                .into_iter()
                .map(|uri| json!({"media": {"uri": uri}}))
                .collect();
            let mut record = json!({
                "timestamp": timestamp,
                "data": [{"post": text}],
                "attachments": [{"data": media}],
            });
            if tagged {
                record["tags"] = json!([{"name": "Bob"}]);
            }
            record
        })
}

fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(arb_record(), 0..max_len)
}

fn arb_posts(max_len: usize) -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec(
        (-1000i64..1000, "[a-z]{0,8}").prop_map(|(ts, text)| {
            Post::new(ts, text, "", vec![], vec![], "")
        }),
        0..max_len,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // ============================================
    // TEXT REPAIR PROPERTIES
    // ============================================

    /// Repair never panics on arbitrary input
    #[test]
    fn repair_never_panics(s in any::<String>()) {
        let _ = fix_mojibake_encoding(&s);
    }

    /// Text outside Latin-1 comes back unchanged
    #[test]
    fn repair_keeps_non_latin1(s in "[а-яё]{1,20}") {
        prop_assert_eq!(fix_mojibake_encoding(&s), s);
    }

    /// Plain ASCII is a fixed point
    #[test]
    fn repair_keeps_ascii(s in "[ -~]{0,40}") {
        prop_assert_eq!(fix_mojibake_encoding(&s), s);
    }

    /// Garbling UTF-8 text then repairing it gives the text back
    #[test]
    fn repair_undoes_garbling(s in any::<String>()) {
        let garbled: String = s.bytes().map(char::from).collect();
        prop_assert_eq!(fix_mojibake_encoding(&garbled), s);
    }

    // ============================================
    // EXTRACTION PROPERTIES
    // ============================================

    /// Every extracted post has text or photos
    #[test]
    fn extracted_posts_have_content(records in arb_records(30)) {
        for post in extract_posts(&records) {
            prop_assert!(!post.text().is_empty() || !post.photo_paths().is_empty());
        }
    }

    /// Timestamps are unique within a batch
    #[test]
    fn extracted_timestamps_unique(records in arb_records(30)) {
        let posts = extract_posts(&records);
        let unique: HashSet<i64> = posts.iter().map(Post::timestamp).collect();
        prop_assert_eq!(unique.len(), posts.len());
    }

    /// Extraction never yields more posts than records
    #[test]
    fn extraction_never_grows(records in arb_records(30)) {
        prop_assert!(extract_posts(&records).len() <= records.len());
    }

    /// Sticker media never survives
    #[test]
    fn stickers_never_kept(records in arb_records(30)) {
        for post in extract_posts(&records) {
            prop_assert!(post.photo_paths().iter().all(|p| !p.to_lowercase().contains("sticker")));
        }
    }

    /// Filenames line up with paths
    #[test]
    fn filenames_match_paths(records in arb_records(30)) {
        for post in extract_posts(&records) {
            prop_assert_eq!(post.photo_filenames().len(), post.photo_paths().len());
        }
    }

    // ============================================
    // SORT PROPERTIES
    // ============================================

    /// Sorted output is non-increasing
    #[test]
    fn sort_is_descending(posts in arb_posts(40)) {
        let sorted = sort_by_timestamp(posts);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].timestamp() >= pair[1].timestamp());
        }
    }

    /// Sorting keeps every post
    #[test]
    fn sort_preserves_count(posts in arb_posts(40)) {
        let len = posts.len();
        prop_assert_eq!(sort_by_timestamp(posts).len(), len);
    }

    /// Equal timestamps keep their input order
    #[test]
    fn sort_is_stable(texts in prop::collection::vec("[a-z]{1,4}", 1..10)) {
        let posts: Vec<Post> = texts
            .iter()
            .map(|t| Post::new(7, t.as_str(), "", vec![], vec![], ""))
            .collect();
        let sorted = sort_by_timestamp(posts);
        let out: Vec<&str> = sorted.iter().map(Post::text).collect();
        let expected: Vec<&str> = texts.iter().map(String::as_str).collect();
        prop_assert_eq!(out, expected);
    }
}

#[test]
fn repair_empty_string() {
    assert_eq!(fix_mojibake_encoding(""), "");
}
