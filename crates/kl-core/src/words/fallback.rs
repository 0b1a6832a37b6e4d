//! Bundled fallback word list.
//!
//! Used only when the primary catalog is empty. The list is compiled into the
//! binary, parsed once per process on first use, and treated as read-only for
//! the process lifetime. Its file order is significant: it defines the
//! rotation sequence, and each entry's synthetic id is its 1-based position.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::ids::WordId;
use crate::words::WordEntry;

const BUNDLED_WORDS: &str = include_str!("data/fallback_words.json");

static FALLBACK_WORDS: OnceLock<Vec<WordEntry>> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct BundledWord {
    word: String,
    definition: String,
    root: Option<String>,
    source: Option<String>,
}

/// The fallback list, parsed on first call.
///
/// Initialization is race-safe: concurrent first callers all observe the same
/// parsed contents regardless of which one wins.
pub fn fallback_words() -> &'static [WordEntry] {
    FALLBACK_WORDS
        .get_or_init(|| parse_bundled(BUNDLED_WORDS).expect("bundled word list is well-formed"))
}

fn parse_bundled(raw: &str) -> anyhow::Result<Vec<WordEntry>> {
    let bundled: Vec<BundledWord> = serde_json::from_str(raw)?;
    let entries = bundled
        .into_iter()
        .enumerate()
        .map(|(position, item)| WordEntry {
            // Synthetic positional id; the fallback list has no storage-assigned ids.
            id: WordId::new(position as i64 + 1),
            word: item.word,
            definition: item.definition,
            meta: Some(serde_json::json!({
                "root": item.root,
                "source": item.source,
            })),
        })
        .collect::<Vec<_>>();

    for entry in &entries {
        anyhow::ensure!(
            !entry.word.is_empty() && !entry.definition.is_empty(),
            "bundled entry {} has empty text fields",
            entry.id
        );
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_list_parses_and_is_non_empty() {
        let entries = parse_bundled(BUNDLED_WORDS).expect("parse bundled list");
        assert!(!entries.is_empty());
    }

    #[test]
    fn entries_keep_file_order_with_positional_ids() {
        let entries = parse_bundled(BUNDLED_WORDS).expect("parse bundled list");
        for (position, entry) in entries.iter().enumerate() {
            assert_eq!(entry.id, WordId::new(position as i64 + 1));
        }
        assert_eq!(entries[0].word, "سلام");
    }

    #[test]
    fn repeated_access_yields_identical_contents() {
        let first = fallback_words();
        let second = fallback_words();
        assert_eq!(first.len(), second.len());
        assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
    }

    #[test]
    fn malformed_payload_is_rejected() {
        assert!(parse_bundled("{\"not\": \"a list\"}").is_err());
    }

    #[test]
    fn empty_text_fields_are_rejected() {
        let raw = r#"[{ "word": "", "definition": "x" }]"#;
        assert!(parse_bundled(raw).is_err());
    }
}
