//! Word catalog file loader.
//!
//! Reads the same JSON shape the game's dictionary exports use:
//! a list of `{ "word", "definition", "root"?, "source"? }` objects.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use kl_core::words::NewWordEntry;

#[derive(Debug, Deserialize)]
struct WordSeed {
    word: String,
    definition: String,
    root: Option<String>,
    source: Option<String>,
}

pub fn read_word_file(path: &Path) -> Result<Vec<NewWordEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read word file failed: {}", path.display()))?;

    let seeds: Vec<WordSeed> = serde_json::from_str(&raw)
        .with_context(|| format!("parse word file failed: {}", path.display()))?;

    Ok(seeds
        .into_iter()
        .map(|seed| {
            let meta = serde_json::json!({
                "root": seed.root,
                "source": seed.source,
            });
            NewWordEntry::new(seed.word, seed.definition, Some(meta))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_a_word_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"word": "قمر", "definition": "جرم سماوي", "root": "ق م ر"}}]"#
        )
        .expect("write seed");

        let entries = read_word_file(file.path()).expect("read word file");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "قمر");
        assert_eq!(
            entries[0].meta.as_ref().unwrap()["root"],
            serde_json::json!("ق م ر")
        );
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = read_word_file(Path::new("/nonexistent/words.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.json"));
    }
}
