//! Loaders for already-normalized ontology snapshots.
//!
//! Triples are read from one of three layouts, chosen by extension:
//!
//! - `.tsv`: `super<TAB>predicate<TAB>sub` per line, `#` comments allowed
//! - `.jsonl`: one `{"super_topic", "predicate", "sub_topic"}` object per line
//! - `.json`: an array of such objects
//!
//! Specific topics are a plain list, one topic per line.

use repa_core::error::{LoadError, RepaError, Result};
use repa_core::types::Triple;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// Read every triple from a snapshot file.
pub fn read_triples(path: &Path) -> Result<Vec<Triple>> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let content = std::fs::read_to_string(path)?;

    let triples = match extension.as_str() {
        "tsv" => parse_tsv(&content)?,
        "jsonl" => parse_jsonl(&content)?,
        "json" => serde_json::from_str::<Vec<Triple>>(&content)?,
        other => {
            return Err(RepaError::Load(LoadError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })))
        }
    };

    info!(path = %path.display(), triples = triples.len(), "triples loaded");
    Ok(triples)
}

/// Parse tab-separated triples. Line numbers in errors are 1-based.
pub fn parse_tsv(content: &str) -> Result<Vec<Triple>> {
    let mut triples = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(RepaError::malformed_line(
                i + 1,
                format!("expected 3 tab-separated fields, found {}", fields.len()),
            ));
        }
        triples.push(Triple::new(fields[0].trim(), fields[1].trim(), fields[2].trim()));
    }
    Ok(triples)
}

/// Parse newline-delimited JSON triples, skipping blank lines.
pub fn parse_jsonl(content: &str) -> Result<Vec<Triple>> {
    let mut triples = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let triple: Triple = serde_json::from_str(line)
            .map_err(|e| RepaError::malformed_line(i + 1, e.to_string()))?;
        triples.push(triple);
    }
    Ok(triples)
}

/// Read the specific-topic list: trimmed, blank lines ignored.
pub fn read_specific_topics(path: &Path) -> Result<BTreeSet<String>> {
    let content = std::fs::read_to_string(path)?;
    let topics: BTreeSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    info!(path = %path.display(), topics = topics.len(), "specific topics loaded");
    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn tsv_skips_comments_and_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ontology.tsv");
        fs::write(
            &path,
            "# super\tpredicate\tsub\n\nai\tskos:narrower\tmachine learning\nsvm\tcso#relatedEquivalent\tsupport vector machine\n",
        )
        .unwrap();

        let triples = read_triples(&path).unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0], Triple::new("ai", "skos:narrower", "machine learning"));
    }

    #[test]
    fn tsv_reports_malformed_line_number() {
        let err = parse_tsv("a\tp\tb\nbroken line\n").unwrap_err();
        assert!(matches!(
            err,
            RepaError::Load(LoadError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn tsv_keeps_empty_topics_for_the_builder() {
        let triples = parse_tsv("\tskos:narrower\torphan\n").unwrap();
        assert_eq!(triples.len(), 1);
        assert!(triples[0].super_topic.is_empty());
    }

    #[test]
    fn jsonl_and_json_layouts() {
        let dir = TempDir::new().unwrap();
        let line = r#"{"super_topic":"ai","predicate":"skos:narrower","sub_topic":"planning"}"#;

        let jsonl = dir.path().join("ontology.jsonl");
        fs::write(&jsonl, format!("{line}\n\n{line}\n")).unwrap();
        assert_eq!(read_triples(&jsonl).unwrap().len(), 2);

        let json = dir.path().join("ontology.json");
        fs::write(&json, format!("[{line}]")).unwrap();
        let triples = read_triples(&json).unwrap();
        assert_eq!(triples, vec![Triple::new("ai", "skos:narrower", "planning")]);
    }

    #[test]
    fn jsonl_reports_malformed_line_number() {
        let err = parse_jsonl("{\"super_topic\":\"a\"}\n").unwrap_err();
        assert!(matches!(
            err,
            RepaError::Load(LoadError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ontology.csv");
        fs::write(&path, "a,p,b\n").unwrap();
        let err = read_triples(&path).unwrap_err();
        assert_eq!(
            err,
            RepaError::Load(LoadError::UnsupportedFormat("csv".to_string()))
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_triples(&dir.path().join("absent.tsv")).unwrap_err();
        assert!(matches!(err, RepaError::Io(_)));
    }

    #[test]
    fn specific_topics_are_trimmed_and_sorted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("specific.txt");
        fs::write(&path, "  planning \n\nai\nplanning\n").unwrap();

        let topics = read_specific_topics(&path).unwrap();
        let topics: Vec<&str> = topics.iter().map(String::as_str).collect();
        assert_eq!(topics, vec!["ai", "planning"]);
    }
}
