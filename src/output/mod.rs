//! Output module for JSON persistence
//!
//! Serializes accumulated record collections as pretty-printed JSON arrays,
//! written with 4-space indentation and non-ASCII characters kept literal.

use crate::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes a record collection as a JSON array to the given path
///
/// Any existing content at the destination is overwritten. Output is UTF-8
/// with a trailing newline; non-ASCII characters are emitted literally
/// rather than escaped.
///
/// # Arguments
///
/// * `records` - The records to serialize, in collection order
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the file
/// * `Err(ScrapeError)` - The destination could not be written
pub fn write_records<T: Serialize>(records: &[T], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    records.serialize(&mut serializer)?;

    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::QuoteRecord;
    use tempfile::tempdir;

    fn sample_quote() -> QuoteRecord {
        QuoteRecord {
            quote: "“Träume nicht dein Leben, lebe deinen Traum.”".to_string(),
            author: "Unbekannt".to_string(),
            tags: vec!["leben".to_string(), "träume".to_string()],
        }
    }

    #[test]
    fn test_write_records_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        write_records(&[sample_quote()], &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n    {\n        \"quote\""));
        assert!(written.ends_with("]\n"));
    }

    #[test]
    fn test_write_records_literal_non_ascii() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        write_records(&[sample_quote()], &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Träume"));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn test_write_records_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        let records = vec![sample_quote()];
        write_records(&records, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<QuoteRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_write_records_empty_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        let records: Vec<QuoteRecord> = Vec::new();
        write_records(&records, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[]\n");
    }

    #[test]
    fn test_write_records_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        std::fs::write(&path, "stale content").unwrap();
        write_records(&[sample_quote()], &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        let parsed: Vec<QuoteRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_write_records_unwritable_destination() {
        let result = write_records(&[sample_quote()], Path::new("/nonexistent/dir/quotes.json"));
        assert!(matches!(result, Err(crate::ScrapeError::Io(_))));
    }
}
