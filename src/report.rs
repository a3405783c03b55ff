//! JSON report output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::collect::WebhookRecord;

/// Write the collected records to `path` as a 4-space-indented JSON array.
///
/// Overwrites any existing file at the destination.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the encode fails. No
/// atomic-write guarantee; a failure mid-encode can leave a partial file.
pub fn write_report(records: &[WebhookRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    records
        .serialize(&mut serializer)
        .context("Failed to encode JSON report")?;

    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<WebhookRecord> {
        vec![
            WebhookRecord {
                repository_name: "a".to_string(),
                repository_url: "https://github.com/acme/a".to_string(),
                webhooks: vec!["https://x".to_string(), "https://y".to_string()],
            },
            WebhookRecord {
                repository_name: "b".to_string(),
                repository_url: "https://github.com/acme/b".to_string(),
                webhooks: vec![],
            },
        ]
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webhooks.json");
        let records = sample_records();

        write_report(&records, &path).unwrap();

        let parsed: Vec<WebhookRecord> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_four_space_indentation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webhooks.json");

        write_report(&sample_records(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n    {"));
        assert!(text.contains("\n        \"repository_name\": \"a\""));
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn test_empty_record_set_is_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webhooks.json");

        write_report(&[], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webhooks.json");
        std::fs::write(&path, "stale contents").unwrap();

        write_report(&[], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_unwritable_destination_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("webhooks.json");

        let result = write_report(&[], &path);
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Failed to create"));
    }
}
