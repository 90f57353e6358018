//! CSV serialization and the local file-save boundary

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::record::Record;

pub const EXPORT_FILENAME: &str = "employee_data.csv";
pub const EXPORT_MIME: &str = "text/csv";

/// Serialize records to CSV text.
///
/// The header row is the first record's field names in iteration order,
/// unquoted. Every data cell is double-quoted with embedded quotes doubled;
/// a field missing from a later record becomes a quoted empty string. Rows
/// are newline-terminated, including the last one. An empty input yields an
/// empty string with no header.
///
/// Rows are emitted strictly against the header derived from record one;
/// extra fields on later records are dropped, missing ones are blank. The
/// datasets are homogeneous by convention, so no reconciliation is
/// attempted.
pub fn to_csv(records: &[Record]) -> Result<String> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };
    let headers = first.field_names();

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(headers.iter().map(|field| record.display_value(field)))?;
    }
    writer.flush()?;
    let body = String::from_utf8(
        writer
            .into_inner()
            .map_err(|e| anyhow!("finalizing csv writer: {}", e))?,
    )?;

    Ok(format!("{}\n{}", headers.join(","), body))
}

/// Client-local "save as file" boundary. The caller supplies content, mime
/// type, and a suggested file name; no return value beyond the landing path
/// is consumed.
pub trait FileSaver {
    fn save(&self, bytes: &[u8], mime: &str, filename: &str) -> Result<PathBuf>;
}

/// Writes downloads into a configured directory.
pub struct DiskSaver {
    dir: PathBuf,
}

impl DiskSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSaver for DiskSaver {
    fn save(&self, bytes: &[u8], _mime: &str, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(raw: Value) -> Record {
        match raw {
            Value::Object(map) => Record::from_object(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(to_csv(&[]).unwrap(), "");
    }

    #[test]
    fn test_single_record() {
        let rows = vec![record(json!({"a": "1", "b": "x"}))];
        assert_eq!(to_csv(&rows).unwrap(), "a,b\n\"1\",\"x\"\n");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let rows = vec![record(json!({"a": "he said \"hi\""}))];
        assert_eq!(to_csv(&rows).unwrap(), "a\n\"he said \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_numbers_are_stringified_and_quoted() {
        let rows = vec![record(json!({"name": "Anna", "salary": 72000}))];
        assert_eq!(
            to_csv(&rows).unwrap(),
            "name,salary\n\"Anna\",\"72000\"\n"
        );
    }

    #[test]
    fn test_missing_field_becomes_empty_cell() {
        let rows = vec![
            record(json!({"a": "1", "b": "2"})),
            record(json!({"a": "3"})),
        ];
        assert_eq!(to_csv(&rows).unwrap(), "a,b\n\"1\",\"2\"\n\"3\",\"\"\n");
    }

    #[test]
    fn test_rows_follow_first_record_header() {
        // A field only the second record has is silently dropped.
        let rows = vec![
            record(json!({"a": "1"})),
            record(json!({"a": "2", "extra": "ignored"})),
        ];
        assert_eq!(to_csv(&rows).unwrap(), "a\n\"1\"\n\"2\"\n");
    }

    #[test]
    fn test_disk_saver_writes_file() {
        let dir = std::env::temp_dir().join("staff-tui-test-export");
        let saver = DiskSaver::new(&dir);
        let path = saver
            .save(b"a,b\n", EXPORT_MIME, EXPORT_FILENAME)
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");
        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }
}
