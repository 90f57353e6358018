//! Loading of the reference datasets
//!
//! Each of the five datasets comes from its own JSON document with the
//! records under a top-level key named after the dataset. The documents are
//! compiled into the binary; a configured data directory can override any
//! of them file by file. A document that is missing, malformed, or lacks
//! its key yields an empty collection for that dataset only - the other
//! loads are independent.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::model::record::Record;
use crate::model::store::{Dataset, RecordStore};

fn embedded_document(dataset: Dataset) -> &'static str {
    match dataset {
        Dataset::Employees => include_str!("../../data/employees.json"),
        Dataset::Departments => include_str!("../../data/departments.json"),
        Dataset::Customers => include_str!("../../data/customers.json"),
        Dataset::Products => include_str!("../../data/products.json"),
        Dataset::Orders => include_str!("../../data/orders.json"),
    }
}

/// Load all five datasets, preferring `<data_dir>/<name>.json` when a data
/// directory is configured and readable.
pub fn load_store(data_dir: Option<&Path>) -> RecordStore {
    let mut store = RecordStore::default();
    for dataset in Dataset::all() {
        let raw = read_document(dataset, data_dir);
        store.set_records(dataset, parse_document(dataset.key(), &raw));
    }
    store
}

fn read_document(dataset: Dataset, data_dir: Option<&Path>) -> String {
    if let Some(dir) = data_dir {
        let path = dir.join(format!("{}.json", dataset.key()));
        if let Ok(contents) = fs::read_to_string(&path) {
            return contents;
        }
    }
    embedded_document(dataset).to_string()
}

/// Parse one dataset document. Any shape problem degrades to an empty
/// collection rather than an error: a broken reference file must not take
/// the application down.
pub fn parse_document(key: &str, raw: &str) -> Vec<Record> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };
    let Some(rows) = value.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    rows.iter()
        .filter_map(|row| match row {
            Value::Object(map) => Some(Record::from_object(map.clone())),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_reads_rows_under_key() {
        let raw = r#"{"employees": [{"firstName": "Anna"}, {"firstName": "Ben"}]}"#;
        let records = parse_document("employees", raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].display_value("firstName"), "Anna");
    }

    #[test]
    fn test_parse_document_missing_key_is_empty() {
        let raw = r#"{"people": [{"firstName": "Anna"}]}"#;
        assert!(parse_document("employees", raw).is_empty());
    }

    #[test]
    fn test_parse_document_malformed_json_is_empty() {
        assert!(parse_document("employees", "{not json").is_empty());
    }

    #[test]
    fn test_parse_document_skips_non_object_rows() {
        let raw = r#"{"orders": [{"orderId": "O-1"}, 42, "stray"]}"#;
        let records = parse_document("orders", raw);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_embedded_documents_all_load() {
        let store = load_store(None);
        for dataset in Dataset::all() {
            assert!(
                !store.records(dataset).is_empty(),
                "embedded {} should not be empty",
                dataset.key()
            );
        }
    }

    #[test]
    fn test_one_broken_document_does_not_affect_siblings() {
        // Simulates the independent-load contract at the parse level.
        let good = parse_document("customers", r#"{"customers": [{"id": "C1"}]}"#);
        let bad = parse_document("products", "oops");
        assert_eq!(good.len(), 1);
        assert!(bad.is_empty());
    }
}
