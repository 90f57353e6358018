//! Generic record type for the reference datasets
//!
//! A record is an ordered field-name-to-value mapping. The field set is not
//! declared anywhere; consumers discover it from the record itself (the CSV
//! export reads the header from the first record's iteration order).

use serde_json::{Map, Value};

/// One business entity: ordered field names mapped to scalar JSON values.
///
/// Backed by `serde_json::Map` with the `preserve_order` feature, so
/// iteration order is the order the fields appeared in the source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn from_object(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Field names in document order.
    pub fn field_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String form of a field value; missing fields and nulls read as "".
    pub fn display_value(&self, field: &str) -> String {
        self.0.get(field).map(value_to_string).unwrap_or_default()
    }
}

/// Render a scalar JSON value the way it should appear in a cell or CSV
/// field: strings without quotes, numbers/bools via their display form.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(raw: serde_json::Value) -> Record {
        match raw {
            Value::Object(map) => Record::from_object(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_field_names_preserve_document_order() {
        let r = record(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        assert_eq!(r.field_names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_display_value_coercions() {
        let r = record(json!({
            "name": "Anna",
            "salary": 72000,
            "rate": 24.9,
            "active": true,
            "note": null
        }));
        assert_eq!(r.display_value("name"), "Anna");
        assert_eq!(r.display_value("salary"), "72000");
        assert_eq!(r.display_value("rate"), "24.9");
        assert_eq!(r.display_value("active"), "true");
        assert_eq!(r.display_value("note"), "");
    }

    #[test]
    fn test_display_value_missing_field_is_empty() {
        let r = record(json!({"name": "Anna"}));
        assert_eq!(r.display_value("email"), "");
    }
}
