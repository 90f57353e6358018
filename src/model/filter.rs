//! Free-text filter over a record list
//!
//! The filter is a predicate-based view: it never copies or mutates the
//! underlying records, it only changes which of them are visible. One
//! predicate at a time; a new query replaces the previous one.

use super::record::Record;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub query: String,
    pub field: String,
    pub active: bool,
}

impl RecordFilter {
    /// Install a case-sensitive "contains" predicate on `field`.
    ///
    /// An empty or whitespace-only query is the same as [`clear`]: the full
    /// record set becomes visible again.
    ///
    /// [`clear`]: RecordFilter::clear
    pub fn apply(&mut self, query: &str, field: &str) {
        if query.trim().is_empty() {
            self.clear();
            return;
        }
        self.query = query.to_string();
        self.field = field.to_string();
        self.active = true;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.field.clear();
        self.active = false;
    }

    /// The records the list view should expose right now.
    pub fn visible<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        if !self.active {
            return records.iter().collect();
        }
        records
            .iter()
            .filter(|record| record.display_value(&self.field).contains(&self.query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn records() -> Vec<Record> {
        ["Anna", "Ben", "Chloe", "Daniel"]
            .iter()
            .map(|name| match json!({"firstName": name, "active": true}) {
                Value::Object(map) => Record::from_object(map),
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_contains_predicate() {
        let rows = records();
        let mut filter = RecordFilter::default();
        filter.apply("an", "firstName");

        let visible = filter.visible(&rows);
        // "Anna" does not match: containment is case-sensitive.
        let names: Vec<String> = visible
            .iter()
            .map(|r| r.display_value("firstName"))
            .collect();
        assert_eq!(names, vec!["Daniel"]);
    }

    #[test]
    fn test_empty_query_equals_clear() {
        let rows = records();
        let mut filter = RecordFilter::default();

        filter.apply("", "firstName");
        assert!(!filter.active);
        assert_eq!(filter.visible(&rows).len(), rows.len());

        filter.apply("   ", "firstName");
        assert!(!filter.active);
        assert_eq!(filter.visible(&rows).len(), rows.len());
    }

    #[test]
    fn test_clear_restores_full_set() {
        let rows = records();
        let mut filter = RecordFilter::default();
        filter.apply("Ben", "firstName");
        assert_eq!(filter.visible(&rows).len(), 1);

        filter.clear();
        assert_eq!(filter.visible(&rows).len(), rows.len());
    }

    #[test]
    fn test_reapply_is_idempotent() {
        let rows = records();
        let mut filter = RecordFilter::default();
        filter.apply("hlo", "firstName");
        let first: Vec<String> = filter
            .visible(&rows)
            .iter()
            .map(|r| r.display_value("firstName"))
            .collect();

        filter.apply("hlo", "firstName");
        let second: Vec<String> = filter
            .visible(&rows)
            .iter()
            .map(|r| r.display_value("firstName"))
            .collect();

        assert_eq!(first, second);
        assert_eq!(first, vec!["Chloe"]);
    }

    #[test]
    fn test_new_query_replaces_old_one() {
        let rows = records();
        let mut filter = RecordFilter::default();
        filter.apply("Anna", "firstName");
        // If filters composed, "Ben" after "Anna" would match nothing.
        filter.apply("Ben", "firstName");
        assert_eq!(filter.visible(&rows).len(), 1);
    }

    #[test]
    fn test_record_without_field_never_matches() {
        let rows = vec![match json!({"lastName": "Keller"}) {
            Value::Object(map) => Record::from_object(map),
            _ => unreachable!(),
        }];
        let mut filter = RecordFilter::default();
        filter.apply("Kel", "firstName");
        assert!(filter.visible(&rows).is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_records() {
        let rows = records();
        let mut filter = RecordFilter::default();
        filter.apply("Anna", "firstName");
        let _ = filter.visible(&rows);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].display_value("firstName"), "Anna");
    }
}
