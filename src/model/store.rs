//! Read-only store for the five reference datasets
//!
//! Each dataset is loaded once at startup and never mutated afterwards; the
//! rest of the application only holds shared references into it.

use super::record::Record;

/// The five reference collections known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Employees,
    Departments,
    Customers,
    Products,
    Orders,
}

impl Dataset {
    pub fn all() -> [Dataset; 5] {
        [
            Dataset::Employees,
            Dataset::Departments,
            Dataset::Customers,
            Dataset::Products,
            Dataset::Orders,
        ]
    }

    /// Dataset identifier, also the top-level key of its source document
    /// and the stem of its file name (`employees` -> `employees.json`).
    pub fn key(&self) -> &'static str {
        match self {
            Dataset::Employees => "employees",
            Dataset::Departments => "departments",
            Dataset::Customers => "customers",
            Dataset::Products => "products",
            Dataset::Orders => "orders",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dataset::Employees => "Employees",
            Dataset::Departments => "Departments",
            Dataset::Customers => "Customers",
            Dataset::Products => "Products",
            Dataset::Orders => "Orders",
        }
    }
}

/// In-memory holder of the reference collections, exposed by name.
#[derive(Debug, Default)]
pub struct RecordStore {
    employees: Vec<Record>,
    departments: Vec<Record>,
    customers: Vec<Record>,
    products: Vec<Record>,
    orders: Vec<Record>,
}

impl RecordStore {
    pub fn records(&self, dataset: Dataset) -> &[Record] {
        match dataset {
            Dataset::Employees => &self.employees,
            Dataset::Departments => &self.departments,
            Dataset::Customers => &self.customers,
            Dataset::Products => &self.products,
            Dataset::Orders => &self.orders,
        }
    }

    /// Shorthand for the collection the form view works against.
    pub fn employees(&self) -> &[Record] {
        &self.employees
    }

    /// Only the loader writes; everything after startup reads.
    pub(crate) fn set_records(&mut self, dataset: Dataset, records: Vec<Record>) {
        match dataset {
            Dataset::Employees => self.employees = records,
            Dataset::Departments => self.departments = records,
            Dataset::Customers => self.customers = records,
            Dataset::Products => self.products = records,
            Dataset::Orders => self.orders = records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_exposes_datasets_by_name() {
        let mut store = RecordStore::default();
        let row = match json!({"id": "D01"}) {
            serde_json::Value::Object(map) => Record::from_object(map),
            _ => unreachable!(),
        };
        store.set_records(Dataset::Departments, vec![row]);

        assert_eq!(store.records(Dataset::Departments).len(), 1);
        assert!(store.records(Dataset::Employees).is_empty());
        assert!(store.employees().is_empty());
    }

    #[test]
    fn test_dataset_keys_match_document_keys() {
        let keys: Vec<&str> = Dataset::all().iter().map(|d| d.key()).collect();
        assert_eq!(
            keys,
            vec!["employees", "departments", "customers", "products", "orders"]
        );
    }
}
