//! Collaborators outside the interaction core
//!
//! - Dataset loading (static JSON documents into the record store)
//! - CSV serialization and the local file-save boundary

pub mod datasets;
pub mod export;

pub use datasets::load_store;
pub use export::{to_csv, DiskSaver, FileSaver, EXPORT_FILENAME, EXPORT_MIME};
