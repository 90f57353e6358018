//! Model layer - centralized state management
//!
//! All state-related types live here:
//! - `RecordStore` / `Record` - the read-only reference datasets
//! - `FormState` - the employee form and its validation
//! - `RecordFilter` - the predicate view over the employee list
//! - `MessageCenter` - the ordered notification list
//! - `DialogRegistry` - the modal dialog state machine
//! - `Route` - symbolic view routing

pub mod dialog;
pub mod filter;
pub mod form;
pub mod message;
pub mod record;
pub mod store;
pub mod ui;

pub use dialog::{DialogRegistry, LookupEntry, ValueHelpContext};
pub use filter::RecordFilter;
pub use form::{FieldId, FormState};
pub use message::{Message, MessageCenter, Severity};
pub use record::Record;
pub use store::{Dataset, RecordStore};
pub use ui::Route;
