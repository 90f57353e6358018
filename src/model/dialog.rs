//! Dialog registry: a named state machine for modal overlays
//!
//! Dialog instances are built lazily by a memoizing factory on first open
//! and reused for the rest of the session; per-instance state (such as the
//! value-help selection) therefore survives close/reopen. An open-order
//! stack determines which dialog currently receives input and is drawn on
//! top.

use std::collections::HashMap;

use thiserror::Error;

use super::form::FieldId;

pub const QUIT_DIALOG: &str = "quitDialog";
pub const SAVE_CONFIRM_DIALOG: &str = "confirmDialog";
pub const VALUE_HELP_DIALOG: &str = "valueHelpDialog";

/// One selectable item in the value-help dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub label: String,
    pub description: String,
}

impl LookupEntry {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Supplier of value-help items. The dialog only needs an ordered list on
/// demand, so any backing source can stand in for the sample one.
pub trait LookupProvider {
    fn entries(&self) -> Vec<LookupEntry>;
}

/// Fixed sample items; a real deployment would back this with a dataset.
pub struct SampleLookup;

impl LookupProvider for SampleLookup {
    fn entries(&self) -> Vec<LookupEntry> {
        (1..=3)
            .map(|i| LookupEntry::new(format!("Item {i}"), format!("Description {i}")))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
}

/// Per-kind instance state. Confirm dialogs are static text; the value-help
/// dialog owns its item list and selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogBody {
    Confirm {
        title: String,
        prompt: String,
    },
    ValueHelp {
        items: Vec<LookupEntry>,
        selected: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub state: DialogState,
    pub body: DialogBody,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("Dialog with ID '{0}' not found")]
    NotFound(String),
}

/// Routing context for one value-help invocation, captured when the dialog
/// opens. Confirm consumes it, so overlapping invocations from different
/// fields can never cross-wire their results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueHelpContext {
    pub dialog_id: String,
    pub field: FieldId,
}

#[derive(Debug, Default)]
pub struct DialogRegistry {
    dialogs: HashMap<String, Dialog>,
    open_order: Vec<String>,
}

impl DialogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instance factory: pure function of the identifier plus static
    /// configuration. Unknown identifiers have no instance.
    fn build(id: &str, lookup: &dyn LookupProvider) -> Option<DialogBody> {
        match id {
            QUIT_DIALOG => Some(DialogBody::Confirm {
                title: "Quit?".to_string(),
                prompt: "Are you sure you want to quit?".to_string(),
            }),
            SAVE_CONFIRM_DIALOG => Some(DialogBody::Confirm {
                title: "Save Employee".to_string(),
                prompt: "Save the employee record?".to_string(),
            }),
            VALUE_HELP_DIALOG => Some(DialogBody::ValueHelp {
                items: lookup.entries(),
                selected: 0,
            }),
            _ => None,
        }
    }

    /// Open the dialog for `id`, constructing and registering it first if
    /// this is the first open of the session. Opening an already-open
    /// dialog is a no-op.
    pub fn open(&mut self, id: &str, lookup: &dyn LookupProvider) -> Result<(), DialogError> {
        if !self.dialogs.contains_key(id) {
            let body =
                Self::build(id, lookup).ok_or_else(|| DialogError::NotFound(id.to_string()))?;
            self.dialogs.insert(
                id.to_string(),
                Dialog {
                    state: DialogState::Closed,
                    body,
                },
            );
        }
        let Some(dialog) = self.dialogs.get_mut(id) else {
            return Err(DialogError::NotFound(id.to_string()));
        };
        if dialog.state != DialogState::Open {
            dialog.state = DialogState::Open;
            self.open_order.push(id.to_string());
        }
        Ok(())
    }

    /// Open -> Closed; no-op when already Closed. An identifier that was
    /// never registered is reported, not panicked on.
    pub fn close(&mut self, id: &str) -> Result<(), DialogError> {
        let Some(dialog) = self.dialogs.get_mut(id) else {
            return Err(DialogError::NotFound(id.to_string()));
        };
        if dialog.state == DialogState::Open {
            dialog.state = DialogState::Closed;
            self.open_order.retain(|open| open != id);
        }
        Ok(())
    }

    /// Identifier of the dialog that currently receives input.
    pub fn top_open(&self) -> Option<&str> {
        self.open_order.last().map(String::as_str)
    }

    pub fn any_open(&self) -> bool {
        !self.open_order.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Dialog> {
        self.dialogs.get(id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.dialogs
            .get(id)
            .map(|d| d.state == DialogState::Open)
            .unwrap_or(false)
    }

    /// Move the value-help selection by one step. No-op for confirm bodies.
    pub fn move_selection(&mut self, id: &str, delta: isize) {
        if let Some(Dialog {
            body: DialogBody::ValueHelp { items, selected },
            ..
        }) = self.dialogs.get_mut(id)
        {
            if items.is_empty() {
                return;
            }
            let max = items.len() - 1;
            *selected = if delta < 0 {
                selected.saturating_sub(delta.unsigned_abs())
            } else {
                (*selected + delta as usize).min(max)
            };
        }
    }

    /// The currently highlighted value-help entry, if `id` is a value-help
    /// dialog with at least one item.
    pub fn selected_entry(&self, id: &str) -> Option<&LookupEntry> {
        match self.dialogs.get(id) {
            Some(Dialog {
                body: DialogBody::ValueHelp { items, selected },
                ..
            }) => items.get(*selected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_leaves_closed() {
        let mut registry = DialogRegistry::new();
        registry.open(QUIT_DIALOG, &SampleLookup).unwrap();
        assert!(registry.is_open(QUIT_DIALOG));

        registry.close(QUIT_DIALOG).unwrap();
        assert!(!registry.is_open(QUIT_DIALOG));
        assert_eq!(
            registry.get(QUIT_DIALOG).unwrap().state,
            DialogState::Closed
        );
    }

    #[test]
    fn test_close_on_never_opened_id_reports_not_found() {
        let mut registry = DialogRegistry::new();
        let err = registry.close("confirmDialog").unwrap_err();
        assert_eq!(err, DialogError::NotFound("confirmDialog".to_string()));
        assert_eq!(
            err.to_string(),
            "Dialog with ID 'confirmDialog' not found"
        );
    }

    #[test]
    fn test_open_unknown_id_reports_not_found() {
        let mut registry = DialogRegistry::new();
        let err = registry.open("nope", &SampleLookup).unwrap_err();
        assert_eq!(err, DialogError::NotFound("nope".to_string()));
        assert!(!registry.any_open());
    }

    #[test]
    fn test_instance_is_constructed_once_and_reused() {
        let mut registry = DialogRegistry::new();
        registry.open(VALUE_HELP_DIALOG, &SampleLookup).unwrap();
        registry.move_selection(VALUE_HELP_DIALOG, 2);
        registry.close(VALUE_HELP_DIALOG).unwrap();

        // Reopen: the memoized instance keeps its selection, proving it was
        // not rebuilt.
        registry.open(VALUE_HELP_DIALOG, &SampleLookup).unwrap();
        assert_eq!(
            registry.selected_entry(VALUE_HELP_DIALOG).unwrap().label,
            "Item 3"
        );
    }

    #[test]
    fn test_double_open_keeps_single_stack_entry() {
        let mut registry = DialogRegistry::new();
        registry.open(QUIT_DIALOG, &SampleLookup).unwrap();
        registry.open(QUIT_DIALOG, &SampleLookup).unwrap();
        assert_eq!(registry.top_open(), Some(QUIT_DIALOG));

        registry.close(QUIT_DIALOG).unwrap();
        assert!(!registry.any_open());
    }

    #[test]
    fn test_top_open_follows_stack_order() {
        let mut registry = DialogRegistry::new();
        registry.open(SAVE_CONFIRM_DIALOG, &SampleLookup).unwrap();
        registry.open(VALUE_HELP_DIALOG, &SampleLookup).unwrap();
        assert_eq!(registry.top_open(), Some(VALUE_HELP_DIALOG));

        registry.close(VALUE_HELP_DIALOG).unwrap();
        assert_eq!(registry.top_open(), Some(SAVE_CONFIRM_DIALOG));
    }

    #[test]
    fn test_selection_clamps_at_bounds() {
        let mut registry = DialogRegistry::new();
        registry.open(VALUE_HELP_DIALOG, &SampleLookup).unwrap();

        registry.move_selection(VALUE_HELP_DIALOG, -1);
        assert_eq!(
            registry.selected_entry(VALUE_HELP_DIALOG).unwrap().label,
            "Item 1"
        );

        registry.move_selection(VALUE_HELP_DIALOG, 10);
        assert_eq!(
            registry.selected_entry(VALUE_HELP_DIALOG).unwrap().label,
            "Item 3"
        );
    }

    #[test]
    fn test_sample_lookup_entries() {
        let entries = SampleLookup.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].label, "Item 2");
        assert_eq!(entries[1].description, "Description 2");
    }
}
