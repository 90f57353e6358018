//! Action enum - All possible application actions
//!
//! Components translate raw key events into semantic Actions; the App
//! processes them to update state. An action may produce one follow-up
//! action, which the main loop feeds back in.

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while no input is pending
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Form Editing
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the next form field
    NextField,
    /// Focus the previous form field
    PrevField,
    /// Append a character to the focused field
    FieldInput(char),
    /// Remove the last character of the focused field
    FieldBackspace,
    /// Open the value-help picker for the focused field
    OpenValueHelp,
    /// Validate the form and, if it passes, ask for save confirmation
    Save,

    // ─────────────────────────────────────────────────────────────────────────
    // Employee List
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode (typing edits the query)
    EnterSearchMode,
    /// Leave search mode, keeping the current query applied
    ExitSearchMode,
    /// Append a character to the search query
    SearchInput(char),
    /// Remove the last character of the search query
    SearchBackspace,
    /// Export the employee dataset to a CSV file
    ExportCsv,

    // ─────────────────────────────────────────────────────────────────────────
    // Messages
    // ─────────────────────────────────────────────────────────────────────────
    /// Show or hide the notification panel
    ToggleMessagePanel,
    /// Drop all messages from the panel
    ClearMessages,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the dialog registered under the given identifier
    OpenDialog(String),
    /// Cancel/close the topmost open dialog
    CloseModal,
    /// Confirm the topmost open dialog
    ConfirmModal,
    /// Move the selection in the topmost dialog up
    ModalUp,
    /// Move the selection in the topmost dialog down
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Navigate to a view by symbolic route name
    NavTo(String),
    /// Select the next item in the current list view
    NextItem,
    /// Select the previous item in the current list view
    PrevItem,
}
