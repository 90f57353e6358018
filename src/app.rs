//! Root application component
//!
//! The App struct implements the Component trait, acting as the root that
//! routes events to whichever surface currently has input priority (topmost
//! dialog, then the message panel, then the active view) and applies
//! Actions to the model. App coordinates; the business rules live in the
//! model layer.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_form_view, ConfirmDialog, FormRenderContext, FormViewComponent, MessagePanel,
    SecondViewComponent, ValueHelpDialog,
};
use crate::config::Config;
use crate::model::dialog::{
    DialogBody, DialogRegistry, SampleLookup, ValueHelpContext, QUIT_DIALOG, SAVE_CONFIRM_DIALOG,
    VALUE_HELP_DIALOG,
};
use crate::model::filter::RecordFilter;
use crate::model::form::{FieldId, FormState};
use crate::model::message::{Message, MessageCenter, Severity};
use crate::model::store::RecordStore;
use crate::model::ui::Route;
use crate::services::{self, DiskSaver, FileSaver, EXPORT_FILENAME, EXPORT_MIME};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::path::Path;

/// The field the employee search matches against. Single-field on purpose;
/// the filter itself takes the field as a parameter.
const SEARCH_FIELD: &str = "firstName";

/// Main application state - coordinates between components
pub struct App {
    /// Current view
    pub route: Route,

    /// The five reference datasets, loaded once at startup
    pub store: RecordStore,

    /// Employee entry form
    pub form: FormState,

    /// Predicate view over the employee list
    pub filter: RecordFilter,

    /// Ordered notification list
    pub messages: MessageCenter,

    /// Modal dialog state machine
    pub dialogs: DialogRegistry,

    /// Routing context of the pending value-help invocation, captured at
    /// open time
    pub value_help_ctx: Option<ValueHelpContext>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Transient notice shown in the status line
    pub notice: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub form_view: FormViewComponent,
    pub second_view: SecondViewComponent,
    /// Created on first toggle, reused for the rest of the session
    pub message_panel: Option<MessagePanel>,
    confirm_dialog: ConfirmDialog,
    value_help_dialog: ValueHelpDialog,

    lookup: SampleLookup,
    saver: DiskSaver,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance from the on-disk config (or defaults).
    pub fn new() -> App {
        Self::with_config(Config::load_or_default())
    }

    pub fn with_config(config: Config) -> App {
        let data_dir = config.data_dir.as_deref().map(Path::new);
        App {
            route: Route::Main,
            store: services::load_store(data_dir),
            form: FormState::new(),
            filter: RecordFilter::default(),
            messages: MessageCenter::new(),
            dialogs: DialogRegistry::new(),
            value_help_ctx: None,
            should_quit: false,
            notice: None,
            form_view: FormViewComponent::new(),
            second_view: SecondViewComponent::new(),
            message_panel: None,
            confirm_dialog: ConfirmDialog,
            value_help_dialog: ValueHelpDialog::new(),
            lookup: SampleLookup,
            saver: DiskSaver::new(&config.export_dir),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dialog plumbing
    // ─────────────────────────────────────────────────────────────────────────

    fn open_dialog(&mut self, id: &str) {
        if let Err(err) = self.dialogs.open(id, &self.lookup) {
            self.notice = Some(err.to_string());
        }
    }

    fn close_dialog(&mut self, id: &str) {
        if let Err(err) = self.dialogs.close(id) {
            self.notice = Some(err.to_string());
        }
    }

    fn open_value_help(&mut self) {
        let field = self.form_view.focused_field();
        match self.dialogs.open(VALUE_HELP_DIALOG, &self.lookup) {
            // Captured at open time: a later open from another field
            // replaces the context wholesale, so confirms can never be
            // routed to a stale field.
            Ok(()) => {
                self.value_help_ctx = Some(ValueHelpContext {
                    dialog_id: VALUE_HELP_DIALOG.to_string(),
                    field,
                });
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    fn confirm_top_dialog(&mut self) {
        let Some(id) = self.dialogs.top_open().map(str::to_string) else {
            return;
        };
        match id.as_str() {
            QUIT_DIALOG => {
                self.should_quit = true;
            }
            SAVE_CONFIRM_DIALOG => {
                self.messages.append(Message::new(
                    Severity::Success,
                    "Employee saved",
                    "Employee data saved successfully",
                    "Employee form",
                ));
                self.notice = Some("Employee data saved successfully!".to_string());
            }
            VALUE_HELP_DIALOG => {
                let selected = self.dialogs.selected_entry(&id).map(|e| e.label.clone());
                if let Some(ctx) = self.value_help_ctx.take() {
                    if ctx.dialog_id == id {
                        if let Some(label) = selected {
                            self.form.set_value(ctx.field, label.clone());
                            self.notice =
                                Some(format!("{} set to '{}'", ctx.field.label(), label));
                        }
                    }
                }
            }
            _ => {}
        }
        self.close_dialog(&id);
    }

    fn cancel_top_dialog(&mut self) {
        let Some(id) = self.dialogs.top_open().map(str::to_string) else {
            return;
        };
        if id == VALUE_HELP_DIALOG {
            // Cancel never writes back.
            self.value_help_ctx = None;
        }
        self.close_dialog(&id);
    }

    fn move_modal_selection(&mut self, delta: isize) {
        if let Some(id) = self.dialogs.top_open().map(str::to_string) {
            self.dialogs.move_selection(&id, delta);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Form & list operations
    // ─────────────────────────────────────────────────────────────────────────

    fn request_save(&mut self) {
        if self.form.validate(&FieldId::all()) {
            self.open_dialog(SAVE_CONFIRM_DIALOG);
        } else {
            self.messages.append(Message::new(
                Severity::Error,
                "Validation failed",
                "One or more required fields are empty",
                "Employee form",
            ));
            self.notice = Some("Please fill all required fields".to_string());
        }
    }

    fn apply_search(&mut self) {
        let query = self.form_view.search_query.clone();
        self.filter.apply(&query, SEARCH_FIELD);
    }

    fn export_employees(&mut self) {
        let employees = self.store.employees();
        let csv = match services::to_csv(employees) {
            Ok(csv) => csv,
            Err(err) => {
                self.notice = Some(format!("Export failed: {}", err));
                return;
            }
        };
        match self.saver.save(csv.as_bytes(), EXPORT_MIME, EXPORT_FILENAME) {
            Ok(path) => {
                self.messages.append(Message::new(
                    Severity::Information,
                    "Export complete",
                    format!(
                        "{} employee record(s) written to {}",
                        employees.len(),
                        path.display()
                    ),
                    "CSV export",
                ));
                self.notice = Some(format!(
                    "Exported {} record(s) to {}",
                    employees.len(),
                    path.display()
                ));
            }
            Err(err) => {
                self.notice = Some(format!("Export failed: {}", err));
            }
        }
    }

    fn nav_to(&mut self, name: &str) {
        match Route::resolve(name) {
            Some(route) => {
                self.route = route;
                self.notice = None;
            }
            None => {
                self.notice = Some(format!("Navigation target '{}' not found", name));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key routing helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_dialog_key_event(&mut self, id: &str, key: KeyEvent) -> Result<Option<Action>> {
        let action = match self.dialogs.get(id).map(|d| &d.body) {
            Some(DialogBody::ValueHelp { .. }) => self.value_help_dialog.handle_key_event(key),
            Some(DialogBody::Confirm { .. }) => self.confirm_dialog.handle_key_event(key),
            None => None,
        };
        Ok(action)
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_top_dialog(&mut self, frame: &mut Frame, area: Rect, id: &str) {
        let Some(dialog) = self.dialogs.get(id) else {
            return;
        };
        match &dialog.body {
            DialogBody::Confirm { title, prompt } => {
                self.confirm_dialog.draw(frame, area, title, prompt);
            }
            DialogBody::ValueHelp { items, selected } => {
                let field_label = self
                    .value_help_ctx
                    .as_ref()
                    .map(|ctx| ctx.field.label())
                    .unwrap_or("");
                self.value_help_dialog
                    .draw(frame, area, items, *selected, field_label);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl+C quits from anywhere, no confirmation.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        // Input priority: topmost dialog, then the message panel, then the
        // active view.
        if let Some(id) = self.dialogs.top_open().map(str::to_string) {
            return self.handle_dialog_key_event(&id, key);
        }
        if let Some(panel) = self.message_panel.as_mut() {
            if panel.visible {
                return panel.handle_key_event(key);
            }
        }
        match self.route {
            Route::Main => {
                if self.form_view.search_mode {
                    self.handle_search_key_event(key)
                } else {
                    self.form_view.handle_key_event(key)
                }
            }
            Route::Second => self.second_view.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Form Editing
            // ─────────────────────────────────────────────────────────────────
            Action::NextField => self.form_view.next_field(),
            Action::PrevField => self.form_view.prev_field(),
            Action::FieldInput(c) => {
                let field = self.form_view.focused_field();
                self.form.push_char(field, c);
            }
            Action::FieldBackspace => {
                let field = self.form_view.focused_field();
                self.form.backspace(field);
            }
            Action::OpenValueHelp => self.open_value_help(),
            Action::Save => self.request_save(),

            // ─────────────────────────────────────────────────────────────────
            // Employee List
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => {
                self.form_view.search_mode = true;
            }
            Action::ExitSearchMode => {
                self.form_view.search_mode = false;
            }
            Action::SearchInput(c) => {
                self.form_view.search_query.push(c);
                self.apply_search();
            }
            Action::SearchBackspace => {
                self.form_view.search_query.pop();
                self.apply_search();
            }
            Action::ExportCsv => self.export_employees(),

            // ─────────────────────────────────────────────────────────────────
            // Messages
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleMessagePanel => {
                let panel = self.message_panel.get_or_insert_with(MessagePanel::new);
                panel.toggle();
            }
            Action::ClearMessages => self.messages.clear(),

            // ─────────────────────────────────────────────────────────────────
            // Dialogs
            // ─────────────────────────────────────────────────────────────────
            Action::OpenDialog(id) => self.open_dialog(&id),
            Action::CloseModal => self.cancel_top_dialog(),
            Action::ConfirmModal => self.confirm_top_dialog(),
            Action::ModalUp => self.move_modal_selection(-1),
            Action::ModalDown => self.move_modal_selection(1),

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NavTo(name) => self.nav_to(&name),
            Action::NextItem => self.second_view.next(),
            Action::PrevItem => self.second_view.previous(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.route {
            Route::Main => {
                let visible = self.filter.visible(self.store.employees());
                let ctx = FormRenderContext {
                    form: &self.form,
                    total: self.store.employees().len(),
                    filter_active: self.filter.active,
                    visible,
                    notice: self.notice.as_deref(),
                    message_count: self.messages.len(),
                };
                draw_form_view(frame, area, &self.form_view, &ctx);
            }
            Route::Second => self.second_view.draw_with_store(frame, area, &self.store),
        }

        if let Some(panel) = self.message_panel.as_mut() {
            if panel.visible {
                panel.draw_with_messages(frame, area, self.messages.list());
            }
        }

        if let Some(id) = self.dialogs.top_open().map(str::to_string) {
            self.draw_top_dialog(frame, area, &id);
        }

        Ok(())
    }
}
