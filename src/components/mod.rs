//! UI Components
//!
//! Each component encapsulates its own presentation state, event handling,
//! and rendering logic. Components communicate through Actions rather than
//! direct state mutation.

pub mod confirm_dialog;
pub mod form_view;
pub mod layout;
pub mod message_panel;
pub mod second_view;
pub mod table;
pub mod value_help_dialog;

pub use confirm_dialog::ConfirmDialog;
pub use form_view::{draw_form_view, FormRenderContext, FormViewComponent};
pub use layout::{calculate_form_layout, centered_popup};
pub use message_panel::MessagePanel;
pub use second_view::SecondViewComponent;
pub use value_help_dialog::ValueHelpDialog;
