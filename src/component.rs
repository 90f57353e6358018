//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than by mutating
//! each other.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The flow per interaction turn:
/// 1. `handle_key_event` - translate a key press into a semantic Action
/// 2. `update` - apply an Action to local state
/// 3. `draw` - render the component
pub trait Component {
    /// Translate a key event into an optional Action.
    ///
    /// State should not change here; return the Action and let `update`
    /// (or the App) do the mutation.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Apply an Action to component state, optionally chaining a follow-up.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render the component into `area`. Rendering must not change state
    /// beyond scroll bookkeeping.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
