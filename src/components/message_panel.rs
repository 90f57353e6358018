//! Notification panel component
//!
//! A toggleable overlay listing the message center's entries. The instance
//! is created once, on the first toggle, and reused afterwards; repeated
//! toggles show and hide the same panel.

use crate::action::Action;
use crate::component::Component;
use crate::model::message::{Message, Severity};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct MessagePanel {
    pub visible: bool,
    pub scroll: usize,
}

impl Default for MessagePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl MessagePanel {
    pub fn new() -> Self {
        Self {
            visible: false,
            scroll: 0,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    fn severity_color(severity: Severity) -> Color {
        match severity {
            Severity::Success => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Information => Color::Blue,
        }
    }

    pub fn draw_with_messages(&mut self, frame: &mut Frame, area: Rect, messages: &[Message]) {
        let width = 46u16.min(area.width.saturating_sub(2));
        let panel_area = Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + 1,
            width,
            area.height.saturating_sub(5),
        );
        frame.render_widget(Clear, panel_area);

        let mut lines = Vec::new();
        for message in messages {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", message.severity.label()),
                    Style::default()
                        .fg(Self::severity_color(message.severity))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    message.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    if message.counter > 1 {
                        format!(" ({}x)", message.counter)
                    } else {
                        String::new()
                    },
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            if !message.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", message.description),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!(
                    "  {} · {}",
                    message.subtitle,
                    message.timestamp.format("%H:%M:%S")
                ),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }
        if messages.is_empty() {
            lines.push(Line::from(Span::styled(
                "No messages",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let visible_height = panel_area.height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        self.scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Messages ({}) ", messages.len()))
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, panel_area);
    }
}

impl Component for MessagePanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::ToggleMessagePanel),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ToggleMessagePanel)
            }
            KeyCode::Char('c') => Some(Action::ClearMessages),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_with_messages.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_visibility() {
        let mut panel = MessagePanel::new();
        assert!(!panel.visible);
        panel.toggle();
        assert!(panel.visible);
        panel.toggle();
        assert!(!panel.visible);
    }

    #[test]
    fn test_escape_requests_panel_toggle() {
        let mut panel = MessagePanel::new();
        let action = panel
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::ToggleMessagePanel));
    }

    #[test]
    fn test_scroll_keys_adjust_offset() {
        let mut panel = MessagePanel::new();
        panel
            .handle_key_event(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(panel.scroll, 1);
        panel
            .handle_key_event(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(panel.scroll, 0);
    }
}
