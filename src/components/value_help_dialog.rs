//! Value-help dialog renderer
//!
//! Single-selection picker over the lookup entries held by the registry
//! instance. The selection itself lives in the registry so it survives
//! close/reopen; this component only draws and translates keys.

use crate::action::Action;
use crate::components::layout::centered_popup;
use crate::model::dialog::LookupEntry;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct ValueHelpDialog {
    list_state: ListState,
}

impl Default for ValueHelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueHelpDialog {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ModalUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ModalDown),
            _ => None,
        }
    }

    pub fn draw(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        items: &[LookupEntry],
        selected: usize,
        field_label: &str,
    ) {
        let popup_height = (items.len() as u16 + 8).min(area.height.saturating_sub(2));
        let popup_area = centered_popup(area, 50, popup_height);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(popup_area);

        let header = Paragraph::new(Line::from(vec![Span::styled(
            format!("For field: {}", field_label),
            Style::default().fg(Color::Cyan),
        )]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select Value ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        let list_items: Vec<ListItem> = items
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.label.clone(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  {}", entry.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        self.list_state.select(Some(selected));
        let list = List::new(list_items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Select  "),
            Span::styled(
                " j/k ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Navigate  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_navigation_and_selection_keys() {
        let dialog = ValueHelpDialog::new();
        assert_eq!(
            dialog.handle_key_event(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::ModalDown)
        );
        assert_eq!(
            dialog.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::ConfirmModal)
        );
        assert_eq!(
            dialog.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::CloseModal)
        );
    }
}
