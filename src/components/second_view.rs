//! Reference-data browser - the second view
//!
//! Lists the five datasets with their record counts and previews the
//! selected one.

use crate::action::Action;
use crate::component::Component;
use crate::components::table::build_record_lines;
use crate::model::dialog::QUIT_DIALOG;
use crate::model::store::{Dataset, RecordStore};
use crate::model::ui::Route;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct SecondViewComponent {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for SecondViewComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SecondViewComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    pub fn selected_dataset(&self) -> Dataset {
        Dataset::all()[self.selected % Dataset::all().len()]
    }

    pub fn next(&mut self) {
        if self.selected < Dataset::all().len() - 1 {
            self.selected += 1;
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn draw_with_store(&mut self, frame: &mut Frame, area: Rect, store: &RecordStore) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(30)])
            .split(main_chunks[0]);

        let items: Vec<ListItem> = Dataset::all()
            .iter()
            .map(|dataset| {
                ListItem::new(Line::from(vec![
                    Span::styled(dataset.title(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!(" ({})", store.records(*dataset).len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Reference Data ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, content_chunks[0], &mut self.list_state);

        let dataset = self.selected_dataset();
        let records: Vec<_> = store.records(dataset).iter().collect();
        let preview = Paragraph::new(build_record_lines(&records, "Dataset is empty")).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", dataset.title()))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(preview, content_chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " j/k ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Navigate  "),
            Span::styled(
                " Esc/b ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Back  "),
            Span::styled(
                " q ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[1]);
    }
}

impl Component for SecondViewComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ToggleMessagePanel)
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                Some(Action::NavTo(Route::Main.name().to_string()))
            }
            KeyCode::Char('q') => Some(Action::OpenDialog(QUIT_DIALOG.to_string())),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_with_store.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut view = SecondViewComponent::new();
        view.previous();
        assert_eq!(view.selected_dataset(), Dataset::Employees);

        for _ in 0..10 {
            view.next();
        }
        assert_eq!(view.selected_dataset(), Dataset::Orders);
    }

    #[test]
    fn test_back_key_navigates_to_main() {
        let mut view = SecondViewComponent::new();
        let action = view
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::NavTo("main".to_string())));
    }
}
