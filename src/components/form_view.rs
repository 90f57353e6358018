//! Employee form view - the main screen
//!
//! Form fields on the left, the filterable employee list on the right.
//! Owns only presentation state (focus, search mode); form values and the
//! filter live in the model and are passed in for rendering.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::calculate_form_layout;
use crate::components::table::build_record_lines;
use crate::model::dialog::QUIT_DIALOG;
use crate::model::form::{FieldId, FormState, Validity};
use crate::model::record::Record;
use crate::model::ui::Route;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct FormViewComponent {
    /// Index of the focused field within [`FieldId::all`].
    pub focused: usize,
    /// Whether typed characters edit the search query instead of the form
    pub search_mode: bool,
    /// Current search query string
    pub search_query: String,
}

impl Default for FormViewComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FormViewComponent {
    pub fn new() -> Self {
        Self {
            focused: 0,
            search_mode: false,
            search_query: String::new(),
        }
    }

    pub fn focused_field(&self) -> FieldId {
        let fields = FieldId::all();
        fields[self.focused % fields.len()]
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FieldId::all().len();
    }

    pub fn prev_field(&mut self) {
        let count = FieldId::all().len();
        self.focused = (self.focused + count - 1) % count;
    }
}

impl Component for FormViewComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Save)
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ExportCsv)
            }
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::EnterSearchMode)
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ToggleMessagePanel)
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::NavTo(Route::Second.name().to_string()))
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::F(4) => Some(Action::OpenValueHelp),
            KeyCode::Backspace => Some(Action::FieldBackspace),
            KeyCode::Esc => Some(Action::OpenDialog(QUIT_DIALOG.to_string())),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::FieldInput(c))
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_form_view which takes full context.
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the form screen
pub struct FormRenderContext<'a> {
    pub form: &'a FormState,
    /// Employee records currently exposed by the filter
    pub visible: Vec<&'a Record>,
    /// Size of the unfiltered employee list
    pub total: usize,
    pub filter_active: bool,
    pub notice: Option<&'a str>,
    pub message_count: usize,
}

pub fn draw_form_view(
    frame: &mut Frame,
    area: Rect,
    view: &FormViewComponent,
    ctx: &FormRenderContext,
) {
    let layout = calculate_form_layout(area);

    render_form(frame, layout.form, view, ctx.form);
    render_employee_list(frame, layout.list, view, ctx);
    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, view);
}

fn render_form(frame: &mut Frame, area: Rect, view: &FormViewComponent, form: &FormState) {
    let mut lines = vec![Line::from("")];

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = !view.search_mode && i == view.focused;
        let marker = if is_focused { "▶ " } else { "  " };
        let cursor = if is_focused { "_" } else { "" };

        let value_style = if is_focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:<12}", field.id.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(format!("{}{}", field.value, cursor), value_style),
        ]));

        if field.validity == Validity::Invalid {
            if let Some(ref message) = field.message {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(message.clone(), Style::default().fg(Color::Red)),
                ]));
            }
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  F4 opens value help for the focused field",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" New Employee ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_employee_list(
    frame: &mut Frame,
    area: Rect,
    view: &FormViewComponent,
    ctx: &FormRenderContext,
) {
    let title = if ctx.filter_active {
        format!(
            " Employees ({}/{}) [search:{}] ",
            ctx.visible.len(),
            ctx.total,
            view.search_query
        )
    } else {
        format!(" Employees ({}) ", ctx.total)
    };

    let lines = build_record_lines(&ctx.visible, "No matching employees");

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &FormRenderContext) {
    let spans = if let Some(notice) = ctx.notice {
        vec![Span::styled(
            format!(" {} ", notice),
            Style::default().fg(Color::Yellow),
        )]
    } else {
        vec![Span::styled(
            format!(" {} message(s) · Ctrl+P to view ", ctx.message_count),
            Style::default().fg(Color::DarkGray),
        )]
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, view: &FormViewComponent) {
    let help_spans = if view.search_mode {
        vec![
            Span::styled(
                " Esc/Enter ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Done  "),
            Span::styled(
                format!("Search: {}_", view.search_query),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        vec![
            Span::styled(
                " Tab ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Next Field "),
            Span::styled(
                " F4 ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Value Help "),
            Span::styled(
                " ^S ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Save "),
            Span::styled(
                " ^E ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Export CSV "),
            Span::styled(
                " ^F ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Search "),
            Span::styled(
                " ^P ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Messages "),
            Span::styled(
                " ^N ",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Datasets "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit"),
        ]
    };

    let paragraph = Paragraph::new(Line::from(help_spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut view = FormViewComponent::new();
        assert_eq!(view.focused_field(), FieldId::FirstName);

        for _ in 0..FieldId::all().len() {
            view.next_field();
        }
        assert_eq!(view.focused_field(), FieldId::FirstName);

        view.prev_field();
        assert_eq!(view.focused_field(), FieldId::HireDate);
    }

    #[test]
    fn test_plain_chars_edit_the_focused_field() {
        let mut view = FormViewComponent::new();
        let action = view
            .handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::FieldInput('a')));
    }

    #[test]
    fn test_ctrl_s_requests_save() {
        let mut view = FormViewComponent::new();
        let action = view
            .handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::Save));
    }

    #[test]
    fn test_esc_opens_quit_dialog() {
        let mut view = FormViewComponent::new();
        let action = view
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::OpenDialog(QUIT_DIALOG.to_string())));
    }
}
