//! Tabular rendering of record lists
//!
//! Columns are discovered from the first record's field order; there is no
//! column declaration anywhere else.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::record::Record;

const MAX_COLUMN_WIDTH: usize = 28;

/// Build display lines for a list of records. The first record defines the
/// column set and order.
pub fn build_record_lines(records: &[&Record], empty_hint: &str) -> Vec<Line<'static>> {
    let Some(first) = records.first() else {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                empty_hint.to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
    };

    let headers: Vec<String> = first
        .field_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|field| record.display_value(field))
                .collect()
        })
        .collect();

    build_table_lines(&headers, &rows)
}

fn build_table_lines(headers: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.width());
            }
        }
    }
    for width in &mut widths {
        *width = (*width).min(MAX_COLUMN_WIDTH);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header_spans: Vec<Span> = headers
        .iter()
        .enumerate()
        .flat_map(|(i, header)| {
            vec![
                Span::styled(
                    fit_cell(header, widths[i]),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    lines.push(Line::from(header_spans));

    let separator: String = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )));

    for row in rows {
        let row_spans: Vec<Span> = row
            .iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                let width = widths.get(i).copied().unwrap_or(10);
                vec![
                    Span::styled(fit_cell(cell, width), Style::default().fg(Color::White)),
                    Span::raw(" │ "),
                ]
            })
            .collect();
        lines.push(Line::from(row_spans));
    }

    lines
}

/// Truncate to the display width (adding an ellipsis) and pad to it.
fn fit_cell(text: &str, width: usize) -> String {
    let mut out = String::new();
    if text.width() <= width {
        out.push_str(text);
    } else {
        let mut used = 0;
        for c in text.chars() {
            let cw = c.width().unwrap_or(0);
            if used + cw > width.saturating_sub(1) {
                break;
            }
            out.push(c);
            used += cw;
        }
        out.push('…');
    }
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_fit_cell_pads_short_text() {
        assert_eq!(fit_cell("ab", 4), "ab  ");
    }

    #[test]
    fn test_fit_cell_truncates_with_ellipsis() {
        let out = fit_cell("abcdefgh", 5);
        assert_eq!(out.width(), 5);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_record_lines_use_first_record_columns() {
        let records: Vec<Record> = [
            json!({"a": "1", "b": "2"}),
            json!({"a": "3", "b": "4", "c": "ignored"}),
        ]
        .into_iter()
        .map(|raw| match raw {
            Value::Object(map) => Record::from_object(map),
            _ => unreachable!(),
        })
        .collect();
        let refs: Vec<&Record> = records.iter().collect();

        let lines = build_record_lines(&refs, "nothing here");
        // header + separator + two rows
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_record_list_shows_hint() {
        let lines = build_record_lines(&[], "nothing here");
        assert!(lines
            .iter()
            .any(|l| l.spans.iter().any(|s| s.content.contains("nothing here"))));
    }
}
