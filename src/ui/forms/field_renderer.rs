//! Field rendering utilities for forms

use crate::state::FieldId;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Box title for a field, with `*` on required fields
pub fn field_title(field: FieldId) -> String {
    if field.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    }
}

/// Draw one journey form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldId, value: &str, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let content = if value.is_empty() {
        // Choice fields keep the hint visible, since the value is picked not typed
        let show_placeholder = !is_active || !field.options().is_empty();
        let mut spans = vec![];
        if show_placeholder {
            spans.push(Span::styled(field.placeholder(), placeholder_style));
        }
        spans.push(Span::styled(cursor, cursor_style));
        Paragraph::new(Line::from(spans))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = value.split('\n').map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, cursor_style));
            }
        }
        Paragraph::new(lines)
    } else {
        let display = field.display_value(value);
        let display = if is_active && !field.options().is_empty() {
            format!("◀ {display} ▶")
        } else {
            display
        };
        Paragraph::new(Line::from(vec![
            Span::raw(display),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
