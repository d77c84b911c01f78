//! Journey form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, Focus, SubmissionStatus};
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the journey form: fields, submit button and feedback banner
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Begin Your Journey ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Full name | Email
            Constraint::Length(3),             // Phone | Status
            Constraint::Min(4),                // Goals
            Constraint::Length(3),             // Contact method
            Constraint::Min(3),                // Additional comments
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(3),             // Feedback
        ])
        .horizontal_margin(1)
        .split(inner);

    let pair = |area: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    };
    let first = pair(rows[0]);
    let second = pair(rows[1]);

    let slots = [
        (FieldId::FullName, first[0]),
        (FieldId::Email, first[1]),
        (FieldId::Phone, second[0]),
        (FieldId::Status, second[1]),
        (FieldId::Goals, rows[2]),
        (FieldId::ContactMethod, rows[3]),
        (FieldId::AdditionalComments, rows[4]),
    ];
    for (field, slot) in slots {
        let is_active = app.state.focus == Focus::Field(field);
        draw_field(frame, slot, field, app.form().get(field), is_active);
    }

    draw_submit_button(frame, rows[5], app);
    draw_feedback(frame, rows[6], app);
}

fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.status();
    let label = status.submit_label();
    let width = button_width(label).min(area.width);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        columns[1],
        label,
        app.state.is_submit_focused(),
        status.can_submit(),
    );
}

/// Surface notices take priority over the last submission message
fn draw_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.status();
    let (text, color) = match (&app.state.notice, status.message()) {
        (Some(notice), _) => (notice.as_str(), Color::Yellow),
        (None, Some(msg)) if matches!(status, SubmissionStatus::Success(_)) => (msg, Color::Green),
        (None, Some(msg)) => (msg, Color::Red),
        (None, None) => return,
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, area);
}
