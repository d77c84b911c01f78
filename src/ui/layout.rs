//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FieldKind, Focus, SubmissionStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const TITLE: &str = "Begin Your Transformative Journey";
const INTRO: &str = "Tell us about yourself so we can craft a tailored experience that helps you \
    shine on your journey to success. Your story is unique, and we're here to help you write \
    its next chapter.";

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the page header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(INTRO, Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Key hints for whatever has focus
fn key_hints(app: &App) -> &'static str {
    match app.state.focus {
        Focus::SubmitButton => "Enter submit",
        Focus::Field(field) => match field.kind() {
            FieldKind::Choice(_) => "←/→ choose",
            FieldKind::Multiline => "Enter new line",
            FieldKind::Text => "Type to edit",
        },
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.status();
    let status_color = match status {
        SubmissionStatus::Success(_) => Color::Green,
        SubmissionStatus::Error(_) => Color::Red,
        SubmissionStatus::Submitting => Color::Yellow,
        SubmissionStatus::Idle => Color::DarkGray,
    };

    let spans = vec![
        Span::styled(" ● ", Style::default().fg(status_color)),
        Span::styled(status.name(), Style::default().fg(status_color)),
        Span::raw(" │ "),
        Span::styled(key_hints(app), Style::default().fg(Color::Gray)),
        Span::raw(" │ "),
        Span::styled(
            format!("Tab next · {SUBMIT_SHORTCUT} submit · Esc quit"),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
