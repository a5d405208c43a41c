//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar, returning the content area
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Form health
    let marker = if app.state.form.has_errors() {
        Span::styled(" ● ", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(marker);

    spans.push(Span::styled(
        "Tab:siguiente  ←/→:elegir  ^S:enviar  Esc:salir",
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(msg) = &app.state.status_message {
        let color = if app.state.form.has_errors() {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Submission count on the right
    let count = format!(" enviados: {} ", app.state.submissions.len());
    let count_area = Rect {
        x: area.width.saturating_sub(count.len() as u16),
        y: area.height.saturating_sub(1),
        width: (count.len() as u16).min(area.width),
        height: 1,
    };
    let count_widget =
        Paragraph::new(count).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(count_widget, count_area);
}
