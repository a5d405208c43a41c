//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered box plus the error line under it
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field using FormField from the domain layer, with its
/// validation message on the line below the box
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Field box
            Constraint::Length(1), // Error line
        ])
        .split(area);

    let has_error = field.error.is_some();
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(vacío)".to_string()
    } else {
        display_value
    };

    let mut spans = vec![Span::styled(display_str, style)];
    if is_active {
        if field.is_select() {
            spans.push(Span::styled(
                "  ←/→ para elegir",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(error) = &field.error {
        let message = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw keyboard help for the form
pub fn draw_help_text(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": siguiente campo  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": elegir  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": enviar  "),
        Span::styled(
            crate::platform::COPY_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": copiar último  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": salir"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
