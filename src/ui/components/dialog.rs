//! Error dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const DIALOG_MAX_WIDTH: u16 = 60;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let area = frame.area();
    let width = DIALOG_MAX_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(4).max(1) as usize;

    // Title, blank, message, blank, hint, plus borders
    let message_lines = error_message
        .lines()
        .map(|line| line.chars().count().div_ceil(inner_width).max(1))
        .sum::<usize>()
        .max(1) as u16;
    let height = (message_lines + 6).min(area.height);

    let dialog_area = centered(area, width, height);
    frame.render_widget(Clear, dialog_area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(error_message.lines().map(|line| Line::from(line.to_string())));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Pulse "),
        Span::styled("Enter", key_style),
        Span::raw(" o "),
        Span::styled("Esc", key_style),
        Span::raw(" para cerrar"),
    ]));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(dialog, dialog_area);
}

/// Rect of the given size centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_in_larger_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 60, 10), Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_respects_offset() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered(area, 20, 10), Rect::new(10, 5, 20, 10));
    }
}
