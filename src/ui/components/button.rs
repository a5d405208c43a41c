//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render an action button. The accent color tints the label when the
/// button is not selected; a selected button is always cyan and bold.
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    accent: Option<Color>,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        accent.map_or_else(Style::default, |color| Style::default().fg(color))
    };

    let marker = if is_selected { "▶" } else { " " };
    let paragraph = Paragraph::new(format!("{marker} {label} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
