//! Company form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{CompanyForm, Form, FormAction};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the company form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], &app.state.form);
    draw_action_panel(frame, main_chunks[1], &app.state.form);
}

/// Draw the visible form fields
fn draw_form(frame: &mut Frame, area: Rect, form: &CompanyForm) {
    let fields = form.visible_fields();

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0)); // Remaining space
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let border_color = if form.is_action_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Perfil de Empresa ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let active = form.active_field_name();
    for (idx, chunk) in chunks.iter().take(fields.len()).enumerate() {
        if let Some(field) = form.get_field(idx) {
            draw_field(frame, *chunk, field, active == Some(field.name));
        }
    }

    draw_help_text(frame, chunks[chunks.len() - 1]);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, form: &CompanyForm) {
    let is_focused = form.is_action_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Acciones ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Layout for buttons vertically
    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        FormAction::Submit.label(),
        is_focused && form.selected_action == FormAction::Submit,
        Some(Color::Green),
    );

    render_action_button(
        frame,
        button_chunks[1],
        FormAction::Reset.label(),
        is_focused && form.selected_action == FormAction::Reset,
        Some(Color::Gray),
    );
}
