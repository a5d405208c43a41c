//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    forms::draw_company_form(frame, main_area, app);

    layout::draw_status_bar(frame, app);

    // Error dialog is drawn last so it overlays everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
