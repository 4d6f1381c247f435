//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use crate::state::FormPhase;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let summary_height = if app.state.form.phase() == FormPhase::Submitted {
        summary::DECLARATION_LINES + 2
    } else {
        0
    };

    let areas = layout::create_layout(frame.area(), forms::FORM_HEIGHT, summary_height);

    layout::draw_header(frame, areas.header);
    forms::draw_participant_form(frame, areas.form, app);
    summary::draw(frame, areas.summary, app);
    layout::draw_status_bar(frame, areas.status, app);

    // Alerts block everything else until dismissed
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.config.accent_color());
    }
}
