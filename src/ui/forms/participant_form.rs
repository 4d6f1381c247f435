//! Participant details form rendering

use super::field_renderer::{draw_checkbox, draw_field};
use crate::app::App;
use crate::state::{Focus, Form, TEXT_FIELD_COUNT};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows taken by one bordered text input
const FIELD_HEIGHT: u16 = 3;

/// Rows needed to draw the whole form, borders included
pub const FORM_HEIGHT: u16 = TEXT_FIELD_COUNT as u16 * FIELD_HEIGHT + 1 + BUTTON_HEIGHT + 2;

/// Draw the text inputs, terms checkbox and submit button
pub fn draw_participant_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let accent = app.config.accent_color();
    let focus = form.focus();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); TEXT_FIELD_COUNT];
    constraints.extend([
        Constraint::Length(1),             // Terms
        Constraint::Length(BUTTON_HEIGHT), // Generate PDF
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for index in 0..TEXT_FIELD_COUNT {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                chunks[index],
                field,
                focus == Focus::Field(index),
                accent,
            );
        }
    }

    draw_checkbox(
        frame,
        chunks[TEXT_FIELD_COUNT],
        "I accept the terms",
        form.terms_accepted,
        focus == Focus::Terms,
        accent,
    );

    let button_area = Rect {
        width: chunks[TEXT_FIELD_COUNT + 1].width.min(24),
        ..chunks[TEXT_FIELD_COUNT + 1]
    };
    render_button(
        frame,
        button_area,
        "Generate PDF",
        focus == Focus::Submit,
        accent,
    );
}
