//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions, top to bottom
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    pub summary: Rect,
    pub status: Rect,
}

/// Split the screen; `summary_height` is 0 while no declaration is shown
pub fn create_layout(area: Rect, form_height: u16, summary_height: u16) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Header
            Constraint::Length(form_height),    // Form
            Constraint::Length(summary_height), // Declaration
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        summary: chunks[2],
        status: chunks[4],
    }
}

/// Draw the screen title
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Participant details",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

/// Draw the key hints at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let accent = app.config.accent_color();
    let key = |k: &'static str| Span::styled(k, Style::default().fg(accent));
    let sep = || Span::styled("  ", Style::default());

    let line = Line::from(vec![
        key("Tab"),
        Span::raw(" next"),
        sep(),
        key("Space"),
        Span::raw(" toggle"),
        sep(),
        key(SUBMIT_SHORTCUT),
        Span::raw(" generate"),
        sep(),
        key("Esc"),
        Span::raw(" quit"),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
