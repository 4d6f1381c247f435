//! Declaration shown in place of a generated PDF

use crate::app::App;
use crate::state::ParticipantForm;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows the declaration text takes, without borders
pub const DECLARATION_LINES: u16 = 9;

/// Build the declaration text, or `None` while the form has not been submitted
pub fn declaration_lines(form: &ParticipantForm, rule_width: u16) -> Option<Vec<String>> {
    if !form.summary_visible {
        return None;
    }
    let age = form.age?;
    let rule = "_".repeat(rule_width as usize);

    Some(vec![
        rule.clone(),
        "DECLARATION".to_string(),
        format!("My name is {},", form.name.as_text()),
        format!("I am {age} years old."),
        format!(
            "I live at the following address: {}.",
            form.address.as_text()
        ),
        "My contacts:".to_string(),
        format!("- E-mail: {}", form.email.as_text()),
        format!("- Phone: {}", form.phone.as_text()),
        rule,
    ])
}

/// Draw the declaration block; nothing is drawn before submission
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(lines) = declaration_lines(&app.state.form, app.config.rule_width()) else {
        return;
    };

    let lines: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            if i == 1 {
                Line::from(Span::styled(
                    text,
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(text)
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
