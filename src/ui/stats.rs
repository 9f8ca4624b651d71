//! Stat card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::Outputs;
use crate::report::format_kg;
use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEAL_PRIMARY, TEXT_MUTED};

/// Two-line card: bold value over a muted caption
fn stat_card(value: String, caption: &str) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let content = vec![
        Line::from(vec![Span::styled(
            value,
            Style::default()
                .fg(TEAL_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            caption.to_string(),
            Style::default().fg(TEXT_MUTED),
        )]),
    ];

    Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
}

/// Render the annual headline card
pub fn render_headline_card(area: Rect, outputs: &Outputs, frame: &mut Frame) {
    let card = stat_card(
        format_kg(outputs.total_annual_emission),
        "ESTIMATED ANNUAL CO₂ EMISSIONS",
    );
    frame.render_widget(card, area);
}

/// Render weekly, monthly and yearly cards side by side
pub fn render_period_cards(area: Rect, outputs: &Outputs, frame: &mut Frame) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        (outputs.weekly_emission, "WEEKLY"),
        (outputs.monthly_emission, "MONTHLY"),
        (outputs.yearly(), "YEARLY"),
    ];

    for ((value, caption), slot) in cards.into_iter().zip(card_layout.iter()) {
        frame.render_widget(stat_card(format_kg(value), caption), *slot);
    }
}
