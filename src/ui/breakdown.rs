//! Emission breakdown chart: one labelled gauge per category

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::models::{CategoryShare, Outputs};
use crate::theme::{category_color, BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_SECONDARY};

/// Label drawn on a gauge, e.g. "Diet 70.6%"
pub fn share_label(share: &CategoryShare) -> String {
    format!("{} {:.1}%", share.category.label(), share.percent)
}

/// Render the breakdown panel with a gauge row per category
pub fn render_breakdown(area: Rect, outputs: &Outputs, frame: &mut Frame) {
    let block = Block::default()
        .title(" Emission Breakdown by Category ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let shares = outputs.breakdown();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(shares.iter().map(|_| Constraint::Length(1)))
        .spacing(1)
        .split(inner_area);

    for (share, row) in shares.iter().zip(rows.iter()) {
        // Label column on the left, gauge filling the rest
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(5)])
            .split(*row);

        let label = Paragraph::new(Line::from(Span::styled(
            share_label(share),
            Style::default().fg(TEXT_SECONDARY),
        )));
        frame.render_widget(label, columns[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(category_color(share.category)).bg(BG_SECONDARY))
            .ratio((share.percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{:.0} kg", share.emission));
        frame.render_widget(gauge, columns[1]);
    }
}
