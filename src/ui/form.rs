//! Input form rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::truncate;
use crate::models::{FormField, Inputs};
use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEAL_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

/// Display text for a field's current value
pub fn field_value(inputs: &Inputs, field: FormField) -> String {
    match field {
        FormField::Transport => inputs.transport_mode.label().to_string(),
        FormField::Diet => inputs.diet.label().to_string(),
        FormField::Recycles => if inputs.recycles { "Yes" } else { "No" }.to_string(),
        other => match other.numeric() {
            Some(numeric) => format!("{}", inputs.get(numeric)),
            None => String::new(),
        },
    }
}

/// Render the form: section headings, one row per field, selection marked
pub fn render_form(area: Rect, inputs: &Inputs, selected: FormField, frame: &mut Frame) {
    let block = Block::default()
        .title(" Your Lifestyle ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let mut lines = Vec::new();
    let mut section = "";

    for field in FormField::ALL {
        if field.section() != section {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            section = field.section();
            lines.push(Line::from(Span::styled(
                section,
                Style::default()
                    .fg(TEAL_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let is_selected = field == selected;
        let marker = if is_selected { "▸ " } else { "  " };
        let value_style = if is_selected {
            Style::default()
                .fg(TEAL_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        };
        // Marker, label and the two arrows take the rest of the row
        let room = (area.width as usize).saturating_sub(field.label().chars().count() + 10);
        let shown = truncate(&field_value(inputs, field), room);
        let value = if is_selected {
            format!("◂ {} ▸", shown)
        } else {
            shown
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(TEAL_PRIMARY)),
            Span::styled(format!("{}: ", field.label()), Style::default().fg(TEXT_MUTED)),
            Span::styled(value, value_style),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
