//! Top-level frame layout

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::breakdown::render_breakdown;
use super::form::render_form;
use super::helpers::wrap_text;
use super::stats::{render_headline_card, render_period_cards};
use crate::app::App;
use crate::report::advisory;
use crate::theme::{tier_color, tier_indicator, BG_PRIMARY, TEAL_PRIMARY, TEXT_MUTED};

const KEY_HINTS: &str = " ↑/↓: Select | ←/→: Adjust | PgUp/PgDn: ×10 | r: Reset | q: Quit ";

/// Draw the whole calculator into `frame`
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    // Header, content area, bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + subtitle
            Constraint::Min(10),   // Form and results
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Carbon Footprint Calculator",
            Style::default()
                .fg(TEAL_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Estimate your yearly carbon footprint in kilograms of CO₂ equivalent (kg CO₂e).",
            Style::default().fg(TEXT_MUTED),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, main_layout[0]);

    // 40% form, 60% results
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[1]);

    render_form(panels[0], &app.inputs, app.selected, frame);

    let results = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Headline
            Constraint::Length(4), // Period cards
            Constraint::Length(2), // Advisory
            Constraint::Min(5),    // Breakdown
        ])
        .split(panels[1]);

    render_headline_card(results[0], &app.outputs, frame);
    render_period_cards(results[1], &app.outputs, frame);

    let tier = app.outputs.rating_tier;
    let tier_style = Style::default().fg(tier_color(tier));
    let width = results[2].width.saturating_sub(4) as usize;
    let advisory_lines: Vec<Line> = wrap_text(advisory(tier), width)
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let prefix = if i == 0 {
                format!(" {} ", tier_indicator(tier))
            } else {
                "   ".to_string()
            };
            Line::from(vec![Span::styled(prefix, tier_style), Span::styled(text, tier_style)])
        })
        .collect();
    frame.render_widget(Paragraph::new(advisory_lines), results[2]);

    render_breakdown(results[3], &app.outputs, frame);

    let keybindings =
        Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::Black).bg(TEAL_PRIMARY));
    frame.render_widget(keybindings, main_layout[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Inputs;
    use ratatui::backend::TestBackend;

    fn rendered_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_draw_shows_metrics_and_breakdown() {
        let app = App::new(Inputs::default());
        let text = rendered_text(&app);
        assert!(text.contains("Carbon Footprint Calculator"));
        assert!(text.contains("4677.20 kg CO₂e"));
        assert!(text.contains("WEEKLY"));
        assert!(text.contains("MONTHLY"));
        assert!(text.contains("YEARLY"));
        assert!(text.contains("Emission Breakdown by Category"));
        assert!(text.contains("Transport"));
        assert!(text.contains("Waste"));
    }

    #[test]
    fn test_draw_shows_advisory_for_tier() {
        let app = App::new(Inputs::default());
        let text = rendered_text(&app);
        assert!(text.contains("Moderate footprint"));
    }
}
