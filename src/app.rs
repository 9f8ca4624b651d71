//! Application state and core logic for the footprint TUI.
//!
//! `App` holds the current form inputs and the outputs derived from them.
//! Outputs are recomputed from scratch after every edit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::estimator::compute;
use crate::models::{FormField, Inputs, Outputs};

/// Multiplier applied to the field step for PageUp/PageDown
const COARSE_STEPS: f64 = 10.0;

/// Application state
pub struct App {
    pub inputs: Inputs,
    // Inputs restored by `r`
    pub initial: Inputs,
    pub outputs: Outputs,
    pub selected: FormField,
    pub should_quit: bool,
}

impl App {
    pub fn new(inputs: Inputs) -> Self {
        Self {
            inputs,
            initial: inputs,
            outputs: compute(&inputs),
            selected: FormField::default(),
            should_quit: false,
        }
    }

    fn recompute(&mut self) {
        self.outputs = compute(&self.inputs);
        tracing::debug!(
            total = self.outputs.total_annual_emission,
            tier = %self.outputs.rating_tier,
            "recomputed footprint"
        );
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Step the selected field up (`forward`) or down; numeric values stay in range
    pub fn adjust(&mut self, forward: bool, coarse: bool) {
        match self.selected {
            FormField::Transport => {
                self.inputs.transport_mode = if forward {
                    self.inputs.transport_mode.next()
                } else {
                    self.inputs.transport_mode.prev()
                };
            }
            FormField::Diet => {
                self.inputs.diet = if forward {
                    self.inputs.diet.next()
                } else {
                    self.inputs.diet.prev()
                };
            }
            FormField::Recycles => {
                self.inputs.recycles = !self.inputs.recycles;
            }
            field => {
                if let Some(numeric) = field.numeric() {
                    let mut step = numeric.step();
                    if coarse {
                        step *= COARSE_STEPS;
                    }
                    if !forward {
                        step = -step;
                    }
                    let value = numeric.clamp(self.inputs.get(numeric) + step);
                    self.inputs.set(numeric, value);
                }
            }
        }
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.inputs = self.initial;
        self.recompute();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => self.adjust(true, false),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => self.adjust(false, false),
            KeyCode::PageUp => self.adjust(true, true),
            KeyCode::PageDown => self.adjust(false, true),
            KeyCode::Enter | KeyCode::Char(' ') => self.adjust(true, false),
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Diet, RatingTier, TransportMode};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_new_computes_outputs() {
        let app = App::new(Inputs::default());
        assert_eq!(app.outputs, compute(&Inputs::default()));
        assert_eq!(app.selected, FormField::Transport);
    }

    #[test]
    fn test_adjust_numeric_recomputes() {
        let mut app = App::new(Inputs::default());
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, FormField::CarKm);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.inputs.weekly_car_km, 60.0);
        assert_eq!(app.outputs, compute(&app.inputs));
    }

    #[test]
    fn test_adjust_clamps_to_range() {
        let mut app = App::new(Inputs::default());
        app.selected = FormField::FlightHours;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.inputs.annual_flight_hours, 0.0);

        app.selected = FormField::WasteKg;
        for _ in 0..20 {
            press(&mut app, KeyCode::PageUp);
        }
        assert_eq!(app.inputs.weekly_waste_kg, 100.0);
    }

    #[test]
    fn test_cycle_enums_and_toggle() {
        let mut app = App::new(Inputs::default());
        press(&mut app, KeyCode::Right);
        assert_eq!(app.inputs.transport_mode, TransportMode::PublicTransport);

        app.selected = FormField::Diet;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.inputs.diet, Diet::Vegan);

        app.selected = FormField::Recycles;
        press(&mut app, KeyCode::Enter);
        assert!(!app.inputs.recycles);
        assert_eq!(app.outputs, compute(&app.inputs));
    }

    #[test]
    fn test_reset_restores_initial() {
        let start = Inputs {
            diet: Diet::Average,
            ..Inputs::default()
        };
        let mut app = App::new(start);
        app.selected = FormField::ElectricityKwh;
        press(&mut app, KeyCode::PageUp);
        assert_ne!(app.inputs, start);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.inputs, start);
        assert_eq!(app.outputs, compute(&start));
    }

    #[test]
    fn test_heavy_flying_reaches_high_tier() {
        let mut app = App::new(Inputs::default());
        app.selected = FormField::FlightHours;
        for _ in 0..5 {
            press(&mut app, KeyCode::PageUp);
        }
        assert_eq!(app.inputs.annual_flight_hours, 50.0);
        assert_eq!(app.outputs.rating_tier, RatingTier::High);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Inputs::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(Inputs::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
