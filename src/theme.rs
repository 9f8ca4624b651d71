//! Theme module for footprint-tui
//!
//! This module provides a centralized color palette and styling constants
//! for the dark teal calculator look.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::models::{Category, RatingTier};

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0e1117)
pub const BG_PRIMARY: Color = Color::Rgb(14, 17, 23);

/// Secondary background color - input and card fill (#1a1f24)
pub const BG_SECONDARY: Color = Color::Rgb(26, 31, 36);

/// Subtle border color (#2a323c)
pub const BORDER_SUBTLE: Color = Color::Rgb(42, 50, 60);

pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Accent Colors - Teal Primary
// ============================================================================

/// Primary teal accent color (#00c6a7)
pub const TEAL_PRIMARY: Color = Color::Rgb(0, 198, 167);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Amber warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Chart Colors - teal/green sequential scale
// ============================================================================

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Transport => Color::Rgb(176, 242, 188),
        Category::Flights => Color::Rgb(137, 232, 172),
        Category::Electricity => Color::Rgb(76, 200, 163),
        Category::Diet => Color::Rgb(44, 152, 160),
        Category::Waste => Color::Rgb(37, 125, 152),
    }
}

pub fn tier_color(tier: RatingTier) -> Color {
    match tier {
        RatingTier::High => RED_ERROR,
        RatingTier::Moderate => AMBER_WARNING,
        RatingTier::Low => GREEN_SUCCESS,
    }
}

/// Status glyph shown before the advisory message
pub fn tier_indicator(tier: RatingTier) -> &'static str {
    match tier {
        RatingTier::High => "●",
        RatingTier::Moderate => "◐",
        RatingTier::Low => "○",
    }
}
