//! UI module for footprint-tui
//!
//! This module contains the rendering functions for the interactive
//! calculator: the input form, metric cards, and the breakdown chart.

mod breakdown;
mod form;
mod helpers;
mod render;
mod stats;

pub use render::draw;
