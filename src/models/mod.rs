//! Data models for the footprint calculator
//!
//! This module contains the core data structures:
//! - Choice and classification enums
//! - Lifestyle inputs with their ranges
//! - Emission outputs and the category breakdown

pub mod enums;
pub mod inputs;
pub mod outputs;

// Re-exports for convenient access
pub use enums::{Category, Diet, FormField, RatingTier, TransportMode};
pub use inputs::{Inputs, NumericField};
pub use outputs::{CategoryShare, Outputs};
