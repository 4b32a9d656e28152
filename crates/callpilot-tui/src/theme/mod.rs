//! Centralized theme system with light and dark variants.
//!
//! This module provides:
//! - `palette`: Color sets for each variant
//! - `styles`: Semantic style builder functions

pub mod palette;
pub mod styles;

pub use palette::Palette;
