//! Terminal rendering of the brand theme.
//!
//! This module provides:
//! - `palette`: Raw color constants derived from `gatehouse_core::Theme`
//! - `styles`: Semantic style builder functions
//! - `icons`: Nerd Font glyph constants with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
