//! Color palette for the login screen.
//!
//! Brand colors come straight from [`Theme::standard`]; the rest are the
//! Material defaults the page relies on (error red, success green, greys).

use gatehouse_core::{Rgb, Theme};
use ratatui::style::Color;

const THEME: Theme = Theme::standard();

/// Convert a theme colour into a terminal colour
pub const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

// --- Brand ---
pub const MAIN_BLUE: Color = rgb(THEME.palette.main_blue);

// --- Surfaces ---
pub const SURFACE: Color = Color::Rgb(255, 255, 255); // Form panel
pub const FIELD_BG: Color = Color::Rgb(240, 240, 240); // Filled input
pub const POPUP_BG: Color = Color::Rgb(255, 255, 255); // Dialog paper

// --- Borders ---
pub const BORDER_DIM: Color = rgb(THEME.overrides.input.underline.color);
pub const BORDER_ACTIVE: Color = MAIN_BLUE;

// --- Accent ---
pub const ACCENT: Color = MAIN_BLUE;
pub const CONTRAST_FG: Color = Color::Rgb(255, 255, 255); // Text on accent

// --- Text ---
pub const TEXT_PRIMARY: Color = rgb(THEME.overrides.input.color);
pub const TEXT_LABEL: Color = rgb(THEME.overrides.label.color);
pub const TEXT_MUTED: Color = Color::Rgb(102, 102, 102);

// --- Status ---
pub const ERROR: Color = Color::Rgb(211, 47, 47); // #d32f2f
pub const INFO: Color = Color::Rgb(2, 136, 209); // #0288d1
pub const SUCCESS_BG: Color = Color::Rgb(237, 247, 237); // #edf7ed
pub const SUCCESS_FG: Color = Color::Rgb(30, 70, 32); // #1e4620
pub const SUCCESS_ICON: Color = Color::Rgb(46, 125, 50); // #2e7d32

// --- Log In button ---
pub const BUTTON_BG: Color = Color::Rgb(0, 0, 0);
pub const BUTTON_FOCUS_BG: Color = Color::Rgb(51, 51, 51); // rgba(0,0,0,0.8)

// --- Dialog ---
pub const MODAL_BORDER: Color = Color::Rgb(0, 0, 0);

// --- Disabled controls ---
pub const DISABLED_BG: Color = Color::Rgb(224, 224, 224);
pub const DISABLED_FG: Color = Color::Rgb(158, 158, 158);

// --- Effects ---
pub const BACKDROP_BG: Color = Color::Rgb(128, 128, 128); // rgba(0,0,0,0.5) over white
pub const BACKDROP_FG: Color = Color::Rgb(64, 64, 64);
pub const SHADOW: Color = Color::Rgb(48, 48, 48);
