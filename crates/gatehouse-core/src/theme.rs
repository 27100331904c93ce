//! Passive theme configuration consumed by every rendered element.
//!
//! The theme carries no behavior. It is built once and read for the
//! lifetime of the process; the TUI crate maps it onto terminal styles.

use std::fmt;

/// A 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// CSS-style numeric font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);

    /// Weights at or above semi-bold render emphasised
    pub fn is_bold(self) -> bool {
        self >= Self::SEMI_BOLD
    }

    /// Weights at or below light render dimmed
    pub fn is_light(self) -> bool {
        self <= Self::LIGHT
    }
}

/// The two named brand colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub light_blue: Rgb,
    pub main_blue: Rgb,
}

/// Heading override (weight, size, line height)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingStyle {
    pub font_weight: FontWeight,
    pub font_size_rem: f32,
    pub line_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub font_family: &'static str,
    pub heading: HeadingStyle,
}

/// Label text style override
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOverride {
    pub color: Rgb,
    pub font_size_rem: f32,
}

/// Input underline: width in px and colour, identical at rest and on hover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underline {
    pub width_px: u8,
    pub color: Rgb,
    pub hover_color: Rgb,
}

/// Input text and underline override
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputOverride {
    pub color: Rgb,
    pub font_weight: FontWeight,
    pub underline: Underline,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetOverrides {
    pub label: LabelOverride,
    pub input: InputOverride,
}

/// Immutable theme for the whole login screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub overrides: WidgetOverrides,
}

static THEME: Theme = Theme::standard();

impl Theme {
    /// The brand theme
    pub const fn standard() -> Self {
        const BORDER_GREY: Rgb = Rgb(0xcc, 0xcc, 0xcc);

        Self {
            palette: Palette {
                light_blue: Rgb(0xbc, 0xd4, 0xe6),
                main_blue: Rgb(0x19, 0x76, 0xd2),
            },
            typography: Typography {
                font_family: "Roboto Flex",
                heading: HeadingStyle {
                    font_weight: FontWeight::SEMI_BOLD,
                    font_size_rem: 2.0,
                    line_height: 1.5,
                },
            },
            overrides: WidgetOverrides {
                label: LabelOverride {
                    color: Rgb::BLACK,
                    font_size_rem: 1.0,
                },
                input: InputOverride {
                    color: Rgb::BLACK,
                    font_weight: FontWeight::LIGHT,
                    underline: Underline {
                        width_px: 1,
                        color: BORDER_GREY,
                        hover_color: BORDER_GREY,
                    },
                },
            },
        }
    }

    /// Process-wide theme instance
    pub fn global() -> &'static Theme {
        &THEME
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}
