//! Configuration types for Gatehouse
//!
//! Defines:
//! - `Settings` - Application settings (`.gatehouse/config.toml`)
//! - Related sub-types and enums

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Shortest auto-dismiss delay honoured for the notification toast
pub const MIN_NOTIFICATION_MS: u64 = 500;

/// Application settings (.gatehouse/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub page: PageSettings,

    #[serde(default)]
    pub assets: AssetSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub auth: AuthSettings,
}

/// Page metadata (what a browser would put in the document head)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageSettings {
    /// Shown as the terminal window title and under the brand mark
    #[serde(default = "default_title")]
    pub title: String,

    /// Shown in the footer
    #[serde(default = "default_description")]
    pub description: String,

    /// Icon reference, kept as a path
    #[serde(default = "default_logo")]
    pub favicon: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            favicon: default_logo(),
        }
    }
}

fn default_title() -> String {
    "Agmo Assignment".to_string()
}

fn default_description() -> String {
    "Pre-Interview Assignment".to_string()
}

fn default_logo() -> String {
    "/images/agmo-logo.png".to_string()
}

/// Static asset references. Paths are carried, never loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetSettings {
    #[serde(default = "default_background")]
    pub background: String,

    #[serde(default = "default_logo")]
    pub logo: String,

    /// Alt text rendered in place of the logo image
    #[serde(default = "default_logo_alt")]
    pub logo_alt: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            background: default_background(),
            logo: default_logo(),
            logo_alt: default_logo_alt(),
        }
    }
}

fn default_background() -> String {
    "/images/banner.jpg".to_string()
}

fn default_logo_alt() -> String {
    "Company logo".to_string()
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font) or
/// safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Notification auto-dismiss delay in milliseconds
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            notification_ms: default_notification_ms(),
        }
    }
}

impl UiSettings {
    /// Auto-dismiss delay, clamped to [`MIN_NOTIFICATION_MS`]
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms.max(MIN_NOTIFICATION_MS))
    }
}

fn default_notification_ms() -> u64 {
    6000
}

/// Authentication seam settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthSettings {
    /// When set, every login attempt is rejected with this reason
    #[serde(default)]
    pub reject_reason: Option<String>,
}
