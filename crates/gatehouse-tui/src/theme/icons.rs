//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use gatehouse_app::config::IconMode;

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn email(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e0}", // nf-fa-envelope
            IconMode::Unicode => "\u{2709}",   // ✉
        }
    }

    pub fn password(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f084}", // nf-fa-key
            IconMode::Unicode => "*",
        }
    }

    /// Shown while the password is masked; activating it reveals
    pub fn show_password(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f06e}", // nf-fa-eye
            IconMode::Unicode => "[show]",
        }
    }

    /// Shown while the password is revealed; activating it masks
    pub fn hide_password(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f070}", // nf-fa-eye_slash
            IconMode::Unicode => "[hide]",
        }
    }

    pub fn checkbox(&self, checked: bool) -> &'static str {
        match (self.mode, checked) {
            (IconMode::NerdFonts, true) => "\u{f14a}", // nf-fa-check_square
            (IconMode::NerdFonts, false) => "\u{f096}", // nf-fa-square_o
            (IconMode::Unicode, true) => "[x]",
            (IconMode::Unicode, false) => "[ ]",
        }
    }

    pub fn success(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f058}", // nf-fa-check_circle
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    /// Glyph standing in for the logo image
    pub fn logo(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f132}", // nf-fa-shield
            IconMode::Unicode => "\u{25c6}",   // ◆
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons_are_plain_text() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.show_password(), "[show]");
        assert_eq!(icons.hide_password(), "[hide]");
        assert_eq!(icons.checkbox(true), "[x]");
        assert_eq!(icons.checkbox(false), "[ ]");
    }

    #[test]
    fn test_nerd_font_icons_differ_from_unicode() {
        let nerd = IconSet::new(IconMode::NerdFonts);
        let unicode = IconSet::new(IconMode::Unicode);
        assert_ne!(nerd.email(), unicode.email());
        assert_ne!(nerd.show_password(), unicode.show_password());
        assert_ne!(nerd.success(), unicode.success());
    }
}
