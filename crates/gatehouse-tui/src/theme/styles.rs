//! Semantic style builders for the login screen.

use gatehouse_core::{FontWeight, Theme};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

/// Bold for semi-bold and heavier, dim for light and thinner
pub fn weight_modifier(weight: FontWeight) -> Modifier {
    if weight.is_bold() {
        Modifier::BOLD
    } else if weight.is_light() {
        Modifier::DIM
    } else {
        Modifier::empty()
    }
}

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    let heading = Theme::global().typography.heading;
    text_primary().add_modifier(weight_modifier(heading.font_weight))
}

pub fn input_text() -> Style {
    let input = Theme::global().overrides.input;
    Style::default()
        .fg(palette::rgb(input.color))
        .add_modifier(weight_modifier(input.font_weight))
}

/// Field label; red on error, bold while focused
pub fn label(focused: bool, error: bool) -> Style {
    let color = if error {
        palette::ERROR
    } else {
        palette::TEXT_LABEL
    };
    let style = Style::default().fg(color);
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn helper_error() -> Style {
    Style::default().fg(palette::ERROR)
}

pub fn server_error() -> Style {
    Style::default().fg(palette::ERROR)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

pub fn border_error() -> Style {
    Style::default().fg(palette::ERROR)
}

// --- Controls ---
pub fn link(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        text_primary()
    }
}

/// Checkbox and toggle glyphs
pub fn control(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        text_primary()
    }
}

pub fn button(enabled: bool, focused: bool) -> Style {
    match (enabled, focused) {
        (false, _) => Style::default()
            .fg(palette::DISABLED_FG)
            .bg(palette::DISABLED_BG),
        (true, false) => Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::BUTTON_BG),
        (true, true) => Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::BUTTON_FOCUS_BG)
            .add_modifier(Modifier::BOLD),
    }
}

/// Text button inside the dialog, tinted by intent
pub fn text_button(color: ratatui::style::Color, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color).bg(palette::POPUP_BG)
    }
}

/// Footer key hint: `key` highlighted, `label` muted
pub fn key_hint<'a>(key: &'a str, label: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(palette::ACCENT)),
        Span::styled(label, text_muted()),
    ]
}

// --- Block builders ---
pub fn field_block(title: &str, focused: bool, error: bool) -> Block<'static> {
    let border = if error {
        border_error()
    } else if focused {
        border_active()
    } else {
        border_inactive()
    };

    Block::default()
        .title(Span::styled(format!(" {title} "), label(focused, error)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(palette::FIELD_BG))
}

pub fn modal_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(palette::MODAL_BORDER))
        .style(Style::default().bg(palette::POPUP_BG))
}

pub fn toast_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::SUCCESS_ICON))
        .style(
            Style::default()
                .fg(palette::SUCCESS_FG)
                .bg(palette::SUCCESS_BG),
        )
}
