//! Bordered text input with label, leading icon and helper line

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{put_str, put_str_right};
use crate::layout::FieldAreas;
use crate::theme::styles;

/// Character shown for each masked password character
pub const MASK_CHAR: char = '•';

/// Text input widget
///
/// Renders into a `FIELD_ROWS`-tall strip split by [`FieldAreas::split`].
pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    icon: &'a str,
    helper: &'a str,
    masked: bool,
    focused: bool,
    adornment: Option<(&'a str, bool)>,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            icon: "",
            helper: "",
            masked: false,
            focused: false,
            adornment: None,
        }
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = icon;
        self
    }

    /// Helper text under the input; non-empty marks the field as erroring
    pub fn helper_text(mut self, helper: &'a str) -> Self {
        self.helper = helper;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Trailing control inside the input (the visibility toggle)
    pub fn adornment(mut self, text: &'a str, focused: bool) -> Self {
        self.adornment = Some((text, focused));
        self
    }

    fn has_error(&self) -> bool {
        !self.helper.is_empty()
    }

    fn display_value(&self) -> String {
        if self.masked {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.to_string()
        }
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let areas = FieldAreas::split(area);

        put_str(buf, areas.icon, self.icon, styles::text_primary());

        let block = styles::field_block(self.label, self.focused, self.has_error());
        let inner = block.inner(areas.field);
        block.render(areas.field, buf);

        if !inner.is_empty() {
            let mut text_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1);

            if let Some((text, focused)) = self.adornment {
                let toggle = areas.adornment(crate::layout::TOGGLE_WIDTH);
                put_str_right(buf, toggle, text, styles::control(focused));
                text_area.width = toggle.x.saturating_sub(text_area.x + 1);
            }

            let cursor_w = u16::from(self.focused);
            let display = self.display_value();
            let visible = visible_tail(&display, text_area.width.saturating_sub(cursor_w) as usize);
            put_str(buf, text_area, visible, styles::input_text());

            if self.focused {
                let cursor_x = text_area.x + visible.width() as u16;
                put_str(
                    buf,
                    Rect::new(cursor_x, text_area.y, 1, 1),
                    " ",
                    Style::default().add_modifier(Modifier::REVERSED),
                );
            }
        }

        if self.has_error() {
            put_str(buf, areas.helper, self.helper, styles::helper_error());
        }
    }
}

/// Longest suffix of `text` that fits in `max_width` columns
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}
