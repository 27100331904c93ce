//! Labelled checkbox

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use super::put_str;
use crate::theme::{icons::IconSet, styles};

pub struct Checkbox<'a> {
    label: &'a str,
    checked: bool,
    focused: bool,
    icons: IconSet,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, checked: bool, icons: IconSet) -> Self {
        Self {
            label,
            checked,
            focused: false,
            icons,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Checkbox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let glyph = self.icons.checkbox(self.checked);
        put_str(buf, area, glyph, styles::control(self.focused));

        let offset = (glyph.width() as u16 + 1).min(area.width);
        let label_area = Rect::new(area.x + offset, area.y, area.width - offset, area.height);
        let style = if self.focused {
            styles::link(true)
        } else {
            styles::text_primary()
        };
        put_str(buf, label_area, self.label, style);
    }
}
