//! Contained push button

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use super::put_str_centered;
use crate::theme::styles;

pub struct Button<'a> {
    label: &'a str,
    enabled: bool,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
            focused: false,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = styles::button(self.enabled, self.focused);
        let border_type = if self.focused && self.enabled {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        put_str_centered(buf, inner, self.label, style);
    }
}
