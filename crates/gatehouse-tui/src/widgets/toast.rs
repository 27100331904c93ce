//! Success notification toast

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use super::{modal_overlay::clear_area, put_str};
use crate::theme::{icons::IconSet, palette, styles};

pub struct Toast<'a> {
    text: &'a str,
    icons: IconSet,
}

impl<'a> Toast<'a> {
    pub fn new(text: &'a str, icons: IconSet) -> Self {
        Self { text, icons }
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        clear_area(buf, area);

        let block = styles::toast_block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let icon_style = Style::default()
            .fg(palette::SUCCESS_ICON)
            .bg(palette::SUCCESS_BG);
        put_str(buf, Rect::new(inner.x, inner.y, 1, 1), self.icons.success(), icon_style);

        let text_area = Rect::new(inner.x + 2, inner.y, inner.width.saturating_sub(2), 1);
        let text_style = Style::default()
            .fg(palette::SUCCESS_FG)
            .bg(palette::SUCCESS_BG);
        put_str(buf, text_area.intersection(inner), self.text, text_style);
    }
}
