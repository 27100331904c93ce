//! Footer: page description on the left, key hints on the right

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use super::put_str;
use crate::theme::{palette, styles};

pub struct Footer<'a> {
    description: &'a str,
    modal_open: bool,
}

impl<'a> Footer<'a> {
    pub fn new(description: &'a str) -> Self {
        Self {
            description,
            modal_open: false,
        }
    }

    /// Show the dialog's keys instead of the form's
    pub fn modal_open(mut self, open: bool) -> Self {
        self.modal_open = open;
        self
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.modal_open {
            &[("Tab", " switch  "), ("Enter", " select  "), ("Esc", " close ")]
        } else {
            &[
                ("Tab", " next  "),
                ("Enter", " submit  "),
                ("^R", " show password  "),
                ("^C", " quit "),
            ]
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::SURFACE));

        let description = format!(" {}", self.description);
        put_str(buf, area, &description, styles::text_muted());

        let spans: Vec<_> = self
            .hints()
            .iter()
            .flat_map(|(key, label)| styles::key_hint(key, label))
            .collect();
        Line::from(spans).right_aligned().render(area, buf);
    }
}
