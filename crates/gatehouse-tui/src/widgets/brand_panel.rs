//! Brand panel: gradient backdrop with the logo mark and page title

use gatehouse_core::{Rgb, Theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use super::put_str_centered;
use crate::theme::{icons::IconSet, palette};

pub struct BrandPanel<'a> {
    logo_alt: &'a str,
    title: &'a str,
    icons: IconSet,
}

impl<'a> BrandPanel<'a> {
    pub fn new(logo_alt: &'a str, title: &'a str, icons: IconSet) -> Self {
        Self {
            logo_alt,
            title,
            icons,
        }
    }
}

impl Widget for BrandPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        // main_blue at the top fading to light_blue at the bottom
        let brand = Theme::global().palette;
        let last_row = area.height.saturating_sub(1).max(1);
        for (row, y) in (area.y..area.y + area.height).enumerate() {
            let bg = palette::rgb(blend(brand.main_blue, brand.light_blue, row as u16, last_row));
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_bg(bg);
                }
            }
        }

        let mid = area.y + area.height / 2;
        let logo = format!("{} {}", self.icons.logo(), self.logo_alt);
        let logo_style = Style::default()
            .fg(palette::CONTRAST_FG)
            .add_modifier(Modifier::BOLD);
        let logo_row = mid.saturating_sub(1).max(area.y);
        put_str_centered(buf, Rect::new(area.x, logo_row, area.width, 1), &logo, logo_style);

        let title_row = mid + 1;
        if title_row < area.y + area.height {
            let title_style = Style::default().fg(palette::CONTRAST_FG);
            put_str_centered(
                buf,
                Rect::new(area.x, title_row, area.width, 1),
                self.title,
                title_style,
            );
        }
    }
}

/// Linear blend from `from` to `to` at `step / steps`
fn blend(from: Rgb, to: Rgb, step: u16, steps: u16) -> Rgb {
    let mix = |a: u8, b: u8| {
        let (a, b) = (i32::from(a), i32::from(b));
        let value = a + (b - a) * i32::from(step) / i32::from(steps);
        value.clamp(0, 255) as u8
    };
    Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}
