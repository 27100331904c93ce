//! Custom widget components

mod brand_panel;
mod button;
mod checkbox;
mod footer;
mod forgot_password_modal;
pub mod modal_overlay;
mod text_field;
mod toast;

pub use brand_panel::BrandPanel;
pub use button::Button;
pub use checkbox::Checkbox;
pub use footer::Footer;
pub use forgot_password_modal::{ForgotPasswordModal, RESET_DESCRIPTION, RESET_TITLE};
pub use text_field::{TextField, MASK_CHAR};
pub use toast::Toast;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

/// Write `text` into `area` on its first row, clipped to the area width
pub(crate) fn put_str(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    let area = area.intersection(buf.area);
    if area.is_empty() || !buf.area.contains(Position::new(area.x, area.y)) {
        return;
    }
    buf.set_stringn(area.x, area.y, text, area.width as usize, style);
}

/// Like [`put_str`], right-aligned within the area
pub(crate) fn put_str_right(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    let width = (text.width() as u16).min(area.width);
    let x = area.x + area.width - width;
    put_str(buf, Rect::new(x, area.y, width, 1), text, style);
}

/// Like [`put_str`], centred within the area
pub(crate) fn put_str_centered(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    let width = (text.width() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    put_str(buf, Rect::new(x, area.y, width, 1), text, style);
}
