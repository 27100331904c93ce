//! Forgot-password dialog

use gatehouse_app::state::ModalButton;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::modal_overlay::{clear_area, render_shadow};
use super::put_str;
use crate::layout::ModalAreas;
use crate::theme::{palette, styles};

pub const RESET_TITLE: &str = "Forgot Password?";

/// Placeholder body text
pub const RESET_DESCRIPTION: &str = "Lorem ipsum dolor sit amet consectetur adipisicing elit. \
    Recusandae, ab. Quo, quisquam ex accusamus totam sunt harum asperiores necessitatibus \
    provident reprehenderit";

const CLOSE_LABEL: &str = " CLOSE ";
const GENERATE_ERROR_LABEL: &str = " Generate Example Server Error ";

/// Dialog widget; draws at the rects computed by the layout
pub struct ForgotPasswordModal<'a> {
    focus: ModalButton,
    areas: &'a ModalAreas,
}

impl<'a> ForgotPasswordModal<'a> {
    pub fn new(focus: ModalButton, areas: &'a ModalAreas) -> Self {
        Self { focus, areas }
    }
}

impl Widget for ForgotPasswordModal<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let areas = self.areas;
        if areas.dialog.is_empty() {
            return;
        }

        render_shadow(buf, areas.dialog);
        clear_area(buf, areas.dialog);
        styles::modal_block().render(areas.dialog, buf);

        let paper = Style::default().bg(palette::POPUP_BG);
        put_str(buf, areas.title, RESET_TITLE, styles::heading().patch(paper));

        Paragraph::new(RESET_DESCRIPTION)
            .style(styles::text_primary().patch(paper))
            .wrap(Wrap { trim: true })
            .render(areas.description, buf);

        put_str(
            buf,
            areas.close,
            CLOSE_LABEL,
            styles::text_button(palette::ERROR, self.focus == ModalButton::Close),
        );
        put_str(
            buf,
            areas.generate_error,
            GENERATE_ERROR_LABEL,
            styles::text_button(palette::INFO, self.focus == ModalButton::GenerateError),
        );
    }
}
