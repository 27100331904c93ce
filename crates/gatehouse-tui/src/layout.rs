//! Screen layout definitions for the TUI
//!
//! Computes every control's rectangle from the terminal area alone, so the
//! renderer and the mouse hit test always agree on where things are.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::widgets::modal_overlay::centered_rect;

/// Narrower terminals stack the brand strip above the form
pub const STACK_BREAKPOINT: u16 = 100;

const FORM_HEIGHT: u16 = 16;
const FORM_MAX_WIDTH: u16 = 56;
const FORM_MARGIN: u16 = 2;
const ICON_WIDTH: u16 = 3;
const FIELD_HEIGHT: u16 = 3;
pub const TOGGLE_WIDTH: u16 = 6;
const REMEMBER_ME_WIDTH: u16 = 15;
const FORGOT_PASSWORD_WIDTH: u16 = 21;
const SUBMIT_WIDTH: u16 = 12;

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 10;
const MODAL_PADDING: u16 = 2;
const CLOSE_WIDTH: u16 = 7;
const GENERATE_ERROR_WIDTH: u16 = 31;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

/// Rows a text field occupies: bordered input plus helper line
pub const FIELD_ROWS: u16 = FIELD_HEIGHT + 1;

/// Icon, bordered input and helper line of one text field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldAreas {
    pub bounds: Rect,
    pub icon: Rect,
    pub field: Rect,
    pub helper: Rect,
}

impl FieldAreas {
    /// Split a `FIELD_ROWS`-tall strip into icon column, input and helper
    pub fn split(bounds: Rect) -> Self {
        let clip = |r: Rect| r.intersection(bounds);
        let field_x = bounds.x.saturating_add(ICON_WIDTH);
        let field_w = bounds.width.saturating_sub(ICON_WIDTH);

        Self {
            bounds,
            icon: clip(Rect::new(bounds.x, bounds.y.saturating_add(1), ICON_WIDTH - 1, 1)),
            field: clip(Rect::new(field_x, bounds.y, field_w, FIELD_HEIGHT)),
            helper: clip(Rect::new(
                field_x,
                bounds.y.saturating_add(FIELD_HEIGHT),
                field_w,
                1,
            )),
        }
    }

    /// Right end of the input row, inside the border
    pub fn adornment(&self, width: u16) -> Rect {
        let width = width.min(self.field.width.saturating_sub(2));
        Rect::new(
            (self.field.x + self.field.width).saturating_sub(1 + width),
            self.field.y.saturating_add(1),
            width,
            1,
        )
        .intersection(self.field)
    }
}

/// Forgot-password dialog regions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalAreas {
    pub dialog: Rect,
    pub title: Rect,
    pub description: Rect,
    pub close: Rect,
    pub generate_error: Rect,
}

/// All regions of the login screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginLayout {
    pub area: Rect,
    pub stacked: bool,
    pub brand: Rect,
    pub form: Rect,
    pub footer: Rect,
    pub heading: Rect,
    pub email: FieldAreas,
    pub password: FieldAreas,
    pub visibility_toggle: Rect,
    pub remember_me: Rect,
    pub forgot_password: Rect,
    pub submit: Rect,
    pub server_error: Rect,
    pub modal: ModalAreas,
    pub toast: Rect,
}

/// What a mouse position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Email,
    Password,
    VisibilityToggle,
    RememberMe,
    ForgotPassword,
    Submit,
    Toast,
    ModalClose,
    ModalGenerateError,
    /// Inside the dialog but not on a button
    ModalDialog,
    /// Outside the dialog while it is open
    Backdrop,
}

impl LoginLayout {
    /// Create the login layout for the given terminal area
    pub fn compute(area: Rect) -> Self {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let stacked = area.width < STACK_BREAKPOINT;
        let [brand, form] = if stacked {
            Layout::vertical([Constraint::Percentage(20), Constraint::Min(0)]).areas(body)
        } else {
            Layout::horizontal([Constraint::Ratio(7, 12), Constraint::Ratio(5, 12)]).areas(body)
        };

        let content = form_content(form, stacked);
        let clip = |r: Rect| r.intersection(area);

        let (x, y, w) = (content.x, content.y, content.width);
        let field_areas =
            |top: u16| FieldAreas::split(clip(Rect::new(x, top, w, FIELD_ROWS)));

        let email = field_areas(y.saturating_add(3));
        let password = field_areas(y.saturating_add(7));
        let visibility_toggle = password.adornment(TOGGLE_WIDTH);

        let row_y = y.saturating_add(11);
        let remember_me = clip(Rect::new(x, row_y, REMEMBER_ME_WIDTH.min(w), 1));
        let forgot_w = FORGOT_PASSWORD_WIDTH.min(w);
        let forgot_password =
            clip(Rect::new((x + w).saturating_sub(forgot_w), row_y, forgot_w, 1));

        let submit_y = y.saturating_add(13);
        let submit_w = SUBMIT_WIDTH.min(w);
        let submit = clip(Rect::new(x, submit_y, submit_w, 3));
        let server_error = clip(Rect::new(
            x.saturating_add(submit_w + 1),
            submit_y.saturating_add(1),
            w.saturating_sub(submit_w + 1),
            1,
        ));

        Self {
            area,
            stacked,
            brand,
            form,
            footer,
            heading: clip(Rect::new(x, y, w, 2)),
            email,
            password,
            visibility_toggle,
            remember_me,
            forgot_password,
            submit,
            server_error,
            modal: modal_areas(area),
            toast: toast_area(area),
        }
    }

    /// Find the control under a terminal cell
    ///
    /// The toast sits above everything; an open dialog blocks the form.
    pub fn hit_test(
        &self,
        column: u16,
        row: u16,
        modal_open: bool,
        toast_open: bool,
    ) -> Option<HitTarget> {
        let pos = Position::new(column, row);

        if toast_open && self.toast.contains(pos) {
            return Some(HitTarget::Toast);
        }

        if modal_open {
            let target = if self.modal.close.contains(pos) {
                HitTarget::ModalClose
            } else if self.modal.generate_error.contains(pos) {
                HitTarget::ModalGenerateError
            } else if self.modal.dialog.contains(pos) {
                HitTarget::ModalDialog
            } else {
                HitTarget::Backdrop
            };
            return Some(target);
        }

        // Toggle sits inside the password field and must win
        [
            (self.visibility_toggle, HitTarget::VisibilityToggle),
            (self.email.field, HitTarget::Email),
            (self.password.field, HitTarget::Password),
            (self.remember_me, HitTarget::RememberMe),
            (self.forgot_password, HitTarget::ForgotPassword),
            (self.submit, HitTarget::Submit),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, target)| target)
    }
}

/// Form column inside the form panel, vertically centred
fn form_content(form: Rect, stacked: bool) -> Rect {
    let width = form
        .width
        .saturating_sub(FORM_MARGIN * 2)
        .min(FORM_MAX_WIDTH);
    let x = if stacked {
        form.x + form.width.saturating_sub(width) / 2
    } else {
        form.x + FORM_MARGIN.min(form.width)
    };

    let [_, column, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(FORM_HEIGHT),
        Constraint::Fill(1),
    ])
    .areas(form);

    Rect::new(x, column.y, width, column.height)
}

fn modal_areas(area: Rect) -> ModalAreas {
    let dialog = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    let inner_x = dialog.x.saturating_add(MODAL_PADDING);
    let inner_w = dialog.width.saturating_sub(MODAL_PADDING * 2);
    let clip = |r: Rect| r.intersection(dialog);

    let buttons_y = dialog.y.saturating_add(8);
    let generate_w = GENERATE_ERROR_WIDTH.min(inner_w);

    ModalAreas {
        dialog,
        title: clip(Rect::new(inner_x, dialog.y.saturating_add(1), inner_w, 1)),
        description: clip(Rect::new(inner_x, dialog.y.saturating_add(3), inner_w, 4)),
        close: clip(Rect::new(inner_x, buttons_y, CLOSE_WIDTH.min(inner_w), 1)),
        generate_error: clip(Rect::new(
            (inner_x + inner_w).saturating_sub(generate_w),
            buttons_y,
            generate_w,
            1,
        )),
    }
}

/// Top-right corner, one cell in from the edge
fn toast_area(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let x = (area.x + area.width).saturating_sub(width + 1).max(area.x);
    let y = area.y + 1.min(area.height);
    Rect::new(x, y, width, TOAST_HEIGHT).intersection(area)
}
