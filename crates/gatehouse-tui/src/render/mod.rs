//! Main render/view function (View in TEA pattern)


use gatehouse_app::state::{FormFocus, LoginState, ModalState};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use crate::layout::LoginLayout;
use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::{self, modal_overlay};

const HEADING: [&str; 2] = ["Hello,", "Welcome Back"];
const EMAIL_LABEL: &str = "Email Address";
const PASSWORD_LABEL: &str = "Password";
const REMEMBER_ME_LABEL: &str = "Remember Me";
const FORGOT_PASSWORD_LABEL: &str = "Forget Your Password?";
const SUBMIT_LABEL: &str = "Log In";

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`. Returns the layout it drew so the event
/// loop can hit-test mouse input against exactly what is on screen.
pub fn view(frame: &mut Frame, state: &LoginState) -> LoginLayout {
    let area = frame.area();
    let layout = LoginLayout::compute(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::SURFACE)),
        area,
    );

    frame.render_widget(
        widgets::BrandPanel::new(
            &state.settings.assets.logo_alt,
            &state.settings.page.title,
            icons,
        ),
        layout.brand,
    );

    render_heading(frame, layout.heading);
    render_fields(frame, &layout, state, icons);
    render_options_row(frame, &layout, state, icons);
    render_submit_row(frame, &layout, state);

    frame.render_widget(
        widgets::Footer::new(&state.settings.page.description).modal_open(state.modal.is_open()),
        layout.footer,
    );

    if let ModalState::Open { focus } = state.modal {
        modal_overlay::dim_background(frame.buffer_mut(), area);
        frame.render_widget(
            widgets::ForgotPasswordModal::new(focus, &layout.modal),
            layout.modal.dialog,
        );
    }

    if let Some(notification) = state.notification {
        frame.render_widget(
            widgets::Toast::new(notification.text(), icons),
            layout.toast,
        );
    }

    layout
}

fn render_heading(frame: &mut Frame, area: Rect) {
    for (offset, text) in (0u16..).zip(HEADING) {
        if offset >= area.height {
            break;
        }
        let row = Rect::new(area.x, area.y + offset, area.width, 1);
        frame.render_widget(Line::styled(text, styles::heading()), row);
    }
}

fn render_fields(frame: &mut Frame, layout: &LoginLayout, state: &LoginState, icons: IconSet) {
    let email_helper = state.email_helper_text();
    frame.render_widget(
        widgets::TextField::new(EMAIL_LABEL, &state.email.value)
            .icon(icons.email())
            .helper_text(&email_helper)
            .focused(is_focused(state, FormFocus::Email)),
        layout.email.bounds,
    );

    let password_helper = state.password_helper_text();
    let toggle = if state.password_visible {
        icons.hide_password()
    } else {
        icons.show_password()
    };
    frame.render_widget(
        widgets::TextField::new(PASSWORD_LABEL, &state.password.value)
            .icon(icons.password())
            .helper_text(&password_helper)
            .masked(!state.password_visible)
            .focused(is_focused(state, FormFocus::Password))
            .adornment(toggle, is_focused(state, FormFocus::VisibilityToggle)),
        layout.password.bounds,
    );
}

fn render_options_row(
    frame: &mut Frame,
    layout: &LoginLayout,
    state: &LoginState,
    icons: IconSet,
) {
    frame.render_widget(
        widgets::Checkbox::new(REMEMBER_ME_LABEL, state.remember_me, icons)
            .focused(is_focused(state, FormFocus::RememberMe)),
        layout.remember_me,
    );

    let link = Line::styled(
        FORGOT_PASSWORD_LABEL,
        styles::link(is_focused(state, FormFocus::ForgotPassword)),
    )
    .right_aligned();
    frame.render_widget(link, layout.forgot_password);
}

fn render_submit_row(frame: &mut Frame, layout: &LoginLayout, state: &LoginState) {
    frame.render_widget(
        widgets::Button::new(SUBMIT_LABEL)
            .enabled(state.can_submit())
            .focused(is_focused(state, FormFocus::Submit)),
        layout.submit,
    );

    if state.has_server_error() {
        Line::styled(state.server_error.as_str(), styles::server_error())
            .right_aligned()
            .render(layout.server_error, frame.buffer_mut());
    }
}

/// Focus highlight is hidden while the dialog owns the keyboard
fn is_focused(state: &LoginState, control: FormFocus) -> bool {
    !state.modal.is_open() && state.focus == control
}
