//! Form field handlers

use crate::state::{FormFocus, LoginState};

use super::UpdateResult;

pub fn handle_email_changed(state: &mut LoginState, value: String) -> UpdateResult {
    state.email.set(value);
    state.settle_focus();
    UpdateResult::none()
}

pub fn handle_password_changed(state: &mut LoginState, value: String) -> UpdateResult {
    state.password.set(value);
    state.settle_focus();
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut LoginState) -> UpdateResult {
    state.focus = state.next_focus();
    UpdateResult::none()
}

pub fn handle_focus_previous(state: &mut LoginState) -> UpdateResult {
    state.focus = state.previous_focus();
    UpdateResult::none()
}

/// Focus a control; disabled controls keep the current focus
pub fn handle_focus(state: &mut LoginState, target: FormFocus) -> UpdateResult {
    if state.is_focusable(target) {
        state.focus = target;
    }
    UpdateResult::none()
}

/// Flip masking only; the stored password is untouched
pub fn handle_toggle_password_visibility(state: &mut LoginState) -> UpdateResult {
    state.password_visible = !state.password_visible;
    UpdateResult::none()
}

pub fn handle_toggle_remember_me(state: &mut LoginState) -> UpdateResult {
    state.remember_me = !state.remember_me;
    UpdateResult::none()
}
