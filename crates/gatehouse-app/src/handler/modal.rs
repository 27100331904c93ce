//! Forgot-password dialog handlers

use crate::state::{LoginState, ModalButton, ModalState, SIMULATED_RESET_ERROR};

use super::UpdateResult;

pub fn handle_open(state: &mut LoginState) -> UpdateResult {
    if !state.modal.is_open() {
        state.modal = ModalState::Open {
            focus: ModalButton::Close,
        };
    }
    UpdateResult::none()
}

pub fn handle_close(state: &mut LoginState) -> UpdateResult {
    state.modal = ModalState::Closed;
    UpdateResult::none()
}

pub fn handle_focus(state: &mut LoginState, button: ModalButton) -> UpdateResult {
    if state.modal.is_open() {
        state.modal = ModalState::Open { focus: button };
    }
    UpdateResult::none()
}

/// Close the dialog and show a placeholder reset failure
pub fn handle_simulate_server_error(state: &mut LoginState) -> UpdateResult {
    if !state.modal.is_open() {
        return UpdateResult::none();
    }
    state.modal = ModalState::Closed;
    state.server_error = SIMULATED_RESET_ERROR.to_string();
    UpdateResult::none()
}
