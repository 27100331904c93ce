//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, LoginState};

use super::{form, keys::handle_key, modal, submit, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut LoginState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::EmailChanged(value) => form::handle_email_changed(state, value),
        Message::PasswordChanged(value) => form::handle_password_changed(state, value),
        Message::FocusNext => form::handle_focus_next(state),
        Message::FocusPrevious => form::handle_focus_previous(state),
        Message::Focus(target) => form::handle_focus(state, target),
        Message::TogglePasswordVisibility => form::handle_toggle_password_visibility(state),
        Message::PasswordToggleMouseDown => UpdateResult::none(),
        Message::ToggleRememberMe => form::handle_toggle_remember_me(state),

        // ─────────────────────────────────────────────────────────
        // Forgot-Password Modal Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenForgotPassword => modal::handle_open(state),
        Message::CloseForgotPassword => modal::handle_close(state),
        Message::ModalFocus(button) => modal::handle_focus(state, button),
        Message::SimulateServerError => modal::handle_simulate_server_error(state),

        // ─────────────────────────────────────────────────────────
        // Submission & Notification Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => submit::handle_submit(state),
        Message::AuthCompleted(outcome) => submit::handle_auth_completed(state, outcome),
        Message::NotificationExpired { token } => {
            submit::handle_notification_expired(state, token)
        }
        Message::DismissNotification => submit::handle_dismiss_notification(state),
    }
}
