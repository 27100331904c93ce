//! Key event handlers for the form and the forgot-password dialog

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{FormFocus, LoginState, ModalButton, ModalState};

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &LoginState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.modal {
        ModalState::Open { focus } => handle_key_modal(focus, key),
        ModalState::Closed => handle_key_form(state, key),
    }
}

/// Keys while the dialog is open; nothing reaches the form behind it
fn handle_key_modal(focus: ModalButton, key: InputKey) -> Option<Message> {
    match key {
        // Backdrop dismiss
        InputKey::Esc => Some(Message::CloseForgotPassword),

        InputKey::Tab
        | InputKey::BackTab
        | InputKey::Left
        | InputKey::Right
        | InputKey::Up
        | InputKey::Down => Some(Message::ModalFocus(focus.toggle())),

        InputKey::Enter | InputKey::Char(' ') => Some(match focus {
            ModalButton::Close => Message::CloseForgotPassword,
            ModalButton::GenerateError => Message::SimulateServerError,
        }),

        _ => None,
    }
}

fn handle_key_form(state: &LoginState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrevious),

        // Esc never quits
        InputKey::Esc => state
            .is_notification_open()
            .then_some(Message::DismissNotification),

        // Visibility shortcut from any control
        InputKey::CharCtrl('r') => Some(Message::TogglePasswordVisibility),

        _ if state.focus.is_text_field() => handle_key_text_field(state, key),
        _ => handle_key_control(state.focus, key),
    }
}

/// Editing keys for the focused email/password input
fn handle_key_text_field(state: &LoginState, key: InputKey) -> Option<Message> {
    let current = match state.focus {
        FormFocus::Email => &state.email.value,
        _ => &state.password.value,
    };

    let changed = |value: String| match state.focus {
        FormFocus::Email => Message::EmailChanged(value),
        _ => Message::PasswordChanged(value),
    };

    match key {
        // Implicit submission; a disabled submit control blocks it
        InputKey::Enter => state.can_submit().then_some(Message::Submit),

        InputKey::Char(c) => {
            let mut value = current.clone();
            value.push(c);
            Some(changed(value))
        }

        InputKey::Backspace => {
            if current.is_empty() {
                return None;
            }
            let mut value = current.clone();
            value.pop();
            Some(changed(value))
        }

        // Clear all input
        InputKey::CharCtrl('u') => {
            if current.is_empty() {
                None
            } else {
                Some(changed(String::new()))
            }
        }

        _ => None,
    }
}

/// Activation keys for the toggle, checkbox, link and button
fn handle_key_control(focus: FormFocus, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => match focus {
            FormFocus::VisibilityToggle => Some(Message::TogglePasswordVisibility),
            FormFocus::RememberMe => Some(Message::ToggleRememberMe),
            FormFocus::ForgotPassword => Some(Message::OpenForgotPassword),
            FormFocus::Submit => Some(Message::Submit),
            FormFocus::Email | FormFocus::Password => None,
        },
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
