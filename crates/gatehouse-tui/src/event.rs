//! Terminal event polling

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use gatehouse_app::message::Message;
use gatehouse_app::state::{FormFocus, LoginState, ModalButton};
use gatehouse_app::InputKey;
use gatehouse_core::prelude::*;

use crate::layout::{HitTarget, LoginLayout};

/// Poll timeout; bounds how long timer messages wait for a redraw
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a left-button mouse event to messages using the drawn layout
///
/// Press focuses a control; release activates it. A release anywhere but on
/// the open toast also dismisses the toast, ahead of the control's own message.
pub fn mouse_event_to_messages(
    mouse: MouseEvent,
    layout: &LoginLayout,
    state: &LoginState,
) -> Vec<Message> {
    let target = layout.hit_test(
        mouse.column,
        mouse.row,
        state.modal.is_open(),
        state.is_notification_open(),
    );

    let mut messages = Vec::new();
    let released = mouse.kind == MouseEventKind::Up(MouseButton::Left);
    if released && state.is_notification_open() && target != Some(HitTarget::Toast) {
        messages.push(Message::DismissNotification);
    }
    messages.extend(target.and_then(|target| target_message(mouse.kind, target, state)));
    messages
}

fn target_message(kind: MouseEventKind, target: HitTarget, state: &LoginState) -> Option<Message> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => match target {
            HitTarget::VisibilityToggle => Some(Message::PasswordToggleMouseDown),
            HitTarget::Email => Some(Message::Focus(FormFocus::Email)),
            HitTarget::Password => Some(Message::Focus(FormFocus::Password)),
            HitTarget::RememberMe => Some(Message::Focus(FormFocus::RememberMe)),
            HitTarget::ForgotPassword => Some(Message::Focus(FormFocus::ForgotPassword)),
            HitTarget::Submit => Some(Message::Focus(FormFocus::Submit)),
            HitTarget::ModalClose => Some(Message::ModalFocus(ModalButton::Close)),
            HitTarget::ModalGenerateError => Some(Message::ModalFocus(ModalButton::GenerateError)),
            HitTarget::Toast | HitTarget::ModalDialog | HitTarget::Backdrop => None,
        },
        MouseEventKind::Up(MouseButton::Left) => match target {
            HitTarget::VisibilityToggle => Some(Message::TogglePasswordVisibility),
            HitTarget::RememberMe => Some(Message::ToggleRememberMe),
            HitTarget::ForgotPassword => Some(Message::OpenForgotPassword),
            HitTarget::Submit => state.can_submit().then_some(Message::Submit),
            HitTarget::Toast => Some(Message::DismissNotification),
            HitTarget::ModalClose | HitTarget::Backdrop => Some(Message::CloseForgotPassword),
            HitTarget::ModalGenerateError => Some(Message::SimulateServerError),
            HitTarget::Email | HitTarget::Password | HitTarget::ModalDialog => None,
        },
        _ => None,
    }
}

/// Poll for terminal events with timeout
///
/// Returns no messages on timeout and for events with no meaning here.
pub fn poll(state: &LoginState, layout: &LoginLayout) -> Result<Vec<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Vec::new());
    }

    let messages = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key).into_iter().collect()
        }
        Event::Mouse(mouse) => mouse_event_to_messages(mouse, layout, state),
        _ => Vec::new(),
    };
    Ok(messages)
}
