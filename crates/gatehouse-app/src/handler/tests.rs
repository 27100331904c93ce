//! Tests for handler module

use std::time::Duration;

use super::*;
use crate::auth::AuthOutcome;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{
    AppPhase, FormFocus, LoginState, ModalButton, ModalState, SubmitPhase, NOTIFICATION_TEXT,
    SIMULATED_RESET_ERROR,
};

/// Run a message and its follow-ups, collecting emitted actions
fn drive(state: &mut LoginState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn type_text(state: &mut LoginState, text: &str) {
    for c in text.chars() {
        drive(state, Message::Key(InputKey::Char(c)));
    }
}

fn filled(email: &str, password: &str) -> LoginState {
    let mut state = LoginState::new();
    update(&mut state, Message::EmailChanged(email.to_string()));
    update(&mut state, Message::PasswordChanged(password.to_string()));
    state
}

/// Submit a valid form and complete it with `outcome`
fn submit_with(state: &mut LoginState, outcome: AuthOutcome) -> Vec<UpdateAction> {
    let mut actions = drive(state, Message::Submit);
    actions.extend(drive(state, Message::AuthCompleted(outcome)));
    actions
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = LoginState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_with_modal_open() {
    let mut state = LoginState::new();
    update(&mut state, Message::OpenForgotPassword);

    drive(&mut state, Message::Key(InputKey::CharCtrl('c')));

    assert!(state.should_quit());
}

#[test]
fn test_escape_in_text_field_keeps_running() {
    let mut state = LoginState::new();
    type_text(&mut state, "user@exa");

    assert_eq!(handle_key(&state, InputKey::Esc), None);
    drive(&mut state, Message::Key(InputKey::Esc));

    assert!(!state.should_quit());
    assert_eq!(state.email.value, "user@exa");
}

#[test]
fn test_escape_on_control_does_not_quit() {
    let mut state = LoginState::new();
    state.focus = FormFocus::RememberMe;
    assert_eq!(handle_key(&state, InputKey::Esc), None);
}

#[test]
fn test_q_quits_from_control() {
    let mut state = LoginState::new();
    state.focus = FormFocus::ForgotPassword;
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
}

#[test]
fn test_q_types_into_text_field() {
    let mut state = LoginState::new();
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::EmailChanged("q".to_string()))
    );

    state.focus = FormFocus::Password;
    drive(&mut state, Message::Key(InputKey::Char('q')));
    assert_eq!(state.password.value, "q");
    assert!(!state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────

#[test]
fn test_invalid_email_shows_helper_and_disables_submit() {
    let mut state = LoginState::new();
    type_text(&mut state, "bad-email");

    assert_eq!(state.email.value, "bad-email");
    assert_eq!(state.email_helper_text(), "Email entered is not valid");
    assert!(!state.is_submit_enabled());
}

#[test]
fn test_valid_input_enables_submit() {
    let state = filled("user@example.com", "secret");

    assert!(state.email_helper_text().is_empty());
    assert!(state.password_helper_text().is_empty());
    assert!(state.is_submit_enabled());
}

#[test]
fn test_short_password_shows_helper() {
    let state = filled("user@example.com", "abc");

    assert_eq!(
        state.password_helper_text(),
        "Password must be at least 4 characters long"
    );
    assert!(!state.is_submit_enabled());
}

#[test]
fn test_clearing_email_shows_helper() {
    let mut state = filled("user@example.com", "secret");
    state.focus = FormFocus::Email;

    drive(&mut state, Message::Key(InputKey::CharCtrl('u')));

    assert!(state.email.is_empty());
    assert_eq!(state.email_helper_text(), "Email entered is not valid");
    assert!(!state.is_submit_enabled());
}

#[test]
fn test_typing_into_password_field() {
    let mut state = LoginState::new();
    drive(&mut state, Message::FocusNext);
    assert_eq!(state.focus, FormFocus::Password);

    type_text(&mut state, "abcd");
    drive(&mut state, Message::Key(InputKey::Backspace));

    assert_eq!(state.password.value, "abc");
    assert!(state.email.is_empty());
}

#[test]
fn test_backspace_on_empty_field_is_noop() {
    let state = LoginState::new();
    assert_eq!(handle_key(&state, InputKey::Backspace), None);
    assert_eq!(handle_key(&state, InputKey::CharCtrl('u')), None);
}

// ─────────────────────────────────────────────────────────
// Password visibility & Remember Me
// ─────────────────────────────────────────────────────────

#[test]
fn test_visibility_toggle_twice_restores_masking() {
    let mut state = filled("user@example.com", "secret");

    update(&mut state, Message::TogglePasswordVisibility);
    assert!(state.password_visible);
    assert_eq!(state.password.value, "secret");

    update(&mut state, Message::TogglePasswordVisibility);
    assert!(!state.password_visible);
    assert_eq!(state.password.value, "secret");
}

#[test]
fn test_toggle_mouse_down_keeps_focus() {
    let mut state = LoginState::new();
    state.focus = FormFocus::Password;

    let result = update(&mut state, Message::PasswordToggleMouseDown);

    assert_eq!(result, UpdateResult::none());
    assert_eq!(state.focus, FormFocus::Password);
    assert!(!state.password_visible);
}

#[test]
fn test_ctrl_r_toggles_visibility() {
    let mut state = LoginState::new();
    drive(&mut state, Message::Key(InputKey::CharCtrl('r')));
    assert!(state.password_visible);
}

#[test]
fn test_space_on_remember_me_toggles_it() {
    let mut state = LoginState::new();
    update(&mut state, Message::Focus(FormFocus::RememberMe));

    drive(&mut state, Message::Key(InputKey::Char(' ')));
    assert!(state.remember_me);

    drive(&mut state, Message::Key(InputKey::Enter));
    assert!(!state.remember_me);
}

#[test]
fn test_remember_me_does_not_affect_submit() {
    let mut state = filled("user@example.com", "secret");
    update(&mut state, Message::ToggleRememberMe);
    assert!(state.is_submit_enabled());
}

// ─────────────────────────────────────────────────────────
// Focus
// ─────────────────────────────────────────────────────────

#[test]
fn test_tab_skips_disabled_submit() {
    let mut state = LoginState::new();
    update(&mut state, Message::Focus(FormFocus::ForgotPassword));

    drive(&mut state, Message::Key(InputKey::Tab));

    assert_eq!(state.focus, FormFocus::Email);
}

#[test]
fn test_focus_on_disabled_submit_is_ignored() {
    let mut state = LoginState::new();
    update(&mut state, Message::Focus(FormFocus::Submit));
    assert_eq!(state.focus, FormFocus::Email);
}

#[test]
fn test_backtab_walks_focus_backwards() {
    let mut state = filled("user@example.com", "secret");

    drive(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.focus, FormFocus::Submit);

    drive(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.focus, FormFocus::ForgotPassword);
}

#[test]
fn test_invalidating_input_moves_focus_off_submit() {
    let mut state = filled("user@example.com", "secret");
    update(&mut state, Message::Focus(FormFocus::Submit));
    assert_eq!(state.focus, FormFocus::Submit);

    update(&mut state, Message::PasswordChanged("abc".to_string()));

    assert_eq!(state.focus, FormFocus::Password);
}

// ─────────────────────────────────────────────────────────
// Forgot-password modal
// ─────────────────────────────────────────────────────────

#[test]
fn test_open_forgot_password_from_link() {
    let mut state = LoginState::new();
    update(&mut state, Message::Focus(FormFocus::ForgotPassword));

    drive(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(
        state.modal,
        ModalState::Open {
            focus: ModalButton::Close
        }
    );
}

#[test]
fn test_close_modal_keeps_server_error() {
    let mut state = LoginState::new();
    state.server_error = "earlier".to_string();

    update(&mut state, Message::OpenForgotPassword);
    update(&mut state, Message::CloseForgotPassword);

    assert_eq!(state.modal, ModalState::Closed);
    assert_eq!(state.server_error, "earlier");
}

#[test]
fn test_escape_closes_modal() {
    let mut state = LoginState::new();
    update(&mut state, Message::OpenForgotPassword);

    drive(&mut state, Message::Key(InputKey::Esc));

    assert_eq!(state.modal, ModalState::Closed);
    assert!(!state.should_quit());
}

#[test]
fn test_generate_error_closes_modal_and_sets_error() {
    let mut state = LoginState::new();
    update(&mut state, Message::OpenForgotPassword);

    drive(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(
        state.modal,
        ModalState::Open {
            focus: ModalButton::GenerateError
        }
    );

    drive(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(state.modal, ModalState::Closed);
    assert_eq!(state.server_error, SIMULATED_RESET_ERROR);
    assert!(state.has_server_error());
}

#[test]
fn test_simulate_error_ignored_when_modal_closed() {
    let mut state = LoginState::new();
    update(&mut state, Message::SimulateServerError);
    assert!(!state.has_server_error());
}

#[test]
fn test_modal_swallows_form_keys() {
    let mut state = LoginState::new();
    update(&mut state, Message::OpenForgotPassword);

    drive(&mut state, Message::Key(InputKey::Char('x')));

    assert!(state.email.is_empty());
    assert_eq!(state.focus, FormFocus::Email);
}

// ─────────────────────────────────────────────────────────
// Submission
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_ignored_when_disabled() {
    let mut state = filled("bad-email", "secret");

    let actions = drive(&mut state, Message::Submit);

    assert!(actions.is_empty());
    assert_eq!(state.submission, SubmitPhase::Idle);
}

#[test]
fn test_submit_emits_authenticate_action() {
    let mut state = filled("user@example.com", "secret");
    state.remember_me = true;

    let actions = drive(&mut state, Message::Submit);

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        UpdateAction::Authenticate(creds) => {
            assert_eq!(creds.email, "user@example.com");
            assert_eq!(creds.password, "secret");
            assert!(creds.remember_me);
        }
        other => panic!("unexpected action: {other:?}"),
    }
    assert_eq!(state.submission, SubmitPhase::Pending);
}

#[test]
fn test_enter_in_field_submits_when_enabled() {
    let mut state = filled("user@example.com", "secret");
    state.focus = FormFocus::Password;
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::Submit));

    let state = filled("user@example.com", "abc");
    assert_eq!(handle_key(&state, InputKey::Enter), None);
}

#[test]
fn test_pending_submission_blocks_second_submit() {
    let mut state = filled("user@example.com", "secret");
    drive(&mut state, Message::Submit);

    let actions = drive(&mut state, Message::Submit);

    assert!(actions.is_empty());
}

#[test]
fn test_accepted_submission_opens_notification() {
    let mut state = filled("user@example.com", "secret");

    let actions = submit_with(&mut state, AuthOutcome::Accepted);

    let token = state.notification.map(|n| n.token);
    assert!(token.is_some());
    assert_eq!(state.notification.map(|n| n.text()), Some(NOTIFICATION_TEXT));
    assert_eq!(
        actions.last(),
        Some(&UpdateAction::ArmNotificationTimer {
            token: token.unwrap(),
            after: Duration::from_millis(6000),
        })
    );
    assert_eq!(state.submission, SubmitPhase::Idle);
}

#[test]
fn test_notification_duration_follows_settings() {
    let mut settings = Settings::default();
    settings.ui.notification_ms = 2000;
    let mut state = LoginState::with_settings(settings);
    update(&mut state, Message::EmailChanged("user@example.com".into()));
    update(&mut state, Message::PasswordChanged("secret".into()));

    let actions = submit_with(&mut state, AuthOutcome::Accepted);

    assert!(matches!(
        actions.last(),
        Some(UpdateAction::ArmNotificationTimer { after, .. })
            if *after == Duration::from_millis(2000)
    ));
}

#[test]
fn test_rejected_submission_sets_server_error() {
    let mut state = filled("user@example.com", "secret");

    submit_with(&mut state, AuthOutcome::rejected("Invalid credentials"));

    assert_eq!(state.server_error, "Invalid credentials");
    assert!(state.notification.is_none());
    assert_eq!(state.submission, SubmitPhase::Idle);
}

#[test]
fn test_new_submission_clears_server_error() {
    let mut state = filled("user@example.com", "secret");
    state.server_error = SIMULATED_RESET_ERROR.to_string();

    drive(&mut state, Message::Submit);

    assert!(!state.has_server_error());
}

#[test]
fn test_submission_keeps_field_values() {
    let mut state = filled("user@example.com", "secret");

    submit_with(&mut state, AuthOutcome::Accepted);

    assert_eq!(state.email.value, "user@example.com");
    assert_eq!(state.password.value, "secret");
}

// ─────────────────────────────────────────────────────────
// Notification
// ─────────────────────────────────────────────────────────

#[test]
fn test_notification_expiry_closes_toast() {
    let mut state = filled("user@example.com", "secret");
    submit_with(&mut state, AuthOutcome::Accepted);
    let token = state.notification.map(|n| n.token).unwrap();

    update(&mut state, Message::NotificationExpired { token });

    assert!(state.notification.is_none());
}

#[test]
fn test_stale_expiry_is_ignored() {
    let mut state = filled("user@example.com", "secret");
    submit_with(&mut state, AuthOutcome::Accepted);
    let first = state.notification.map(|n| n.token).unwrap();
    submit_with(&mut state, AuthOutcome::Accepted);
    let second = state.notification.map(|n| n.token).unwrap();
    assert_ne!(first, second);

    update(&mut state, Message::NotificationExpired { token: first });

    assert_eq!(state.notification.map(|n| n.token), Some(second));
}

#[test]
fn test_dismiss_cancels_timer() {
    let mut state = filled("user@example.com", "secret");
    submit_with(&mut state, AuthOutcome::Accepted);
    let token = state.notification.map(|n| n.token).unwrap();

    let actions = drive(&mut state, Message::Key(InputKey::Esc));

    assert!(state.notification.is_none());
    assert!(!state.should_quit());
    assert_eq!(actions, vec![UpdateAction::CancelNotificationTimer { token }]);
}

#[test]
fn test_dismiss_without_notification_is_noop() {
    let mut state = LoginState::new();
    let result = update(&mut state, Message::DismissNotification);
    assert_eq!(result, UpdateResult::none());
}

#[test]
fn test_expiry_after_dismiss_is_ignored() {
    let mut state = filled("user@example.com", "secret");
    submit_with(&mut state, AuthOutcome::Accepted);
    let token = state.notification.map(|n| n.token).unwrap();
    update(&mut state, Message::DismissNotification);

    update(&mut state, Message::NotificationExpired { token });

    assert!(state.notification.is_none());
    assert_eq!(state.focus, FormFocus::Email);
}
