//! End-to-end login flows through the message loop
//!
//! Run with: cargo test --test login_flow

use std::time::Duration;

use gatehouse_app::actions::ActionContext;
use gatehouse_app::config::{parse_settings, Settings};
use gatehouse_app::process::process_message;
use gatehouse_app::state::{FormFocus, ModalButton, ModalState, SIMULATED_RESET_ERROR};
use gatehouse_app::{AuthOutcome, ConfiguredAuthenticator, InputKey, LoginState, Message};
use tokio::sync::mpsc;

// ─────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────

struct Harness {
    state: LoginState,
    ctx: ActionContext<ConfiguredAuthenticator>,
    rx: mpsc::Receiver<Message>,
}

impl Harness {
    fn new(settings: Settings) -> Self {
        let (tx, rx) = mpsc::channel(16);
        let authenticator = ConfiguredAuthenticator::from_settings(&settings.auth);
        Self {
            state: LoginState::with_settings(settings),
            ctx: ActionContext::new(tx, authenticator),
            rx,
        }
    }

    fn send(&mut self, message: Message) {
        process_message(&mut self.state, message, &mut self.ctx);
    }

    fn key(&mut self, key: InputKey) {
        self.send(Message::Key(key));
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(InputKey::Char(c));
        }
    }

    /// Wait for the next background message and process it
    async fn pump(&mut self) -> Message {
        let message = self.rx.recv().await.expect("channel open");
        self.send(message.clone());
        message
    }

    fn fill_credentials(&mut self, email: &str, password: &str) {
        self.send(Message::Focus(FormFocus::Email));
        self.type_text(email);
        self.send(Message::Focus(FormFocus::Password));
        self.type_text(password);
    }
}

// ─────────────────────────────────────────────────────────
// Flows
// ─────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_successful_login_shows_then_hides_notification() {
    let mut h = Harness::new(Settings::default());
    h.fill_credentials("user@example.com", "secret");
    assert!(h.state.can_submit());

    // Implicit submission from the password field
    h.key(InputKey::Enter);
    assert_eq!(
        h.pump().await,
        Message::AuthCompleted(AuthOutcome::Accepted)
    );
    assert!(h.state.is_notification_open());
    assert_eq!(h.state.email.value, "user@example.com");
    assert_eq!(h.state.password.value, "secret");

    tokio::time::sleep(Duration::from_millis(5900)).await;
    assert!(h.rx.try_recv().is_err());
    assert!(h.state.is_notification_open());

    assert!(matches!(
        h.pump().await,
        Message::NotificationExpired { .. }
    ));
    assert!(!h.state.is_notification_open());
}

#[tokio::test(start_paused = true)]
async fn test_invalid_input_blocks_submission() {
    let mut h = Harness::new(Settings::default());
    h.fill_credentials("not-an-email", "abc");

    assert!(!h.state.can_submit());
    assert!(!h.state.email_helper_text().is_empty());
    assert!(!h.state.password_helper_text().is_empty());

    h.key(InputKey::Enter);
    h.send(Message::Submit);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(h.rx.try_recv().is_err());
    assert!(!h.state.is_notification_open());
}

#[tokio::test(start_paused = true)]
async fn test_forgot_password_error_then_clean_resubmit() {
    let mut h = Harness::new(Settings::default());
    h.fill_credentials("user@example.com", "secret");

    h.send(Message::OpenForgotPassword);
    assert!(h.state.modal.is_open());

    // Keys go to the dialog, not the password field
    h.type_text("zz");
    assert_eq!(h.state.password.value, "secret");

    h.key(InputKey::Tab);
    assert_eq!(
        h.state.modal,
        ModalState::Open {
            focus: ModalButton::GenerateError
        }
    );
    h.key(InputKey::Enter);
    assert!(!h.state.modal.is_open());
    assert_eq!(h.state.server_error, SIMULATED_RESET_ERROR);

    h.send(Message::Submit);
    assert!(!h.state.has_server_error());
    h.pump().await;
    assert!(h.state.is_notification_open());
}

#[tokio::test(start_paused = true)]
async fn test_rejecting_backend_from_config() {
    let settings = parse_settings(
        r#"
[auth]
reject_reason = "Invalid email or password"
"#,
    )
    .expect("valid config");
    let mut h = Harness::new(settings);
    h.fill_credentials("user@example.com", "secret");

    h.send(Message::Submit);
    h.pump().await;

    assert_eq!(h.state.server_error, "Invalid email or password");
    assert!(!h.state.is_notification_open());
    assert!(h.state.can_submit());
}

#[tokio::test(start_paused = true)]
async fn test_configured_notification_duration() {
    let settings = parse_settings(
        r#"
[ui]
notification_ms = 1500
"#,
    )
    .expect("valid config");
    let mut h = Harness::new(settings);
    h.fill_credentials("user@example.com", "secret");

    h.send(Message::Submit);
    h.pump().await;
    assert!(h.state.is_notification_open());

    tokio::time::sleep(Duration::from_millis(1600)).await;
    h.pump().await;
    assert!(!h.state.is_notification_open());
}

#[tokio::test(start_paused = true)]
async fn test_escape_dismisses_notification_but_never_quits() {
    let mut h = Harness::new(Settings::default());
    h.fill_credentials("user@example.com", "secret");
    h.send(Message::Submit);
    h.pump().await;

    h.key(InputKey::Esc);
    assert!(!h.state.is_notification_open());
    assert!(!h.state.should_quit());

    // Cancelled timer never reports back
    tokio::time::sleep(Duration::from_millis(7000)).await;
    assert!(h.rx.try_recv().is_err());

    h.key(InputKey::Esc);
    assert!(!h.state.should_quit());
    assert_eq!(h.state.password.value, "secret");

    // Leave the text field, then quit from a control
    h.key(InputKey::Tab);
    assert_eq!(h.state.focus, FormFocus::VisibilityToggle);
    h.key(InputKey::Char('q'));
    assert!(h.state.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_second_success_restarts_timer() {
    let mut h = Harness::new(Settings::default());
    h.fill_credentials("user@example.com", "secret");

    h.send(Message::Submit);
    h.pump().await;
    tokio::time::sleep(Duration::from_millis(4000)).await;

    h.send(Message::Submit);
    h.pump().await;
    assert!(h.state.is_notification_open());

    // First timer would have fired at 6 s; the replacement runs to 10 s
    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert!(h.rx.try_recv().is_err());
    assert!(h.state.is_notification_open());

    h.pump().await;
    assert!(!h.state.is_notification_open());
}
