//! Login view state (Model in TEA pattern)
//!
//! All interaction state of the login screen lives in one [`LoginState`]
//! record. Helper texts and the submit-enabled flag are derived on demand and
//! never stored, so they cannot drift from the field values.

use std::time::Duration;

use crate::auth::Credentials;
use crate::config::Settings;
use gatehouse_core::{validate_email, validate_password, ValidationError};

/// Text of the success toast shown after an accepted submission
pub const NOTIFICATION_TEXT: &str = "Printed user inputs to the console";

/// Server error set by the forgot-password demo action
pub const SIMULATED_RESET_ERROR: &str = "Failed to reset password";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// A text input and whether the user has edited it yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
}

impl FieldState {
    /// Replace the value; marks the field touched
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = true;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Keyboard-focusable controls of the form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Email,
    Password,
    VisibilityToggle,
    RememberMe,
    ForgotPassword,
    Submit,
}

impl FormFocus {
    pub const ORDER: [FormFocus; 6] = [
        FormFocus::Email,
        FormFocus::Password,
        FormFocus::VisibilityToggle,
        FormFocus::RememberMe,
        FormFocus::ForgotPassword,
        FormFocus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// Whether this control is a text input
    pub fn is_text_field(self) -> bool {
        matches!(self, FormFocus::Email | FormFocus::Password)
    }
}

/// Buttons inside the forgot-password dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalButton {
    #[default]
    Close,
    GenerateError,
}

impl ModalButton {
    pub fn toggle(self) -> Self {
        match self {
            ModalButton::Close => ModalButton::GenerateError,
            ModalButton::GenerateError => ModalButton::Close,
        }
    }
}

/// Forgot-password dialog visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        focus: ModalButton,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }
}

/// Identifies the notification instance a timer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

/// An open success toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub token: TimerToken,
}

impl Notification {
    pub fn text(&self) -> &'static str {
        NOTIFICATION_TEXT
    }
}

/// Whether a submission is waiting on the authenticator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
}

/// Complete login view state
#[derive(Debug, Clone)]
pub struct LoginState {
    pub email: FieldState,
    pub password: FieldState,
    pub password_visible: bool,
    pub remember_me: bool,
    pub modal: ModalState,
    pub notification: Option<Notification>,
    /// Last server error text; empty means none
    pub server_error: String,
    pub focus: FormFocus,
    pub submission: SubmitPhase,
    pub phase: AppPhase,
    pub settings: Settings,
    next_token: u64,
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            email: FieldState::default(),
            password: FieldState::default(),
            password_visible: false,
            remember_me: false,
            modal: ModalState::Closed,
            notification: None,
            server_error: String::new(),
            focus: FormFocus::Email,
            submission: SubmitPhase::Idle,
            phase: AppPhase::Running,
            settings,
            next_token: 0,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────

    /// Active email validation error, only once the field has been edited
    pub fn email_error(&self) -> Option<ValidationError> {
        if !self.email.touched {
            return None;
        }
        validate_email(&self.email.value).err()
    }

    /// Active password validation error, only once the field has been edited
    pub fn password_error(&self) -> Option<ValidationError> {
        if !self.password.touched {
            return None;
        }
        validate_password(&self.password.value).err()
    }

    /// Helper text under the email field; empty when there is none
    pub fn email_helper_text(&self) -> String {
        self.email_error()
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    /// Helper text under the password field; empty when there is none
    pub fn password_helper_text(&self) -> String {
        self.password_error()
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    /// Both fields non-empty and neither carries a validation error
    pub fn is_submit_enabled(&self) -> bool {
        !self.email.is_empty()
            && self.email_error().is_none()
            && !self.password.is_empty()
            && self.password_error().is_none()
    }

    /// Submit enabled and no attempt already in flight
    pub fn can_submit(&self) -> bool {
        self.is_submit_enabled() && self.submission == SubmitPhase::Idle
    }

    pub fn has_server_error(&self) -> bool {
        !self.server_error.is_empty()
    }

    pub fn is_notification_open(&self) -> bool {
        self.notification.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn notification_duration(&self) -> Duration {
        self.settings.ui.notification_duration()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.value.clone(),
            password: self.password.value.clone(),
            remember_me: self.remember_me,
        }
    }

    /// Whether a control can currently take focus
    pub fn is_focusable(&self, focus: FormFocus) -> bool {
        match focus {
            FormFocus::Submit => self.can_submit(),
            _ => true,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Mutations used by the handlers
    // ─────────────────────────────────────────────────────────

    /// Next control in focus order, skipping unfocusable ones
    pub fn next_focus(&self) -> FormFocus {
        self.step_focus(1)
    }

    /// Previous control in focus order, skipping unfocusable ones
    pub fn previous_focus(&self) -> FormFocus {
        self.step_focus(FormFocus::ORDER.len() - 1)
    }

    fn step_focus(&self, step: usize) -> FormFocus {
        let len = FormFocus::ORDER.len();
        let mut idx = self.focus.index();
        for _ in 0..len {
            idx = (idx + step) % len;
            let candidate = FormFocus::ORDER[idx];
            if self.is_focusable(candidate) {
                return candidate;
            }
        }
        self.focus
    }

    /// Open a fresh notification and return its token
    pub fn open_notification(&mut self) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.notification = Some(Notification { token });
        token
    }

    /// Move focus off Submit once it becomes disabled
    pub fn settle_focus(&mut self) {
        if !self.is_focusable(self.focus) {
            self.focus = FormFocus::Password;
        }
    }
}
