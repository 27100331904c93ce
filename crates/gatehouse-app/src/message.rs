//! Message types for the application (TEA pattern)

use crate::auth::AuthOutcome;
use crate::input_key::InputKey;
use crate::state::{FormFocus, ModalButton, TimerToken};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Email input changed to the full new value
    EmailChanged(String),
    /// Password input changed to the full new value
    PasswordChanged(String),
    /// Move keyboard focus to the next control
    FocusNext,
    /// Move keyboard focus to the previous control
    FocusPrevious,
    /// Focus a specific control (mouse press)
    Focus(FormFocus),
    /// Show/hide the password text
    TogglePasswordVisibility,
    /// Mouse press on the visibility icon; consumed without effect
    PasswordToggleMouseDown,
    /// Flip the "Remember Me" checkbox
    ToggleRememberMe,

    // ─────────────────────────────────────────────────────────
    // Forgot-Password Modal Messages
    // ─────────────────────────────────────────────────────────
    /// "Forget Your Password?" link activated
    OpenForgotPassword,
    /// CLOSE button or backdrop dismiss
    CloseForgotPassword,
    /// Move focus between the dialog buttons
    ModalFocus(ModalButton),
    /// "Generate Example Server Error" button
    SimulateServerError,

    // ─────────────────────────────────────────────────────────
    // Submission Messages
    // ─────────────────────────────────────────────────────────
    /// Form submitted (Log In button or implicit Enter)
    Submit,
    /// Authenticator finished
    AuthCompleted(AuthOutcome),

    // ─────────────────────────────────────────────────────────
    // Notification Messages
    // ─────────────────────────────────────────────────────────
    /// Auto-dismiss timer fired for the notification with this token
    NotificationExpired { token: TimerToken },
    /// User closed the notification
    DismissNotification,
}
