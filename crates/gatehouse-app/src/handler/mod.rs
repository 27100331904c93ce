//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers (form vs. modal)
//! - `form`: Field editing, focus, visibility and checkbox handlers
//! - `modal`: Forgot-password dialog handlers
//! - `submit`: Submission, authentication outcome and notification handlers

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod modal;
pub(crate) mod submit;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::auth::Credentials;
use crate::message::Message;
use crate::state::TimerToken;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Hand the submitted input to the authenticator
    Authenticate(Credentials),

    /// Schedule `NotificationExpired { token }` after `after`.
    /// Replaces any timer that is still armed.
    ArmNotificationTimer { token: TimerToken, after: Duration },

    /// Abort the timer armed for `token`
    CancelNotificationTimer { token: TimerToken },
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
