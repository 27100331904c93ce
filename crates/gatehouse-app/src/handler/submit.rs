//! Submission and notification handlers

use crate::auth::AuthOutcome;
use crate::state::{LoginState, SubmitPhase, TimerToken};
use gatehouse_core::prelude::*;

use super::{UpdateAction, UpdateResult};

/// Start a login attempt
///
/// Ignored while the submit control is disabled or an attempt is in flight.
pub fn handle_submit(state: &mut LoginState) -> UpdateResult {
    if !state.can_submit() {
        debug!("Submit ignored: control disabled");
        return UpdateResult::none();
    }

    state.server_error.clear();
    state.submission = SubmitPhase::Pending;
    UpdateResult::action(UpdateAction::Authenticate(state.credentials()))
}

pub fn handle_auth_completed(state: &mut LoginState, outcome: AuthOutcome) -> UpdateResult {
    state.submission = SubmitPhase::Idle;

    match outcome {
        AuthOutcome::Accepted => {
            info!("Login accepted");
            let token = state.open_notification();
            UpdateResult::action(UpdateAction::ArmNotificationTimer {
                token,
                after: state.notification_duration(),
            })
        }
        AuthOutcome::Rejected { reason } => {
            info!("Login rejected: {}", reason);
            state.server_error = reason;
            UpdateResult::none()
        }
    }
}

/// Close the notification if the expiry belongs to it
pub fn handle_notification_expired(state: &mut LoginState, token: TimerToken) -> UpdateResult {
    match state.notification {
        Some(current) if current.token == token => {
            state.notification = None;
        }
        _ => {
            trace!("Ignoring stale notification expiry {:?}", token);
        }
    }
    UpdateResult::none()
}

/// Manual close; disarms the pending auto-dismiss
pub fn handle_dismiss_notification(state: &mut LoginState) -> UpdateResult {
    match state.notification.take() {
        Some(notification) => UpdateResult::action(UpdateAction::CancelNotificationTimer {
            token: notification.token,
        }),
        None => UpdateResult::none(),
    }
}
