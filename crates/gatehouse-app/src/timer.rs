//! Cancellable notification auto-dismiss timer

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use crate::state::TimerToken;
use gatehouse_core::prelude::*;

/// Owns at most one armed timer task. Dropping it aborts the task.
#[derive(Debug, Default)]
pub struct NotificationTimer {
    armed: Option<(TimerToken, JoinHandle<()>)>,
}

impl NotificationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer that sends `NotificationExpired { token }` after `after`.
    ///
    /// Any previously armed timer is aborted first. Must be called from
    /// within a tokio runtime.
    pub fn arm(&mut self, token: TimerToken, after: Duration, tx: mpsc::Sender<Message>) {
        if let Some(previous) = self.armed_token() {
            debug!("Replacing notification timer {:?}", previous);
        }
        self.abort_armed();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if tx.send(Message::NotificationExpired { token }).await.is_err() {
                debug!("Notification timer fired after receiver closed");
            }
        });
        debug!("Armed notification timer {:?} for {:?}", token, after);
        self.armed = Some((token, handle));
    }

    /// Abort the timer armed for `token`. Returns false if a different or
    /// no timer is armed.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        match &self.armed {
            Some((armed, _)) if *armed == token => {
                self.abort_armed();
                debug!("Cancelled notification timer {:?}", token);
                true
            }
            _ => false,
        }
    }

    /// Token of the currently armed timer, if it has not finished
    pub fn armed_token(&self) -> Option<TimerToken> {
        self.armed
            .as_ref()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(token, _)| *token)
    }

    fn abort_armed(&mut self) {
        if let Some((_, handle)) = self.armed.take() {
            handle.abort();
        }
    }
}

impl Drop for NotificationTimer {
    fn drop(&mut self) {
        self.abort_armed();
    }
}
