//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::auth::{Authenticator, Credentials};
use crate::message::Message;
use crate::timer::NotificationTimer;
use crate::UpdateAction;
use gatehouse_core::prelude::*;

/// Everything the effect layer needs to carry out an [`UpdateAction`]
pub struct ActionContext<A> {
    msg_tx: mpsc::Sender<Message>,
    timer: NotificationTimer,
    authenticator: Arc<A>,
}

impl<A> ActionContext<A>
where
    A: Authenticator + Send + Sync + 'static,
{
    pub fn new(msg_tx: mpsc::Sender<Message>, authenticator: A) -> Self {
        Self {
            msg_tx,
            timer: NotificationTimer::new(),
            authenticator: Arc::new(authenticator),
        }
    }

    /// Execute an action by spawning a background task
    pub fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::Authenticate(credentials) => {
                self.spawn_authenticate(credentials);
            }

            UpdateAction::ArmNotificationTimer { token, after } => {
                self.timer.arm(token, after, self.msg_tx.clone());
            }

            UpdateAction::CancelNotificationTimer { token } => {
                if !self.timer.cancel(token) {
                    trace!("No armed timer for {:?}", token);
                }
            }
        }
    }

    fn spawn_authenticate(&self, credentials: Credentials) {
        let authenticator = Arc::clone(&self.authenticator);
        let msg_tx = self.msg_tx.clone();

        tokio::spawn(async move {
            let outcome = Authenticator::authenticate(&*authenticator, credentials).await;
            if msg_tx.send(Message::AuthCompleted(outcome)).await.is_err() {
                warn!("Login outcome dropped: message channel closed");
            }
        });
    }
}
