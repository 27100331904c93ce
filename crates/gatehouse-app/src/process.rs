//! Message processing through the TEA update loop

use crate::actions::ActionContext;
use crate::auth::Authenticator;
use crate::handler;
use crate::message::Message;
use crate::state::LoginState;

/// Process a message and every follow-up, dispatching emitted actions
pub fn process_message<A>(state: &mut LoginState, message: Message, ctx: &mut ActionContext<A>)
where
    A: Authenticator + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            ctx.handle_action(action);
        }

        msg = result.message;
    }
}
