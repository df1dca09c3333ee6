//! Message processing
//!
//! Runs a message through the TEA update function, following up on any
//! chained messages and dispatching actions to background tasks.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::submit::SubmitHandler;

/// Process a message through the TEA update function
pub fn process_message<H>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    submit_handler: &Arc<H>,
) where
    H: SubmitHandler + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), submit_handler.clone());
        }

        msg = result.message;
    }
}
