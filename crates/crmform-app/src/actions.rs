//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use crmform_core::prelude::*;
use crmform_core::FormValues;

use crate::message::Message;
use crate::submit::SubmitHandler;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<H>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, handler: Arc<H>)
where
    H: SubmitHandler + Sync + 'static,
{
    match action {
        UpdateAction::SubmitForm { values } => spawn_submit(handler, values, msg_tx),
    }
}

/// Run the submit handler off the event loop and report back when it settles
fn spawn_submit<H>(handler: Arc<H>, values: FormValues, msg_tx: mpsc::Sender<Message>)
where
    H: SubmitHandler + Sync + 'static,
{
    tokio::spawn(async move {
        let result = handler.submit(values).await.map_err(|e| {
            error!("Submit handler failed: {}", e);
            e.to_string()
        });

        if msg_tx
            .send(Message::SubmitCompleted { result })
            .await
            .is_err()
        {
            warn!("Event loop gone before submission settled");
        }
    });
}
