//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use crmform_app::message::Message;
use crmform_app::process::process_message;
use crmform_app::signals;
use crmform_app::{AppState, SubmitHandler};
use crmform_core::prelude::*;
use crmform_core::FormValues;

use super::{event, render, terminal};

/// Run the form UI until the user quits.
///
/// The modal opens straight away. `initial_values`, when given, are merged
/// into the form the same way a caller handing over a loaded record would.
pub async fn run<H>(
    state: &mut AppState,
    submit_handler: Arc<H>,
    initial_values: Option<FormValues>,
) -> Result<()>
where
    H: SubmitHandler + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    process_message(state, Message::OpenForm, &msg_tx, &submit_handler);
    if let Some(values) = initial_values {
        let values = Arc::new(values);
        process_message(
            state,
            Message::InitialValuesLoaded { values },
            &msg_tx,
            &submit_handler,
        );
    }

    let result = run_loop(&mut term, state, msg_rx, msg_tx, &submit_handler);

    ratatui::restore();
    info!("Form UI closed after {} submission(s)", state.submissions);
    result
}

/// Main event loop
fn run_loop<H>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    submit_handler: &Arc<H>,
) -> Result<()>
where
    H: SubmitHandler + Sync + 'static,
{
    while !state.should_quit() {
        // Submit results and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, submit_handler);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, submit_handler);
        }
    }
    Ok(())
}
