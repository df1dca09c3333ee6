//! Main update function - handles state transitions (TEA pattern)

use crmform_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Modal Visibility
        // ─────────────────────────────────────────────────────────
        Message::OpenForm => {
            state.open_form();
            state.status = None;
            UpdateResult::none()
        }

        Message::RequestClose => {
            if state.modal_open {
                if let Some(event) = state.form.request_close() {
                    state.apply_modal_event(event);
                }
            }
            UpdateResult::none()
        }

        Message::ConfirmDiscard => {
            if state.form.is_warning_visible() {
                let event = state.form.confirm_discard();
                state.apply_modal_event(event);
                state.status = Some("Changes discarded".to_string());
            }
            UpdateResult::none()
        }

        Message::CancelDiscard => {
            if state.form.is_warning_visible() {
                let event = state.form.cancel_discard();
                state.apply_modal_event(event);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Editing
        // ─────────────────────────────────────────────────────────
        Message::FieldChanged { name, value } => {
            if let Err(e) = state.form.handle_change(&name, value) {
                warn!("Ignoring field change: {}", e);
            }
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.form.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.form.focus_prev();
            UpdateResult::none()
        }

        Message::InitialValuesLoaded { values } => {
            state.form.sync_initial_values(Some(values));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission
        // ─────────────────────────────────────────────────────────
        Message::SubmitForm => {
            if !state.modal_open || state.form.is_warning_visible() {
                return UpdateResult::none();
            }
            match state.form.begin_submit() {
                Ok(values) => {
                    info!("Submitting {} value(s)", values.len());
                    UpdateResult::action(UpdateAction::SubmitForm { values })
                }
                Err(e) => {
                    debug!("Submit ignored: {}", e);
                    UpdateResult::none()
                }
            }
        }

        Message::SubmitCompleted { result } => {
            match &result {
                Ok(()) => {
                    state.submissions += 1;
                    state.status = Some(format!("Saved ({} this session)", state.submissions));
                    info!("Submission #{} saved", state.submissions);
                }
                Err(message) => warn!("Submission failed: {}", message),
            }

            let succeeded = result.is_ok();
            state.form.finish_submit(result);
            if succeeded && state.settings.behavior.close_on_submit {
                state.modal_open = false;
            }
            UpdateResult::none()
        }
    }
}
