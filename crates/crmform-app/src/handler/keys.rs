//! Key event handlers for each UI mode

use crate::create_form::FormFocus;
use crate::field_input::edit_value;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Page => handle_key_page(key),
        UiMode::Form => handle_key_form(state, key),
        UiMode::ConfirmDiscard => handle_key_confirm_discard(key),
    }
}

/// Handle key events on the host page
fn handle_key_page(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('n') | InputKey::Enter => Some(Message::OpenForm),
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the discard warning
fn handle_key_confirm_discard(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmDiscard),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDiscard),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while editing the form
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('s') => Some(Message::SubmitForm),
        InputKey::Esc => Some(Message::RequestClose),
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),
        InputKey::Enter => match state.form.focus() {
            FormFocus::SubmitButton => Some(Message::SubmitForm),
            FormFocus::Field(_) => Some(Message::FocusNext),
        },
        key => {
            let field = state.form.focused_field()?;
            let value = edit_value(field, state.form.form().value(&field.name), &key)?;
            Some(Message::FieldChanged {
                name: field.name.clone(),
                value,
            })
        }
    }
}
