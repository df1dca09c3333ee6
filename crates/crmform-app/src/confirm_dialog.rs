//! Confirm dialog state.
//!
//! Data model for the discard-changes warning. The rendering widget lives in
//! crmform-tui's `widgets/confirm_dialog.rs`.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Warning shown when the modal is closed with unsaved input
    pub fn discard_changes(field_count: usize) -> Self {
        let message = if field_count == 1 {
            "You have entered 1 field.".to_string()
        } else {
            format!("You have entered {} fields.", field_count)
        };
        Self::new(
            "Discard changes?",
            message,
            vec![
                ("Discard", Message::ConfirmDiscard),
                ("Keep editing", Message::CancelDiscard),
            ],
        )
    }
}
