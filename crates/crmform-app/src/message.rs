//! Message types for the application (TEA pattern)

use std::sync::Arc;

use crmform_core::{FieldValue, FormValues};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit without confirmation (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Modal Visibility
    // ─────────────────────────────────────────────────────────
    /// Caller opens the create/edit modal
    OpenForm,
    /// User asked to close the modal (Esc)
    RequestClose,
    /// Discard warning confirmed: clear input and close
    ConfirmDiscard,
    /// Discard warning cancelled: keep editing
    CancelDiscard,

    // ─────────────────────────────────────────────────────────
    // Form Editing
    // ─────────────────────────────────────────────────────────
    FieldChanged { name: String, value: FieldValue },
    FocusNext,
    FocusPrev,
    /// New initial values from the caller, merged if their identity changed
    InitialValuesLoaded { values: Arc<FormValues> },

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    SubmitForm,
    /// The submit handler settled; `Err` carries the display message
    SubmitCompleted { result: Result<(), String> },
}
