//! crmform-app - Form state and orchestration for crmform
//!
//! Implements the TEA (The Elm Architecture) pattern around one create/edit
//! modal: the form-state holder, the modal state machine with its discard
//! warning, settings and form definition loading, and submission dispatch.
//! Nothing here depends on a terminal library; `crmform-tui` renders it.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod create_form;
pub mod field_input;
pub mod form_state;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod submit;

// Re-export primary types
pub use create_form::{
    CreateFormProps, CreateFormState, ExtraElement, FormFocus, ModalEvent, ModalSize,
};
pub use form_state::FormState;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};
pub use submit::{ChannelSubmitHandler, LocalSubmitHandler, SubmitHandler, Submission};
