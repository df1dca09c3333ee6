//! Widgets for the form UI

pub mod confirm_dialog;
pub mod create_form_modal;
pub mod form_field;
pub mod modal_overlay;

pub use confirm_dialog::ConfirmDialog;
pub use create_form_modal::CreateFormModal;
pub use form_field::FormField;
