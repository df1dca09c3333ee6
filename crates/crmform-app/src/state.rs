//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::create_form::{CreateFormProps, CreateFormState, ModalEvent};

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Host page with the modal closed
    #[default]
    Page,
    /// Modal open, editing fields
    Form,
    /// Modal open with the discard warning on top
    ConfirmDiscard,
}

/// Application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Modal visibility, owned here and driven by [`ModalEvent`]s
    pub modal_open: bool,

    pub form: CreateFormState,

    pub settings: Settings,

    /// Successful submissions this run
    pub submissions: usize,

    /// One-line status shown on the host page
    pub status: Option<String>,
}

impl AppState {
    pub fn new(props: CreateFormProps, settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            modal_open: false,
            form: CreateFormState::new(props),
            settings,
            submissions: 0,
            status: None,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if !self.modal_open {
            UiMode::Page
        } else if self.form.is_warning_visible() {
            UiMode::ConfirmDiscard
        } else {
            UiMode::Form
        }
    }

    pub fn open_form(&mut self) {
        self.modal_open = true;
    }

    pub fn apply_modal_event(&mut self, event: ModalEvent) {
        match event {
            ModalEvent::CloseRequested => self.modal_open = false,
            ModalEvent::OpenRequested => self.modal_open = true,
        }
    }

    /// Dialog contents while the discard warning is up
    pub fn confirm_dialog(&self) -> Option<ConfirmDialogState> {
        (self.ui_mode() == UiMode::ConfirmDiscard)
            .then(|| ConfirmDialogState::discard_changes(self.form.form().values().len()))
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
