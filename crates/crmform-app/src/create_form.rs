//! Create/edit modal state machine
//!
//! Wraps a [`FormState`] with everything the modal dialog needs: the column
//! layout, focus, the discard-warning flag and the submit phase. Visibility of
//! the modal itself belongs to the caller; operations that want it changed
//! return a [`ModalEvent`] instead of touching it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crmform_core::prelude::*;
use crmform_core::{FieldDescriptor, FieldValue, FormSchema, FormValues};

use crate::form_state::FormState;

/// Number of fields placed in the left column of a split layout
pub const SPLIT_COLUMN_SIZE: usize = 8;

/// Width token for the modal dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ModalSize {
    #[serde(rename = "sm")]
    Small,
    #[serde(rename = "md")]
    Medium,
    #[default]
    #[serde(rename = "lg")]
    Large,
    #[serde(rename = "xl")]
    ExtraLarge,
    #[serde(rename = "2xl")]
    DoubleExtraLarge,
    #[serde(rename = "full")]
    Full,
}

impl ModalSize {
    /// Share of the terminal width the modal occupies
    pub fn width_percent(self) -> u16 {
        match self {
            ModalSize::Small => 40,
            ModalSize::Medium => 50,
            ModalSize::Large => 60,
            ModalSize::ExtraLarge => 70,
            ModalSize::DoubleExtraLarge => 80,
            ModalSize::Full => 96,
        }
    }
}

/// Caller-supplied text panel rendered alongside the fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtraElement {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Everything the caller hands to the modal when mounting it
#[derive(Debug, Clone)]
pub struct CreateFormProps {
    pub schema: Arc<FormSchema>,
    pub initial_values: Option<Arc<FormValues>>,
    pub split: bool,
    pub header_text: String,
    pub modal_size: ModalSize,
    pub extra: Option<ExtraElement>,
}

impl CreateFormProps {
    pub fn new(schema: FormSchema, header_text: impl Into<String>) -> Self {
        Self {
            schema: Arc::new(schema),
            initial_values: None,
            split: false,
            header_text: header_text.into(),
            modal_size: ModalSize::default(),
            extra: None,
        }
    }

    pub fn with_initial_values(mut self, values: FormValues) -> Self {
        self.initial_values = Some(Arc::new(values));
        self
    }

    pub fn with_split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    pub fn with_modal_size(mut self, size: ModalSize) -> Self {
        self.modal_size = size;
        self
    }

    pub fn with_extra(mut self, extra: ExtraElement) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// Visibility change the modal asks its caller to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    CloseRequested,
    OpenRequested,
}

/// Whether a submission is currently awaiting the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Focusable control inside the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    /// Index into the schema's field list
    Field(usize),
    SubmitButton,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(0)
    }
}

/// One rendered column of fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldColumn<'a> {
    pub fields: &'a [FieldDescriptor],
    /// Schema index of `fields[0]`
    pub offset: usize,
    pub show_extra: bool,
}

/// Split a field list into its rendered columns.
///
/// Split layout puts the first [`SPLIT_COLUMN_SIZE`] fields on the left and the
/// remainder on the right, and both columns carry the extra element. Otherwise
/// a single column holds every field followed by the extra element.
pub fn layout_columns(fields: &[FieldDescriptor], split: bool) -> Vec<FieldColumn<'_>> {
    if !split {
        return vec![FieldColumn {
            fields,
            offset: 0,
            show_extra: true,
        }];
    }

    let boundary = fields.len().min(SPLIT_COLUMN_SIZE);
    let (left, right) = fields.split_at(boundary);
    vec![
        FieldColumn {
            fields: left,
            offset: 0,
            show_extra: true,
        },
        FieldColumn {
            fields: right,
            offset: boundary,
            show_extra: true,
        },
    ]
}

#[derive(Debug)]
pub struct CreateFormState {
    form: FormState,
    header_text: String,
    split: bool,
    modal_size: ModalSize,
    extra: Option<ExtraElement>,
    show_warning: bool,
    phase: SubmitPhase,
    last_error: Option<String>,
    focus: FormFocus,
}

impl CreateFormState {
    pub fn new(props: CreateFormProps) -> Self {
        Self {
            form: FormState::new(props.schema, props.initial_values),
            header_text: props.header_text,
            split: props.split,
            modal_size: props.modal_size,
            extra: props.extra,
            show_warning: false,
            phase: SubmitPhase::Idle,
            last_error: None,
            focus: FormFocus::default(),
        }
    }

    pub fn with_on_change(
        mut self,
        callback: impl FnMut(&str, &FieldValue) + Send + 'static,
    ) -> Self {
        self.set_on_change(callback);
        self
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(&str, &FieldValue) + Send + 'static) {
        self.form.set_on_change(callback);
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    pub fn is_split(&self) -> bool {
        self.split
    }

    pub fn modal_size(&self) -> ModalSize {
        self.modal_size
    }

    pub fn extra(&self) -> Option<&ExtraElement> {
        self.extra.as_ref()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        self.form.schema().fields()
    }

    pub fn columns(&self) -> Vec<FieldColumn<'_>> {
        layout_columns(self.fields(), self.split)
    }

    // ─────────────────────────────────────────────────────────
    // Values
    // ─────────────────────────────────────────────────────────

    pub fn handle_change(&mut self, name: &str, value: FieldValue) -> Result<()> {
        self.form.handle_change(name, value)
    }

    pub fn sync_initial_values(&mut self, initial_values: Option<Arc<FormValues>>) -> bool {
        self.form.sync_initial_values(initial_values)
    }

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────

    /// Submit control is live only for a valid form with nothing in flight
    pub fn is_submit_enabled(&self) -> bool {
        self.phase == SubmitPhase::Idle && self.form.is_form_valid()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Enter the submitting phase and snapshot the values for the handler
    pub fn begin_submit(&mut self) -> Result<FormValues> {
        if self.phase == SubmitPhase::Submitting {
            return Err(Error::SubmitInFlight);
        }
        if !self.form.is_form_valid() {
            return Err(Error::submit(format!(
                "required fields missing: {}",
                self.form.missing_required().join(", ")
            )));
        }

        self.phase = SubmitPhase::Submitting;
        self.last_error = None;
        Ok(self.form.values().clone())
    }

    /// Settle the in-flight submission.
    ///
    /// Success resets the form. Failure keeps every value and records the
    /// message for the footer. The modal stays open either way.
    pub fn finish_submit(&mut self, result: std::result::Result<(), String>) {
        self.phase = SubmitPhase::Idle;
        match result {
            Ok(()) => {
                self.form.reset_form();
                self.last_error = None;
                self.focus = FormFocus::default();
            }
            Err(message) => {
                self.last_error = Some(message);
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Close interception
    // ─────────────────────────────────────────────────────────

    pub fn is_warning_visible(&self) -> bool {
        self.show_warning
    }

    /// Close immediately when nothing was entered, otherwise raise the warning
    pub fn request_close(&mut self) -> Option<ModalEvent> {
        if self.form.has_changes() {
            debug!("Close requested with unsaved input, showing warning");
            self.show_warning = true;
            None
        } else {
            Some(ModalEvent::CloseRequested)
        }
    }

    /// Drop all input and close
    pub fn confirm_discard(&mut self) -> ModalEvent {
        self.show_warning = false;
        self.form.reset_form();
        self.last_error = None;
        self.focus = FormFocus::default();
        ModalEvent::CloseRequested
    }

    /// Hide the warning and keep the modal open with its values
    pub fn cancel_discard(&mut self) -> ModalEvent {
        self.show_warning = false;
        ModalEvent::OpenRequested
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FieldDescriptor> {
        match self.focus {
            FormFocus::Field(index) => self.fields().get(index),
            FormFocus::SubmitButton => None,
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.fields().len();
        self.focus = match self.focus {
            FormFocus::Field(index) if index + 1 < count => FormFocus::Field(index + 1),
            FormFocus::Field(_) => FormFocus::SubmitButton,
            FormFocus::SubmitButton => FormFocus::Field(0),
        };
    }

    pub fn focus_prev(&mut self) {
        let count = self.fields().len();
        self.focus = match self.focus {
            FormFocus::Field(0) => FormFocus::SubmitButton,
            FormFocus::Field(index) => FormFocus::Field(index - 1),
            FormFocus::SubmitButton => FormFocus::Field(count.saturating_sub(1)),
        };
    }
}
