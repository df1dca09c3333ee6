//! Field descriptors and the form schema
//!
//! A [`FieldDescriptor`] is the static metadata for one form input. The
//! kind-specific options travel inside [`FieldKind`], which is flattened into
//! the descriptor so a form definition reads as
//!
//! ```toml
//! [[fields]]
//! name = "budget"
//! label = "Budget"
//! type = "number"
//! min = 0
//! required = true
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One selectable entry of a `select` field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectOption {
    /// Value stored in the record when this option is chosen
    pub value: String,
    /// Text shown to the user
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Input kind of a field, with its kind-specific options
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text
    Text {
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        max_length: Option<usize>,
    },
    /// Multi-line text
    Textarea {
        #[serde(default)]
        placeholder: Option<String>,
    },
    Email {
        #[serde(default)]
        placeholder: Option<String>,
    },
    Phone {
        #[serde(default)]
        placeholder: Option<String>,
    },
    Number {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    Checkbox,
    Select { options: Vec<SelectOption> },
    Date {
        #[serde(default)]
        placeholder: Option<String>,
    },
}

impl FieldKind {
    /// Plain text input with no options
    pub fn text() -> Self {
        FieldKind::Text {
            placeholder: None,
            max_length: None,
        }
    }

    /// Unbounded number input
    pub fn number() -> Self {
        FieldKind::Number {
            min: None,
            max: None,
        }
    }

    /// Placeholder shown while the field is empty, if the kind has one
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            FieldKind::Text { placeholder, .. }
            | FieldKind::Textarea { placeholder }
            | FieldKind::Email { placeholder }
            | FieldKind::Phone { placeholder }
            | FieldKind::Date { placeholder } => placeholder.as_deref(),
            FieldKind::Number { .. } | FieldKind::Checkbox | FieldKind::Select { .. } => None,
        }
    }
}

/// Static metadata describing one form input
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldDescriptor {
    /// Key into the values record
    pub name: String,
    /// Human readable label
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Ordered list of field descriptors for one form
///
/// Names are unique and the list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self> {
        if fields.is_empty() {
            return Err(Error::form_definition("a form needs at least one field"));
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if field.name.trim().is_empty() {
                return Err(Error::form_definition(format!(
                    "field '{}' has an empty name",
                    field.label
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(Error::duplicate_field(field.name.clone()));
            }
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.required)
    }
}
