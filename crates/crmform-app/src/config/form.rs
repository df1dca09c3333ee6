//! Form definition files
//!
//! A form definition is a TOML file describing one create/edit modal:
//!
//! ```toml
//! header_text = "New client"
//! split = true
//! modal_size = "xl"
//!
//! [[fields]]
//! name = "company"
//! label = "Company"
//! type = "text"
//! required = true
//!
//! [extra]
//! title = "Tips"
//! lines = ["Required fields are marked with *"]
//!
//! [initial_values]
//! company = "Acme"
//! ```
//!
//! Unlike settings, a broken form definition is an error: there is nothing
//! sensible to show without one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crmform_core::prelude::*;
use crmform_core::{FieldDescriptor, FormSchema, FormValues};

use super::types::Settings;
use crate::create_form::{CreateFormProps, ExtraElement, ModalSize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormDefinition {
    pub header_text: String,

    #[serde(default)]
    pub split: bool,

    /// Falls back to `ui.modal_size` from settings
    #[serde(default)]
    pub modal_size: Option<ModalSize>,

    #[serde(default)]
    pub extra: Option<ExtraElement>,

    pub fields: Vec<FieldDescriptor>,

    #[serde(default)]
    pub initial_values: Option<FormValues>,
}

impl FormDefinition {
    /// Parse and validate a definition from TOML source
    pub fn parse(content: &str) -> Result<Self> {
        let definition: FormDefinition =
            toml::from_str(content).map_err(|e| Error::form_definition(e.to_string()))?;
        definition.validate()?;
        Ok(definition)
    }

    fn validate(&self) -> Result<()> {
        let schema = FormSchema::new(self.fields.clone())?;
        if let Some(initial) = &self.initial_values {
            if let Some(unknown) = initial.names().find(|name| !schema.contains(name)) {
                return Err(Error::form_definition(format!(
                    "initial value for unknown field '{}'",
                    unknown
                )));
            }
        }
        Ok(())
    }

    /// Build the modal props, filling the modal size from settings if unset
    pub fn into_props(self, settings: &Settings) -> Result<CreateFormProps> {
        let schema = FormSchema::new(self.fields)?;
        let mut props = CreateFormProps::new(schema, self.header_text)
            .with_split(self.split)
            .with_modal_size(self.modal_size.unwrap_or(settings.ui.modal_size));
        if let Some(extra) = self.extra {
            props = props.with_extra(extra);
        }
        if let Some(initial) = self.initial_values {
            props = props.with_initial_values(initial);
        }
        Ok(props)
    }
}

/// Read and validate a form definition file
pub fn load_form_definition(path: &Path) -> Result<FormDefinition> {
    if !path.exists() {
        return Err(Error::FormNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form definition {:?}", path))?;
    let definition = FormDefinition::parse(&content).map_err(|e| match e {
        Error::FormDefinition { message } => {
            Error::form_definition(format!("{}: {}", path.display(), message))
        }
        other => other,
    })?;

    info!(
        "Loaded form '{}' with {} field(s) from {:?}",
        definition.header_text,
        definition.fields.len(),
        path
    );
    Ok(definition)
}

/// Read an initial-values record from a JSON object file
pub fn load_initial_values(path: &Path) -> Result<FormValues> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read initial values {:?}", path))?;
    let values: FormValues = serde_json::from_str(&content)?;
    debug!("Loaded {} initial value(s) from {:?}", values.len(), path);
    Ok(values)
}
