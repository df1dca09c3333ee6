//! Form-state holder
//!
//! Owns the values record of one form instance. Values only change through
//! [`FormState::sync_initial_values`], [`FormState::handle_change`] and
//! [`FormState::reset_form`]; the record's keys are always names from the
//! schema.

use std::fmt;
use std::sync::Arc;

use crmform_core::prelude::*;
use crmform_core::{FieldValue, FormSchema, FormValues};

/// Callback invoked after every field change with the field name and new value
pub type ChangeCallback = Box<dyn FnMut(&str, &FieldValue) + Send>;

pub struct FormState {
    schema: Arc<FormSchema>,
    values: FormValues,
    /// Last initial-values record merged in, compared by identity
    last_initial: Option<Arc<FormValues>>,
    on_change: Option<ChangeCallback>,
}

impl FormState {
    pub fn new(schema: Arc<FormSchema>, initial_values: Option<Arc<FormValues>>) -> Self {
        let mut state = Self {
            schema,
            values: FormValues::new(),
            last_initial: None,
            on_change: None,
        };
        state.sync_initial_values(initial_values);
        state
    }

    /// Attach a change callback
    pub fn with_on_change(
        mut self,
        callback: impl FnMut(&str, &FieldValue) + Send + 'static,
    ) -> Self {
        self.set_on_change(callback);
        self
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(&str, &FieldValue) + Send + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Merge a new initial-values record into the current values.
    ///
    /// Only a record with a different identity than the last one merged is
    /// applied; passing the same `Arc` again is a no-op. Fields already set
    /// and absent from the new record keep their value. Names unknown to the
    /// schema are dropped.
    ///
    /// Returns true when a merge happened.
    pub fn sync_initial_values(&mut self, initial_values: Option<Arc<FormValues>>) -> bool {
        let Some(initial) = initial_values else {
            return false;
        };
        if let Some(previous) = &self.last_initial {
            if Arc::ptr_eq(previous, &initial) {
                return false;
            }
        }

        let mut incoming = initial.as_ref().clone();
        incoming.retain(|name| {
            let known = self.schema.contains(name);
            if !known {
                warn!("Dropping initial value for unknown field '{}'", name);
            }
            known
        });

        debug!("Merging {} initial value(s)", incoming.len());
        self.values.merge(&incoming);
        self.last_initial = Some(initial);
        true
    }

    /// Set or overwrite one field, then notify the change callback.
    ///
    /// The value is stored as given; its kind is not checked against the
    /// descriptor.
    pub fn handle_change(&mut self, name: &str, value: FieldValue) -> Result<()> {
        if !self.schema.contains(name) {
            return Err(Error::unknown_field(name));
        }

        trace!("Field '{}' changed to {:?}", name, value);
        self.values.insert(name, value.clone());

        if let Some(callback) = self.on_change.as_mut() {
            callback(name, &value);
        }
        Ok(())
    }

    /// True iff every required field holds a non-null, non-empty value
    pub fn is_form_valid(&self) -> bool {
        self.schema.required_fields().all(|field| {
            self.values
                .get(&field.name)
                .is_some_and(FieldValue::is_filled)
        })
    }

    /// Names of required fields that are still missing
    pub fn missing_required(&self) -> Vec<&str> {
        self.schema
            .required_fields()
            .filter(|field| {
                !self
                    .values
                    .get(&field.name)
                    .is_some_and(FieldValue::is_filled)
            })
            .map(|field| field.name.as_str())
            .collect()
    }

    /// Discard all input
    pub fn reset_form(&mut self) {
        self.values.clear();
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// True when anything has been entered, including empty strings
    pub fn has_changes(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn schema(&self) -> &Arc<FormSchema> {
        &self.schema
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("schema", &self.schema)
            .field("values", &self.values)
            .field("has_initial", &self.last_initial.is_some())
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}
