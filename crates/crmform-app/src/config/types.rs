//! Configuration types for crmform
//!
//! Defines `Settings` (global application settings) and its sections.

use serde::{Deserialize, Serialize};

use crate::create_form::ModalSize;

/// Application settings (.crmform/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Close the modal after a successful submit.
    /// Off by default: the modal resets and stays open for the next record.
    #[serde(default)]
    pub close_on_submit: bool,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Modal width used when a form definition does not pick one
    #[serde(default)]
    pub modal_size: ModalSize,

    /// Show the key hint line under the modal
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            modal_size: ModalSize::default(),
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}
