//! Configuration file parsing for crmform
//!
//! Supports:
//! - `.crmform/config.toml` - Global settings
//! - Form definition files (TOML) passed on the command line
//! - Initial values files (JSON) for edit mode

pub mod form;
pub mod settings;
pub mod types;

pub use form::{load_form_definition, load_initial_values, FormDefinition};
pub use settings::{init_config_dir, load_settings, CONFIG_DIR, CONFIG_FILENAME};
pub use types::*;
