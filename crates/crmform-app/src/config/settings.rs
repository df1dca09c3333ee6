//! Settings parser for .crmform/config.toml

use super::types::Settings;
use crmform_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR: &str = ".crmform";

const DEFAULT_CONFIG: &str = r#"# crmform configuration

[behavior]
close_on_submit = false   # Close the modal after a successful submit

[ui]
modal_size = "lg"         # sm | md | lg | xl | 2xl | full (forms may override)
show_key_hints = true
"#;

/// Load settings from `<base>/.crmform/config.toml`.
///
/// A missing or unreadable file yields defaults; the form should still open.
pub fn load_settings(base: &Path) -> Settings {
    let config_path = base.join(CONFIG_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.crmform/config.toml` with defaults, leaving an existing file alone.
///
/// Returns the config file path.
pub fn init_config_dir(base: &Path) -> Result<PathBuf> {
    let config_dir = base.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create .crmform dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", config_path);
    }

    Ok(config_path)
}
