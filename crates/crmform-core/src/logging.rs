//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "CRMFORM_LOG";

/// Log files are named `crmform.log.YYYY-MM-DD`
const LOG_FILE_PREFIX: &str = "crmform.log";

/// Initialize the logging subsystem and return the log directory
///
/// The terminal belongs to the form UI, so everything goes to a daily
/// rolling file under `~/.local/share/crmform/logs/`.
/// Log level is controlled by the `CRMFORM_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CRMFORM_LOG=debug crmform demos/client.toml
/// CRMFORM_LOG=crmform_app=trace crmform demos/client.toml
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = file_appender(&log_dir);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("crmform starting, logging to {}", log_dir.display());

    Ok(log_dir)
}

fn file_appender(log_dir: &Path) -> RollingFileAppender {
    RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX)
}

/// Filter used when `CRMFORM_LOG` is unset or unparsable
fn default_filter() -> &'static str {
    "crmform=info,crmform_app=info,crmform_tui=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("crmform").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = get_log_directory();
        assert!(dir.ends_with("crmform/logs"));
    }

    #[test]
    fn test_appender_writes_dated_files_into_directory() {
        use std::io::Write;

        let temp = tempfile::tempdir().unwrap();
        let mut appender = file_appender(temp.path());
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("crmform.log."));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter()).is_ok());
    }
}
