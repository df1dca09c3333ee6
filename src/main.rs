//! crmform - Terminal create/edit form for CRM records
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};

use crmform_app::config::{
    init_config_dir, load_form_definition, load_initial_values, load_settings,
};
use crmform_app::{AppState, ChannelSubmitHandler};
use crmform_core::logging;

/// Pending submissions buffered between the form and the collector
const SUBMISSION_BUFFER: usize = 16;

/// crmform - fill in CRM records from the terminal
#[derive(Parser, Debug)]
#[command(name = "crmform")]
#[command(about = "Terminal create/edit form for CRM records", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Form definition (TOML)
    #[arg(value_name = "FORM")]
    form: Option<PathBuf>,

    /// Record to pre-fill the form with (JSON object)
    #[arg(long, value_name = "FILE")]
    initial: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create .crmform/config.toml in the current directory
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let base_path = std::env::current_dir()?;

    if let Some(Command::Init) = args.command {
        let path = init_config_dir(&base_path)?;
        println!("Settings file: {}", path.display());
        return Ok(());
    }

    let form_path = args
        .form
        .ok_or_else(|| eyre!("no form definition given, try `crmform demos/client.toml`"))?;

    let log_dir = logging::init()?;
    let settings = load_settings(&base_path);
    let definition = load_form_definition(&form_path)?;
    let initial_values = args
        .initial
        .as_deref()
        .map(load_initial_values)
        .transpose()?;

    let mut state = AppState::new(definition.into_props(&settings)?, settings);
    state.form.set_on_change(|name, value| {
        tracing::debug!(field = name, %value, "Field changed");
    });

    let (handler, mut submissions) = ChannelSubmitHandler::channel(SUBMISSION_BUFFER);
    let collector = tokio::spawn(async move {
        let mut collected = Vec::new();
        while let Some(submission) = submissions.recv().await {
            collected.push(submission);
        }
        collected
    });

    crmform_tui::run(&mut state, Arc::new(handler), initial_values).await?;

    // The collector ends once every handler clone, including in-flight
    // submit tasks, has been dropped.
    for submission in collector.await? {
        println!("{}", serde_json::to_string(&submission)?);
    }
    eprintln!("Logs: {}", log_dir.display());
    Ok(())
}
