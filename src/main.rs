use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use studyhub::{
    app::{load_config, load_config_from, AppContext},
    cli::{handle_command, run_init, show_version, Cli, Commands},
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Commands that need neither config nor a session
    let command = match cli.command {
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Some(Commands::Version) => {
            show_version();
            return Ok(());
        }
        Some(Commands::Init) => {
            run_init()?;
            return Ok(());
        }
        Some(command) => command,
    };

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        load_config_from(config_path)?
    } else {
        load_config()?
    };
    if let Some(base_url) = cli.api_base_url {
        config.api.base_url = base_url;
    }

    let level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    init_logger(level);

    let mut ctx = AppContext::from_config(config).context("Failed to set up local storage")?;

    // Failures were already shown to the user; reflect them in the exit code
    if !handle_command(&mut ctx, command).await? {
        std::process::exit(1);
    }

    Ok(())
}
