use anyhow::Result;
use clap::Parser;
use log::info;

use partner_app::cli::app::Commands;
use partner_app::cli::{commands, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("partner-app.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting partner-app");

    let config_path = cli.config_path()?;

    match cli.command {
        Commands::Tui(tui_args) => {
            commands::tui_command(tui_args, &config_path).await?;
        }
        Commands::Config(config_args) => {
            commands::config_command(config_args, &config_path)?;
        }
        Commands::Screens => {
            commands::screens_command();
        }
    }

    Ok(())
}
