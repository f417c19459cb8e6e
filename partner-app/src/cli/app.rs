use super::commands::{ConfigCommands, TuiCommands};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "partner-app")]
#[command(about = "Terminal shell for managing a shop from the partner dashboard")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The `--config` override, or the default config path
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => crate::config::Config::get_config_path(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive dashboard
    Tui(TuiCommands),
    /// Inspect or create the config file
    Config(ConfigCommands),
    /// List the screens that can be opened with --open
    Screens,
}
