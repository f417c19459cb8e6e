use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use std::path::Path;

use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn config_command(args: ConfigCommands, path: &Path) -> Result<()> {
    match args.command {
        ConfigSubcommands::Path => println!("{}", path.display()),
        ConfigSubcommands::Show => print!("{}", Config::load_from(path)?.to_toml_string()?),
        ConfigSubcommands::Init { force } => {
            init_config(path, force)?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = std::env::temp_dir().join(format!("partner-app-init-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = std::fs::remove_dir_all(&dir);

        init_config(&path, false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        std::fs::write(&path, "[tui]\nsplash_ms = 5\n").unwrap();
        assert!(init_config(&path, false).is_err());
        assert_eq!(Config::load_from(&path).unwrap().tui.splash_ms, 5);

        init_config(&path, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
