//! TOML configuration file for the partner app shell
//!
//! Lives in `<XDG config dir>/partner-app/config.toml` on Linux and in
//! `~/.partner-app/config.toml` elsewhere. Every section and field is
//! optional; missing values fall back to their defaults.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::tui::navigation::Easing;
use crate::tui::state::ThemeVariant;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub navigation: NavigationSettings,
    pub confirmation: ConfirmationSettings,
    pub tui: TuiSettings,
    pub keybinds: KeybindSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Push/pop duration in milliseconds
    pub transition_ms: u64,
    /// Duration used when fast transitions are selected
    pub fast_transition_ms: u64,
    pub fast_transitions: bool,
    pub easing: Easing,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            transition_ms: 300,
            fast_transition_ms: 200,
            fast_transitions: false,
            easing: Easing::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmationSettings {
    /// Ask before the back key leaves the app from the dashboard
    pub exit_guard: bool,
}

impl Default for ConfirmationSettings {
    fn default() -> Self {
        Self { exit_guard: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiSettings {
    pub tick_rate_ms: u64,
    pub theme: ThemeVariant,
    /// Loading phase shown before the dashboard, 0 skips it
    pub splash_ms: u64,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            theme: ThemeVariant::default(),
            splash_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindSettings {
    pub back: String,
    pub confirm: String,
    pub cancel: String,
    pub quit: String,
}

impl Default for KeybindSettings {
    fn default() -> Self {
        Self {
            back: "Esc".to_string(),
            confirm: "y".to_string(),
            cancel: "n".to_string(),
            quit: "Ctrl+Q".to_string(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("partner-app")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".partner-app")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from `path`, using defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file {:?} doesn't exist, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", path);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        fs::write(path, self.to_toml_string()?)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved to {:?}", path);
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.navigation.transition_ms, 300);
        assert!(config.confirmation.exit_guard);
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
            [navigation]
            fast_transitions = true
            easing = "linear"

            [tui]
            theme = "latte"

            [keybinds]
            back = "Backspace"
            "#,
        )
        .unwrap();

        assert!(config.navigation.fast_transitions);
        assert_eq!(config.navigation.fast_transition_ms, 200);
        assert_eq!(config.navigation.easing, Easing::Linear);
        assert_eq!(config.tui.theme, ThemeVariant::Latte);
        assert_eq!(config.keybinds.back, "Backspace");
        assert_eq!(config.keybinds.quit, "Ctrl+Q");
    }

    #[test]
    fn test_rejects_unknown_easing() {
        let result: Result<Config, _> = toml::from_str("[navigation]\neasing = \"bounce\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("partner-app-config-test-{}", std::process::id()))
            .join("config.toml");

        let mut config = Config::default();
        config.tui.splash_ms = 0;
        config.confirmation.exit_guard = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("partner-app-does-not-exist/config.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
