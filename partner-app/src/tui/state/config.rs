use crossterm::event::KeyCode;
use std::time::Duration;

use super::{Theme, ThemeVariant};
use crate::config::Config;
use crate::tui::navigation::AnimationSpec;
use crate::tui::KeyBinding;

/// Keys the shell routes itself before anything reaches a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinds {
    pub back: KeyBinding,
    pub confirm: KeyBinding,
    pub cancel: KeyBinding,
    pub quit: KeyBinding,
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            back: KeyBinding::new(KeyCode::Esc),
            confirm: KeyBinding::new(KeyCode::Char('y')),
            cancel: KeyBinding::new(KeyCode::Char('n')),
            quit: KeyBinding::ctrl(KeyCode::Char('q')),
        }
    }
}

/// Runtime configuration for TUI behavior and appearance
///
/// Built once from the config file (plus command line overrides) and shared
/// read-only with the shell.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub theme: Theme,
    pub keybinds: Keybinds,
    /// Duration and easing of push/pop transitions
    pub transition: AnimationSpec,
    /// Root-level back guard once the dashboard is ready
    pub exit_guard: bool,
    pub tick_rate: Duration,
    pub splash: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::new(ThemeVariant::default()),
            keybinds: Keybinds::default(),
            transition: AnimationSpec::default(),
            exit_guard: true,
            tick_rate: Duration::from_millis(16),
            splash: Duration::from_millis(1000),
        }
    }
}

impl RuntimeConfig {
    /// Convert the file configuration. `fast` forces the fast transition
    /// duration regardless of the file setting.
    pub fn from_config(config: &Config, fast: bool) -> Self {
        let defaults = Keybinds::default();
        let keybinds = Keybinds {
            back: parse_keybind("back", &config.keybinds.back, defaults.back),
            confirm: parse_keybind("confirm", &config.keybinds.confirm, defaults.confirm),
            cancel: parse_keybind("cancel", &config.keybinds.cancel, defaults.cancel),
            quit: parse_keybind("quit", &config.keybinds.quit, defaults.quit),
        };

        let nav = &config.navigation;
        let millis = if fast || nav.fast_transitions {
            nav.fast_transition_ms
        } else {
            nav.transition_ms
        };

        Self {
            theme: Theme::new(config.tui.theme),
            keybinds,
            transition: AnimationSpec::new(Duration::from_millis(millis), nav.easing),
            exit_guard: config.confirmation.exit_guard,
            tick_rate: Duration::from_millis(config.tui.tick_rate_ms.max(1)),
            splash: Duration::from_millis(config.tui.splash_ms),
        }
    }
}

fn parse_keybind(action: &str, raw: &str, fallback: KeyBinding) -> KeyBinding {
    match raw.parse::<KeyBinding>() {
        Ok(keybind) => keybind,
        Err(e) => {
            log::warn!("Failed to parse keybind '{}' for action '{}': {}. Using {}.", raw, action, e, fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_flag_overrides_duration() {
        let config = Config::default();
        assert_eq!(RuntimeConfig::from_config(&config, false).transition.duration, Duration::from_millis(300));
        assert_eq!(RuntimeConfig::from_config(&config, true).transition.duration, Duration::from_millis(200));
    }

    #[test]
    fn test_bad_keybind_falls_back() {
        let mut config = Config::default();
        config.keybinds.back = "Hyper+Esc".to_string();
        config.keybinds.quit = "Ctrl+X".to_string();

        let runtime = RuntimeConfig::from_config(&config, false);
        assert_eq!(runtime.keybinds.back, KeyBinding::new(KeyCode::Esc));
        assert_eq!(runtime.keybinds.quit, KeyBinding::ctrl(KeyCode::Char('x')));
    }
}
