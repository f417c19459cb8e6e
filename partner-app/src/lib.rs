//! Partner app terminal shell
//!
//! A dashboard host with a stack of settings screens pushed above it. Screen
//! changes slide in and out through [`tui::Navigator`], and leaving the app or
//! a screen with unsaved edits goes through a single confirmation prompt
//! owned by [`tui::BackConfirmationDispatcher`].

use arc_swap::ArcSwap;
use once_cell::sync::OnceCell;
use std::sync::Arc;

pub mod cli;
pub mod config;
pub mod tui;

// Global RuntimeConfig instance (using ArcSwap for lock-free atomic updates)
static RUNTIME_CONFIG: OnceCell<ArcSwap<tui::RuntimeConfig>> = OnceCell::new();

/// Install the RuntimeConfig for shells created after this call. The first
/// call initializes the global; later calls swap the stored value.
pub fn init_runtime_config(config: tui::RuntimeConfig) {
    let config = Arc::new(config);
    match RUNTIME_CONFIG.get() {
        Some(current) => current.store(config),
        None => {
            let _ = RUNTIME_CONFIG.set(ArcSwap::new(config));
        }
    }
}

/// Get a clone of the current RuntimeConfig Arc, or the defaults when
/// nothing was initialized
pub fn global_runtime_config() -> Arc<tui::RuntimeConfig> {
    RUNTIME_CONFIG
        .get()
        .map(|config| config.load_full())
        .unwrap_or_else(|| Arc::new(tui::RuntimeConfig::default()))
}
