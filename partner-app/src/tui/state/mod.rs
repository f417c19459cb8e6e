pub mod config;
pub mod modal;
pub mod theme;

pub use config::{Keybinds, RuntimeConfig};
pub use modal::ModalState;
pub use theme::{Theme, ThemeVariant};
