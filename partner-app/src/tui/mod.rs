pub mod command;
pub mod confirmation;
pub mod keybinding;
pub mod modals;
pub mod navigation;
pub mod screen;
pub mod screens;
pub mod shell;
pub mod state;

pub use command::{Command, ConfirmRequest};
pub use confirmation::{BackConfirmationDispatcher, BackConfirmationRequest, BackDecision, Resolution, ShowOutcome};
pub use keybinding::KeyBinding;
pub use navigation::{Navigator, ScreenId};
pub use screen::{Screen, ScreenFactory, ScreenRegistry};
pub use shell::{RootPhase, Shell};
pub use state::{Keybinds, ModalState, RuntimeConfig, Theme, ThemeVariant};
