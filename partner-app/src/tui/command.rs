use crate::tui::confirmation::BackConfirmationRequest;
use crate::tui::navigation::ScreenId;

/// Prompt whose answers are themselves commands
pub type ConfirmRequest = BackConfirmationRequest<Command>;

/// Commands represent side effects that screens want to perform.
/// They are returned from key handlers and executed by the shell.
#[derive(Debug, Default)]
pub enum Command {
    /// Do nothing
    #[default]
    None,

    /// Push a screen above the current one
    Navigate(ScreenId),

    /// Pop the current screen, skipping its back guard
    Back,

    /// Raise a confirmation prompt
    Confirm(Box<ConfirmRequest>),
}

impl Command {
    /// Helper to push another screen
    pub fn navigate(id: ScreenId) -> Self {
        Command::Navigate(id)
    }

    /// Helper to close the current screen
    pub fn back() -> Self {
        Command::Back
    }

    /// Helper to raise a confirmation prompt
    pub fn confirm(request: ConfirmRequest) -> Self {
        Command::Confirm(Box::new(request))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Command::None)
    }
}
