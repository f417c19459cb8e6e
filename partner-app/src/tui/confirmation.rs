//! Back-confirmation requests and the dispatcher that shows them
//!
//! The dispatcher is constructed by the shell and handed to whatever needs
//! it; it keeps at most one request visible at a time. Requests carry the
//! action to run on confirm or cancel as plain values, so answering a prompt
//! hands the action back to the caller instead of invoking a callback.

use crate::tui::state::ModalState;

/// A confirmation prompt waiting for an answer.
///
/// Unset labels fall back to "Confirm" / "Are you sure?" / "Yes" / "No".
#[derive(Debug)]
pub struct BackConfirmationRequest<A> {
    title: Option<String>,
    message: Option<String>,
    confirm_label: Option<String>,
    cancel_label: Option<String>,
    on_confirm: Option<A>,
    on_cancel: Option<A>,
}

impl<A> Default for BackConfirmationRequest<A> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            confirm_label: None,
            cancel_label: None,
            on_confirm: None,
            on_cancel: None,
        }
    }
}

impl<A> BackConfirmationRequest<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root-level guard: confirming leaves the application
    pub fn exit_app() -> Self {
        Self::new()
            .title("Exit App")
            .message("Are you sure you want to exit?")
            .confirm_label("Exit")
            .cancel_label("Cancel")
    }

    /// Screen-level guard with the "Go Back" / "Stay" wording
    pub fn leave_screen() -> Self {
        Self::new()
            .title("Go Back")
            .message("Are you sure you want to go back? Your changes may be lost.")
            .confirm_label("Go Back")
            .cancel_label("Stay")
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    /// Action run when confirmed. Without one, confirming exits the app.
    pub fn on_confirm(mut self, action: A) -> Self {
        self.on_confirm = Some(action);
        self
    }

    /// Action run when cancelled. Without one, cancelling just dismisses.
    pub fn on_cancel(mut self, action: A) -> Self {
        self.on_cancel = Some(action);
        self
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("Confirm")
    }

    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or("Are you sure?")
    }

    pub fn confirm_text(&self) -> &str {
        self.confirm_label.as_deref().unwrap_or("Yes")
    }

    pub fn cancel_text(&self) -> &str {
        self.cancel_label.as_deref().unwrap_or("No")
    }
}

/// How an answered prompt resolves
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<A> {
    /// Run the request's action
    Run(A),
    /// Confirmed without an action: leave the application
    ExitApp,
    /// Cancelled without an action
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    Shown,
    /// Another request is already visible; the new one was dropped
    Rejected,
}

/// What to do with a platform back signal
#[derive(Debug, PartialEq, Eq)]
pub enum BackDecision<A> {
    /// The exit prompt was raised instead of the default back action
    Intercepted,
    /// A visible prompt absorbed the signal as a cancel
    Cancelled(Resolution<A>),
    /// Not guarded; perform the default back action
    PassThrough,
}

/// Serializes back-confirmation prompts: one visible request at most.
#[derive(Debug)]
pub struct BackConfirmationDispatcher<A> {
    enabled: bool,
    active: ModalState<BackConfirmationRequest<A>>,
}

impl<A> Default for BackConfirmationDispatcher<A> {
    fn default() -> Self {
        Self {
            enabled: false,
            active: ModalState::Closed,
        }
    }
}

impl<A> BackConfirmationDispatcher<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the root-level interception of back signals
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("Back confirmation {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_open()
    }

    pub fn active(&self) -> Option<&BackConfirmationRequest<A>> {
        self.active.data()
    }

    /// Raise a prompt. Returns immediately; the answer arrives later through
    /// `confirm` or `cancel`.
    pub fn show(&mut self, request: BackConfirmationRequest<A>) -> ShowOutcome {
        if self.active.is_open() {
            log::debug!("Rejecting confirmation '{}': another prompt is visible", request.title_text());
            return ShowOutcome::Rejected;
        }
        log::debug!("Showing confirmation '{}'", request.title_text());
        self.active.open_with(request);
        ShowOutcome::Shown
    }

    /// Close the visible prompt without running any action
    pub fn hide(&mut self) -> Option<BackConfirmationRequest<A>> {
        self.active.take()
    }

    /// Answer the visible prompt with "confirm". `None` when nothing is visible.
    pub fn confirm(&mut self) -> Option<Resolution<A>> {
        let request = self.active.take()?;
        Some(match request.on_confirm {
            Some(action) => Resolution::Run(action),
            None => Resolution::ExitApp,
        })
    }

    /// Answer the visible prompt with "cancel". `None` when nothing is visible.
    pub fn cancel(&mut self) -> Option<Resolution<A>> {
        let request = self.active.take()?;
        Some(match request.on_cancel {
            Some(action) => Resolution::Run(action),
            None => Resolution::Dismissed,
        })
    }

    /// Route a platform back signal
    pub fn handle_back(&mut self) -> BackDecision<A> {
        if let Some(resolution) = self.cancel() {
            return BackDecision::Cancelled(resolution);
        }
        if self.enabled {
            self.show(BackConfirmationRequest::exit_app());
            return BackDecision::Intercepted;
        }
        BackDecision::PassThrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Action {
        Discard,
        KeepEditing,
    }

    #[test]
    fn test_defaults_for_unset_labels() {
        let request = BackConfirmationRequest::<Action>::new();
        assert_eq!(request.title_text(), "Confirm");
        assert_eq!(request.message_text(), "Are you sure?");
        assert_eq!(request.confirm_text(), "Yes");
        assert_eq!(request.cancel_text(), "No");
    }

    #[test]
    fn test_second_request_is_rejected() {
        let mut dispatcher = BackConfirmationDispatcher::new();
        let first = BackConfirmationRequest::new().title("A").on_confirm(Action::Discard);
        let second = BackConfirmationRequest::new().title("B");

        assert_eq!(dispatcher.show(first), ShowOutcome::Shown);
        assert_eq!(dispatcher.show(second), ShowOutcome::Rejected);
        assert_eq!(dispatcher.active().map(|r| r.title_text()), Some("A"));

        assert_eq!(dispatcher.confirm(), Some(Resolution::Run(Action::Discard)));
        assert!(!dispatcher.is_visible());
    }

    #[test]
    fn test_confirm_without_action_exits() {
        let mut dispatcher = BackConfirmationDispatcher::<Action>::new();
        dispatcher.show(BackConfirmationRequest::leave_screen());
        assert_eq!(dispatcher.confirm(), Some(Resolution::ExitApp));
        assert_eq!(dispatcher.confirm(), None);
    }

    #[test]
    fn test_cancel_runs_cancel_action() {
        let mut dispatcher = BackConfirmationDispatcher::new();
        dispatcher.show(BackConfirmationRequest::new().on_cancel(Action::KeepEditing));
        assert_eq!(dispatcher.cancel(), Some(Resolution::Run(Action::KeepEditing)));
    }

    #[test]
    fn test_back_passes_through_when_disabled() {
        let mut dispatcher = BackConfirmationDispatcher::<Action>::new();
        assert_eq!(dispatcher.handle_back(), BackDecision::PassThrough);
        assert!(!dispatcher.is_visible());
    }

    #[test]
    fn test_back_intercepted_then_cancelled() {
        let mut dispatcher = BackConfirmationDispatcher::<Action>::new();
        dispatcher.set_enabled(true);

        assert_eq!(dispatcher.handle_back(), BackDecision::Intercepted);
        assert_eq!(dispatcher.active().map(|r| r.title_text()), Some("Exit App"));

        // A second back press answers the prompt instead of stacking another
        assert_eq!(dispatcher.handle_back(), BackDecision::Cancelled(Resolution::Dismissed));
        assert!(!dispatcher.is_visible());
    }

    #[test]
    fn test_hide_drops_actions() {
        let mut dispatcher = BackConfirmationDispatcher::new();
        dispatcher.show(BackConfirmationRequest::new().on_confirm(Action::Discard));
        assert!(dispatcher.hide().is_some());
        assert_eq!(dispatcher.confirm(), None);
    }
}
