use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::collections::HashMap;
use std::marker::PhantomData;

use crate::tui::command::{Command, ConfirmRequest};
use crate::tui::navigation::ScreenId;
use crate::tui::Theme;

/// A mountable unit of UI content.
///
/// Screens never touch the navigator: they ask for a push with
/// `Command::Navigate` and for a pop with `Command::Back`.
pub trait Screen {
    fn title(&self) -> &str;

    /// Draw into `area` of `buf`. Transitions may render into an off-screen
    /// buffer and shift the result, so screens must not assume `area`
    /// matches the terminal.
    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme);

    fn handle_key(&mut self, key: KeyEvent) -> Command;

    /// Prompt to show instead of popping when the back key is pressed
    fn back_guard(&self) -> Option<ConfirmRequest> {
        None
    }

    /// One-line key help shown in the footer
    fn hints(&self) -> &str {
        ""
    }
}

/// Creates screen instances on push (factory pattern for lazy mounting)
pub trait ScreenFactory {
    fn create(&self) -> Box<dyn Screen>;
}

impl<S: Screen + Default + 'static> ScreenFactory for PhantomData<S> {
    fn create(&self) -> Box<dyn Screen> {
        Box::new(S::default())
    }
}

/// Maps each `ScreenId` to the factory that mounts it
#[derive(Default)]
pub struct ScreenRegistry {
    factories: HashMap<ScreenId, Box<dyn ScreenFactory>>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the screen type mounted for `id`, replacing any previous one
    pub fn register<S: Screen + Default + 'static>(&mut self, id: ScreenId) -> &mut Self {
        self.factories.insert(id, Box::new(PhantomData::<S>));
        self
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.factories.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build a fresh instance of `id`
    pub fn mount(&self, id: ScreenId) -> Option<Box<dyn Screen>> {
        self.factories.get(&id).map(|factory| factory.create())
    }
}
