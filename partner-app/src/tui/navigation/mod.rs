//! Stack navigation with deferred-commit animated transitions
//!
//! The navigator owns an ordered stack of [`ScreenId`]s drawn above an
//! always-visible host screen. Pushes mutate the stack before the enter
//! animation starts; pops only mutate it once the exit animation completes,
//! so the leaving screen stays mounted for its whole slide-out.

pub mod animation;
pub mod navigator;
pub mod screen_id;
pub mod stack;

pub use animation::{AnimationDriver, AnimationSpec, Easing, RunId};
pub use navigator::{
    Commit, Direction, IgnoreReason, NavOutcome, Navigator, ScreenLayer, TransitionPhase,
    TransitionState, OFF_SCREEN, ON_SCREEN,
};
pub use screen_id::{ScreenId, UnknownScreen};
pub use stack::NavigationStack;
