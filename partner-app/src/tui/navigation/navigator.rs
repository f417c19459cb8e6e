use std::time::Instant;

use super::{AnimationDriver, AnimationSpec, NavigationStack, RunId, ScreenId};

/// Progress value of a screen at its resting, fully visible position
pub const ON_SCREEN: f32 = 1.0;

/// Progress value of a screen fully off the trailing edge
pub const OFF_SCREEN: f32 = 0.0;

/// State machine of one navigator instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    /// Screen already on the stack, sliding in
    Entering(ScreenId),
    /// Screen still on the stack, sliding out
    Exiting(ScreenId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Enter,
    Exit,
}

/// Snapshot of the transition in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    pub direction: Direction,
    pub screen: ScreenId,
    pub progress: f32,
}

/// Why a navigation request was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Another transition has not completed yet
    InFlight,
    /// Pushing the screen that is already on top
    AlreadyOnTop,
    /// Popping with nothing above the host
    EmptyStack,
}

/// Result of `push` / `pop`. Ignored requests are not errors and callers are
/// free to discard the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Pushed(ScreenId),
    PopStarted(ScreenId),
    Ignored(IgnoreReason),
}

impl NavOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, NavOutcome::Ignored(_))
    }
}

/// What the completion of a transition committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Enter animation settled; the stack was already updated at push time
    Entered(ScreenId),
    /// Exit animation finished and the screen left the stack
    Popped(ScreenId),
}

/// One screen to draw, bottom-up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayer {
    /// Position in the stack
    pub index: usize,
    pub screen: ScreenId,
    /// Fraction of the width the screen is shifted towards the trailing edge
    pub offset: f32,
}

#[derive(Debug, Clone, Copy)]
enum PendingCommit {
    Settle(ScreenId),
    RemoveTop(ScreenId),
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    run: RunId,
    commit: PendingCommit,
}

/// Screen stack with deferred-commit animated transitions.
///
/// `push` appends before the enter animation starts and resets progress to
/// off-screen in the same call; `pop` leaves the stack untouched until the
/// exit animation completes. Requests arriving while a transition is in
/// flight are dropped, never queued.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: NavigationStack,
    phase: TransitionPhase,
    driver: AnimationDriver,
    in_flight: Option<InFlight>,
    spec: AnimationSpec,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(AnimationSpec::default())
    }
}

impl Navigator {
    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            stack: NavigationStack::new(),
            phase: TransitionPhase::Idle,
            driver: AnimationDriver::new(ON_SCREEN),
            in_flight: None,
            spec,
        }
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == TransitionPhase::Idle
    }

    /// The top-of-stack screen, if any
    pub fn current(&self) -> Option<ScreenId> {
        self.stack.top()
    }

    /// The transition in flight with its last sampled progress
    pub fn transition(&self) -> Option<TransitionState> {
        let (direction, screen) = match self.phase {
            TransitionPhase::Idle => return None,
            TransitionPhase::Entering(id) => (Direction::Enter, id),
            TransitionPhase::Exiting(id) => (Direction::Exit, id),
        };
        Some(TransitionState {
            direction,
            screen,
            progress: self.driver.value(),
        })
    }

    pub fn push(&mut self, id: ScreenId, now: Instant) -> NavOutcome {
        if !self.is_idle() {
            log::debug!("Ignoring push of {} while {:?}", id, self.phase);
            return NavOutcome::Ignored(IgnoreReason::InFlight);
        }
        if self.stack.top() == Some(id) {
            log::debug!("Ignoring push of {}: already on top", id);
            return NavOutcome::Ignored(IgnoreReason::AlreadyOnTop);
        }

        // Mutate first, and park the progress off-screen in the same call, so
        // the first frame of the new screen is already off-screen.
        self.stack.push(id);
        self.driver.set_value(OFF_SCREEN);
        let run = self.driver.start(ON_SCREEN, self.spec, now);
        self.in_flight = Some(InFlight {
            run,
            commit: PendingCommit::Settle(id),
        });
        self.phase = TransitionPhase::Entering(id);

        log::debug!("Push {} (stack depth {})", id, self.stack.len());
        NavOutcome::Pushed(id)
    }

    pub fn pop(&mut self, now: Instant) -> NavOutcome {
        if !self.is_idle() {
            log::debug!("Ignoring pop while {:?}", self.phase);
            return NavOutcome::Ignored(IgnoreReason::InFlight);
        }
        let Some(top) = self.stack.top() else {
            log::debug!("Ignoring pop on empty stack");
            return NavOutcome::Ignored(IgnoreReason::EmptyStack);
        };

        // The stack is left alone until the exit animation completes
        self.driver.set_value(ON_SCREEN);
        let run = self.driver.start(OFF_SCREEN, self.spec, now);
        self.in_flight = Some(InFlight {
            run,
            commit: PendingCommit::RemoveTop(top),
        });
        self.phase = TransitionPhase::Exiting(top);

        log::debug!("Pop {} started (stack depth {})", top, self.stack.len());
        NavOutcome::PopStarted(top)
    }

    /// Advance the animation clock. Returns the commit performed when the
    /// transition in flight completes on this tick.
    pub fn tick(&mut self, now: Instant) -> Option<Commit> {
        let run = self.driver.tick(now)?;
        self.complete(run)
    }

    /// Completion trigger for run `run`. A completion for any run other than
    /// the one in flight (discarded by `reset`, or already committed) does
    /// nothing.
    pub fn complete(&mut self, run: RunId) -> Option<Commit> {
        match self.in_flight {
            Some(in_flight) if in_flight.run == run => {}
            _ => {
                log::debug!("Ignoring stale completion of animation run {}", run);
                return None;
            }
        }
        let in_flight = self.in_flight.take()?;
        if self.driver.current_run() == Some(run) {
            self.driver.stop();
        }
        self.phase = TransitionPhase::Idle;

        match in_flight.commit {
            PendingCommit::Settle(id) => {
                self.driver.set_value(ON_SCREEN);
                Some(Commit::Entered(id))
            }
            PendingCommit::RemoveTop(id) => {
                let removed = self.stack.pop_top();
                debug_assert_eq!(removed, Some(id), "exiting screen must still be on top");
                // Whatever is now on top was rendered underneath at rest
                self.driver.set_value(ON_SCREEN);
                Some(Commit::Popped(id))
            }
        }
    }

    /// Remount: empty stack, idle, and any run in flight discarded so its
    /// completion can no longer touch the stack.
    pub fn reset(&mut self) {
        if let Some(run) = self.driver.stop() {
            log::debug!("Discarding animation run {} on reset", run);
        }
        self.in_flight = None;
        self.stack.clear();
        self.phase = TransitionPhase::Idle;
        self.driver.set_value(ON_SCREEN);
    }

    /// Screens to draw above the host, bottom-up. A resting top hides
    /// everything below it; an animating top also exposes the screen beneath.
    pub fn layers(&self) -> Vec<ScreenLayer> {
        let len = self.stack.len();
        if len == 0 {
            return Vec::new();
        }

        let animating = !self.is_idle();
        let first = if animating { len.saturating_sub(2) } else { len - 1 };

        self.stack
            .iter()
            .enumerate()
            .skip(first)
            .map(|(index, screen)| {
                let offset = if animating && index == len - 1 {
                    (ON_SCREEN - self.driver.value()).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                ScreenLayer { index, screen, offset }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn settled(ids: &[ScreenId], t0: Instant) -> Navigator {
        let mut nav = Navigator::new(AnimationSpec::from_millis(300));
        for id in ids {
            assert!(nav.push(*id, t0).is_accepted());
            assert_eq!(nav.tick(t0 + ms(300)), Some(Commit::Entered(*id)));
        }
        nav
    }

    #[test]
    fn test_push_resets_progress_off_screen_immediately() {
        let t0 = Instant::now();
        let mut nav = settled(&[ScreenId::Settings], t0);

        nav.push(ScreenId::ShopProfile, t0);
        let transition = nav.transition().unwrap();
        assert_eq!(transition.direction, Direction::Enter);
        assert_eq!(transition.progress, OFF_SCREEN);

        let layers = nav.layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[1].screen, ScreenId::ShopProfile);
        assert_eq!(layers[1].offset, 1.0);
        assert_eq!(layers[0].offset, 0.0);
    }

    #[test]
    fn test_resting_top_hides_lower_screens() {
        let t0 = Instant::now();
        let nav = settled(&[ScreenId::Settings, ScreenId::ContactInfo], t0);
        let layers = nav.layers();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].screen, ScreenId::ContactInfo);
        assert_eq!(layers[0].index, 1);
    }

    #[test]
    fn test_pop_leaves_new_top_at_rest() {
        let t0 = Instant::now();
        let mut nav = settled(&[ScreenId::Settings, ScreenId::ContactInfo], t0);

        nav.pop(t0);
        nav.tick(t0 + ms(150));
        let mid = nav.layers();
        assert!(mid[1].offset > 0.0 && mid[1].offset < 1.0);

        assert_eq!(nav.tick(t0 + ms(300)), Some(Commit::Popped(ScreenId::ContactInfo)));
        assert_eq!(nav.layers(), vec![ScreenLayer { index: 0, screen: ScreenId::Settings, offset: 0.0 }]);
        assert_eq!(nav.transition(), None);
    }

    #[test]
    fn test_stale_completion_is_ignored_after_reset() {
        let t0 = Instant::now();
        let mut nav = settled(&[ScreenId::Settings], t0);
        nav.pop(t0);
        let stale = nav.driver.current_run().unwrap();

        nav.reset();
        assert_eq!(nav.complete(stale), None);
        assert!(nav.stack().is_empty());
        assert!(nav.is_idle());
        assert_eq!(nav.tick(t0 + ms(1000)), None);
    }

    #[test]
    fn test_duplicate_completion_commits_once() {
        let t0 = Instant::now();
        let mut nav = settled(&[ScreenId::Settings, ScreenId::ShopProfile], t0);
        nav.pop(t0);
        let run = nav.driver.current_run().unwrap();

        assert_eq!(nav.complete(run), Some(Commit::Popped(ScreenId::ShopProfile)));
        assert_eq!(nav.complete(run), None);
        assert_eq!(*nav.stack(), [ScreenId::Settings]);
    }
}
