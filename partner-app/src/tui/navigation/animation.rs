//! Time-based animation driver
//!
//! Turns a discrete "animate towards X" request into a progress value sampled
//! on every frame, and reports completion exactly once per run. Time is always
//! passed in by the caller so the event loop (and tests) own the clock.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Identifies one animation run. Completions carry it so that a stale run
/// can be told apart from the one currently in flight.
pub type RunId = u64;

/// Easing curves. All are monotonic on `0.0..=1.0` and never overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
    EaseInOutQuad,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Duration and curve of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis), Easing::default())
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::from_millis(300)
    }
}

#[derive(Debug, Clone)]
struct Run {
    id: RunId,
    from: f32,
    to: f32,
    started_at: Instant,
    spec: AnimationSpec,
}

impl Run {
    fn fraction(&self, now: Instant) -> f32 {
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).min(1.0)
    }

    fn value_at(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.spec.easing.apply(self.fraction(now))
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.spec.duration.is_zero() || now.saturating_duration_since(self.started_at) >= self.spec.duration
    }
}

/// Drives a single animated value. At most one run is active; starting a new
/// run replaces the previous one without completing it.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    value: f32,
    current: Option<Run>,
    next_id: RunId,
}

impl AnimationDriver {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            current: None,
            next_id: 1,
        }
    }

    /// Last sampled value
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Id of the run in flight, if any
    pub fn current_run(&self) -> Option<RunId> {
        self.current.as_ref().map(|run| run.id)
    }

    /// Jump to `value` immediately, in the same tick
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    /// Start animating from the current value towards `to`
    pub fn start(&mut self, to: f32, spec: AnimationSpec, now: Instant) -> RunId {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Run {
            id,
            from: self.value,
            to,
            started_at: now,
            spec,
        });
        id
    }

    /// Sample the value at `now`. Returns the run id the first time the run is
    /// observed finished; the run is dropped at that point so the completion
    /// can never be reported twice.
    pub fn tick(&mut self, now: Instant) -> Option<RunId> {
        let run = self.current.as_ref()?;
        if run.is_finished(now) {
            self.value = run.to;
            let id = run.id;
            self.current = None;
            Some(id)
        } else {
            self.value = run.value_at(now);
            None
        }
    }

    /// Drop the run in flight without reporting completion
    pub fn stop(&mut self) -> Option<RunId> {
        self.current.take().map(|run| run.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutQuad] {
            assert!((easing.apply(0.0) - 0.0).abs() < f32::EPSILON);
            assert!((easing.apply(1.0) - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_progress_is_monotonic() {
        let t0 = Instant::now();
        let mut driver = AnimationDriver::new(0.0);
        driver.start(1.0, AnimationSpec::new(ms(300), Easing::EaseInOutQuad), t0);

        let mut last = driver.value();
        for step in 1..=30 {
            driver.tick(t0 + ms(step * 10));
            assert!(driver.value() >= last, "value went backwards at step {}", step);
            assert!(driver.value() <= 1.0);
            last = driver.value();
        }
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let t0 = Instant::now();
        let mut driver = AnimationDriver::new(1.0);
        let run = driver.start(0.0, AnimationSpec::from_millis(200), t0);

        assert_eq!(driver.tick(t0 + ms(100)), None);
        assert_eq!(driver.tick(t0 + ms(200)), Some(run));
        assert_eq!(driver.tick(t0 + ms(250)), None);
        assert_eq!(driver.tick(t0 + ms(900)), None);
        assert_eq!(driver.value(), 0.0);
        assert!(!driver.is_running());
    }

    #[test]
    fn test_zero_duration_completes_on_next_tick() {
        let t0 = Instant::now();
        let mut driver = AnimationDriver::new(0.0);
        let run = driver.start(1.0, AnimationSpec::from_millis(0), t0);
        assert_eq!(driver.tick(t0), Some(run));
        assert_eq!(driver.value(), 1.0);
    }

    #[test]
    fn test_stop_discards_without_completion() {
        let t0 = Instant::now();
        let mut driver = AnimationDriver::new(0.0);
        let run = driver.start(1.0, AnimationSpec::from_millis(300), t0);
        assert_eq!(driver.stop(), Some(run));
        assert_eq!(driver.tick(t0 + ms(500)), None);
    }

    #[test]
    fn test_run_ids_are_distinct() {
        let t0 = Instant::now();
        let mut driver = AnimationDriver::new(0.0);
        let first = driver.start(1.0, AnimationSpec::default(), t0);
        let second = driver.start(0.0, AnimationSpec::default(), t0);
        assert_ne!(first, second);
        assert_eq!(driver.current_run(), Some(second));
    }
}
