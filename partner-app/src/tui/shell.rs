//! Root app shell
//!
//! Owns the navigator, the back-confirmation dispatcher, the screen registry
//! and the mounted screen instances, routes keys between them, and draws the
//! host, the stack and the active prompt in that order.

use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info, warn};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};
use ratatui::Frame;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use crate::tui::confirmation::{BackConfirmationDispatcher, BackConfirmationRequest, BackDecision, Resolution};
use crate::tui::modals::ConfirmationModal;
use crate::tui::navigation::{Commit, NavOutcome, Navigator, ScreenId, TransitionPhase};
use crate::tui::screen::{Screen, ScreenRegistry};
use crate::tui::screens::{default_registry, DashboardScreen};
use crate::tui::state::RuntimeConfig;
use crate::tui::{Command, Theme};

/// Lifecycle of the shell before and after the dashboard is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootPhase {
    Loading { until: Instant },
    Ready,
}

pub struct Shell {
    config: Arc<RuntimeConfig>,
    phase: RootPhase,
    host: Box<dyn Screen>,
    registry: ScreenRegistry,
    navigator: Navigator,
    /// Mounted instances, parallel to the navigator stack
    mounted: Vec<Box<dyn Screen>>,
    dispatcher: BackConfirmationDispatcher<Command>,
    deep_links: VecDeque<ScreenId>,
    should_quit: bool,
}

impl Shell {
    /// Shell with the dashboard host and every settings screen registered
    pub fn new(config: Arc<RuntimeConfig>, now: Instant) -> Self {
        Self::with_screens(config, Box::new(DashboardScreen::default()), default_registry(), now)
    }

    pub fn with_screens(config: Arc<RuntimeConfig>, host: Box<dyn Screen>, registry: ScreenRegistry, now: Instant) -> Self {
        let phase = if config.splash.is_zero() {
            RootPhase::Ready
        } else {
            RootPhase::Loading { until: now + config.splash }
        };

        let mut shell = Self {
            navigator: Navigator::new(config.transition),
            config,
            phase,
            host,
            registry,
            mounted: Vec::new(),
            dispatcher: BackConfirmationDispatcher::new(),
            deep_links: VecDeque::new(),
            should_quit: false,
        };
        if phase == RootPhase::Ready {
            shell.enter_ready();
        }
        shell
    }

    pub fn phase(&self) -> RootPhase {
        self.phase
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn dispatcher(&self) -> &BackConfirmationDispatcher<Command> {
        &self.dispatcher
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Titles of the mounted screens, bottom first
    pub fn mounted_titles(&self) -> Vec<String> {
        self.mounted.iter().map(|s| s.title().to_string()).collect()
    }

    /// Queue screens to push once the dashboard is ready, one per settled
    /// transition. Unknown keys are skipped with a warning. Returns how many
    /// were queued.
    pub fn open_deep_links<I, S>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut queued = 0;
        for key in keys {
            match key.as_ref().parse::<ScreenId>() {
                Ok(id) => {
                    self.deep_links.push_back(id);
                    queued += 1;
                }
                Err(e) => warn!("Skipping deep link: {}", e),
            }
        }
        queued
    }

    /// The root guard follows `exit_guard` once the dashboard shows. Login
    /// and onboarding gates are not part of this shell, so `Ready` is the
    /// only condition besides the config switch.
    fn enter_ready(&mut self) {
        self.phase = RootPhase::Ready;
        self.dispatcher.set_enabled(self.config.exit_guard);
        info!("Shell ready (exit guard {})", if self.config.exit_guard { "on" } else { "off" });
    }

    /// Advance clocks: splash timeout, animation frame, queued deep links
    pub fn tick(&mut self, now: Instant) {
        if let RootPhase::Loading { until } = self.phase {
            if now < until {
                return;
            }
            self.enter_ready();
        }

        if let Some(commit) = self.navigator.tick(now) {
            self.apply_commit(commit);
        }

        if self.navigator.is_idle() && !self.dispatcher.is_visible() {
            if let Some(id) = self.deep_links.pop_front() {
                self.push(id, now);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let keys = self.config.keybinds;

        if keys.quit.matches(&key) {
            self.request_quit();
            return;
        }

        // A visible prompt swallows every key
        if self.dispatcher.is_visible() {
            let resolution = if keys.confirm.matches(&key) || key.code == KeyCode::Enter {
                self.dispatcher.confirm()
            } else if keys.cancel.matches(&key) || keys.back.matches(&key) {
                self.dispatcher.cancel()
            } else {
                None
            };
            if let Some(resolution) = resolution {
                self.resolve(resolution, now);
            }
            return;
        }

        if matches!(self.phase, RootPhase::Loading { .. }) {
            return;
        }

        if keys.back.matches(&key) {
            self.back(now);
            return;
        }

        // The leaving screen is about to be dropped
        if let TransitionPhase::Exiting(id) = self.navigator.phase() {
            debug!("Dropping {:?} while {} exits", key.code, id);
            return;
        }

        let command = match self.mounted.last_mut() {
            Some(screen) => screen.handle_key(key),
            None => self.host.handle_key(key),
        };
        self.execute(command, now);
    }

    /// Platform back: screen guard, then pop, then the root guard
    fn back(&mut self, now: Instant) {
        if !self.navigator.is_idle() {
            debug!("Ignoring back during {:?}", self.navigator.phase());
            return;
        }

        if let Some(guard) = self.mounted.last().and_then(|screen| screen.back_guard()) {
            self.dispatcher.show(guard);
            return;
        }

        if !self.navigator.stack().is_empty() {
            self.navigator.pop(now);
            return;
        }

        match self.dispatcher.handle_back() {
            BackDecision::Intercepted => {}
            BackDecision::Cancelled(resolution) => self.resolve(resolution, now),
            BackDecision::PassThrough => self.quit(),
        }
    }

    /// Show the exit prompt regardless of the root guard
    pub fn request_quit(&mut self) {
        self.dispatcher.show(BackConfirmationRequest::exit_app());
    }

    fn quit(&mut self) {
        info!("Exiting partner app");
        self.should_quit = true;
    }

    fn resolve(&mut self, resolution: Resolution<Command>, now: Instant) {
        match resolution {
            Resolution::Run(command) => self.execute(command, now),
            Resolution::ExitApp => self.quit(),
            Resolution::Dismissed => {}
        }
    }

    fn execute(&mut self, command: Command, now: Instant) {
        match command {
            Command::None => {}
            Command::Navigate(id) => self.push(id, now),
            Command::Back => {
                self.navigator.pop(now);
            }
            Command::Confirm(request) => {
                self.dispatcher.show(*request);
            }
        }
    }

    fn push(&mut self, id: ScreenId, now: Instant) {
        let Some(screen) = self.registry.mount(id) else {
            warn!("No screen registered for '{}', ignoring push", id);
            return;
        };
        if let NavOutcome::Pushed(id) = self.navigator.push(id, now) {
            info!("Mounted {}", id);
            self.mounted.push(screen);
        }
        debug_assert_eq!(self.mounted.len(), self.navigator.stack().len());
    }

    fn apply_commit(&mut self, commit: Commit) {
        match commit {
            Commit::Entered(id) => debug!("{} settled", id),
            Commit::Popped(id) => {
                self.mounted.pop();
                info!("Unmounted {}", id);
            }
        }
        debug_assert_eq!(self.mounted.len(), self.navigator.stack().len());
    }

    /// Tear down: guard off, prompt dropped, stack emptied
    pub fn shutdown(&mut self) {
        self.dispatcher.set_enabled(false);
        self.dispatcher.hide();
        self.navigator.reset();
        self.mounted.clear();
        self.deep_links.clear();
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.render_to(area, frame.buffer_mut());
    }

    pub fn render_to(&mut self, area: Rect, buf: &mut Buffer) {
        let config = Arc::clone(&self.config);
        let theme = &config.theme;

        if matches!(self.phase, RootPhase::Loading { .. }) {
            render_splash(area, buf, &config);
        } else {
            self.render_screens(area, buf, theme);
        }

        if let Some(request) = self.dispatcher.active() {
            ConfirmationModal::new(request, config.keybinds.confirm, config.keybinds.cancel)
                .render(area, buf, theme);
        }
    }

    /// Host, then the stack bottom-up with the animating top shifted
    fn render_screens(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.host.render(area, buf, theme);

        for layer in self.navigator.layers() {
            let Some(screen) = self.mounted.get_mut(layer.index) else {
                continue;
            };
            let shift = (layer.offset * area.width as f32).round() as u16;
            if shift == 0 {
                screen.render(area, buf, theme);
            } else if shift < area.width {
                let mut scratch = Buffer::empty(area);
                screen.render(area, &mut scratch, theme);
                blit_shifted(&scratch, buf, area, shift);
            }
        }
    }
}

/// Copy `src` into `dst` moved `shift` columns towards the trailing edge
fn blit_shifted(src: &Buffer, dst: &mut Buffer, area: Rect, shift: u16) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right().saturating_sub(shift) {
            if let (Some(cell), Some(target)) = (src.cell((x, y)), dst.cell_mut((x + shift, y))) {
                *target = cell.clone();
            }
        }
    }
}

fn render_splash(area: Rect, buf: &mut Buffer, config: &RuntimeConfig) {
    let theme = &config.theme;
    Block::default().style(theme.surface()).render(area, buf);

    let [_, middle, _] = Layout::vertical([Constraint::Fill(1), Constraint::Length(3), Constraint::Fill(1)]).areas(area);
    Paragraph::new(vec![
        Line::styled("Partner", Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::styled("Loading your shop…", Style::default().fg(theme.text_tertiary)),
    ])
    .alignment(Alignment::Center)
    .render(middle, buf);
}
