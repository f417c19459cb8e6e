use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::{render_chrome, saved_notice, Selection};
use crate::tui::command::ConfirmRequest;
use crate::tui::confirmation::BackConfirmationRequest;
use crate::tui::navigation::ScreenId;
use crate::tui::screen::Screen;
use crate::tui::{Command, Theme};

const DAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DayHours {
    open: bool,
    opens_at: u8,
    closes_at: u8,
}

pub struct OperatingHoursScreen {
    days: [DayHours; 7],
    selection: Selection,
    dirty: bool,
}

impl Default for OperatingHoursScreen {
    fn default() -> Self {
        let weekday = DayHours { open: true, opens_at: 9, closes_at: 21 };
        let mut days = [weekday; 7];
        days[6] = DayHours { open: false, ..weekday };
        Self {
            days,
            selection: Selection::new(DAYS.len()),
            dirty: false,
        }
    }
}

impl OperatingHoursScreen {
    pub fn is_open(&self, day: usize) -> bool {
        self.days.get(day).is_some_and(|d| d.open)
    }

    fn selected_mut(&mut self) -> &mut DayHours {
        &mut self.days[self.selection.index()]
    }

    fn adjust(&mut self, closing: bool, delta: i8) {
        let index = self.selection.index();
        let mut day = self.days[index];
        let hour = if closing { &mut day.closes_at } else { &mut day.opens_at };
        *hour = (*hour as i8 + delta).clamp(0, 24) as u8;

        // Keep the window non-empty
        if day.opens_at < day.closes_at && day != self.days[index] {
            self.days[index] = day;
            self.dirty = true;
        }
    }
}

impl Screen for OperatingHoursScreen {
    fn title(&self) -> &str {
        ScreenId::OperatingHours.title()
    }

    fn hints(&self) -> &str {
        "↑↓ day | Space open/closed | +/- closing | </> opening | Ctrl+S save | Esc back"
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let content = render_chrome(area, buf, theme, self.title(), self.hints());
        let mut lines: Vec<Line> = DAYS
            .iter()
            .zip(self.days.iter())
            .enumerate()
            .map(|(i, (name, day))| {
                let name_style = if i == self.selection.index() {
                    theme.selected()
                } else {
                    Style::default().fg(theme.text_primary)
                };
                let hours = if day.open {
                    Span::styled(
                        format!("{:02}:00 – {:02}:00", day.opens_at, day.closes_at),
                        Style::default().fg(theme.accent_success),
                    )
                } else {
                    Span::styled("Closed", Style::default().fg(theme.accent_error))
                };
                Line::from(vec![Span::styled(format!("{:<12}", name), name_style), hours])
            })
            .collect();

        if self.dirty {
            lines.push(Line::from(""));
            lines.push(Line::styled("● unsaved changes", Style::default().fg(theme.accent_warning)));
        }
        Paragraph::new(lines).render(content, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Saved operating hours");
                self.dirty = false;
                return Command::confirm(saved_notice("Operating hours"));
            }
            KeyCode::Up => self.selection.previous(),
            KeyCode::Down => self.selection.next(),
            KeyCode::Char(' ') => {
                let day = self.selected_mut();
                day.open = !day.open;
                self.dirty = true;
            }
            KeyCode::Char('+') => self.adjust(true, 1),
            KeyCode::Char('-') => self.adjust(true, -1),
            KeyCode::Char('>') => self.adjust(false, 1),
            KeyCode::Char('<') => self.adjust(false, -1),
            _ => {}
        }
        Command::None
    }

    fn back_guard(&self) -> Option<ConfirmRequest> {
        self.dirty.then(|| {
            BackConfirmationRequest::leave_screen()
                .message("Discard changes to your operating hours?")
                .on_confirm(Command::Back)
        })
    }
}
