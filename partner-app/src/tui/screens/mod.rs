//! Screens mounted by the shell: the host dashboard and the settings stack

pub mod dashboard;
pub mod form;
pub mod operating_hours;
pub mod settings;
pub mod shop_forms;

pub use dashboard::DashboardScreen;
pub use operating_hours::OperatingHoursScreen;
pub use settings::SettingsScreen;
pub use shop_forms::{ContactInfoScreen, PaymentSettingsScreen, ShopProfileScreen};

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::tui::command::ConfirmRequest;
use crate::tui::confirmation::BackConfirmationRequest;
use crate::tui::navigation::ScreenId;
use crate::tui::screen::ScreenRegistry;
use crate::tui::{Command, Theme};

/// Registry with every screen of the settings stack
pub fn default_registry() -> ScreenRegistry {
    let mut registry = ScreenRegistry::new();
    registry
        .register::<SettingsScreen>(ScreenId::Settings)
        .register::<ShopProfileScreen>(ScreenId::ShopProfile)
        .register::<ContactInfoScreen>(ScreenId::ContactInfo)
        .register::<OperatingHoursScreen>(ScreenId::OperatingHours)
        .register::<PaymentSettingsScreen>(ScreenId::PaymentSettings);
    registry
}

/// Clear `area`, draw the titled frame and footer hints, and return the
/// content area inside.
pub fn render_chrome(area: Rect, buf: &mut Buffer, theme: &Theme, title: &str, hints: &str) -> Rect {
    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Line::styled(format!(" {} ", title), theme.selected()))
        .style(theme.surface());
    let inner = block.inner(area);
    block.render(area, buf);

    let [content, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    Paragraph::new(Line::styled(hints.to_string(), ratatui::style::Style::default().fg(theme.text_tertiary)))
        .render(footer, buf);
    content
}

/// Notice raised after a save: OK closes the screen, Stay keeps it open
pub fn saved_notice(subject: &str) -> ConfirmRequest {
    BackConfirmationRequest::new()
        .title("Saved")
        .message(format!("{} updated successfully", subject))
        .confirm_label("OK")
        .cancel_label("Stay")
        .on_confirm(Command::Back)
}

/// Wrap-around cursor over a fixed number of rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut selection = Selection::new(3);
        selection.previous();
        assert_eq!(selection.index(), 2);
        selection.next();
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn test_empty_selection_stays_put() {
        let mut selection = Selection::new(0);
        selection.next();
        selection.previous();
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn test_default_registry_covers_every_screen() {
        let registry = default_registry();
        for id in ScreenId::ALL {
            assert!(registry.contains(*id), "{} is not registered", id);
            assert_eq!(registry.mount(*id).unwrap().title(), id.title());
        }
    }
}
