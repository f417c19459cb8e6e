use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::{render_chrome, Selection};
use crate::tui::navigation::ScreenId;
use crate::tui::screen::Screen;
use crate::tui::{Command, Theme};

const ENTRIES: &[(ScreenId, &str)] = &[
    (ScreenId::ShopProfile, "Name, category and address"),
    (ScreenId::ContactInfo, "Phone, email and WhatsApp"),
    (ScreenId::OperatingHours, "Opening days and hours"),
    (ScreenId::PaymentSettings, "UPI, bank account and cash"),
];

/// First screen of the stack; every entry pushes another screen
pub struct SettingsScreen {
    selection: Selection,
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self {
            selection: Selection::new(ENTRIES.len()),
        }
    }
}

impl SettingsScreen {
    pub fn selected(&self) -> ScreenId {
        ENTRIES[self.selection.index()].0
    }
}

impl Screen for SettingsScreen {
    fn title(&self) -> &str {
        ScreenId::Settings.title()
    }

    fn hints(&self) -> &str {
        "↑↓ select | Enter open | ← / Esc back"
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let content = render_chrome(area, buf, theme, self.title(), self.hints());
        let lines: Vec<Line> = ENTRIES
            .iter()
            .enumerate()
            .map(|(i, (id, description))| {
                let selected = i == self.selection.index();
                let title_style = if selected {
                    theme.selected()
                } else {
                    Style::default().fg(theme.text_primary)
                };
                Line::from(vec![
                    Span::styled(if selected { "› " } else { "  " }, title_style),
                    Span::styled(format!("{:<18}", id.title()), title_style),
                    Span::styled(*description, Style::default().fg(theme.text_tertiary)),
                ])
            })
            .collect();
        Paragraph::new(lines).render(content, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Up => self.selection.previous(),
            KeyCode::Down => self.selection.next(),
            KeyCode::Enter | KeyCode::Right => return Command::navigate(self.selected()),
            KeyCode::Left => return Command::back(),
            _ => {}
        }
        Command::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_enter_opens_selected_entry() {
        let mut settings = SettingsScreen::default();
        settings.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        settings.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert!(matches!(
            settings.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Command::Navigate(ScreenId::OperatingHours)
        ));
    }
}
