use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use crate::tui::confirmation::BackConfirmationRequest;
use crate::tui::{KeyBinding, Theme};
use crossterm::event::KeyCode;

/// Renders the visible back-confirmation request as a centred dialog
///
/// # Example
/// ```rust,ignore
/// ConfirmationModal::new(request, config.keybinds.confirm, config.keybinds.cancel)
///     .width(48)
///     .render(area, buf, theme);
/// ```
pub struct ConfirmationModal<'a, A> {
    request: &'a BackConfirmationRequest<A>,
    confirm_key: KeyBinding,
    cancel_key: KeyBinding,
    width: u16,
}

impl<'a, A> ConfirmationModal<'a, A> {
    pub fn new(request: &'a BackConfirmationRequest<A>, confirm_key: KeyBinding, cancel_key: KeyBinding) -> Self {
        Self {
            request,
            confirm_key,
            cancel_key,
            width: 50,
        }
    }

    /// Set modal width (default: 50 columns, clamped to the area)
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Generate hotkey display from text (e.g., "Yes" with `y` -> "(y)es",
    /// "Exit" with `y` -> "Exit (y)")
    pub fn generate_hotkey_label(text: &str, key: KeyBinding) -> String {
        let KeyCode::Char(hotkey) = key.code else {
            return format!("{} ({})", text, key);
        };
        if !key.modifiers.is_empty() {
            return format!("{} ({})", text, key);
        }

        let mut chars = text.chars();
        match chars.next() {
            Some(first) if first.eq_ignore_ascii_case(&hotkey) => {
                format!("({}){}", first.to_lowercase(), chars.as_str())
            }
            _ => format!("{} ({})", text, hotkey),
        }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let width = self.width.min(area.width);
        let height = 9.min(area.height);
        let dialog = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        Clear.render(dialog, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_tertiary))
            .style(Style::default().fg(theme.text_primary).bg(theme.bg_elevated));
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let [title, message, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::styled(
            self.request.title_text().to_string(),
            Style::default().fg(theme.accent_tertiary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(title, buf);

        Paragraph::new(self.request.message_text().to_string())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text_secondary))
            .render(message, buf);

        let cancel_label = format!("[ {} ]", Self::generate_hotkey_label(self.request.cancel_text(), self.cancel_key));
        let confirm_label = format!("[ {} ]", Self::generate_hotkey_label(self.request.confirm_text(), self.confirm_key));
        Paragraph::new(Line::from(vec![
            Span::styled(cancel_label, Style::default().fg(theme.text_primary)),
            Span::raw("   "),
            Span::styled(confirm_label, Style::default().fg(theme.accent_success).add_modifier(Modifier::BOLD)),
        ]))
        .alignment(Alignment::Center)
        .render(buttons, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkey_label_inlines_matching_letter() {
        let y = KeyBinding::new(KeyCode::Char('y'));
        assert_eq!(ConfirmationModal::<()>::generate_hotkey_label("Yes", y), "(y)es");
        assert_eq!(ConfirmationModal::<()>::generate_hotkey_label("Exit", y), "Exit (y)");
    }

    #[test]
    fn test_hotkey_label_for_named_keys() {
        let esc = KeyBinding::new(KeyCode::Esc);
        assert_eq!(ConfirmationModal::<()>::generate_hotkey_label("Stay", esc), "Stay (Esc)");
    }

    #[test]
    fn test_renders_request_text() {
        let request = BackConfirmationRequest::<()>::exit_app();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        ConfirmationModal::new(&request, KeyBinding::new(KeyCode::Char('y')), KeyBinding::new(KeyCode::Char('n')))
            .render(area, &mut buf, &Theme::default());

        let text: String = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Exit App"));
        assert!(text.contains("Exit (y)"));
        assert!(text.contains("Cancel (n)"));
    }
}
