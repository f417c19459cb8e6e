use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::{saved_notice, Selection};
use crate::tui::command::ConfirmRequest;
use crate::tui::confirmation::BackConfirmationRequest;
use crate::tui::{Command, Theme};

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

impl FormField {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Editable list of text fields with unsaved-change tracking
#[derive(Debug, Clone)]
pub struct FormState {
    subject: &'static str,
    fields: Vec<FormField>,
    selection: Selection,
    dirty: bool,
    saved_once: bool,
}

impl FormState {
    pub fn new(subject: &'static str, fields: Vec<FormField>) -> Self {
        let selection = Selection::new(fields.len());
        Self {
            subject,
            fields,
            selection,
            dirty: false,
            saved_once: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.label == label).map(|f| f.value.as_str())
    }

    pub fn save(&mut self) {
        log::info!("Saved form ({} fields)", self.fields.len());
        self.dirty = false;
        self.saved_once = true;
    }

    /// "Go Back" / "Stay" prompt while there are unsaved edits; confirming
    /// discards them and pops the screen.
    pub fn back_guard(&self) -> Option<ConfirmRequest> {
        self.dirty
            .then(|| BackConfirmationRequest::leave_screen().on_confirm(Command::Back))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Command {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => {
                self.save();
                return Command::confirm(saved_notice(self.subject));
            }
            KeyCode::Up | KeyCode::BackTab => self.selection.previous(),
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => self.selection.next(),
            KeyCode::Backspace => {
                if let Some(field) = self.fields.get_mut(self.selection.index()) {
                    if field.value.pop().is_some() {
                        self.dirty = true;
                    }
                }
            }
            KeyCode::Char(ch) if !ctrl => {
                if let Some(field) = self.fields.get_mut(self.selection.index()) {
                    field.value.push(ch);
                    self.dirty = true;
                }
            }
            _ => {}
        }
        Command::None
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let mut lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let selected = i == self.selection.index();
                let value_style = if selected {
                    theme.selected().add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme.text_primary)
                };
                Line::from(vec![
                    Span::styled(format!("{:<18}", field.label), Style::default().fg(theme.text_tertiary)),
                    Span::styled(field.value.clone(), value_style),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        let status = if self.dirty {
            Span::styled("● unsaved changes", Style::default().fg(theme.accent_warning))
        } else if self.saved_once {
            Span::styled("✓ saved", Style::default().fg(theme.accent_success))
        } else {
            Span::raw("")
        };
        lines.push(Line::from(status));

        Paragraph::new(lines).render(area, buf);
    }
}
