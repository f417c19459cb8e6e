//! Settings screens that are plain editable forms

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::form::{FormField, FormState};
use super::render_chrome;
use crate::tui::command::ConfirmRequest;
use crate::tui::navigation::ScreenId;
use crate::tui::screen::Screen;
use crate::tui::{Command, Theme};

const FORM_HINTS: &str = "↑↓ field | type to edit | Ctrl+S save | Esc back";

macro_rules! form_screen {
    ($name:ident, $id:expr, [$(($label:expr, $value:expr)),* $(,)?]) => {
        pub struct $name {
            form: FormState,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    form: FormState::new($id.title(), vec![$(FormField::new($label, $value)),*]),
                }
            }
        }

        impl $name {
            pub fn form(&self) -> &FormState {
                &self.form
            }
        }

        impl Screen for $name {
            fn title(&self) -> &str {
                $id.title()
            }

            fn hints(&self) -> &str {
                FORM_HINTS
            }

            fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
                let content = render_chrome(area, buf, theme, self.title(), self.hints());
                self.form.render(content, buf, theme);
            }

            fn handle_key(&mut self, key: KeyEvent) -> Command {
                self.form.handle_key(key)
            }

            fn back_guard(&self) -> Option<ConfirmRequest> {
                self.form.back_guard()
            }
        }
    };
}

form_screen!(ShopProfileScreen, ScreenId::ShopProfile, [
    ("Shop name", "Corner Fresh Mart"),
    ("Category", "Groceries"),
    ("Address", "12 Market Road"),
    ("GST number", ""),
]);

form_screen!(ContactInfoScreen, ScreenId::ContactInfo, [
    ("Phone", "+91 98765 43210"),
    ("Email", "hello@cornerfresh.example"),
    ("WhatsApp", ""),
]);

form_screen!(PaymentSettingsScreen, ScreenId::PaymentSettings, [
    ("UPI ID", "cornerfresh@upi"),
    ("Bank account", ""),
    ("IFSC", ""),
    ("Cash on delivery", "enabled"),
]);
