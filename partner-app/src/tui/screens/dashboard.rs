use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::{render_chrome, Selection};
use crate::tui::navigation::ScreenId;
use crate::tui::screen::Screen;
use crate::tui::{Command, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Orders,
    Profile,
}

#[derive(Debug, Clone)]
struct Order {
    number: &'static str,
    customer: &'static str,
    items: u32,
    total_cents: u64,
    status: &'static str,
}

const ORDERS: &[Order] = &[
    Order { number: "#1042", customer: "Asha K.", items: 3, total_cents: 48_50, status: "Pending" },
    Order { number: "#1041", customer: "Ravi P.", items: 1, total_cents: 12_00, status: "Preparing" },
    Order { number: "#1039", customer: "Meera S.", items: 6, total_cents: 103_25, status: "Out for delivery" },
    Order { number: "#1036", customer: "John D.", items: 2, total_cents: 21_40, status: "Delivered" },
];

/// Host screen: always mounted beneath the navigation stack
pub struct DashboardScreen {
    tab: Tab,
    orders: Selection,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self {
            tab: Tab::Orders,
            orders: Selection::new(ORDERS.len()),
        }
    }
}

impl DashboardScreen {
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Entry point into the settings stack
    pub fn navigate_to_settings(&self) -> Command {
        Command::navigate(ScreenId::Settings)
    }

    fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Orders => Tab::Profile,
            Tab::Profile => Tab::Orders,
        };
    }

    fn render_orders(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let lines: Vec<Line> = ORDERS
            .iter()
            .enumerate()
            .map(|(i, order)| {
                let style = if i == self.orders.index() {
                    theme.selected()
                } else {
                    Style::default().fg(theme.text_primary)
                };
                Line::styled(
                    format!(
                        "{:<6} {:<10} {:>2} items  {:>4}.{:02}  {}",
                        order.number,
                        order.customer,
                        order.items,
                        order.total_cents / 100,
                        order.total_cents % 100,
                        order.status
                    ),
                    style,
                )
            })
            .collect();
        Paragraph::new(lines).render(area, buf);
    }

    fn render_profile(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let label = Style::default().fg(theme.text_tertiary);
        let value = Style::default().fg(theme.text_primary);
        let lines = vec![
            Line::from(vec![Span::styled("Shop      ", label), Span::styled("Corner Fresh Mart", value)]),
            Line::from(vec![Span::styled("Owner     ", label), Span::styled("Partner account", value)]),
            Line::from(vec![Span::styled("Status    ", label), Span::styled("Open", Style::default().fg(theme.accent_success))]),
            Line::from(""),
            Line::styled("Press Enter or s to open settings", Style::default().fg(theme.accent_secondary)),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

impl Screen for DashboardScreen {
    fn title(&self) -> &str {
        "Dashboard"
    }

    fn hints(&self) -> &str {
        "Tab switch tab | ↑↓ select | s settings | Ctrl+Q quit"
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let content = render_chrome(area, buf, theme, self.title(), self.hints());
        let [tabs, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(content);

        let tab_style = |tab: Tab| {
            if tab == self.tab {
                theme.selected()
            } else {
                Style::default().fg(theme.text_secondary)
            }
        };
        Paragraph::new(Line::from(vec![
            Span::styled(" Orders ", tab_style(Tab::Orders)),
            Span::raw("  "),
            Span::styled(" Profile ", tab_style(Tab::Profile)),
        ]))
        .render(tabs, buf);

        match self.tab {
            Tab::Orders => self.render_orders(body, buf, theme),
            Tab::Profile => self.render_profile(body, buf, theme),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.toggle_tab();
                Command::None
            }
            KeyCode::Up if self.tab == Tab::Orders => {
                self.orders.previous();
                Command::None
            }
            KeyCode::Down if self.tab == Tab::Orders => {
                self.orders.next();
                Command::None
            }
            KeyCode::Char('s') => self.navigate_to_settings(),
            KeyCode::Enter if self.tab == Tab::Profile => self.navigate_to_settings(),
            _ => Command::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_settings_entry_points() {
        let mut dashboard = DashboardScreen::default();
        assert!(matches!(dashboard.handle_key(key(KeyCode::Char('s'))), Command::Navigate(ScreenId::Settings)));

        // Enter only opens settings from the profile tab
        assert!(dashboard.handle_key(key(KeyCode::Enter)).is_none());
        dashboard.handle_key(key(KeyCode::Tab));
        assert_eq!(dashboard.tab(), Tab::Profile);
        assert!(matches!(dashboard.handle_key(key(KeyCode::Enter)), Command::Navigate(ScreenId::Settings)));
    }
}
