use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Mocha, // Dark theme
    Latte, // Light theme
}

#[derive(Debug, Clone)]
pub struct Theme {
    // Accents
    pub accent_primary: Color,   // Focus, selection (lavender)
    pub accent_secondary: Color, // Links, secondary actions (blue)
    pub accent_tertiary: Color,  // Modal headers (mauve)
    pub accent_error: Color,     // Destructive actions (red)
    pub accent_warning: Color,   // Pending, unsaved (yellow)
    pub accent_success: Color,   // Confirm, open (green)

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Structure
    pub border_primary: Color,
    pub bg_base: Color,
    pub bg_surface: Color,
    pub bg_elevated: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Mocha => Self::mocha(),
            ThemeVariant::Latte => Self::latte(),
        }
    }

    pub fn mocha() -> Self {
        Self {
            accent_primary: Color::Rgb(0xb4, 0xbe, 0xfe),
            accent_secondary: Color::Rgb(0x89, 0xb4, 0xfa),
            accent_tertiary: Color::Rgb(0xcb, 0xa6, 0xf7),
            accent_error: Color::Rgb(0xf3, 0x8b, 0xa8),
            accent_warning: Color::Rgb(0xf9, 0xe2, 0xaf),
            accent_success: Color::Rgb(0xa6, 0xe3, 0xa1),

            text_primary: Color::Rgb(0xcd, 0xd6, 0xf4),
            text_secondary: Color::Rgb(0xba, 0xc2, 0xde),
            text_tertiary: Color::Rgb(0xa6, 0xad, 0xc8),

            border_primary: Color::Rgb(0x7f, 0x84, 0x9c),
            bg_base: Color::Rgb(0x1e, 0x1e, 0x2e),
            bg_surface: Color::Rgb(0x31, 0x32, 0x44),
            bg_elevated: Color::Rgb(0x45, 0x47, 0x5a),
        }
    }

    pub fn latte() -> Self {
        Self {
            accent_primary: Color::Rgb(0x72, 0x87, 0xfd),
            accent_secondary: Color::Rgb(0x1e, 0x66, 0xf5),
            accent_tertiary: Color::Rgb(0x88, 0x39, 0xef),
            accent_error: Color::Rgb(0xd2, 0x0f, 0x39),
            accent_warning: Color::Rgb(0xdf, 0x8e, 0x1d),
            accent_success: Color::Rgb(0x40, 0xa0, 0x2b),

            text_primary: Color::Rgb(0x4c, 0x4f, 0x69),
            text_secondary: Color::Rgb(0x5c, 0x5f, 0x77),
            text_tertiary: Color::Rgb(0x6c, 0x6f, 0x85),

            border_primary: Color::Rgb(0x8c, 0x8f, 0xa1),
            bg_base: Color::Rgb(0xef, 0xf1, 0xf5),
            bg_surface: Color::Rgb(0xcc, 0xd0, 0xda),
            bg_elevated: Color::Rgb(0xbc, 0xc0, 0xcc),
        }
    }

    /// Base style for a full-screen surface
    pub fn surface(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.bg_base)
    }

    /// Highlighted row in a list
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .bg(self.bg_surface)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border_primary)
    }
}
