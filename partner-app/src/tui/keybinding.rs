use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::str::FromStr;

/// Represents a keyboard key with optional modifiers (Ctrl, Alt, Shift)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a key binding with no modifiers
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Create a key binding with Ctrl modifier
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Check if this key binding matches the given key event.
    ///
    /// Character bindings ignore case and the Shift modifier, so `y` also
    /// matches `Y` when the terminal reports it with Shift held.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        match (self.code, event.code) {
            (KeyCode::Char(bound), KeyCode::Char(pressed)) => {
                let strip = |m: KeyModifiers| m.difference(KeyModifiers::SHIFT);
                bound.eq_ignore_ascii_case(&pressed) && strip(self.modifiers) == strip(event.modifiers)
            }
            _ => self.code == event.code && self.modifiers == event.modifiers,
        }
    }
}

impl From<KeyCode> for KeyBinding {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

impl FromStr for KeyBinding {
    type Err = String;

    /// Parse strings like `Esc`, `Ctrl+Q`, `Alt+Enter`, `F1` or `y`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty key binding".to_string());
        }

        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        // "Ctrl++" binds the plus key
        if s.ends_with("++") {
            parts.pop();
            if let Some(last) = parts.last_mut() {
                *last = "+";
            }
        }
        let key = parts.pop().ok_or_else(|| format!("missing key in '{}'", s))?;

        let mut modifiers = KeyModifiers::empty();
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                other => return Err(format!("unknown modifier '{}' in '{}'", other, s)),
            }
        }

        let code = parse_key_code(key).ok_or_else(|| format!("unknown key '{}' in '{}'", key, s))?;
        Ok(Self { code, modifiers })
    }
}

fn parse_key_code(key: &str) -> Option<KeyCode> {
    let lower = key.to_ascii_lowercase();
    let code = match lower.as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "delete" | "del" => KeyCode::Delete,
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=24).contains(&n).then_some(KeyCode::F(n));
            }
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch.to_ascii_lowercase()),
                _ => return None,
            }
        }
    };
    Some(code)
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("Alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("Shift+")?;
        }
        match self.code {
            KeyCode::Esc => f.write_str("Esc"),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::BackTab => f.write_str("BackTab"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::Left => f.write_str("Left"),
            KeyCode::Right => f.write_str("Right"),
            KeyCode::Up => f.write_str("Up"),
            KeyCode::Down => f.write_str("Down"),
            KeyCode::Home => f.write_str("Home"),
            KeyCode::End => f.write_str("End"),
            KeyCode::Delete => f.write_str("Delete"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_keys() {
        assert_eq!("Esc".parse::<KeyBinding>().unwrap(), KeyBinding::new(KeyCode::Esc));
        assert_eq!("y".parse::<KeyBinding>().unwrap(), KeyBinding::new(KeyCode::Char('y')));
        assert_eq!("F1".parse::<KeyBinding>().unwrap(), KeyBinding::new(KeyCode::F(1)));
    }

    #[test]
    fn test_parse_modifiers() {
        assert_eq!("Ctrl+Q".parse::<KeyBinding>().unwrap(), KeyBinding::ctrl(KeyCode::Char('q')));
        let kb: KeyBinding = "ctrl+alt+x".parse().unwrap();
        assert_eq!(kb.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<KeyBinding>().is_err());
        assert!("Hyper+Q".parse::<KeyBinding>().is_err());
        assert!("F99".parse::<KeyBinding>().is_err());
        assert!("Banana".parse::<KeyBinding>().is_err());
    }

    #[test]
    fn test_char_binding_ignores_shift() {
        let kb = KeyBinding::new(KeyCode::Char('y'));
        assert!(kb.matches(&KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT)));
        assert!(!kb.matches(&KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_display_parses_back() {
        let kb = KeyBinding::ctrl(KeyCode::Char('q'));
        assert_eq!(kb.to_string(), "Ctrl+Q");
        assert_eq!(kb.to_string().parse::<KeyBinding>().unwrap(), kb);
    }
}
