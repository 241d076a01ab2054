use crossterm::event::KeyCode;
use crossterm::style::Color;

/// Shared color scheme state for the page demo
#[derive(Clone, Copy)]
pub struct ColorState {
    pub scheme: u8,
}

impl ColorState {
    pub fn new(default_scheme: u8) -> Self {
        Self {
            scheme: default_scheme.min(4),
        }
    }

    /// Handle color scheme key input. Returns true if key was handled.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(')') => self.scheme = 0, // Shift+0: slate
            KeyCode::Char('!') => self.scheme = 1, // Shift+1: ember
            KeyCode::Char('@') => self.scheme = 2, // Shift+2: ice
            KeyCode::Char('#') => self.scheme = 3, // Shift+3: violet
            KeyCode::Char('$') => self.scheme = 4, // Shift+4: chalk
            _ => return false,
        }
        true
    }
}

/// Get color from scheme based on intensity (0-3)
pub fn scheme_color(scheme: u8, intensity: u8, bold: bool) -> (Color, bool) {
    match scheme {
        1 => match intensity {
            // Red/Yellow (ember)
            0 => (Color::DarkRed, false),
            1 => (Color::Red, false),
            2 => (Color::DarkYellow, bold),
            _ => (Color::Yellow, true),
        },
        2 => match intensity {
            // Blue/Cyan (ice)
            0 => (Color::DarkBlue, false),
            1 => (Color::Blue, false),
            2 => (Color::Cyan, bold),
            _ => (Color::AnsiValue(14), true), // Bright cyan
        },
        3 => match intensity {
            // Magenta/Blue (violet)
            0 => (Color::DarkMagenta, false),
            1 => (Color::Magenta, false),
            2 => (Color::Blue, bold),
            _ => (Color::AnsiValue(13), true), // Bright magenta
        },
        4 => match intensity {
            // White on white (chalk)
            0 => (Color::Grey, false),
            1 => (Color::White, false),
            2 => (Color::White, bold),
            _ => (Color::White, true),
        },
        _ => match intensity {
            // Default: Grey/Silver (slate) - the site's gradient
            0 => (Color::DarkGrey, false),
            1 => (Color::Grey, false),
            2 => (Color::Grey, true),
            _ => (Color::White, true),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_digits_select_schemes() {
        let mut state = ColorState::new(0);
        assert!(state.handle_key(KeyCode::Char('@')));
        assert_eq!(state.scheme, 2);
        assert!(state.handle_key(KeyCode::Char(')')));
        assert_eq!(state.scheme, 0);
        assert!(!state.handle_key(KeyCode::Char('z')));
    }

    #[test]
    fn out_of_range_default_is_clamped() {
        assert_eq!(ColorState::new(99).scheme, 4);
    }
}
