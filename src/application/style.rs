// ANSI styling for names and values.

use colored::Color;

/// SGR parameter for bold text.
const BOLD: &str = "1";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Argument names: bold.
    Name,
    /// Formatted values: cyan.
    Value,
}

impl Style {
    fn sgr(self) -> String {
        match self {
            Style::Name => BOLD.to_string(),
            Style::Value => Color::Cyan.to_fg_str().to_string(),
        }
    }
}

/// Wrap `text` in the style's escape sequence and a reset. With `enabled`
/// false the text is returned untouched.
///
/// `enabled` is the only switch: terminal detection and `colored`'s global
/// override play no part.
pub fn colorize(text: &str, style: Style, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("\x1b[{}m{}{}", style.sgr(), text, RESET)
}
