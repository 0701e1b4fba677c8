//! Badges and text styles.

use owo_colors::{OwoColorize, Style};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
            (Self::Info, true) => "[\u{2139}]",
            (Self::Info, false) => "[INFO]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => Style::new().green().bold(),
            Self::Warn => Style::new().yellow().bold(),
            Self::Err => Style::new().red().bold(),
            Self::Info => Style::new().cyan(),
        }
    }
}

pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    /// Highlight for command names.
    pub fn accent() -> Style {
        Style::new().yellow().bold()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_display_ascii() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_badge_display_unicode() {
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("text", styles::bold(), false), "text");
    }

    #[test]
    fn test_styled_with_color_adds_escapes() {
        let out = styled("text", Badge::Err.style(), true);
        assert!(out.contains("text"));
        assert!(out.contains('\x1b'));
    }
}
