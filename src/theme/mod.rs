mod colors;

use ratatui::style::Color;

use colors::{EmberColors, PaperColors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: Color,
    pub surface: Color,
    pub border: Color,
    pub accent: Color,
    pub bar_bg: Color,
    pub text_on_bar: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    pub fn ember() -> Self {
        Self {
            name: "ember",
            bg: EmberColors::BG,
            surface: EmberColors::SURFACE,
            border: EmberColors::BORDER,
            accent: EmberColors::ACCENT,
            bar_bg: EmberColors::SURFACE,
            text_on_bar: EmberColors::TEXT_PRIMARY,
            text_primary: EmberColors::TEXT_PRIMARY,
            text_secondary: EmberColors::TEXT_SECONDARY,
            success: EmberColors::SUCCESS,
            warning: EmberColors::WARNING,
            error: EmberColors::ERROR,
        }
    }

    pub fn paper() -> Self {
        Self {
            name: "paper",
            bg: PaperColors::BG,
            surface: PaperColors::SURFACE,
            border: PaperColors::BORDER,
            accent: PaperColors::ACCENT,
            bar_bg: PaperColors::TEXT_PRIMARY,
            text_on_bar: PaperColors::SURFACE,
            text_primary: PaperColors::TEXT_PRIMARY,
            text_secondary: PaperColors::TEXT_SECONDARY,
            success: PaperColors::SUCCESS,
            warning: PaperColors::WARNING,
            error: PaperColors::ERROR,
        }
    }

    pub fn next(self) -> Self {
        match self.name {
            "ember" => Self::paper(),
            _ => Self::ember(),
        }
    }

    /// Parse a theme name leniently; unknown names get the default.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "paper" | "light" => Self::paper(),
            _ => Self::ember(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ember()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycles() {
        assert_eq!(Theme::ember().next().name, "paper");
        assert_eq!(Theme::paper().next().name, "ember");
    }

    #[test]
    fn test_from_name_loose() {
        assert_eq!(Theme::from_name("Paper").name, "paper");
        assert_eq!(Theme::from_name("light").name, "paper");
        assert_eq!(Theme::from_name("anything").name, "ember");
    }
}
