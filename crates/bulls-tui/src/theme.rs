use crossterm::style::Color;

/// Color theme for terminal output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Banners and section titles
    pub heading: Option<Color>,
    /// Wins, bulls, new records
    pub success: Option<Color>,
    /// Errors, losses, warnings
    pub error: Option<Color>,
    /// Hints
    pub hint: Option<Color>,
    /// Secondary text
    pub info: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            heading: Some(Color::Rgb { r: 255, g: 210, b: 100 }),
            success: Some(Color::Rgb { r: 90, g: 255, b: 130 }),
            error: Some(Color::Rgb { r: 255, g: 90, b: 90 }),
            hint: Some(Color::Rgb { r: 80, g: 180, b: 255 }),
            info: Some(Color::Rgb { r: 160, g: 165, b: 185 }),
        }
    }

    /// No colors at all, for redirected output
    pub fn plain() -> Self {
        Self {
            heading: None,
            success: None,
            error: None,
            hint: None,
            info: None,
        }
    }
}
