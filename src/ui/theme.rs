use crate::lexer::TokenCategory;
use ratatui::style::Color;

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            accent: Color::Rgb(247, 118, 142),  // #F7768E Coral Red
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
            warning: Color::Rgb(224, 175, 104), // #E0AF68 Amber
        }
    }

    /// Default theme is midnight
    pub fn current() -> Self {
        Self::midnight()
    }

    /// Label color for a token category, grouped by family
    pub fn category(&self, category: TokenCategory) -> Color {
        if category.is_literal_rule() {
            return Color::Rgb(125, 207, 255); // #7DCFFF Cyan, operators and punctuation
        }
        match category {
            TokenCategory::NaturalNumber
            | TokenCategory::RealNumber
            | TokenCategory::Hexadecimal => Color::Rgb(255, 158, 100), // #FF9E64 Orange
            TokenCategory::Identifier => self.text,
            TokenCategory::ReservedWord => Color::Rgb(187, 154, 247), // #BB9AF7 Purple
            TokenCategory::StringLiteral => Color::Rgb(158, 206, 106), // #9ECE6A Green
            TokenCategory::LineComment | TokenCategory::BlockComment => self.dimmed,
            _ => self.text,
        }
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use crate::lexer::TokenCategory;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn warning() -> Color {
        Theme::current().warning
    }
    pub fn category(category: TokenCategory) -> Color {
        Theme::current().category(category)
    }
}
