//! Color theme mapping highlight tags to terminal colors.

use crate::syntax::Highlight;
use ratatui::crossterm::style::Color;

/// Foreground color per highlight tag. `None` means the terminal's default color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTheme {
    pub comment: Option<Color>,
    pub block_comment: Option<Color>,
    /// Primary keywords (control flow, declarations).
    pub keyword1: Option<Color>,
    /// Secondary keywords (type names).
    pub keyword2: Option<Color>,
    pub string: Option<Color>,
    pub number: Option<Color>,
    pub search_match: Option<Color>,
}

impl Default for ColorTheme {
    /// Classic ANSI palette
    fn default() -> Self {
        Self {
            comment: Some(Color::DarkCyan),
            block_comment: Some(Color::DarkCyan),
            keyword1: Some(Color::DarkYellow),
            keyword2: Some(Color::DarkGreen),
            string: Some(Color::DarkMagenta),
            number: Some(Color::DarkRed),
            search_match: Some(Color::DarkBlue),
        }
    }
}

impl ColorTheme {
    /// Theme for terminals without color support: only search matches stand out.
    pub fn monochrome() -> Self {
        Self {
            comment: None,
            block_comment: None,
            keyword1: None,
            keyword2: None,
            string: None,
            number: None,
            search_match: Some(Color::White),
        }
    }

    /// Honour the `NO_COLOR` convention.
    pub fn from_env() -> Self {
        match std::env::var_os("NO_COLOR") {
            Some(value) if !value.is_empty() => Self::monochrome(),
            _ => Self::default(),
        }
    }

    pub fn color_for(&self, tag: Highlight) -> Option<Color> {
        match tag {
            Highlight::Normal => None,
            Highlight::Comment => self.comment,
            Highlight::BlockComment => self.block_comment,
            Highlight::Keyword1 => self.keyword1,
            Highlight::Keyword2 => self.keyword2,
            Highlight::String => self.string,
            Highlight::Number => self.number,
            Highlight::SearchMatch => self.search_match,
        }
    }
}
