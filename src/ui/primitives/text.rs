use std::fmt;

use crossterm::style::Stylize;
use voxel_webpage::domain::ports::LogColor;

use crate::ui::theme;

/// A line fragment tagged with a semantic color, rendered only on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<LogColor>,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, color: Option<LogColor>) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Some(LogColor::Error))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Some(LogColor::Dim))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let Some(color) = self.color else {
            if self.bold {
                return format!("{}", self.text.as_str().bold());
            }
            return self.text.clone();
        };

        let mut styled = self.text.as_str().with(color_for(color));
        if self.bold {
            styled = styled.bold();
        }
        format!("{}", styled)
    }
}

pub fn color_for(color: LogColor) -> crossterm::style::Color {
    match color {
        LogColor::Success => theme::colors::SUCCESS,
        LogColor::Error => theme::colors::ERROR,
        LogColor::Warning => theme::colors::WARNING,
        LogColor::Info => theme::colors::INFO,
        LogColor::Dim => theme::colors::DIM,
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
