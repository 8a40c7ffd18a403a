use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use restdeck_core::Severity;

/// UI theme configuration
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    /// Cool blue palette
    #[default]
    Ocean,
    /// Warm high-contrast palette
    Ember,
    /// Plain monochrome palette
    Monochrome,
}

impl Theme {
    /// Gets the next theme in sequence
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Ocean => Self::Ember,
            Self::Ember => Self::Monochrome,
            Self::Monochrome => Self::Ocean,
        }
    }

    /// Gets the border color
    pub fn border(self) -> Color {
        match self {
            Self::Ocean => Color::Rgb(86, 95, 137),
            Self::Ember => Color::Rgb(168, 120, 92),
            Self::Monochrome => Color::Rgb(128, 128, 128),
        }
    }

    /// Gets the accent color used for titles and the active element
    pub fn accent(self) -> Color {
        match self {
            Self::Ocean => Color::Rgb(122, 162, 247),
            Self::Ember => Color::Rgb(251, 146, 60),
            Self::Monochrome => Color::Rgb(220, 220, 220),
        }
    }

    /// Gets the text color
    pub fn text(self) -> Color {
        match self {
            Self::Ocean => Color::Rgb(192, 202, 245),
            Self::Ember => Color::Rgb(235, 219, 178),
            Self::Monochrome => Color::Rgb(255, 255, 255),
        }
    }

    /// Gets the dimmed text color for hints and placeholders
    pub fn muted(self) -> Color {
        match self {
            Self::Ocean => Color::Rgb(108, 112, 134),
            Self::Ember => Color::Rgb(146, 131, 116),
            Self::Monochrome => Color::Rgb(160, 160, 160),
        }
    }

    /// Gets the row highlight color for the current selection
    pub fn highlight(self) -> Color {
        self.accent()
    }

    /// Gets the color for a notice of the given severity
    pub fn severity(self, severity: Severity) -> Color {
        match severity {
            Severity::Success => Color::Rgb(115, 218, 133),
            Severity::Warning => Color::Rgb(229, 192, 123),
            Severity::Error => Color::Rgb(224, 108, 117),
        }
    }
}
