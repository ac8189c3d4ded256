//! Terminal color themes.
//!
//! Theme choice is front-end configuration. It decides how validation results
//! are painted and never influences what the validator reports.

use owo_colors::{Rgb, Style};
use strum_macros::{Display, EnumString};

/// Application theme variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Dark text on a bright terminal.
    #[default]
    Light,
    /// Light text on a dark terminal.
    Dark,
}

impl Theme {
    /// Build the color palette for this theme.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::light(),
            Self::Dark => Palette::dark(),
        }
    }
}

/// Semantic colors used when painting results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Foreground of tag substrings in the source view.
    pub tag: Rgb,
    /// Background shading of lines named by an error.
    pub error_line: Rgb,
    /// Error bullet text.
    pub error: Rgb,
    /// "Valid" banner text.
    pub success: Rgb,
    /// Notices and warnings.
    pub warning: Rgb,
    /// Line annotations in the tree view.
    pub text_secondary: Rgb,
}

impl Palette {
    /// Light palette: `#1E90FF` blue tags over `#FFB6C1` pink error lines.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            tag: Rgb(30, 144, 255),
            error_line: Rgb(255, 182, 193),
            error: Rgb(220, 38, 38),
            success: Rgb(34, 197, 94),
            warning: Rgb(217, 119, 6),
            text_secondary: Rgb(107, 108, 126),
        }
    }

    /// Dark palette: sky-blue tags over a muted red.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            tag: Rgb(96, 165, 250),
            error_line: Rgb(92, 32, 44),
            error: Rgb(248, 113, 113),
            success: Rgb(74, 222, 128),
            warning: Rgb(251, 191, 36),
            text_secondary: Rgb(147, 148, 161),
        }
    }

    /// Foreground style for a palette color.
    #[must_use]
    pub fn fg(color: Rgb) -> Style {
        Style::new().truecolor(color.0, color.1, color.2)
    }

    /// Style for tag substrings.
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Self::fg(self.tag)
    }

    /// Style for a whole error line, optionally also a tag on that line.
    #[must_use]
    pub fn error_line_style(&self, is_tag: bool) -> Style {
        let base = if is_tag {
            self.tag_style()
        } else {
            Style::new()
        };
        base.on_truecolor(self.error_line.0, self.error_line.1, self.error_line.2)
    }
}
