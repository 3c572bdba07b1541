//! Display font preference

use std::{fmt, str::FromStr};

use serde::Serialize;

/// Point size of the countdown label.
///
/// Purely cosmetic: owned by the presentation layer, never read by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u32")]
pub enum FontSize {
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
}

impl FontSize {
    /// Every selectable size, smallest first
    pub const ALL: [FontSize; 4] = [
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::ExtraLarge,
    ];

    pub fn points(self) -> u32 {
        match self {
            FontSize::Small => 12,
            FontSize::Medium => 16,
            FontSize::Large => 24,
            FontSize::ExtraLarge => 36,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
            FontSize::ExtraLarge => "Extra Large",
        }
    }

    /// Spaces inserted between glyphs when rendering the label in a terminal
    pub fn letter_spacing(self) -> usize {
        match self {
            FontSize::Small => 0,
            FontSize::Medium => 1,
            FontSize::Large => 2,
            FontSize::ExtraLarge => 3,
        }
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> Self {
        size.points()
    }
}

impl TryFrom<u32> for FontSize {
    type Error = String;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        FontSize::ALL
            .into_iter()
            .find(|size| size.points() == points)
            .ok_or_else(|| format!("unsupported font size {points} (expected 12, 16, 24 or 36)"))
    }
}

impl FromStr for FontSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        if let Ok(points) = normalized.parse::<u32>() {
            return FontSize::try_from(points);
        }
        FontSize::ALL
            .into_iter()
            .find(|size| size.label().to_lowercase() == normalized)
            .ok_or_else(|| format!("unknown font size '{s}'"))
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}pt)", self.label(), self.points())
    }
}
