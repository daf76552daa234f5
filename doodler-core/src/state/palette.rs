//! # Palettes
//!
//! The fixed sets of colors offered for the brush and for the canvas background.

use crate::color::Color;

/// Brush colors available from the tool panel.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    strum::EnumIter,
    strum::AsRefStr,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum BrushSwatch {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Yellow,
}
impl BrushSwatch {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Black => Color::BLACK,
            Self::Red => Color::RED,
            Self::Green => Color::GREEN,
            Self::Blue => Color::BLUE,
            Self::Yellow => Color::YELLOW,
        }
    }
    /// Find the swatch showing this exact color, if any.
    #[must_use]
    pub fn from_color(color: Color) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|swatch| swatch.color() == color)
    }
}

/// Background colors available from the tool panel.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    strum::EnumIter,
    strum::AsRefStr,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum BackgroundSwatch {
    #[default]
    White,
    LightGray,
    Yellow,
    Cyan,
}
impl BackgroundSwatch {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::White => Color::WHITE,
            Self::LightGray => Color::LIGHT_GRAY,
            Self::Yellow => Color::YELLOW,
            Self::Cyan => Color::CYAN,
        }
    }
    #[must_use]
    pub fn from_color(color: Color) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|swatch| swatch.color() == color)
    }
}
