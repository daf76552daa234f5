//! # Brush
//!
//! The settings a stroke captures at the moment it begins. Changing the brush afterwards
//! never touches strokes that already exist.

use crate::{
    color::Color,
    util::{FiniteF32, FiniteF32Error},
};

/// Width of a stroke, in logical pixels.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BrushSize(FiniteF32);
impl BrushSize {
    /// Range offered by input controls. The session itself accepts any finite size.
    pub const RANGE: std::ops::RangeInclusive<f32> = 4.0..=50.0;
    pub const MIN: Self = Self(FiniteF32::from_literal(4.0));
    pub const MAX: Self = Self(FiniteF32::from_literal(50.0));
    pub const DEFAULT: Self = Self(FiniteF32::from_literal(8.0));

    pub fn new(width: f32) -> Result<Self, FiniteF32Error> {
        FiniteF32::new(width).map(Self)
    }
    /// Force a raw control value into [`Self::RANGE`]. Non-finite values become the default.
    #[must_use]
    pub fn clamped(width: f32) -> Self {
        match FiniteF32::new(width) {
            Ok(width) => Self(width.clamp(Self::MIN.0, Self::MAX.0)),
            Err(_) => Self::DEFAULT,
        }
    }
    #[must_use]
    pub fn get(self) -> f32 {
        self.0.get()
    }
}
impl Default for BrushSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}
impl std::fmt::Display for BrushSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Whole pixels, truncated, like the size readout.
        #[allow(clippy::cast_possible_truncation)]
        let whole = self.get().trunc() as i64;
        write!(f, "{whole} px")
    }
}

/// Color and width for the next stroke.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct BrushSettings {
    pub color: Color,
    pub size: BrushSize,
}
impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: BrushSize::DEFAULT,
        }
    }
}
