//! Utility types, used throughout the crate.

/// A float which is always finite. Used for anything that ends up as a brush width or
/// color channel, where infinities and NaN would poison rendering.
// Because of the preconditions invalidating many bitpatterns, this is not Pod.
#[derive(Copy, Clone, PartialEq, PartialOrd, bytemuck::NoUninit, bytemuck::Zeroable, Debug)]
#[repr(transparent)]
pub struct FiniteF32(f32);
impl FiniteF32 {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);
    /// `-0.0` is stored as `0.0`, so equal values share one bit pattern.
    pub fn new(val: f32) -> Result<Self, FiniteF32Error> {
        if val.is_finite() {
            Ok(Self(if val == 0.0 { 0.0 } else { val }))
        } else {
            Err(FiniteF32Error::NotFinite)
        }
    }
    /// Wrap a literal. Only for use in constants, where the value is known by inspection.
    pub(crate) const fn from_literal(val: f32) -> Self {
        Self(val)
    }
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
    /// Clamp into `[min, max]`. NaN can't occur, so this is total.
    #[must_use = "returns a new value and does not modify `self`"]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }
}

impl Default for FiniteF32 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f32> for FiniteF32 {
    type Error = FiniteF32Error;
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl From<FiniteF32> for f32 {
    fn from(value: FiniteF32) -> Self {
        value.get()
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiniteF32Error {
    #[error("not finite")]
    NotFinite,
}

// Never NaN, so PartialEq can act like Eq
impl Eq for FiniteF32 {}
#[allow(clippy::derive_ord_xor_partial_ord)]
impl Ord for FiniteF32 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Never NaN, so never `None`.
        self.partial_cmp(other).unwrap_or(std::cmp::Ordering::Equal)
    }
}
impl std::hash::Hash for FiniteF32 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Zero is normalized on construction, so equal values hash equal.
        state.write_u32(self.0.to_bits());
    }
}
