use crate::util::FiniteF32;

/// A premultiplied, linear color.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, bytemuck::Zeroable, Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct Color([FiniteF32; 4]);
impl Color {
    pub const WHITE: Self = Self([FiniteF32::ONE; 4]);
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    pub const RED: Self = Self::opaque(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::opaque(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::opaque(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::opaque(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::opaque(0.0, 1.0, 1.0);
    /// sRGB `#CCCCCC`, in linear.
    pub const LIGHT_GRAY: Self = Self::opaque(0.603_827_3, 0.603_827_3, 0.603_827_3);

    /// Fully opaque color from linear channels. Constants only!
    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self([
            FiniteF32::from_literal(r),
            FiniteF32::from_literal(g),
            FiniteF32::from_literal(b),
            FiniteF32::ONE,
        ])
    }
    #[must_use]
    pub fn as_array(&self) -> [f32; 4] {
        self.0.map(FiniteF32::get)
    }
}

#[cfg(test)]
mod test {
    use super::Color;
    #[test]
    fn constants_are_opaque_and_in_gamut() {
        for color in [
            Color::WHITE,
            Color::BLACK,
            Color::RED,
            Color::GREEN,
            Color::BLUE,
            Color::YELLOW,
            Color::CYAN,
            Color::LIGHT_GRAY,
        ] {
            let [r, g, b, a] = color.as_array();
            assert_eq!(a, 1.0);
            assert!([r, g, b].iter().all(|c| (0.0..=1.0).contains(c)), "{color:?}");
        }
    }
}
