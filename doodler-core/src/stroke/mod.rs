//! # Strokes
//!
//! One continuous line drawn by a single drag. Points are kept exactly as reported,
//! in the order they arrived.

use crate::{
    brush::{BrushSettings, BrushSize},
    color::Color,
};

/// A single sampled position, in canvas-local logical pixels.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Point {
    pub pos: [f32; 2],
}
impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }
}
impl From<[f32; 2]> for Point {
    fn from(pos: [f32; 2]) -> Self {
        Self { pos }
    }
}
impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { pos: [x, y] }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Stroke {
    /// Fixed at creation.
    brush: BrushSettings,
    /// Invariant: never empty. Append-only, and only while the stroke is active.
    points: Vec<Point>,
}
impl Stroke {
    /// Begin a stroke at `start`, capturing the current brush.
    #[must_use]
    pub fn new(brush: BrushSettings, start: Point) -> Self {
        Self {
            brush,
            points: vec![start],
        }
    }
    /// Only the session may extend a stroke, and only the active one.
    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[must_use]
    pub fn first(&self) -> Point {
        self.points[0]
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Only a single point - there are no segments to draw, so it shows as a dot.
    #[must_use]
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }
    #[must_use]
    pub fn brush(&self) -> BrushSettings {
        self.brush
    }
    #[must_use]
    pub fn color(&self) -> Color {
        self.brush.color
    }
    #[must_use]
    pub fn width(&self) -> BrushSize {
        self.brush.size
    }
}

#[cfg(test)]
mod test {
    use super::{Point, Stroke};
    use crate::{brush::BrushSettings, color::Color};
    #[test]
    fn starts_with_one_point() {
        let stroke = Stroke::new(BrushSettings::default(), Point::new(3.0, 4.0));
        assert!(stroke.is_dot());
        assert!(!stroke.is_empty());
        assert_eq!(stroke.points(), &[Point::new(3.0, 4.0)]);
        assert_eq!(stroke.color(), Color::BLACK);
    }
    #[test]
    fn push_keeps_order_and_duplicates() {
        let mut stroke = Stroke::new(BrushSettings::default(), Point::new(0.0, 0.0));
        stroke.push(Point::new(1.0, 1.0));
        stroke.push(Point::new(1.0, 1.0));
        stroke.push(Point::new(-2.0, 5.0));
        assert_eq!(
            stroke.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(-2.0, 5.0),
            ]
        );
    }
}
