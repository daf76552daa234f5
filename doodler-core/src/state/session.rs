//! # Session
//!
//! Everything a drawing session knows: the current brush and background, the strokes
//! drawn since the last save or clear, and the strokes that have been saved.
//!
//! There is no separate handle for the stroke being drawn. While a drag is in progress the
//! *last* unsaved stroke is the active one, so it can never be anywhere else.

use crate::{
    brush::{BrushSettings, BrushSize},
    color::Color,
    stroke::{Point, Stroke},
};

#[derive(Clone, Debug)]
pub struct Session {
    brush: BrushSettings,
    background: Color,
    /// Oldest first.
    unsaved: Vec<Stroke>,
    /// Oldest first.
    saved: Vec<Stroke>,
    /// If set, `unsaved.last()` is the active stroke.
    /// Invariant: only set if `unsaved` is non-empty.
    drawing: bool,
}
impl Default for Session {
    fn default() -> Self {
        Self::new(BrushSettings::default(), Color::WHITE)
    }
}
// Settings
impl Session {
    #[must_use]
    pub fn new(brush: BrushSettings, background: Color) -> Self {
        Self {
            brush,
            background,
            unsaved: Vec::new(),
            saved: Vec::new(),
            drawing: false,
        }
    }
    /// Applies to strokes started after this call.
    pub fn set_brush_color(&mut self, color: Color) {
        log::debug!("brush color -> {color:?}");
        self.brush.color = color;
    }
    /// Applies to strokes started after this call. Range limits are the input control's job.
    pub fn set_brush_size(&mut self, size: BrushSize) {
        log::debug!("brush size -> {size}");
        self.brush.size = size;
    }
    pub fn set_background_color(&mut self, color: Color) {
        log::debug!("background color -> {color:?}");
        self.background = color;
    }
    #[must_use]
    pub fn brush(&self) -> BrushSettings {
        self.brush
    }
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background
    }
}
// Bulk operations
impl Session {
    /// Discard everything drawn since the last save, including a stroke in progress.
    pub fn clear_unsaved(&mut self) {
        log::debug!("clearing {} unsaved strokes", self.unsaved.len());
        self.unsaved.clear();
        self.drawing = false;
    }
    /// Discard every stroke, saved or not.
    pub fn clear_all(&mut self) {
        log::debug!(
            "clearing {} unsaved and {} saved strokes",
            self.unsaved.len(),
            self.saved.len()
        );
        self.unsaved.clear();
        self.saved.clear();
        self.drawing = false;
    }
    /// Move every unsaved stroke, in order, to the end of the saved strokes.
    ///
    /// A stroke still being drawn is finished where it stands and saved along with the rest.
    /// The rest of that drag draws nothing.
    pub fn save_all(&mut self) {
        if self.drawing {
            log::debug!(
                "saving mid-stroke, finishing active stroke at {} points",
                self.unsaved.last().map_or(0, Stroke::len)
            );
            self.drawing = false;
        }
        log::debug!("saving {} strokes", self.unsaved.len());
        self.saved.append(&mut self.unsaved);
    }
}
// Stroke lifecycle, driven by [`crate::capture`].
impl Session {
    /// Start a new active stroke at `start` with the current brush.
    ///
    /// Only one stroke may be active. If one already is, it is finished first.
    pub fn begin_stroke(&mut self, start: Point) {
        if self.drawing {
            log::warn!("stroke started while another was active, finishing the previous one");
        }
        self.unsaved.push(Stroke::new(self.brush, start));
        self.drawing = true;
    }
    /// Append a point to the active stroke. Returns false, doing nothing, if there is none.
    pub fn extend_stroke(&mut self, point: Point) -> bool {
        match self.active_stroke_mut() {
            Some(stroke) => {
                log::trace!("stroke point {:?}", point.pos);
                stroke.push(point);
                true
            }
            None => {
                log::trace!("dropped point {:?}, no active stroke", point.pos);
                false
            }
        }
    }
    /// Finish the active stroke, leaving it in place among the unsaved strokes.
    /// Returns false if there was none.
    pub fn end_stroke(&mut self) -> bool {
        let was_drawing = std::mem::take(&mut self.drawing);
        if was_drawing {
            log::debug!(
                "stroke finished with {} points",
                self.unsaved.last().map_or(0, Stroke::len)
            );
        }
        was_drawing
    }
    fn active_stroke_mut(&mut self) -> Option<&mut Stroke> {
        if self.drawing {
            self.unsaved.last_mut()
        } else {
            None
        }
    }
}
// Read access
impl Session {
    /// Strokes drawn since the last save or clear, oldest first. Includes the active stroke.
    #[must_use]
    pub fn unsaved_strokes(&self) -> &[Stroke] {
        &self.unsaved
    }
    #[must_use]
    pub fn saved_strokes(&self) -> &[Stroke] {
        &self.saved
    }
    /// The stroke currently receiving points, if a drag is in progress.
    #[must_use]
    pub fn active_stroke(&self) -> Option<&Stroke> {
        if self.drawing {
            self.unsaved.last()
        } else {
            None
        }
    }
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
    /// Every stroke in the order it should be painted: saved, then unsaved. The active stroke,
    /// being the newest unsaved stroke, comes last.
    pub fn render_order(&self) -> impl DoubleEndedIterator<Item = &Stroke> + '_ {
        self.saved.iter().chain(self.unsaved.iter())
    }
}

#[cfg(test)]
mod test {
    use super::Session;
    use crate::{brush::BrushSize, color::Color, stroke::Point};

    /// Draw a whole stroke through the given points.
    fn draw(session: &mut Session, points: &[(f32, f32)]) {
        let (first, rest) = points.split_first().unwrap();
        session.begin_stroke((*first).into());
        for &point in rest {
            assert!(session.extend_stroke(point.into()));
        }
        assert!(session.end_stroke());
    }

    #[test]
    fn active_stroke_is_last_unsaved() {
        let mut session = Session::default();
        draw(&mut session, &[(0.0, 0.0)]);
        session.begin_stroke(Point::new(5.0, 5.0));
        session.extend_stroke(Point::new(6.0, 6.0));

        let active = session.active_stroke().unwrap();
        assert_eq!(active, session.unsaved_strokes().last().unwrap());
        assert_eq!(active.len(), 2);
        assert!(session.is_drawing());

        assert!(session.end_stroke());
        assert!(session.active_stroke().is_none());
        assert_eq!(session.unsaved_strokes().len(), 2);
    }
    #[test]
    fn extend_without_active_is_ignored() {
        let mut session = Session::default();
        assert!(!session.extend_stroke(Point::new(1.0, 1.0)));
        assert!(!session.end_stroke());
        draw(&mut session, &[(0.0, 0.0)]);
        assert!(!session.extend_stroke(Point::new(1.0, 1.0)));
        assert_eq!(session.unsaved_strokes()[0].len(), 1);
    }
    #[test]
    fn clear_unsaved_keeps_saved() {
        let mut session = Session::default();
        draw(&mut session, &[(0.0, 0.0), (1.0, 0.0)]);
        session.save_all();
        draw(&mut session, &[(2.0, 2.0), (3.0, 3.0)]);
        session.begin_stroke(Point::new(9.0, 9.0));
        let saved_before = session.saved_strokes().to_vec();

        session.clear_unsaved();
        assert!(session.unsaved_strokes().is_empty());
        assert!(session.active_stroke().is_none());
        assert_eq!(session.saved_strokes(), saved_before.as_slice());
    }
    #[test]
    fn clear_all_empties_everything() {
        let mut session = Session::default();
        draw(&mut session, &[(0.0, 0.0), (1.0, 0.0)]);
        session.save_all();
        draw(&mut session, &[(2.0, 2.0)]);
        session.begin_stroke(Point::new(9.0, 9.0));

        session.clear_all();
        assert!(session.unsaved_strokes().is_empty());
        assert!(session.saved_strokes().is_empty());
        assert!(!session.is_drawing());
    }
    #[test]
    fn save_preserves_order_and_repeats_safely() {
        let mut session = Session::default();
        draw(&mut session, &[(0.0, 0.0), (1.0, 1.0)]);
        draw(&mut session, &[(5.0, 5.0), (6.0, 6.0)]);
        let a = session.unsaved_strokes()[0].clone();
        let b = session.unsaved_strokes()[1].clone();

        session.save_all();
        assert_eq!(session.saved_strokes(), &[a.clone(), b.clone()]);
        assert!(session.unsaved_strokes().is_empty());

        session.save_all();
        assert_eq!(session.saved_strokes(), &[a.clone(), b.clone()]);

        // Later saves append after earlier ones.
        draw(&mut session, &[(7.0, 7.0)]);
        let c = session.unsaved_strokes()[0].clone();
        session.save_all();
        assert_eq!(session.saved_strokes(), &[a, b, c]);
    }
    #[test]
    fn clear_then_save_saves_nothing() {
        let mut session = Session::default();
        draw(&mut session, &[(0.0, 0.0), (1.0, 1.0)]);
        session.clear_unsaved();
        session.save_all();
        assert!(session.saved_strokes().is_empty());
    }
    #[test]
    fn save_mid_stroke_includes_partial_stroke() {
        let mut session = Session::default();
        session.begin_stroke(Point::new(0.0, 0.0));
        session.extend_stroke(Point::new(1.0, 0.0));

        session.save_all();
        assert!(!session.is_drawing());
        assert!(session.unsaved_strokes().is_empty());
        assert_eq!(
            session.saved_strokes()[0].points(),
            &[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]
        );

        // The rest of the drag goes nowhere, and the saved stroke is untouched.
        assert!(!session.extend_stroke(Point::new(2.0, 0.0)));
        assert!(!session.end_stroke());
        assert_eq!(session.saved_strokes()[0].len(), 2);
        assert!(session.unsaved_strokes().is_empty());
    }
    #[test]
    fn begin_while_active_finishes_previous() {
        let mut session = Session::default();
        session.begin_stroke(Point::new(0.0, 0.0));
        session.extend_stroke(Point::new(1.0, 0.0));
        session.begin_stroke(Point::new(10.0, 10.0));
        session.extend_stroke(Point::new(11.0, 10.0));
        session.end_stroke();

        let unsaved = session.unsaved_strokes();
        assert_eq!(unsaved.len(), 2);
        assert_eq!(unsaved[0].len(), 2);
        assert_eq!(
            unsaved[1].points(),
            &[Point::new(10.0, 10.0), Point::new(11.0, 10.0)]
        );
    }
    #[test]
    fn brush_changes_are_not_retroactive() {
        let mut session = Session::default();
        session.set_brush_color(Color::RED);
        session.set_brush_size(BrushSize::new(20.0).unwrap());
        draw(&mut session, &[(0.0, 0.0), (1.0, 1.0)]);

        session.set_brush_color(Color::BLUE);
        session.set_brush_size(BrushSize::new(4.0).unwrap());
        draw(&mut session, &[(2.0, 2.0), (3.0, 3.0)]);

        let [a, b] = session.unsaved_strokes() else {
            panic!("expected two strokes");
        };
        assert_eq!(a.color(), Color::RED);
        assert_eq!(a.width().get(), 20.0);
        assert_eq!(b.color(), Color::BLUE);
        assert_eq!(b.width().get(), 4.0);
    }
    #[test]
    fn brush_change_mid_stroke_does_not_affect_it() {
        let mut session = Session::default();
        session.begin_stroke(Point::new(0.0, 0.0));
        session.set_brush_color(Color::GREEN);
        session.extend_stroke(Point::new(1.0, 0.0));
        session.end_stroke();
        assert_eq!(session.unsaved_strokes()[0].color(), Color::BLACK);
        assert_eq!(session.brush().color, Color::GREEN);
    }
    #[test]
    fn background_is_independent_of_strokes() {
        let mut session = Session::default();
        draw(&mut session, &[(0.0, 0.0)]);
        session.set_background_color(Color::CYAN);
        assert_eq!(session.background_color(), Color::CYAN);
        assert_eq!(session.unsaved_strokes()[0].color(), Color::BLACK);
    }
    #[test]
    fn render_order_saved_then_unsaved() {
        let mut session = Session::default();
        draw(&mut session, &[(0.0, 0.0)]);
        session.save_all();
        draw(&mut session, &[(1.0, 1.0)]);
        session.begin_stroke(Point::new(2.0, 2.0));

        let firsts: Vec<_> = session.render_order().map(|s| s.first()).collect();
        assert_eq!(
            firsts,
            [
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0)
            ]
        );
        assert_eq!(
            session.render_order().next_back(),
            session.active_stroke()
        );
    }
}
