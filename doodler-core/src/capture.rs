//! # Stroke capture
//!
//! Turns a single pointer's drag gesture into one stroke. A drag is a `Start`, any number of
//! `Move`s, then an `End`. Every move becomes exactly one point - nothing is smoothed,
//! simplified, or deduplicated.
//!
//! Only one pointer is tracked. A second `Start` before an `End` finishes the first stroke.

use crate::{state::Session, stroke::Point};

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum DragEvent {
    /// Pointer went down. Begins a stroke with a single point here.
    Start(Point),
    /// Pointer moved while down.
    Move(Point),
    /// Pointer lifted, or the gesture was cancelled. Both finish the stroke as-is.
    End,
}

impl Session {
    /// Feed one phase of a drag gesture into the session.
    pub fn handle_drag(&mut self, event: DragEvent) {
        match event {
            DragEvent::Start(point) => self.begin_stroke(point),
            DragEvent::Move(point) => {
                self.extend_stroke(point);
            }
            DragEvent::End => {
                self.end_stroke();
            }
        }
    }
}

/// One raw pointer sample: where it is, and whether the button is held.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PointerSample {
    pub pos: Point,
    pub pressed: bool,
}

/// Edge-detects a stream of [`PointerSample`]s into [`DragEvent`]s.
///
/// Press while idle starts, press while dragging moves, release while dragging ends.
/// Releases while idle are hover motion and are dropped.
#[derive(Clone, Copy, Default, Debug)]
pub struct StrokeCapture {
    dragging: bool,
}
impl StrokeCapture {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
    /// Classify a single sample.
    pub fn sample(&mut self, sample: PointerSample) -> Option<DragEvent> {
        match (self.dragging, sample.pressed) {
            (false, true) => {
                self.dragging = true;
                Some(DragEvent::Start(sample.pos))
            }
            (true, true) => Some(DragEvent::Move(sample.pos)),
            (true, false) => {
                self.dragging = false;
                Some(DragEvent::End)
            }
            (false, false) => None,
        }
    }
    /// The pointer went away without a release (left the window, device removed...).
    /// Ends the drag if one was going.
    pub fn cancel(&mut self) -> Option<DragEvent> {
        std::mem::take(&mut self.dragging).then_some(DragEvent::End)
    }
    /// Run a frame of samples straight into the session.
    pub fn process(
        &mut self,
        session: &mut Session,
        samples: impl IntoIterator<Item = PointerSample>,
    ) {
        for sample in samples {
            if let Some(event) = self.sample(sample) {
                session.handle_drag(event);
            }
        }
    }
}
