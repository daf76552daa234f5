//! # Pen
//!
//! The way the pointer interacts with the canvas. Every pointer event of a frame is turned into a
//! pointer sample, in the order egui reported them, which [`StrokeCapture`] then turns into
//! stroke phases on the session.

use doodler_core::{Point, PointerSample, Session, StrokeCapture};

/// A pointer event the canvas cares about, in screen space.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum CanvasEvent {
    /// Primary button went down over the canvas.
    Press(egui::Pos2),
    Move(egui::Pos2),
    /// Primary button went up, anywhere.
    Release(egui::Pos2),
    /// The pointer left the window entirely.
    Gone,
}

/// Everything the canvas saw of the pointer this frame, in order.
#[derive(Clone, Debug, Default)]
pub struct CanvasInput {
    pub events: smallvec::SmallVec<[CanvasEvent; 8]>,
}
impl CanvasInput {
    #[must_use]
    pub fn from_response(response: &egui::Response) -> Self {
        let rect = response.rect;
        let events = response.ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerMoved(pos) => Some(CanvasEvent::Move(*pos)),
                    egui::Event::PointerButton {
                        pos,
                        button: egui::PointerButton::Primary,
                        pressed,
                        ..
                    } => {
                        if !*pressed {
                            Some(CanvasEvent::Release(*pos))
                        } else if rect.contains(*pos) {
                            Some(CanvasEvent::Press(*pos))
                        } else {
                            None
                        }
                    }
                    egui::Event::PointerGone => Some(CanvasEvent::Gone),
                    _ => None,
                })
                .collect()
        });
        Self { events }
    }
}

/// Screen position to canvas-local.
#[must_use]
pub fn to_canvas(origin: egui::Pos2, pos: egui::Pos2) -> Point {
    let local = pos - origin;
    Point::new(local.x, local.y)
}

#[derive(Default)]
pub struct Pen {
    capture: StrokeCapture,
}
impl Pen {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.capture.is_dragging()
    }
    /// Allow the pen to process this frame's input, drawing into the session.
    pub fn process(&mut self, session: &mut Session, origin: egui::Pos2, input: &CanvasInput) {
        // Whether the button is held, as of the event being looked at.
        let mut held = self.capture.is_dragging();
        let mut samples = smallvec::SmallVec::<[PointerSample; 8]>::new();

        for event in &input.events {
            let (pos, pressed) = match *event {
                CanvasEvent::Press(pos) => (pos, true),
                CanvasEvent::Move(pos) => (pos, held),
                CanvasEvent::Release(pos) => (pos, false),
                CanvasEvent::Gone => {
                    self.capture.process(session, samples.drain(..));
                    if let Some(event) = self.capture.cancel() {
                        log::debug!("pointer lost mid-stroke");
                        session.handle_drag(event);
                    }
                    held = false;
                    continue;
                }
            };
            held = pressed;
            samples.push(PointerSample {
                pos: to_canvas(origin, pos),
                pressed,
            });
        }
        self.capture.process(session, samples);
    }
}
