//! Paints a session onto an egui canvas.
//!
//! Strokes are drawn as a polyline with a disc at every point, giving round caps and joins.
//! A single-point stroke is just the disc.

use doodler_core::{Color, Session, Stroke};

/// Convert a premultiplied linear color into egui's representation.
#[must_use]
pub fn to_egui(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.as_array();
    egui::Rgba::from_rgba_premultiplied(r, g, b, a).into()
}

/// Shapes for one stroke, offset so that canvas-local `[0, 0]` lands at `origin`.
#[must_use]
pub fn stroke_shapes(origin: egui::Pos2, stroke: &Stroke) -> Vec<egui::Shape> {
    let color = to_egui(stroke.color());
    let width = stroke.width().get();
    let points: Vec<egui::Pos2> = stroke
        .points()
        .iter()
        .map(|point| origin + egui::vec2(point.pos[0], point.pos[1]))
        .collect();

    let mut shapes = Vec::with_capacity(points.len() + 1);
    for &center in &points {
        shapes.push(egui::Shape::circle_filled(center, width / 2.0, color));
    }
    if points.len() > 1 {
        shapes.push(egui::Shape::line(points, egui::Stroke::new(width, color)));
    }
    shapes
}

/// Paint every stroke in the session, in render order. Background is left to the caller.
pub fn paint_session(painter: &egui::Painter, origin: egui::Pos2, session: &Session) {
    for stroke in session.render_order() {
        painter.extend(stroke_shapes(origin, stroke));
    }
}

/// Outline of the brush under the pointer, contrasting with the background.
pub fn paint_cursor(painter: &egui::Painter, at: egui::Pos2, session: &Session) {
    let background: egui::Rgba = to_egui(session.background_color()).into();
    // Flip intensity so the outline shows on both light and dark backgrounds.
    let outline = egui::Rgba::from_gray(1.0 - background.intensity());
    let brush = session.brush();
    painter.circle_stroke(
        at,
        brush.size.get() / 2.0,
        egui::Stroke::new(1.0, egui::Color32::from(outline)),
    );
}
