pub mod brush;
pub mod capture;
pub mod color;
pub mod state;
pub mod stroke;
pub mod util;

pub use brush::{BrushSettings, BrushSize};
pub use capture::{DragEvent, PointerSample, StrokeCapture};
pub use color::Color;
pub use state::Session;
pub use stroke::{Point, Stroke};
