pub mod palette;
pub mod session;

pub use palette::{BackgroundSwatch, BrushSwatch};
pub use session::Session;
