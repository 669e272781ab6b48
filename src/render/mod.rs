mod primitives;
mod recording;
mod style;
mod surface;

pub use primitives::{Color, Font, TextMetrics};
pub use recording::{DrawCall, RecordingSurface};
pub use style::RenderStyle;
pub use surface::DrawSurface;
