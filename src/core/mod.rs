pub mod axis;
pub mod range;
pub mod series;
pub mod ticks;
pub mod types;

pub use axis::{Axis, AxisEvent, AxisHandle, AxisId};
pub use range::Range;
pub use series::{Series, SeriesBounds, SeriesEvent, SeriesHandle, SeriesId, SeriesMode};
pub use ticks::TickPlan;
pub use types::{AxisRole, DataPoint, Edge, Insets, PixelPoint, Rect};
