mod engine;
mod gesture;
mod layout;
mod paint;

pub use engine::{ChartEngine, EngineTuning, RenderEvent, SeriesEntry};
pub use gesture::{GesturePhase, PointerButton};
