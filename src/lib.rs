//! xychart: interactive 2D chart engine core.
//!
//! The crate owns the coordinate-mapping and layout math of an XY chart —
//! axis value↔pixel transforms, auto-ranging, adaptive tick intervals,
//! multi-series composition, and the pan/box-zoom gesture state machine —
//! plus the synchronous notification graph that keeps a host view in step
//! with mutable model state. Pixel drawing stays behind the
//! [`render::DrawSurface`] trait implemented by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod observe;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, EngineTuning, GesturePhase, PointerButton, RenderEvent};
pub use error::{ChartError, ChartResult};
