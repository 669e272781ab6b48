use thiserror::Error;

use crate::core::axis::AxisId;
use crate::core::series::SeriesId;
use crate::core::types::{AxisRole, Edge};

pub type ChartResult<T> = Result<T, ChartError>;

/// Error taxonomy for the chart core.
///
/// Only caller-recoverable conditions surface here. Degenerate numeric
/// situations (empty data, zero-width auto-range) are handled by
/// substitution policies inside the engine and never become errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid range: min={min} must not exceed max={max} and both must be finite")]
    InvalidRange { min: f64, max: f64 },

    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("append out of order: x={x} must be strictly greater than the last x={last_x}")]
    OrderViolation { x: f64, last_x: f64 },

    #[error("duplicate key: a point with x={x} is already present")]
    DuplicateKey { x: f64 },

    #[error("point index {index} out of bounds for series of length {len}")]
    PointIndexOutOfBounds { index: usize, len: usize },

    #[error("axis #{id} is already bound to the other role of this engine")]
    AxisRoleConflict { id: AxisId },

    #[error("edge {edge:?} cannot host the {role:?} axis")]
    EdgeRoleMismatch { role: AxisRole, edge: Edge },

    #[error("series #{id} is already registered with this engine")]
    DuplicateSeries { id: SeriesId },

    #[error("color channel `{channel}` must be finite and in [0, 1], got {value}")]
    InvalidColor { channel: &'static str, value: f64 },

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}
