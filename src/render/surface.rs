use crate::core::Rect;
use crate::render::{Color, Font, TextMetrics};

/// Contract implemented by the host's drawing backend.
///
/// The engine emits an ordered sequence of these calls during a paint pass
/// and performs no pixel work itself; text measurement is routed through the
/// same surface so layout can reserve space for real glyphs.
///
/// Text coordinates address the baseline origin of the run.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, stroke_width: f64, color: Color);

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color);

    /// Filled ellipse centered on (`center_x`, `center_y`); point markers use
    /// equal radii.
    fn draw_ellipse(&mut self, center_x: f64, center_y: f64, radius_x: f64, radius_y: f64, color: Color);

    fn measure_text(&mut self, text: &str, font: &Font) -> TextMetrics;

    fn draw_text(&mut self, text: &str, x: f64, y: f64, font: &Font, color: Color);

    /// Restricts subsequent drawing to `rect` until the matching
    /// [`DrawSurface::pop_clip`].
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);
}
