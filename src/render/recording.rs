use crate::core::Rect;
use crate::render::{Color, DrawSurface, Font, TextMetrics};

/// One captured draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        stroke_width: f64,
        color: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        color: Color,
    },
    Ellipse {
        center_x: f64,
        center_y: f64,
        radius_x: f64,
        radius_y: f64,
        color: Color,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        color: Color,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}

/// Headless surface used by tests and benches.
///
/// Records every call in order and answers text measurement with
/// deterministic per-glyph metrics so layout math stays reproducible
/// without a font stack.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Line { .. }))
            .count()
    }

    #[must_use]
    pub fn ellipse_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Ellipse { .. }))
            .count()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Text { .. }))
            .count()
    }

    #[must_use]
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::FillRect { .. }))
            .count()
    }

    /// Every drawn string, in draw order.
    #[must_use]
    pub fn text_contents(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Net push/pop clip depth; zero for a balanced paint pass.
    #[must_use]
    pub fn clip_depth(&self) -> isize {
        self.calls
            .iter()
            .map(|call| match call {
                DrawCall::PushClip { .. } => 1,
                DrawCall::PopClip => -1,
                _ => 0,
            })
            .sum()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke_width: f64, color: Color) {
        self.calls.push(DrawCall::StrokeRect {
            rect,
            stroke_width,
            color,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) {
        self.calls.push(DrawCall::Line {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        });
    }

    fn draw_ellipse(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius_x: f64,
        radius_y: f64,
        color: Color,
    ) {
        self.calls.push(DrawCall::Ellipse {
            center_x,
            center_y,
            radius_x,
            radius_y,
            color,
        });
    }

    fn measure_text(&mut self, text: &str, font: &Font) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f64 * font.size_px * 0.6,
            ascent: font.size_px * 0.8,
            descent: font.size_px * 0.25,
        }
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, _font: &Font, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            x,
            y,
            color,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.calls.push(DrawCall::PushClip { rect });
    }

    fn pop_clip(&mut self) {
        self.calls.push(DrawCall::PopClip);
    }
}
