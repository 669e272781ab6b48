use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Font};

/// Complete presentation surface of the engine: draw toggles, palette,
/// fonts, and optional title. Every field is host-configurable; the engine
/// only reads it during paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub draw_line: bool,
    pub draw_shape: bool,
    pub draw_grid: bool,

    pub background: Color,
    pub plot_background: Color,
    pub grid_color: Color,
    pub axis_frame_color: Color,
    pub tick_color: Color,
    pub tick_text_color: Color,
    pub axis_text_color: Color,

    pub tick_font: Font,
    pub axis_font: Font,

    pub title: Option<String>,
    pub title_color: Color,
    pub title_font: Font,

    /// Color assigned to series added without an explicit one.
    pub default_series_color: Color,
    pub line_width_px: f64,
    pub marker_radius_px: f64,

    /// Translucent fill of the box-zoom rubber band.
    pub rubber_band_fill: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            draw_line: true,
            draw_shape: true,
            draw_grid: true,

            background: Color::gray(0.96),
            plot_background: Color::WHITE,
            grid_color: Color::gray(0.85),
            axis_frame_color: Color::gray(0.60),
            tick_color: Color::gray(0.40),
            tick_text_color: Color::gray(0.25),
            axis_text_color: Color::gray(0.15),

            tick_font: Font::new("sans-serif", 11.0),
            axis_font: Font::new("sans-serif", 12.0),

            title: None,
            title_color: Color::gray(0.10),
            title_font: Font::new("sans-serif", 16.0),

            default_series_color: Color::rgb(0.82, 0.10, 0.14),
            line_width_px: 1.5,
            marker_radius_px: 3.0,

            rubber_band_fill: Color::rgb(0.0, 0.0, 1.0).with_alpha(0.39),
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.background,
            self.plot_background,
            self.grid_color,
            self.axis_frame_color,
            self.tick_color,
            self.tick_text_color,
            self.axis_text_color,
            self.title_color,
            self.default_series_color,
            self.rubber_band_fill,
        ] {
            color.validate()?;
        }
        for font in [&self.tick_font, &self.axis_font, &self.title_font] {
            if !font.size_px.is_finite() || font.size_px <= 0.0 {
                return Err(ChartError::InvalidStyle(format!(
                    "font size must be finite and > 0, got {}",
                    font.size_px
                )));
            }
        }
        if !self.line_width_px.is_finite() || self.line_width_px <= 0.0 {
            return Err(ChartError::InvalidStyle(
                "series line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.marker_radius_px.is_finite() || self.marker_radius_px <= 0.0 {
            return Err(ChartError::InvalidStyle(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
