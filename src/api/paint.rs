use crate::core::{Axis, Edge, Rect};
use crate::error::ChartResult;
use crate::render::DrawSurface;

use super::engine::ChartEngine;
use super::layout::{LABEL_GAP_PX, Layout, TICK_LENGTH_PX};

impl ChartEngine {
    /// Runs one full paint cycle against the host-supplied surface:
    /// auto-range, layout, then an ordered sequence of draw calls
    /// (background, grid and axes, clipped series geometry, rubber band,
    /// title). Returns without drawing when the plot area is too small.
    pub fn paint(
        &mut self,
        surface: &mut dyn DrawSurface,
        width: f64,
        height: f64,
    ) -> ChartResult<()> {
        self.style.validate()?;
        self.auto_range_pass();
        let layout = self.compute_layout(surface, width, height);
        self.area = layout.plot;
        if !layout.plot.is_drawable() {
            return Ok(());
        }

        surface.fill_rect(Rect::new(0.0, 0.0, width, height), self.style.background);
        surface.fill_rect(layout.plot, self.style.plot_background);

        self.draw_axes(surface, &layout);
        self.draw_series(surface, layout.plot);
        self.draw_rubber_band(surface);
        self.draw_title(surface, &layout);

        Ok(())
    }

    fn draw_axes(&self, surface: &mut dyn DrawSurface, layout: &Layout) {
        let slots = [
            (self.domain.as_ref(), layout.domain_band),
            (self.range_axis.as_ref(), layout.range_band),
        ];
        for (slot, band) in slots {
            let (Some(slot), Some(band)) = (slot, band) else {
                continue;
            };
            let axis = slot.handle.borrow();
            self.draw_axis(surface, &axis, slot.edge, band, layout.plot);
        }
    }

    fn draw_axis(
        &self,
        surface: &mut dyn DrawSurface,
        axis: &Axis,
        edge: Edge,
        band: Rect,
        plot: Rect,
    ) {
        let style = &self.style;
        surface.stroke_rect(band, 1.0, style.axis_frame_color);

        if let Some(plan) = self.tick_plan_for(axis, edge, plot, surface) {
            for tick in plan.ticks() {
                let p = axis.value_to_point(tick, plot, edge);
                let inside = if edge.is_horizontal() {
                    p >= plot.x && p <= plot.right()
                } else {
                    p >= plot.y && p <= plot.bottom()
                };
                if !inside {
                    continue;
                }

                if style.draw_grid {
                    if edge.is_horizontal() {
                        surface.draw_line(p, plot.y, p, plot.bottom(), 1.0, style.grid_color);
                    } else {
                        surface.draw_line(plot.x, p, plot.right(), p, 1.0, style.grid_color);
                    }
                }

                match edge {
                    Edge::Bottom => surface.draw_line(
                        p,
                        plot.bottom(),
                        p,
                        plot.bottom() + TICK_LENGTH_PX,
                        1.0,
                        style.tick_color,
                    ),
                    Edge::Top => {
                        surface.draw_line(p, plot.y - TICK_LENGTH_PX, p, plot.y, 1.0, style.tick_color)
                    }
                    Edge::Left => {
                        surface.draw_line(plot.x - TICK_LENGTH_PX, p, plot.x, p, 1.0, style.tick_color)
                    }
                    Edge::Right => surface.draw_line(
                        plot.right(),
                        p,
                        plot.right() + TICK_LENGTH_PX,
                        p,
                        1.0,
                        style.tick_color,
                    ),
                }

                let label = plan.format_label(tick);
                let metrics = surface.measure_text(&label, &style.tick_font);
                let (text_x, text_y) = match edge {
                    Edge::Bottom => (
                        p - metrics.width / 2.0,
                        plot.bottom() + TICK_LENGTH_PX + LABEL_GAP_PX + metrics.ascent,
                    ),
                    Edge::Top => (
                        p - metrics.width / 2.0,
                        plot.y - TICK_LENGTH_PX - LABEL_GAP_PX - metrics.descent,
                    ),
                    Edge::Left => (
                        plot.x - TICK_LENGTH_PX - LABEL_GAP_PX - metrics.width,
                        p + metrics.descent,
                    ),
                    Edge::Right => (
                        plot.right() + TICK_LENGTH_PX + LABEL_GAP_PX,
                        p + metrics.descent,
                    ),
                };
                surface.draw_text(&label, text_x, text_y, &style.tick_font, style.tick_text_color);
            }
        }

        if !axis.name().is_empty() {
            let metrics = surface.measure_text(axis.name(), &style.axis_font);
            let (name_x, name_y) = match edge {
                Edge::Bottom => (
                    band.x + (band.width - metrics.width) / 2.0,
                    band.bottom() - metrics.descent,
                ),
                Edge::Top => (
                    band.x + (band.width - metrics.width) / 2.0,
                    band.y + metrics.ascent,
                ),
                // vertical axis names sit horizontally just above the band
                Edge::Left | Edge::Right => (band.x, band.y - LABEL_GAP_PX),
            };
            surface.draw_text(
                axis.name(),
                name_x,
                name_y,
                &style.axis_font,
                style.axis_text_color,
            );
        }
    }

    fn draw_series(&self, surface: &mut dyn DrawSurface, plot: Rect) {
        let (Some(domain), Some(range_axis)) = (self.domain.as_ref(), self.range_axis.as_ref())
        else {
            return;
        };
        if self.series.is_empty() {
            return;
        }
        let domain_axis = domain.handle.borrow();
        let vertical_axis = range_axis.handle.borrow();
        // a collapsed range has no defined transform; skip the geometry
        // like the tick planner does
        for axis in [&domain_axis, &vertical_axis] {
            let width = axis.range().width();
            if !(width.is_finite() && width > 0.0) {
                return;
            }
        }

        surface.push_clip(plot);
        for entry in self.series.values() {
            let series = entry.handle.borrow();
            let points = series.points();

            if self.style.draw_line {
                for pair in points.windows(2) {
                    let x1 = domain_axis.value_to_point(pair[0].x, plot, domain.edge);
                    let y1 = vertical_axis.value_to_point(pair[0].y, plot, range_axis.edge);
                    let x2 = domain_axis.value_to_point(pair[1].x, plot, domain.edge);
                    let y2 = vertical_axis.value_to_point(pair[1].y, plot, range_axis.edge);
                    surface.draw_line(x1, y1, x2, y2, self.style.line_width_px, entry.color);
                }
            }

            if self.style.draw_shape {
                let radius = self.style.marker_radius_px;
                for point in points {
                    let x = domain_axis.value_to_point(point.x, plot, domain.edge);
                    let y = vertical_axis.value_to_point(point.y, plot, range_axis.edge);
                    surface.draw_ellipse(x, y, radius, radius, entry.color);
                }
            }
        }
        surface.pop_clip();
    }

    fn draw_rubber_band(&self, surface: &mut dyn DrawSurface) {
        if let Some(rect) = self.gesture.rubber_band() {
            surface.fill_rect(rect, self.style.rubber_band_fill);
        }
    }

    fn draw_title(&self, surface: &mut dyn DrawSurface, layout: &Layout) {
        let (Some(title), Some(band)) = (self.style.title.as_ref(), layout.title_band) else {
            return;
        };
        let metrics = surface.measure_text(title, &self.style.title_font);
        surface.draw_text(
            title,
            band.x + (band.width - metrics.width) / 2.0,
            band.y + metrics.ascent,
            &self.style.title_font,
            self.style.title_color,
        );
    }
}
