use tracing::debug;

use crate::core::{Axis, AxisRole, Edge, Range, Rect, TickPlan};
use crate::render::DrawSurface;

use super::engine::ChartEngine;

pub(super) const TICK_LENGTH_PX: f64 = 5.0;
pub(super) const LABEL_GAP_PX: f64 = 4.0;
pub(super) const TITLE_GAP_PX: f64 = 6.0;

/// Pixel rectangles of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Layout {
    pub(super) plot: Rect,
    pub(super) domain_band: Option<Rect>,
    pub(super) range_band: Option<Rect>,
    pub(super) title_band: Option<Rect>,
}

impl ChartEngine {
    /// Recomputes auto-ranged axes and the plot rectangle without drawing.
    ///
    /// Paint runs this internally; hosts call it directly when they need
    /// up-to-date hit-testing geometry before the next frame.
    pub fn prepare(&mut self, surface: &mut dyn DrawSurface, width: f64, height: f64) -> Rect {
        self.auto_range_pass();
        let layout = self.compute_layout(surface, width, height);
        self.area = layout.plot;
        layout.plot
    }

    /// Re-fits every auto-ranged axis from the union of series bounds,
    /// unless a box-zoom holds the current ranges.
    pub(super) fn auto_range_pass(&self) {
        if self.zoom_locked {
            return;
        }
        for role in [AxisRole::Domain, AxisRole::Range] {
            let Some(slot) = self.slot(role) else { continue };
            let mut axis = slot.handle.borrow_mut();
            if !axis.is_auto_range() {
                continue;
            }
            let range = self.padded_union_range(role, &axis);
            axis.set_range_quiet(range);
        }
    }

    /// Union of series bounds along the role's dimension, widened to include
    /// zero when the axis asks for it, substituted with defaults when the
    /// data is missing or degenerate, then padded about its center.
    pub(super) fn padded_union_range(&self, role: AxisRole, axis: &Axis) -> Range {
        let horizontal = role == AxisRole::Domain;
        let mut union: Option<(f64, f64)> = None;
        for entry in self.series.values() {
            let series = entry.handle.borrow();
            let Some(bounds) = series.bounds() else {
                continue;
            };
            let (lo, hi) = if horizontal {
                (bounds.min_x, bounds.max_x)
            } else {
                (bounds.min_y, bounds.max_y)
            };
            union = Some(match union {
                Some((min, max)) => (min.min(lo), max.max(hi)),
                None => (lo, hi),
            });
        }

        let Some((mut min, mut max)) = union else {
            return Range::UNIT;
        };
        if axis.is_include_zero() {
            min = min.min(0.0);
            max = max.max(0.0);
        }
        if max - min == 0.0 {
            debug!(min, "degenerate auto-range widened to unit width");
            max = min + 1.0;
        }
        Range::ordered(min, max).scaled_about_center(self.tuning.auto_range_padding)
    }

    pub(super) fn compute_layout(
        &self,
        surface: &mut dyn DrawSurface,
        width: f64,
        height: f64,
    ) -> Layout {
        let mut left = self.insets.left;
        let mut right = self.insets.right;
        let mut top = self.insets.top;
        let mut bottom = self.insets.bottom;

        let title_height = self.style.title.as_ref().map(|title| {
            let metrics = surface.measure_text(title, &self.style.title_font);
            metrics.height() + TITLE_GAP_PX
        });
        top += title_height.unwrap_or(0.0);

        let domain_thickness = self.domain.as_ref().map(|slot| {
            let axis = slot.handle.borrow();
            (
                slot.edge,
                self.axis_band_thickness(&axis, slot.edge, surface),
            )
        });
        let range_thickness = self.range_axis.as_ref().map(|slot| {
            let axis = slot.handle.borrow();
            (
                slot.edge,
                self.axis_band_thickness(&axis, slot.edge, surface),
            )
        });

        for (edge, thickness) in [domain_thickness, range_thickness].into_iter().flatten() {
            match edge {
                Edge::Top => top += thickness,
                Edge::Bottom => bottom += thickness,
                Edge::Left => left += thickness,
                Edge::Right => right += thickness,
            }
        }

        let plot = Rect::new(
            left,
            top,
            (width - left - right).max(0.0),
            (height - top - bottom).max(0.0),
        );

        let band_rect = |edge: Edge, thickness: f64| match edge {
            Edge::Top => Rect::new(plot.x, plot.y - thickness, plot.width, thickness),
            Edge::Bottom => Rect::new(plot.x, plot.bottom(), plot.width, thickness),
            Edge::Left => Rect::new(plot.x - thickness, plot.y, thickness, plot.height),
            Edge::Right => Rect::new(plot.right(), plot.y, thickness, plot.height),
        };

        Layout {
            plot,
            domain_band: domain_thickness.map(|(edge, thickness)| band_rect(edge, thickness)),
            range_band: range_thickness.map(|(edge, thickness)| band_rect(edge, thickness)),
            title_band: title_height.map(|band| {
                Rect::new(plot.x, self.insets.top, plot.width, band - TITLE_GAP_PX)
            }),
        }
    }

    /// Reserved thickness of one axis band: tick length, label gap, and the
    /// measured extent of representative labels (height for horizontal
    /// edges, widest formatted bound for vertical ones), plus a name row on
    /// horizontal edges.
    fn axis_band_thickness(&self, axis: &Axis, edge: Edge, surface: &mut dyn DrawSurface) -> f64 {
        let tick_font = &self.style.tick_font;
        let label_extent = if edge.is_horizontal() {
            surface.measure_text("0", tick_font).height()
        } else {
            let range = axis.range();
            if range.width() > 0.0 && range.width().is_finite() {
                let plan = TickPlan::for_range(range, self.tuning.tick_divisions);
                let lo = surface
                    .measure_text(&plan.format_label(range.min()), tick_font)
                    .width;
                let hi = surface
                    .measure_text(&plan.format_label(range.max()), tick_font)
                    .width;
                lo.max(hi)
            } else {
                surface.measure_text("0", tick_font).width
            }
        };
        let name_extra = if edge.is_horizontal() && !axis.name().is_empty() {
            let metrics = surface.measure_text(axis.name(), &self.style.axis_font);
            metrics.height() + LABEL_GAP_PX
        } else {
            0.0
        };
        TICK_LENGTH_PX + LABEL_GAP_PX + label_extent + name_extra
    }

    /// Tick plan for one axis, widened on horizontal edges until projected
    /// label spacing stops overlapping.
    pub(super) fn tick_plan_for(
        &self,
        axis: &Axis,
        edge: Edge,
        plot: Rect,
        surface: &mut dyn DrawSurface,
    ) -> Option<TickPlan> {
        let range = axis.range();
        if !(range.width().is_finite() && range.width() > 0.0) {
            return None;
        }
        let mut plan = TickPlan::for_range(range, self.tuning.tick_divisions);

        if edge.is_horizontal() {
            let sample = plan.format_label(range.max());
            let needed_px =
                surface.measure_text(&sample, &self.style.tick_font).width + LABEL_GAP_PX;
            let p0 = axis.value_to_point(range.min(), plot, edge);
            let p1 = axis.value_to_point(range.min() + plan.step(), plot, edge);
            if (p1 - p0).abs() < needed_px {
                let v0 = axis.point_to_value(p0, plot, edge);
                let v1 = axis.point_to_value(p0 + needed_px, plot, edge);
                plan = plan.widened_to(range, (v1 - v0).abs());
            }
        }
        Some(plan)
    }
}
