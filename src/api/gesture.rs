use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisRole, PixelPoint, Range, Rect};

use super::engine::ChartEngine;

/// Pointer buttons the gesture machine distinguishes: primary drags a
/// box-zoom rubber band, secondary pans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Gesture lifecycle. A press starts `Tracking`; crossing the drag
/// threshold promotes it to `Dragging`; release always returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    Tracking,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct GestureState {
    pub(super) phase: GesturePhase,
    pub(super) button: Option<PointerButton>,
    pub(super) anchor: PixelPoint,
    pub(super) current: PixelPoint,
}

impl GestureState {
    /// Live rubber-band rectangle, present only while a primary-button drag
    /// spans a strictly positive area.
    pub(super) fn rubber_band(&self) -> Option<Rect> {
        if self.phase != GesturePhase::Dragging || self.button != Some(PointerButton::Primary) {
            return None;
        }
        if !is_positive(self.anchor, self.current) {
            return None;
        }
        Some(Rect::new(
            self.anchor.x,
            self.anchor.y,
            self.current.x - self.anchor.x,
            self.current.y - self.anchor.y,
        ))
    }
}

fn is_positive(top_left: PixelPoint, bottom_right: PixelPoint) -> bool {
    top_left.x < bottom_right.x && top_left.y < bottom_right.y
}

impl ChartEngine {
    /// Begins tracking a pointer press. Ignored while another gesture is in
    /// flight. The point is clamped into the plot area.
    pub fn start_gesture(&mut self, button: PointerButton, point: PixelPoint) {
        if self.gesture.phase != GesturePhase::Idle {
            return;
        }
        let point = point.clamped_to(self.area);
        self.gesture = GestureState {
            phase: GesturePhase::Tracking,
            button: Some(button),
            anchor: point,
            current: point,
        };
        debug!(?button, x = point.x, y = point.y, "gesture tracking");
    }

    /// Feeds a pointer move. Promotes to `Dragging` once displacement from
    /// the anchor exceeds the threshold; a primary drag only requests a
    /// repaint (zoom is deferred to release), a secondary drag pans
    /// immediately and advances the anchor.
    pub fn update_gesture(&mut self, point: PixelPoint) {
        if self.gesture.phase == GesturePhase::Idle {
            return;
        }
        let point = point.clamped_to(self.area);
        self.gesture.current = point;

        if self.gesture.phase == GesturePhase::Tracking {
            let dx = point.x - self.gesture.anchor.x;
            let dy = point.y - self.gesture.anchor.y;
            if (dx * dx + dy * dy).sqrt() > self.tuning.drag_threshold_px {
                self.gesture.phase = GesturePhase::Dragging;
                debug!("gesture dragging");
            }
        }
        if self.gesture.phase != GesturePhase::Dragging {
            return;
        }

        match self.gesture.button {
            Some(PointerButton::Primary) => self.fire_render_changed(),
            Some(PointerButton::Secondary) => {
                let anchor = self.gesture.anchor;
                self.apply_pan(anchor, point);
                self.gesture.anchor = point;
            }
            None => {}
        }
    }

    /// Ends the gesture. A press that never crossed the drag threshold is
    /// discarded as a click. A primary drag box-zooms when the dragged
    /// rectangle is strictly positive and otherwise resets every axis to
    /// the fitted data bounds; a secondary drag applies its final pan.
    pub fn end_gesture(&mut self, point: PixelPoint) {
        if self.gesture.phase == GesturePhase::Idle {
            return;
        }
        let point = point.clamped_to(self.area);
        let state = self.gesture;
        self.gesture = GestureState::default();

        if state.phase != GesturePhase::Dragging {
            debug!("gesture discarded as click");
            return;
        }
        match state.button {
            Some(PointerButton::Primary) => {
                if is_positive(state.anchor, point) {
                    self.apply_box_zoom(state.anchor, point);
                } else {
                    debug!("degenerate zoom rectangle, resetting axes");
                    self.reset_axis_ranges();
                }
            }
            Some(PointerButton::Secondary) => self.apply_pan(state.anchor, point),
            None => {}
        }
    }

    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase
    }

    /// Refits both axes to the padded union of all series data (regardless
    /// of their auto-range flags) and releases the zoom lock.
    pub fn reset_axis_ranges(&mut self) {
        self.zoom_locked = false;
        for role in [AxisRole::Domain, AxisRole::Range] {
            let Some(slot) = self.slot(role) else { continue };
            let mut axis = slot.handle.borrow_mut();
            let range = self.padded_union_range(role, &axis);
            axis.set_range_quiet(range);
        }
        self.fire_render_changed();
    }

    /// Shifts both axis ranges by the negative value-space displacement
    /// between the two pixel points, so content follows the pointer. Width
    /// is preserved; one render event fires.
    fn apply_pan(&self, from: PixelPoint, to: PixelPoint) {
        let (Some(domain), Some(range_axis)) = (self.domain.as_ref(), self.range_axis.as_ref())
        else {
            return;
        };
        let area = self.area;
        {
            let mut axis = domain.handle.borrow_mut();
            let v_from = axis.point_to_value(from.x, area, domain.edge);
            let v_to = axis.point_to_value(to.x, area, domain.edge);
            let shifted = axis.range().shifted(v_from - v_to);
            axis.set_range_quiet(shifted);
        }
        {
            let mut axis = range_axis.handle.borrow_mut();
            let v_from = axis.point_to_value(from.y, area, range_axis.edge);
            let v_to = axis.point_to_value(to.y, area, range_axis.edge);
            let shifted = axis.range().shifted(v_from - v_to);
            axis.set_range_quiet(shifted);
        }
        self.fire_render_changed();
    }

    /// Maps the dragged rectangle's corners into value space per axis and
    /// assigns the resulting ranges directly (no padding). Sets the zoom
    /// lock so auto-ranging stops overriding the user's bounds.
    fn apply_box_zoom(&mut self, top_left: PixelPoint, bottom_right: PixelPoint) {
        debug_assert!(
            is_positive(top_left, bottom_right),
            "box-zoom requires a strictly positive rectangle"
        );
        let (Some(domain), Some(range_axis)) = (self.domain.as_ref(), self.range_axis.as_ref())
        else {
            return;
        };
        let area = self.area;
        {
            let mut axis = domain.handle.borrow_mut();
            let v1 = axis.point_to_value(top_left.x, area, domain.edge);
            let v2 = axis.point_to_value(bottom_right.x, area, domain.edge);
            axis.set_range_quiet(Range::ordered(v1, v2));
        }
        {
            let mut axis = range_axis.handle.borrow_mut();
            let v1 = axis.point_to_value(top_left.y, area, range_axis.edge);
            let v2 = axis.point_to_value(bottom_right.y, area, range_axis.edge);
            axis.set_range_quiet(Range::ordered(v1, v2));
        }
        self.zoom_locked = true;
        debug!("box-zoom applied, auto-range locked");
        self.fire_render_changed();
    }
}
