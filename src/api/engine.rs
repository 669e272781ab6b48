use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisHandle, AxisRole, Edge, Insets, Rect, SeriesHandle, SeriesId};
use crate::error::{ChartError, ChartResult};
use crate::observe::{Listeners, Subscription};
use crate::render::{Color, RenderStyle};

use super::gesture::GestureState;

/// Repaint request pushed to engine subscribers (typically the host view).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderEvent;

/// Numeric knobs of the engine, all host-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineTuning {
    /// Width multiplier applied around the center of auto-computed ranges.
    pub auto_range_padding: f64,
    /// Pixel displacement before a tracked press becomes a drag.
    pub drag_threshold_px: f64,
    /// Target tick divisions per axis.
    pub tick_divisions: usize,
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            auto_range_padding: 1.05,
            drag_threshold_px: 15.0,
            tick_divisions: 10,
        }
    }
}

impl EngineTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.auto_range_padding.is_finite() || self.auto_range_padding <= 0.0 {
            return Err(ChartError::InvalidTuning(
                "auto-range padding must be finite and > 0".to_owned(),
            ));
        }
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(ChartError::InvalidTuning(
                "drag threshold must be finite and >= 0".to_owned(),
            ));
        }
        if self.tick_divisions == 0 {
            return Err(ChartError::InvalidTuning(
                "tick divisions must be >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// One styled series registered with the engine.
#[derive(Debug)]
pub struct SeriesEntry {
    pub(super) handle: SeriesHandle,
    pub(super) color: Color,
    pub(super) subscription: Subscription,
}

impl SeriesEntry {
    #[must_use]
    pub fn handle(&self) -> SeriesHandle {
        Rc::clone(&self.handle)
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

#[derive(Debug)]
pub(super) struct AxisSlot {
    pub(super) handle: AxisHandle,
    pub(super) edge: Edge,
    pub(super) subscription: Subscription,
}

/// Orchestrates one domain axis, one range axis, and an ordered list of
/// styled series; computes layout, auto-ranges, ticks, drives the gesture
/// state machine, and emits a single repaint signal toward the host.
///
/// Single-threaded by contract: all mutation and notification happen
/// synchronously on the caller's thread, and listeners observe mutations in
/// issue order. Listeners must not call back into the engine while a
/// notification is being delivered.
#[derive(Debug)]
pub struct ChartEngine {
    pub(super) domain: Option<AxisSlot>,
    pub(super) range_axis: Option<AxisSlot>,
    pub(super) series: IndexMap<SeriesId, SeriesEntry>,
    pub(super) style: RenderStyle,
    pub(super) tuning: EngineTuning,
    pub(super) insets: Insets,
    /// Plot rectangle of the most recent layout pass; gesture clamping uses
    /// it between paints.
    pub(super) area: Rect,
    pub(super) gesture: GestureState,
    pub(super) zoom_locked: bool,
    pub(super) events: Rc<RefCell<Listeners<RenderEvent>>>,
}

impl ChartEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            domain: None,
            range_axis: None,
            series: IndexMap::new(),
            style: RenderStyle::default(),
            tuning: EngineTuning::default(),
            insets: Insets::default(),
            area: Rect::ZERO,
            gesture: GestureState::default(),
            zoom_locked: false,
            events: Rc::new(RefCell::new(Listeners::new())),
        }
    }

    /// Binds the domain axis to a horizontal edge, replacing and
    /// unsubscribing any previous occupant.
    pub fn set_domain_axis(&mut self, axis: AxisHandle, edge: Edge) -> ChartResult<()> {
        if !edge.is_horizontal() {
            return Err(ChartError::EdgeRoleMismatch {
                role: AxisRole::Domain,
                edge,
            });
        }
        self.bind_axis(AxisRole::Domain, axis, edge)
    }

    /// Binds the range axis to a vertical edge, replacing and unsubscribing
    /// any previous occupant.
    pub fn set_range_axis(&mut self, axis: AxisHandle, edge: Edge) -> ChartResult<()> {
        if edge.is_horizontal() {
            return Err(ChartError::EdgeRoleMismatch {
                role: AxisRole::Range,
                edge,
            });
        }
        self.bind_axis(AxisRole::Range, axis, edge)
    }

    fn bind_axis(&mut self, role: AxisRole, axis: AxisHandle, edge: Edge) -> ChartResult<()> {
        let id = axis.borrow().id();
        let other = match role {
            AxisRole::Domain => &self.range_axis,
            AxisRole::Range => &self.domain,
        };
        if let Some(slot) = other {
            if slot.handle.borrow().id() == id {
                return Err(ChartError::AxisRoleConflict { id });
            }
        }

        let slot_ref = match role {
            AxisRole::Domain => &mut self.domain,
            AxisRole::Range => &mut self.range_axis,
        };
        if let Some(previous) = slot_ref.take() {
            previous
                .handle
                .borrow_mut()
                .unsubscribe(previous.subscription);
        }

        let events = Rc::downgrade(&self.events);
        let subscription = axis.borrow_mut().subscribe(move |_| {
            if let Some(events) = events.upgrade() {
                events.borrow_mut().fire(&RenderEvent);
            }
        });
        *slot_ref = Some(AxisSlot {
            handle: axis,
            edge,
            subscription,
        });
        debug!(?role, ?edge, axis = %id, "axis bound");
        self.fire_render_changed();
        Ok(())
    }

    #[must_use]
    pub fn domain_axis(&self) -> Option<AxisHandle> {
        self.domain.as_ref().map(|slot| Rc::clone(&slot.handle))
    }

    #[must_use]
    pub fn range_axis(&self) -> Option<AxisHandle> {
        self.range_axis.as_ref().map(|slot| Rc::clone(&slot.handle))
    }

    /// Edge currently hosting `role`, if an axis is bound.
    #[must_use]
    pub fn edge_of(&self, role: AxisRole) -> Option<Edge> {
        self.slot(role).map(|slot| slot.edge)
    }

    pub(super) fn slot(&self, role: AxisRole) -> Option<&AxisSlot> {
        match role {
            AxisRole::Domain => self.domain.as_ref(),
            AxisRole::Range => self.range_axis.as_ref(),
        }
    }

    /// Registers a series with a paint color. Insertion order defines paint
    /// z-order; a series may appear at most once per engine.
    pub fn add_series(&mut self, series: SeriesHandle, color: Color) -> ChartResult<SeriesId> {
        color.validate()?;
        let id = series.borrow().id();
        if self.series.contains_key(&id) {
            return Err(ChartError::DuplicateSeries { id });
        }

        let events = Rc::downgrade(&self.events);
        let subscription = series.borrow_mut().subscribe(move |_| {
            if let Some(events) = events.upgrade() {
                events.borrow_mut().fire(&RenderEvent);
            }
        });
        self.series.insert(
            id,
            SeriesEntry {
                handle: series,
                color,
                subscription,
            },
        );
        debug!(series = %id, "series added");
        self.fire_render_changed();
        Ok(id)
    }

    /// Registers a series painted with the style's default series color.
    pub fn add_series_default(&mut self, series: SeriesHandle) -> ChartResult<SeriesId> {
        let color = self.style.default_series_color;
        self.add_series(series, color)
    }

    /// Unregisters a series. Removing an id that is not registered is a
    /// no-op.
    pub fn remove_series(&mut self, id: SeriesId) {
        if let Some(entry) = self.series.shift_remove(&id) {
            entry.handle.borrow_mut().unsubscribe(entry.subscription);
            debug!(series = %id, "series removed");
            self.fire_render_changed();
        }
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Registered series ids in paint order.
    #[must_use]
    pub fn series_ids(&self) -> Vec<SeriesId> {
        self.series.keys().copied().collect()
    }

    #[must_use]
    pub fn series_color(&self, id: SeriesId) -> Option<Color> {
        self.series.get(&id).map(|entry| entry.color)
    }

    pub fn set_series_color(&mut self, id: SeriesId, color: Color) -> ChartResult<()> {
        color.validate()?;
        if let Some(entry) = self.series.get_mut(&id) {
            if entry.color == color {
                return Ok(());
            }
            entry.color = color;
            self.fire_render_changed();
        }
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        if self.style == style {
            return Ok(());
        }
        self.style = style;
        self.fire_render_changed();
        Ok(())
    }

    pub fn set_draw_line(&mut self, draw_line: bool) {
        if self.style.draw_line == draw_line {
            return;
        }
        self.style.draw_line = draw_line;
        self.fire_render_changed();
    }

    pub fn set_draw_shape(&mut self, draw_shape: bool) {
        if self.style.draw_shape == draw_shape {
            return;
        }
        self.style.draw_shape = draw_shape;
        self.fire_render_changed();
    }

    pub fn set_draw_grid(&mut self, draw_grid: bool) {
        if self.style.draw_grid == draw_grid {
            return;
        }
        self.style.draw_grid = draw_grid;
        self.fire_render_changed();
    }

    pub fn set_title(&mut self, title: Option<String>) {
        if self.style.title == title {
            return;
        }
        self.style.title = title;
        self.fire_render_changed();
    }

    #[must_use]
    pub fn tuning(&self) -> EngineTuning {
        self.tuning
    }

    pub fn set_tuning(&mut self, tuning: EngineTuning) -> ChartResult<()> {
        let tuning = tuning.validate()?;
        if self.tuning == tuning {
            return Ok(());
        }
        self.tuning = tuning;
        self.fire_render_changed();
        Ok(())
    }

    #[must_use]
    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn set_insets(&mut self, insets: Insets) {
        if self.insets == insets {
            return;
        }
        self.insets = insets;
        self.fire_render_changed();
    }

    /// Plot rectangle computed by the most recent layout pass.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        self.area
    }

    /// Whether a box-zoom currently suppresses auto-ranging.
    #[must_use]
    pub fn zoom_locked(&self) -> bool {
        self.zoom_locked
    }

    /// Registers a repaint listener; the host typically schedules a redraw.
    pub fn subscribe(&self, listener: impl FnMut(&RenderEvent) + 'static) -> Subscription {
        self.events.borrow_mut().subscribe(listener)
    }

    /// No-op for handles that were never registered.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.events.borrow_mut().unsubscribe(subscription);
    }

    pub(super) fn fire_render_changed(&self) {
        self.events.borrow_mut().fire(&RenderEvent);
    }
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ChartEngine {
    fn drop(&mut self) {
        if let Some(slot) = self.domain.take() {
            slot.handle.borrow_mut().unsubscribe(slot.subscription);
        }
        if let Some(slot) = self.range_axis.take() {
            slot.handle.borrow_mut().unsubscribe(slot.subscription);
        }
        for (_, entry) in self.series.drain(..) {
            entry.handle.borrow_mut().unsubscribe(entry.subscription);
        }
    }
}
