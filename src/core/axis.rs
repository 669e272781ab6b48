use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::core::range::Range;
use crate::core::types::{Edge, Rect};
use crate::error::ChartResult;
use crate::observe::{Listeners, Subscription, next_object_id};

/// Process-unique identity of an [`Axis`], carried by its change events and
/// used by the engine's role map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisId(u64);

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Change event pushed to axis subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisEvent {
    pub axis: AxisId,
}

/// Shared handle for an axis observed by one or more engines.
pub type AxisHandle = Rc<RefCell<Axis>>;

/// Linear transform between a data [`Range`] and a pixel extent, plus the
/// flags controlling auto-ranging and direction.
///
/// An axis owns no drawing; it is pure math, state, and notification.
#[derive(Debug)]
pub struct Axis {
    id: AxisId,
    name: String,
    range: Range,
    auto_range: bool,
    invert: bool,
    include_zero: bool,
    listeners: Listeners<AxisEvent>,
}

impl Axis {
    pub fn new(name: impl Into<String>, range: Range) -> Self {
        Self {
            id: AxisId(next_object_id()),
            name: name.into(),
            range,
            auto_range: false,
            invert: false,
            include_zero: false,
            listeners: Listeners::new(),
        }
    }

    /// Convenience constructor validating the bounds.
    pub fn with_bounds(name: impl Into<String>, min: f64, max: f64) -> ChartResult<Self> {
        Ok(Self::new(name, Range::new(min, max)?))
    }

    #[must_use]
    pub fn into_handle(self) -> AxisHandle {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn id(&self) -> AxisId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.range.min()
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.range.max()
    }

    /// Replaces the range, notifying subscribers. Setting the current value
    /// is a no-op and fires nothing.
    pub fn set_range(&mut self, range: Range) {
        if self.range == range {
            return;
        }
        self.range = range;
        self.fire();
    }

    /// Replaces the range without notifying. Used by the engine for batched
    /// updates that end in a single render event.
    pub fn set_range_quiet(&mut self, range: Range) {
        self.range = range;
    }

    pub fn set_bounds(&mut self, min: f64, max: f64) -> ChartResult<()> {
        self.set_range(Range::new(min, max)?);
        Ok(())
    }

    /// Moves the lower bound, preserving the upper one.
    pub fn set_lower(&mut self, lower: f64) -> ChartResult<()> {
        self.set_range(Range::new(lower, self.range.max())?);
        Ok(())
    }

    /// Moves the upper bound, preserving the lower one.
    pub fn set_upper(&mut self, upper: f64) -> ChartResult<()> {
        self.set_range(Range::new(self.range.min(), upper)?);
        Ok(())
    }

    #[must_use]
    pub fn is_auto_range(&self) -> bool {
        self.auto_range
    }

    pub fn set_auto_range(&mut self, auto_range: bool) {
        if self.auto_range == auto_range {
            return;
        }
        self.auto_range = auto_range;
        self.fire();
    }

    #[must_use]
    pub fn is_invert(&self) -> bool {
        self.invert
    }

    pub fn set_invert(&mut self, invert: bool) {
        if self.invert == invert {
            return;
        }
        self.invert = invert;
        self.fire();
    }

    #[must_use]
    pub fn is_include_zero(&self) -> bool {
        self.include_zero
    }

    pub fn set_include_zero(&mut self, include_zero: bool) {
        if self.include_zero == include_zero {
            return;
        }
        self.include_zero = include_zero;
        self.fire();
    }

    /// Maps a data value to a pixel coordinate along `edge` of `area`.
    ///
    /// Vertical edges flip the default direction so values grow upward on
    /// screen; `invert` flips whichever direction applies (XOR).
    ///
    /// The transform is only well-defined for a range of non-zero width;
    /// the engine's auto-range pass guarantees that.
    #[must_use]
    pub fn value_to_point(&self, value: f64, area: Rect, edge: Edge) -> f64 {
        let (area_min, area_max) = Self::pixel_span(area, edge);
        let rate = (area_max - area_min) / self.range.width();
        if self.flipped(edge) {
            (self.range.max() - value) * rate + area_min
        } else {
            (value - self.range.min()) * rate + area_min
        }
    }

    /// Exact inverse of [`Axis::value_to_point`]; used for hit-testing and
    /// gesture-to-value conversion.
    #[must_use]
    pub fn point_to_value(&self, point: f64, area: Rect, edge: Edge) -> f64 {
        let (area_min, area_max) = Self::pixel_span(area, edge);
        let rate = self.range.width() / (area_max - area_min);
        if self.flipped(edge) {
            (area_max - point) * rate + self.range.min()
        } else {
            (point - area_min) * rate + self.range.min()
        }
    }

    /// Emits one change event explicitly. Pairs with
    /// [`Axis::set_range_quiet`] so a batched update ends in a single
    /// notification.
    pub fn notify(&mut self) {
        self.fire();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&AxisEvent) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// No-op for handles that were never registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.unsubscribe(subscription);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn flipped(&self, edge: Edge) -> bool {
        self.invert ^ !edge.is_horizontal()
    }

    fn pixel_span(area: Rect, edge: Edge) -> (f64, f64) {
        if edge.is_horizontal() {
            (area.x, area.right())
        } else {
            (area.y, area.bottom())
        }
    }

    fn fire(&mut self) {
        let event = AxisEvent { axis: self.id };
        self.listeners.fire(&event);
    }
}
