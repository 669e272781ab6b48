use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::observe::{Listeners, Subscription, next_object_id};

/// Process-unique identity of a [`Series`], carried by its change events and
/// used as the engine registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesId(u64);

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Change event pushed to series subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesEvent {
    pub series: SeriesId,
}

/// Shared handle for a series observed by one or more engines.
pub type SeriesHandle = Rc<RefCell<Series>>;

/// Ordering contract enforced on append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesMode {
    /// Each appended x must be strictly greater than the previous one.
    SortedAppend,
    /// Append order is free but x values must be distinct.
    UniqueKey,
}

/// Cached min/max over the points currently stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Ordered collection of 2D points with incrementally maintained bounds and
/// change notification.
#[derive(Debug)]
pub struct Series {
    id: SeriesId,
    name: String,
    mode: SeriesMode,
    points: Vec<DataPoint>,
    // populated only in UniqueKey mode
    keys: HashSet<OrderedFloat<f64>>,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    listeners: Listeners<SeriesEvent>,
}

impl Series {
    pub fn new(name: impl Into<String>, mode: SeriesMode) -> Self {
        Self {
            id: SeriesId(next_object_id()),
            name: name.into(),
            mode,
            points: Vec::new(),
            keys: HashSet::new(),
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            listeners: Listeners::new(),
        }
    }

    pub fn sorted(name: impl Into<String>) -> Self {
        Self::new(name, SeriesMode::SortedAppend)
    }

    pub fn keyed(name: impl Into<String>) -> Self {
        Self::new(name, SeriesMode::UniqueKey)
    }

    #[must_use]
    pub fn into_handle(self) -> SeriesHandle {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mode(&self) -> SeriesMode {
        self.mode
    }

    /// Appends a point and notifies subscribers.
    ///
    /// A rejected append leaves the series completely unchanged.
    pub fn append(&mut self, x: f64, y: f64) -> ChartResult<()> {
        self.append_inner(x, y, true)
    }

    /// Appends without notifying. Callers doing bulk inserts follow up with
    /// a single explicit notification via the last loud mutation.
    pub fn append_quiet(&mut self, x: f64, y: f64) -> ChartResult<()> {
        self.append_inner(x, y, false)
    }

    fn append_inner(&mut self, x: f64, y: f64, notify: bool) -> ChartResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::NonFinitePoint { x, y });
        }
        match self.mode {
            SeriesMode::SortedAppend => {
                if let Some(last) = self.points.last() {
                    if x <= last.x {
                        return Err(ChartError::OrderViolation { x, last_x: last.x });
                    }
                }
            }
            SeriesMode::UniqueKey => {
                if self.keys.contains(&OrderedFloat(x)) {
                    return Err(ChartError::DuplicateKey { x });
                }
            }
        }

        self.points.push(DataPoint::new(x, y));
        if self.mode == SeriesMode::UniqueKey {
            self.keys.insert(OrderedFloat(x));
        }
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);

        if notify {
            self.fire();
        }
        Ok(())
    }

    /// Removes every point, resets the cached bounds, and notifies.
    pub fn clear(&mut self) {
        self.points.clear();
        self.keys.clear();
        self.min_x = f64::INFINITY;
        self.max_x = f64::NEG_INFINITY;
        self.min_y = f64::INFINITY;
        self.max_y = f64::NEG_INFINITY;
        self.fire();
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn point_at(&self, index: usize) -> ChartResult<DataPoint> {
        self.points
            .get(index)
            .copied()
            .ok_or(ChartError::PointIndexOutOfBounds {
                index,
                len: self.points.len(),
            })
    }

    /// Position of the first point with exactly this x, if any.
    #[must_use]
    pub fn index_of(&self, x: f64) -> Option<usize> {
        self.points.iter().position(|point| point.x == x)
    }

    /// Bounds over the points currently stored. `None` while empty.
    #[must_use]
    pub fn bounds(&self) -> Option<SeriesBounds> {
        if self.points.is_empty() {
            return None;
        }
        Some(SeriesBounds {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
        })
    }

    /// Emits one change event explicitly. Pairs with
    /// [`Series::append_quiet`] so a bulk update ends in a single
    /// notification.
    pub fn notify(&mut self) {
        self.fire();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SeriesEvent) + 'static) -> Subscription {
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

    fn fire(&mut self) {
        let event = SeriesEvent { series: self.id };
        self.listeners.fire(&event);
    }
}
