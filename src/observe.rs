//! Synchronous publish/subscribe plumbing shared by axes, series, and the
//! engine.
//!
//! Every publisher owns its own [`Listeners`] registry and never assumes
//! ownership of subscribers. Subscriptions are plain handles; unsubscribing
//! a handle that was never registered (or was already removed) is a no-op.
//!
//! All delivery is synchronous and single-threaded: `fire` invokes every
//! callback in registration order before returning. Callbacks must not
//! mutate the publisher they observe.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Hands out process-unique ids for axes and series.
pub(crate) fn next_object_id() -> u64 {
    NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle identifying one registered listener within one publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Callback<E> = Box<dyn FnMut(&E)>;

/// Ordered listener registry owned by a publisher.
pub struct Listeners<E> {
    next_id: u64,
    entries: SmallVec<[(u64, Callback<E>); 2]>,
}

impl<E> Listeners<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entries: SmallVec::new(),
        }
    }

    /// Registers a listener and returns its subscription handle.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        Subscription(id)
    }

    /// Removes a listener. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.entries.retain(|(id, _)| *id != subscription.0);
    }

    /// Delivers `event` to every listener in registration order.
    pub fn fire(&mut self, event: &E) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}
