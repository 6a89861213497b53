use std::collections::{BTreeSet, HashMap};
use tokio::sync::oneshot;
use tracing::debug;

/// One-shot notification for a single observed index.
///
/// Resolves once, the first time the index intersects the viewport. The
/// tracker forgets the subscription as soon as it fires.
#[derive(Debug)]
pub struct VisibilitySubscription {
    index: usize,
    rx: oneshot::Receiver<usize>,
    fired: bool,
}

impl VisibilitySubscription {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Non-blocking check; `true` once the notification has arrived.
    pub fn has_fired(&mut self) -> bool {
        if !self.fired {
            self.fired = self.rx.try_recv().is_ok();
        }
        self.fired
    }

    /// Waits for the first intersection. `None` if the tracker went away
    /// first (the view was torn down).
    pub async fn first_visible(self) -> Option<usize> {
        if self.fired {
            return Some(self.index);
        }
        self.rx.await.ok()
    }
}

/// Tracks which item indices of one list view have entered the viewport.
///
/// The visible set only grows. When the backing collection is re-fetched
/// with a different length, read it through [`visible_within`] and indices
/// past the end are simply ignored.
///
/// [`visible_within`]: VisibilityTracker::visible_within
#[derive(Debug, Default)]
pub struct VisibilityTracker {
    visible: BTreeSet<usize>,
    waiting: HashMap<usize, Vec<oneshot::Sender<usize>>>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers interest in `index`. An index that is already visible
    /// notifies immediately.
    pub fn observe(&mut self, index: usize) -> VisibilitySubscription {
        let (tx, rx) = oneshot::channel();

        if self.visible.contains(&index) {
            let _ = tx.send(index);
        } else {
            let waiting = self.waiting.entry(index).or_default();
            waiting.retain(|tx| !tx.is_closed());
            waiting.push(tx);
        }

        VisibilitySubscription {
            index,
            rx,
            fired: false,
        }
    }

    /// Records an intersection event. Returns `true` only the first time
    /// `index` becomes visible; later events for it are no-ops.
    pub fn on_intersect(&mut self, index: usize) -> bool {
        if !self.visible.insert(index) {
            return false;
        }

        let subscribers = self.waiting.remove(&index).unwrap_or_default();
        debug!(index, subscribers = subscribers.len(), "Item became visible");
        for tx in subscribers {
            // A dropped subscription just misses its notification.
            let _ = tx.send(index);
        }
        true
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Visible indices that exist in a collection of length `len`, ascending.
    pub fn visible_within(&self, len: usize) -> Vec<usize> {
        self.visible.range(..len).copied().collect()
    }

    /// Number of observed indices still waiting for their first intersection.
    pub fn pending_subscriptions(&self) -> usize {
        self.waiting
            .values()
            .flatten()
            .filter(|tx| !tx.is_closed())
            .count()
    }
}
