use parking_lot::{ReentrantMutex, RwLock};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use crate::item::Items;

type Subscriber = Arc<dyn Fn(&Items) + Send + Sync>;
type Subscribers = RwLock<Vec<(usize, Subscriber)>>;

/// Shared list state that notifies subscribers on every change.
///
/// The state is an immutable snapshot. Changing it swaps in a new snapshot
/// and then calls every subscriber with it, synchronously and without the
/// state lock held, so a subscriber may read or mutate the store again.
///
/// Publishes are serialized per store: swap and notify run under one
/// publish gate, so subscribers see snapshots in the order they were
/// stored and the last one delivered is always the current state. The gate
/// is reentrant, so a subscriber mutating the store on the same thread
/// does not deadlock.
pub struct ListStore {
    state: Arc<RwLock<Items>>,
    subscribers: Arc<Subscribers>,
    publish: Arc<ReentrantMutex<()>>,
    next_id: Arc<AtomicUsize>,
}

impl ListStore {
    /// Create a store holding an empty list.
    pub fn new() -> Self {
        Self::with_items(Items::from(Vec::new()))
    }

    pub fn with_items(items: Items) -> Self {
        Self {
            state: Arc::new(RwLock::new(items)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            publish: Arc::new(ReentrantMutex::new(())),
            next_id: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The current snapshot.
    pub fn get(&self) -> Items {
        self.state.read().clone()
    }

    /// Replace the snapshot and notify subscribers.
    pub fn set(&self, items: Items) {
        let _publish = self.publish.lock();
        *self.state.write() = Arc::clone(&items);
        self.notify(&items);
    }

    /// Compute the next snapshot from the current one.
    ///
    /// `f` runs under the write lock. `Ok(None)` leaves the state alone and
    /// notifies nobody; an error is returned unchanged.
    pub fn try_update<F, E>(&self, f: F) -> Result<bool, E>
    where
        F: FnOnce(&Items) -> Result<Option<Items>, E>,
    {
        let _publish = self.publish.lock();
        let next = {
            let mut state = self.state.write();
            match f(&state)? {
                Some(next) => {
                    *state = Arc::clone(&next);
                    next
                }
                None => return Ok(false),
            }
        };
        self.notify(&next);
        Ok(true)
    }

    /// Subscribe to state changes.
    ///
    /// The callback runs after every change until the returned guard is
    /// dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Items) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.subscribers.write().push((id, Arc::new(callback)));
        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Whether both handles share the same state.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    fn notify(&self, items: &Items) {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .read()
            .iter()
            .map(|(_, s)| Arc::clone(s))
            .collect();
        for subscriber in subscribers {
            subscriber(items);
        }
    }
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ListStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            publish: Arc::clone(&self.publish),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

/// RAII guard for a store subscriber.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: usize,
    subscribers: Weak<Subscribers>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.write().retain(|(id, _)| *id != self.id);
        }
    }
}
