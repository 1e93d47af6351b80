//! Observable store holding one state tree.
//!
//! The store owns the current snapshot behind a read-write lock. Every
//! dispatch runs the reducer on a clone of the snapshot, swaps the result in
//! and then notifies listeners synchronously. Dispatches are serialized by a
//! re-entrant lock so all listeners observe snapshots in dispatch order.
//!
//! A listener may dispatch from inside its callback. Such a dispatch is
//! queued and applied by the outermost call once the current notification
//! round has reached every listener.

use std::cell::Cell;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use super::reducer::Reducer;

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct StoreInner<S, I> {
    state: RwLock<Arc<S>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener<S>)>>,
    next_subscription: AtomicU64,
    /// Holds the "round in progress" flag for the thread owning the lock.
    dispatch_lock: ReentrantMutex<Cell<bool>>,
    pending: Mutex<VecDeque<I>>,
}

/// Marks a notification round as running; ends it on drop, even when a
/// listener panics, so later dispatches are not queued forever.
struct DispatchRound<'a, I> {
    active: &'a Cell<bool>,
    pending: &'a Mutex<VecDeque<I>>,
}

impl<'a, I> DispatchRound<'a, I> {
    fn begin(active: &'a Cell<bool>, pending: &'a Mutex<VecDeque<I>>) -> Self {
        active.set(true);
        Self { active, pending }
    }
}

impl<I> Drop for DispatchRound<'_, I> {
    fn drop(&mut self) {
        self.pending.lock().clear();
        self.active.set(false);
    }
}

/// Shared handle over a state tree driven by reducer `R`.
///
/// Cloning the handle is cheap; all clones observe and mutate the same tree.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R::State, R::Intent>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `R::State::default()`.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store holding the given initial state.
    pub fn with_state(state: R::State) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(Arc::new(state)),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
                dispatch_lock: ReentrantMutex::new(Cell::new(false)),
                pending: Mutex::new(VecDeque::new()),
            }),
            _reducer: PhantomData,
        }
    }

    /// Current immutable snapshot.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&*self.inner.state.read())
    }

    /// Apply one intent and publish the resulting state.
    ///
    /// Listeners are notified exactly once per call, even when the reducer
    /// returned a state equal to the previous one. When called from inside a
    /// listener, the intent is applied after the running round completes.
    pub fn dispatch(&self, intent: R::Intent) {
        let serial = self.inner.dispatch_lock.lock();
        if serial.get() {
            tracing::debug!(intent = ?intent, "Queueing re-entrant dispatch");
            self.inner.pending.lock().push_back(intent);
            return;
        }

        let _round = DispatchRound::begin(&serial, &self.inner.pending);
        self.apply(intent);
        loop {
            // Pop in its own statement so the queue is unlocked while listeners run.
            let queued = self.inner.pending.lock().pop_front();
            match queued {
                Some(intent) => self.apply(intent),
                None => break,
            }
        }
    }

    fn apply(&self, intent: R::Intent) {
        tracing::debug!(intent = ?intent, "Dispatching");

        let next = {
            let mut current = self.inner.state.write();
            let next = Arc::new(R::reduce(R::State::clone(&**current), intent));
            *current = Arc::clone(&next);
            next
        };

        // Snapshot the table so listeners can (un)subscribe while being called.
        let listeners: Vec<Listener<R::State>> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in &listeners {
            listener(&next);
        }
    }

    /// Register a listener called with every new snapshot.
    pub fn subscribe<L>(&self, listener: L) -> SubscriptionId
    where
        L: Fn(&R::State) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        tracing::trace!(subscription = id.0, "Listener subscribed");
        id
    }

    /// Register a listener bound to a projection of the state.
    ///
    /// The listener only runs when the projected value differs from the last
    /// one it observed. The baseline is taken from the current snapshot.
    pub fn subscribe_selector<T, Sel, L>(&self, selector: Sel, listener: L) -> SubscriptionId
    where
        T: Clone + PartialEq + Send + 'static,
        Sel: Fn(&R::State) -> T + Send + Sync + 'static,
        L: Fn(&T) + Send + Sync + 'static,
    {
        let last = Mutex::new(selector(&self.get_state()));
        self.subscribe(move |state| {
            let next = selector(state);
            let changed = {
                let mut last = last.lock();
                if *last == next {
                    false
                } else {
                    *last = next.clone();
                    true
                }
            };
            if changed {
                listener(&next);
            }
        })
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        let removed = listeners.len() != before;
        if removed {
            tracing::trace!(subscription = id.0, "Listener unsubscribed");
        }
        removed
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }
}
