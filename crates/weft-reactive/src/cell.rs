#![forbid(unsafe_code)]

//! Reactive value cells.
//!
//! A cell holds one value plus the set of build nodes that read it. Reads
//! during a build subscribe the reading node; writes mark every subscriber
//! dirty and request a coalesced frame.
//!
//! Two flavors exist:
//!
//! - [`Signal`] is equality-checked: writing a value equal to the current
//!   one is a no-op and notifies nobody.
//! - [`RawSignal`] always notifies, for values without usable equality
//!   (collections of handles, trait objects, and the like).
//!
//! The locking discipline is load-bearing: value mutation and
//! subscriber-set access happen under the cell's lock, but notification
//! runs after the lock is released against a snapshot of the subscriber
//! set. A notified node that re-enters this cell (or another) therefore
//! cannot deadlock or observe a half-updated subscriber set.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use crate::registry::NodeId;
use crate::runtime::runtime;
use crate::tracker::current_build_node;

struct CellInner<T> {
    value: T,
    subscribers: BTreeSet<NodeId>,
}

/// Read the value, subscribing the current build node if one is active.
fn read<T: Clone>(inner: &Mutex<CellInner<T>>) -> T {
    let mut guard = inner.lock().expect("cell lock poisoned");
    if let Some(node) = current_build_node() {
        // BTreeSet insert makes re-subscription a no-op.
        guard.subscribers.insert(node);
    }
    guard.value.clone()
}

/// Read the value without subscribing.
fn read_untracked<T: Clone>(inner: &Mutex<CellInner<T>>) -> T {
    inner.lock().expect("cell lock poisoned").value.clone()
}

/// Mark a snapshot of subscribers dirty and prune the retired ones.
fn notify<T>(inner: &Mutex<CellInner<T>>, snapshot: &[NodeId]) {
    let stale = runtime().notify(snapshot);
    if !stale.is_empty() {
        let mut guard = inner.lock().expect("cell lock poisoned");
        for id in &stale {
            guard.subscribers.remove(id);
        }
    }
}

/// An equality-checked reactive cell.
///
/// Cloning the handle shares the underlying cell.
pub struct Signal<T> {
    inner: Arc<Mutex<CellInner<T>>>,
}

impl<T: Clone> Signal<T> {
    /// Create a cell holding `value` with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CellInner {
                value,
                subscribers: BTreeSet::new(),
            })),
        }
    }

    /// Current value; subscribes the node currently being built, if any.
    pub fn get(&self) -> T {
        read(&self.inner)
    }

    /// Current value without subscribing.
    pub fn peek(&self) -> T {
        read_untracked(&self.inner)
    }

    /// Number of subscribed nodes (stale entries included until the next
    /// notify prunes them).
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .expect("cell lock poisoned")
            .subscribers
            .len()
    }
}

impl<T: Clone + PartialEq> Signal<T> {
    /// Replace the value.
    ///
    /// A value equal to the current one skips all work: no dirty marks,
    /// no frame request.
    pub fn set(&self, value: T) {
        let snapshot = {
            let mut guard = self.inner.lock().expect("cell lock poisoned");
            if guard.value == value {
                return;
            }
            guard.value = value;
            guard.subscribers.iter().copied().collect::<Vec<_>>()
        };
        notify(&self.inner, &snapshot);
    }

    /// Apply `f` to the value under the lock, then notify as `set` does
    /// (including the equality skip).
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut guard = self.inner.lock().expect("cell lock poisoned");
            let previous = guard.value.clone();
            f(&mut guard.value);
            if guard.value == previous {
                return;
            }
            guard.subscribers.iter().copied().collect::<Vec<_>>()
        };
        notify(&self.inner, &snapshot);
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.lock().expect("cell lock poisoned");
        f.debug_struct("Signal")
            .field("value", &guard.value)
            .field("subscribers", &guard.subscribers.len())
            .finish()
    }
}

/// An always-notify reactive cell.
///
/// Same surface as [`Signal`] minus the equality check; every write
/// notifies, even when the new value is indistinguishable from the old.
pub struct RawSignal<T> {
    inner: Arc<Mutex<CellInner<T>>>,
}

impl<T: Clone> RawSignal<T> {
    /// Create a cell holding `value` with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CellInner {
                value,
                subscribers: BTreeSet::new(),
            })),
        }
    }

    /// Current value; subscribes the node currently being built, if any.
    pub fn get(&self) -> T {
        read(&self.inner)
    }

    /// Current value without subscribing.
    pub fn peek(&self) -> T {
        read_untracked(&self.inner)
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&self, value: T) {
        let snapshot = {
            let mut guard = self.inner.lock().expect("cell lock poisoned");
            guard.value = value;
            guard.subscribers.iter().copied().collect::<Vec<_>>()
        };
        notify(&self.inner, &snapshot);
    }

    /// Apply `f` to the value under the lock, then notify every
    /// subscriber.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut guard = self.inner.lock().expect("cell lock poisoned");
            f(&mut guard.value);
            guard.subscribers.iter().copied().collect::<Vec<_>>()
        };
        notify(&self.inner, &snapshot);
    }

    /// Number of subscribed nodes.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .expect("cell lock poisoned")
            .subscribers
            .len()
    }
}

impl<T> Clone for RawSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RawSignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.lock().expect("cell lock poisoned");
        f.debug_struct("RawSignal")
            .field("value", &guard.value)
            .field("subscribers", &guard.subscribers.len())
            .finish()
    }
}

/// A late-initialized cell slot.
///
/// Container widgets hold cells they cannot construct up front. The slot
/// makes the unconstructed state explicit and checkable instead of a
/// crash on first use: every accessor reports whether the cell exists
/// yet.
#[derive(Debug)]
pub struct LateSignal<T> {
    slot: OnceLock<Signal<T>>,
}

impl<T: Clone> LateSignal<T> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Initialize the cell. Returns false if it was already initialized
    /// (the existing cell is kept).
    pub fn init(&self, value: T) -> bool {
        self.slot.set(Signal::new(value)).is_ok()
    }

    /// Whether the cell has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The underlying cell, if constructed.
    pub fn signal(&self) -> Option<&Signal<T>> {
        self.slot.get()
    }

    /// Tracked read, or `None` while uninitialized.
    pub fn get(&self) -> Option<T> {
        self.slot.get().map(Signal::get)
    }

    /// Untracked read, or `None` while uninitialized.
    pub fn peek(&self) -> Option<T> {
        self.slot.get().map(Signal::peek)
    }
}

impl<T: Clone + PartialEq> LateSignal<T> {
    /// Write through to the cell. Returns false (and does nothing) while
    /// uninitialized.
    pub fn set(&self, value: T) -> bool {
        match self.slot.get() {
            Some(signal) => {
                signal.set(value);
                true
            }
            None => false,
        }
    }
}

impl<T: Clone> Default for LateSignal<T> {
    fn default() -> Self {
        Self::new()
    }
}
