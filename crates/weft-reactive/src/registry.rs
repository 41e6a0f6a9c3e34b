#![forbid(unsafe_code)]

//! Node identity and the dirty-flag registry.
//!
//! A [`NodeId`] identifies one widget instance for the duration of one
//! build. Cells store these IDs in their subscriber sets; the frame loop
//! owns the [`DirtySet`] that resolves an ID to its dirty flag. When a
//! widget is rebuilt or unmounted its ID is retired, and any cell still
//! holding the retired ID discovers that on its next notify and prunes it.

use std::collections::HashMap;
use std::num::NonZeroU64;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identifier for a widget instance during one build.
///
/// IDs are allocated from a process-wide counter and are never reused, so
/// a retired ID can be told apart from a live one for the lifetime of the
/// process. `0` is reserved, keeping IDs always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(NonZeroU64);

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

impl NodeId {
    fn allocate() -> Self {
        let raw = NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and only increments; a wrap would need
        // 2^64 allocations.
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Registry of live build nodes and their dirty flags.
///
/// Owned by the frame loop; reachable by writers through the global
/// [`runtime`](crate::runtime::runtime) handle.
#[derive(Debug, Default)]
pub struct DirtySet {
    nodes: Mutex<HashMap<NodeId, bool>>,
}

impl DirtySet {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate and register a fresh node, initially clean.
    pub fn register(&self) -> NodeId {
        let id = NodeId::allocate();
        self.nodes
            .lock()
            .expect("dirty set lock poisoned")
            .insert(id, false);
        id
    }

    /// Remove a node. Subsequent `mark_dirty` calls for it return false.
    pub fn retire(&self, id: NodeId) {
        self.nodes
            .lock()
            .expect("dirty set lock poisoned")
            .remove(&id);
    }

    /// Mark a node dirty.
    ///
    /// Returns false when the node has been retired; callers use that to
    /// prune stale subscriptions.
    pub fn mark_dirty(&self, id: NodeId) -> bool {
        match self
            .nodes
            .lock()
            .expect("dirty set lock poisoned")
            .get_mut(&id)
        {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    /// Whether the given node is currently dirty.
    pub fn is_dirty(&self, id: NodeId) -> bool {
        self.nodes
            .lock()
            .expect("dirty set lock poisoned")
            .get(&id)
            .copied()
            .unwrap_or(false)
    }

    /// Whether any live node is dirty.
    pub fn any_dirty(&self) -> bool {
        self.nodes
            .lock()
            .expect("dirty set lock poisoned")
            .values()
            .any(|&dirty| dirty)
    }

    /// Clear every dirty flag, keeping the nodes registered.
    pub fn clear_dirty(&self) {
        for flag in self
            .nodes
            .lock()
            .expect("dirty set lock poisoned")
            .values_mut()
        {
            *flag = false;
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.lock().expect("dirty set lock poisoned").len()
    }

    /// Whether no nodes are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
