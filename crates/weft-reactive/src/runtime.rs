#![forbid(unsafe_code)]

//! Process-wide reactive runtime handle.
//!
//! Cells are created anywhere and written from any thread, so they reach
//! the registry and the frame request through one global handle rather
//! than a threaded-through context. The frame loop owns the lifecycle
//! (registering and retiring nodes, installing the frame receiver); cells
//! only mark dirty and request frames.

use std::sync::OnceLock;

use crate::registry::{DirtySet, NodeId};
use crate::scheduler::FrameRequest;

/// The shared registry + frame-request pair.
#[derive(Debug, Default)]
pub struct ReactiveRuntime {
    /// Live nodes and their dirty flags.
    pub dirty: DirtySet,
    /// Coalesced re-render request slot.
    pub frame: FrameRequest,
}

impl ReactiveRuntime {
    /// Mark every node in `ids` dirty and request a frame if any of them
    /// was live.
    ///
    /// Returns the IDs that turned out to be retired, so the caller can
    /// prune its subscriber set.
    pub fn notify(&self, ids: &[NodeId]) -> Vec<NodeId> {
        let mut stale = Vec::new();
        let mut any_live = false;
        for &id in ids {
            if self.dirty.mark_dirty(id) {
                any_live = true;
            } else {
                stale.push(id);
            }
        }
        if any_live {
            self.frame.request();
        }
        stale
    }
}

static RUNTIME: OnceLock<ReactiveRuntime> = OnceLock::new();

/// The process-wide reactive runtime.
pub fn runtime() -> &'static ReactiveRuntime {
    RUNTIME.get_or_init(ReactiveRuntime::default)
}
