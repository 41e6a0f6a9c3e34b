#![forbid(unsafe_code)]

//! Dependency-tracked reactive value store.
//!
//! The reactive core is built from four pieces:
//!
//! - [`Signal`] / [`RawSignal`] - value cells that record which build node
//!   read them and mark those nodes dirty on change.
//! - [`BuildScope`] - an RAII guard naming "the node currently being
//!   built"; reads subscribe only while a scope is active.
//! - [`DirtySet`] - the registry resolving node IDs to dirty flags, owned
//!   by the frame loop. Cells hold stable [`NodeId`]s, never references
//!   into the widget tree.
//! - [`FrameRequest`] - the coalesced re-render request: a single-slot
//!   channel where redundant requests are dropped, so any burst of writes
//!   collapses into at most one pending frame.
//!
//! Cells may be written from any thread; builds happen on one thread. Each
//! cell's lock covers value mutation and subscriber-set access only.
//! Notification runs after the lock is released, against a snapshot of the
//! subscriber set, so a notified party re-entering the same cell cannot
//! deadlock.

pub mod cell;
pub mod registry;
pub mod runtime;
pub mod scheduler;
pub mod tracker;

pub use cell::{LateSignal, RawSignal, Signal};
pub use registry::{DirtySet, NodeId};
pub use runtime::{ReactiveRuntime, runtime};
pub use scheduler::FrameRequest;
pub use tracker::{BuildScope, current_build_node};
