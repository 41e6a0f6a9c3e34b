#![forbid(unsafe_code)]

//! Build tracker: the node currently being built.
//!
//! Builds are single-threaded and nest (a container builds its children
//! inside its own scope), so the tracker is a thread-local stack. A cell
//! read subscribes the innermost active node; reads outside any scope
//! subscribe nothing.

use std::cell::RefCell;

use crate::registry::NodeId;

thread_local! {
    static BUILD_STACK: RefCell<Vec<NodeId>> = const { RefCell::new(Vec::new()) };
}

/// The innermost node currently being built on this thread, if any.
pub fn current_build_node() -> Option<NodeId> {
    BUILD_STACK.with(|stack| stack.borrow().last().copied())
}

/// RAII guard marking a node as "currently being built".
///
/// Pushed on construction, popped on drop. Scopes nest; drop order must be
/// the reverse of construction order, which plain RAII guarantees.
#[derive(Debug)]
pub struct BuildScope {
    id: NodeId,
}

impl BuildScope {
    /// Enter a build scope for the given node.
    pub fn enter(id: NodeId) -> Self {
        BUILD_STACK.with(|stack| stack.borrow_mut().push(id));
        Self { id }
    }

    /// The node this scope belongs to.
    pub fn node(&self) -> NodeId {
        self.id
    }
}

impl Drop for BuildScope {
    fn drop(&mut self) {
        BUILD_STACK.with(|stack| {
            let popped = stack.borrow_mut().pop();
            debug_assert_eq!(popped, Some(self.id), "build scopes must nest");
        });
    }
}
