#![forbid(unsafe_code)]

//! Build context: the bridge between widget builds and the reactive
//! registry.
//!
//! Each widget build runs inside a fresh registered node and a matching
//! [`BuildScope`], so any cell read during the build subscribes that
//! node. The context records every node it registered; the frame loop
//! retires them wholesale before the next build, which is what lets
//! cells detect and prune stale subscriptions.

use weft_reactive::{BuildScope, NodeId, runtime};

/// Per-build bookkeeping handed down the widget tree.
#[derive(Debug, Default)]
pub struct BuildCx {
    built: Vec<NodeId>,
}

impl BuildCx {
    /// An empty context for one build pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` inside a freshly registered build node.
    ///
    /// Scopes nest: a container's children build inside the container's
    /// own scope, each under their own node.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut BuildCx) -> R) -> R {
        let id = runtime().dirty.register();
        self.built.push(id);
        let _scope = BuildScope::enter(id);
        f(self)
    }

    /// Nodes registered by this context so far, in build order.
    pub fn built_nodes(&self) -> &[NodeId] {
        &self.built
    }

    /// Hand the registered nodes to the caller (the frame loop keeps
    /// them until the next pass retires them).
    pub fn take_built(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.built)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_reactive::current_build_node;

    #[test]
    fn scoped_registers_and_unwinds() {
        let mut cx = BuildCx::new();
        assert_eq!(current_build_node(), None);

        let (outer, inner) = cx.scoped(|cx| {
            let outer = current_build_node().expect("scope must be active");
            let inner = cx.scoped(|_| current_build_node().expect("nested scope"));
            assert_eq!(current_build_node(), Some(outer));
            (outer, inner)
        });

        assert_eq!(current_build_node(), None);
        assert_ne!(outer, inner);
        assert_eq!(cx.built_nodes(), &[outer, inner]);

        for id in cx.take_built() {
            runtime().dirty.retire(id);
        }
        assert!(cx.built_nodes().is_empty());
    }

    #[test]
    fn built_nodes_are_live_until_retired() {
        let mut cx = BuildCx::new();
        cx.scoped(|_| {});
        let id = cx.built_nodes()[0];
        assert!(runtime().dirty.mark_dirty(id));
        runtime().dirty.retire(id);
        assert!(!runtime().dirty.mark_dirty(id));
    }
}
