#![forbid(unsafe_code)]

use std::fmt;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, TryRecvError};

use tracing::{debug, trace};

use weft_core::{Constraints, Size};
use weft_layout::{ComputedLayout, FrameCache, resolve};
use weft_reactive::{NodeId, runtime};
use weft_widgets::{BuildCx, Widget, layout_of};

/// The frame loop failed; the only way that happens is the frame channel
/// closing underneath it (another loop installed a fresh receiver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunError {
    FrameChannelClosed,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::FrameChannelClosed => write!(f, "frame request channel closed"),
        }
    }
}

impl std::error::Error for RunError {}

/// The product of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutput {
    /// The resolved rect tree for the whole viewport.
    pub layout: ComputedLayout,
    /// The viewport the pass ran against.
    pub viewport: Size,
    /// Monotonic pass counter, starting at 1.
    pub number: u64,
}

/// Owns the root widget, the frame-request receiver, and the node
/// lifecycle.
///
/// Creating a loop installs a fresh receiver in the global runtime and
/// requests an initial frame, so `run` paints once before the first
/// write arrives.
pub struct FrameLoop {
    root: Rc<dyn Widget>,
    viewport: Size,
    frames: Receiver<()>,
    live_nodes: Vec<NodeId>,
    cache: FrameCache,
    passes: u64,
}

impl FrameLoop {
    pub fn new(root: Rc<dyn Widget>, viewport: Size) -> Self {
        let frames = runtime().frame.install();
        runtime().frame.request();
        Self {
            root,
            viewport,
            frames,
            live_nodes: Vec::new(),
            cache: FrameCache::new(),
            passes: 0,
        }
    }

    /// The current viewport.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Change the viewport and schedule a repaint.
    pub fn resize(&mut self, viewport: Size) {
        if self.viewport != viewport {
            self.viewport = viewport;
            runtime().frame.request();
        }
    }

    /// The rect cache for the most recent pass.
    pub fn cache(&mut self) -> &mut FrameCache {
        &mut self.cache
    }

    /// Run one full pass unconditionally.
    pub fn tick(&mut self) -> FrameOutput {
        // Retire last pass's nodes first; any cell still subscribed to
        // them prunes the stale IDs on its next notify.
        for id in self.live_nodes.drain(..) {
            runtime().dirty.retire(id);
        }

        let mut cx = BuildCx::new();
        let tree = layout_of(&self.root, &mut cx);
        self.live_nodes = cx.take_built();

        let layout = resolve(&tree, Constraints::tight(self.viewport));
        self.cache.rebuild(&layout, (0, 0));

        self.passes += 1;
        trace!(
            pass = self.passes,
            nodes = self.live_nodes.len(),
            rects = self.cache.len(),
            "frame pass complete"
        );

        FrameOutput {
            layout,
            viewport: self.viewport,
            number: self.passes,
        }
    }

    /// Whether a coalesced frame request is pending, consuming it.
    pub fn frame_requested(&self) -> bool {
        match self.frames.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => false,
        }
    }

    /// Block until the next frame request.
    pub fn wait(&self) -> Result<(), RunError> {
        self.frames.recv().map_err(|_| RunError::FrameChannelClosed)
    }

    /// Block on frame requests, ticking once per coalesced request, until
    /// `present` breaks or the channel closes.
    pub fn run(
        &mut self,
        mut present: impl FnMut(&FrameOutput, &mut FrameCache) -> ControlFlow<()>,
    ) -> Result<(), RunError> {
        debug!(viewport = ?self.viewport, "frame loop starting");
        loop {
            self.wait()?;
            let frame = self.tick();
            if present(&frame, &mut self.cache).is_break() {
                debug!(passes = self.passes, "frame loop stopped by presenter");
                return Ok(());
            }
        }
    }
}

impl fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameLoop")
            .field("viewport", &self.viewport)
            .field("live_nodes", &self.live_nodes.len())
            .field("passes", &self.passes)
            .finish()
    }
}
