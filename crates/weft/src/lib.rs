#![forbid(unsafe_code)]

//! Weft public facade crate.
//!
//! Re-exports the common surface from the internal crates and offers a
//! lightweight prelude for day-to-day usage: reactive cells, the layout
//! vocabulary, the widget capability traits, and the frame loop.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use weft_core::style::Insets;
pub use weft_core::{
    Alignment, Axis, Constraints, CrossAlign, Dimension, HAlign, MainAlign, Rect, Sides, Size,
    VAlign,
};

// --- Reactive re-exports ---------------------------------------------------

pub use weft_reactive::{
    BuildScope, DirtySet, LateSignal, NodeId, RawSignal, ReactiveRuntime, Signal,
    current_build_node, runtime,
};

// --- Layout re-exports -----------------------------------------------------

pub use weft_layout::{
    Anchors, ComputedLayout, DockEdge, FrameCache, FrameCacheStats, LayoutNode, NodeStyle,
    distribute_weighted, resolve,
};

// --- Widget re-exports -----------------------------------------------------

pub use weft_widgets::{
    Build, BuildCx, Column, DimensionHints, Dock, Label, LayoutContribution, MeasureContent, Row,
    Stack, StyleHints, Widget, layout_of,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use weft_runtime::{FrameLoop, FrameOutput, RunError};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for weft apps.
#[derive(Debug)]
pub enum Error {
    /// The frame loop stopped abnormally.
    #[cfg(feature = "runtime")]
    Runtime(RunError),
    /// I/O failure in a presenter.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "runtime")]
            Self::Runtime(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(feature = "runtime")]
impl From<RunError> for Error {
    fn from(err: RunError) -> Self {
        Self::Runtime(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for weft APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, Anchors, Column, Constraints, CrossAlign, Dimension, Dock, DockEdge, Error,
        Insets, Label, LateSignal, LayoutNode, MainAlign, NodeStyle, RawSignal, Rect, Result, Row,
        Signal, Size, Stack, Widget, resolve,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{FrameLoop, FrameOutput};

    pub use crate::{core, layout, reactive, widgets};
}

pub use weft_core as core;
pub use weft_layout as layout;
pub use weft_reactive as reactive;
#[cfg(feature = "runtime")]
pub use weft_runtime as runtime_loop;
pub use weft_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_and_conversion() {
        let err: Error = std::io::Error::other("presenter failed").into();
        assert_eq!(err.to_string(), "presenter failed");

        #[cfg(feature = "runtime")]
        {
            let err: Error = RunError::FrameChannelClosed.into();
            assert_eq!(err.to_string(), "frame request channel closed");
        }
    }

    #[test]
    fn prelude_surfaces_the_basics() {
        use crate::prelude::*;

        let cell = Signal::new(3u32);
        assert_eq!(cell.peek(), 3);
        let node = LayoutNode::row(vec![]);
        let layout = resolve(&node, Constraints::tight(Size::new(5, 5)));
        assert_eq!(layout.rect.size(), Size::new(5, 5));
    }
}
