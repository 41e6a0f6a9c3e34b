#![forbid(unsafe_code)]

//! The capability traits.
//!
//! Every trait has a default, so a widget opts into exactly the
//! capabilities it has; there is no runtime type inspection anywhere.
//! [`Widget`] bundles them for trait objects and is blanket-implemented.

use std::rc::Rc;

use weft_core::style::Insets;
use weft_core::{Constraints, Dimension, Size};
use weft_layout::LayoutNode;

use crate::context::BuildCx;

/// Produce a child widget. The default builds nothing, which marks the
/// widget as a leaf (or a pure layout container).
pub trait Build {
    fn build(&self, cx: &mut BuildCx) -> Option<Rc<dyn Widget>> {
        let _ = cx;
        None
    }
}

/// Contribute a layout subtree directly.
///
/// Containers override this to assemble rows, docks, and stacks from
/// their children. The default returns `None`, which makes
/// [`layout_of`](crate::compose::layout_of) fall back to a measured box
/// node driven by [`MeasureContent`].
pub trait LayoutContribution {
    fn layout_node(&self, cx: &mut BuildCx) -> Option<LayoutNode> {
        let _ = cx;
        None
    }
}

/// Advertised size preferences, one per axis.
pub trait DimensionHints {
    fn width(&self) -> Dimension {
        Dimension::Unset
    }

    fn height(&self) -> Dimension {
        Dimension::Unset
    }
}

/// Advertised box insets.
pub trait StyleHints {
    fn insets(&self) -> Insets {
        Insets::NONE
    }
}

/// Measure intrinsic content under a constraints window. The default is
/// zero content.
pub trait MeasureContent {
    fn measure(&self, bounds: Constraints) -> Size {
        let _ = bounds;
        Size::ZERO
    }
}

/// The full widget surface, for trait objects.
pub trait Widget: Build + LayoutContribution + DimensionHints + StyleHints + MeasureContent {}

impl<T> Widget for T where
    T: Build + LayoutContribution + DimensionHints + StyleHints + MeasureContent
{
}
