#![forbid(unsafe_code)]

//! Layout tree and constraint resolver.
//!
//! This crate turns a tree of size preferences into concrete rectangles:
//!
//! - [`LayoutNode`] - the per-frame tree of boxes, rows/columns, docks,
//!   stacks, and percent/flex wrappers
//! - [`resolve`] - the two-pass resolver (bottom-up measure, top-down
//!   arrange) producing a [`ComputedLayout`]
//! - [`distribute_weighted`] - largest-remainder distribution of leftover
//!   space across flex weights, with exact sum conservation
//! - [`cache`] - the per-frame rect cache queried by scroll-into-view and
//!   hit-testing collaborators
//!
//! The tree is rebuilt from the widget tree every frame and no node
//! survives across frames, so nodes carry no identity and the resolver is
//! a pure, bounded recursive walk.
//!
//! # Example
//!
//! ```
//! use weft_layout::{LayoutNode, NodeStyle, resolve};
//! use weft_core::{Constraints, Dimension, Size};
//!
//! let row = LayoutNode::row(vec![
//!     LayoutNode::leaf(NodeStyle::new().width(Dimension::Cells(10))),
//!     LayoutNode::leaf(NodeStyle::new().width(Dimension::Flex(1))),
//! ]);
//! let layout = resolve(&row, Constraints::tight(Size::new(30, 4)));
//! assert_eq!(layout.children[0].rect.width, 10);
//! assert_eq!(layout.children[1].rect.width, 20);
//! ```

pub mod cache;
pub mod distribute;
pub mod dock;
pub mod node;
pub mod resolve;
pub mod stack;

pub use cache::{FrameCache, FrameCacheStats};
pub use distribute::distribute_weighted;
pub use node::{
    Anchors, BoxNode, DockEdge, DockNode, FlexContainer, FlexWrap, LayoutNode, NodeStyle,
    PercentBoundsWrap, PercentWrap, Placement, StackChild, StackNode,
};
pub use resolve::{ComputedLayout, arrange, measure, resolve};
pub use weft_core::{Alignment, Axis, Constraints, Dimension, Rect, Sides, Size};
