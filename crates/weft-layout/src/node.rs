#![forbid(unsafe_code)]

//! The per-frame layout tree.
//!
//! Built fresh from the widget tree every frame; nodes own no identity
//! and never survive a pass. Each node carries its own size preferences
//! and insets via [`NodeStyle`] plus its children.

use std::fmt;

use weft_core::style::Insets;
use weft_core::{Alignment, Axis, Constraints, CrossAlign, Dimension, MainAlign, Size};

/// Size preferences and insets attached to one layout node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeStyle {
    /// Preferred width.
    pub width: Dimension,
    /// Preferred height.
    pub height: Dimension,
    /// Padding, border, and margin.
    pub insets: Insets,
}

impl NodeStyle {
    /// Unset dimensions, no insets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred width.
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    /// Set the preferred height.
    pub fn height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    /// Set the insets.
    pub fn insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// The preference along an axis.
    #[inline]
    pub const fn dim(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Content measurement callback for leaf boxes.
pub type MeasureFn = Box<dyn Fn(Constraints) -> Size>;

/// A leaf or single-child box.
pub struct BoxNode {
    pub style: NodeStyle,
    /// Content measurement; `None` means zero content.
    pub measure: Option<MeasureFn>,
    /// Optional wrapped child; fills the content box unless it preserves
    /// its own size.
    pub child: Option<Box<LayoutNode>>,
}

impl BoxNode {
    /// A leaf with no content.
    pub fn leaf(style: NodeStyle) -> Self {
        Self {
            style,
            measure: None,
            child: None,
        }
    }

    /// A leaf measured by a callback.
    pub fn measured(style: NodeStyle, measure: impl Fn(Constraints) -> Size + 'static) -> Self {
        Self {
            style,
            measure: Some(Box::new(measure)),
            child: None,
        }
    }

    /// A box wrapping a single child.
    pub fn wrapping(style: NodeStyle, child: LayoutNode) -> Self {
        Self {
            style,
            measure: None,
            child: Some(Box::new(child)),
        }
    }
}

impl fmt::Debug for BoxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxNode")
            .field("style", &self.style)
            .field("measure", &self.measure.as_ref().map(|_| "fn"))
            .field("child", &self.child)
            .finish()
    }
}

/// An ordered row or column of children.
#[derive(Debug, Default)]
pub struct FlexContainer {
    pub style: NodeStyle,
    pub children: Vec<LayoutNode>,
    /// Cells inserted strictly between children, never at the ends.
    pub spacing: u16,
    pub main_align: MainAlign,
    pub cross_align: CrossAlign,
}

impl FlexContainer {
    /// Create a container with the given children.
    pub fn new(children: Vec<LayoutNode>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    /// Set the style.
    pub fn style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the inter-child spacing.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the main-axis alignment.
    pub fn main_align(mut self, align: MainAlign) -> Self {
        self.main_align = align;
        self
    }

    /// Set the cross-axis alignment.
    pub fn cross_align(mut self, align: CrossAlign) -> Self {
        self.cross_align = align;
        self
    }
}

/// An edge of a dock layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Edge bands peeled off a rectangle in declaration order, body last.
#[derive(Debug)]
pub struct DockNode {
    pub style: NodeStyle,
    /// Edge widgets in declaration order; same-edge entries stack
    /// consecutively along that edge's axis.
    pub edges: Vec<(DockEdge, LayoutNode)>,
    /// Laid out last into whatever rectangle remains.
    pub body: Box<LayoutNode>,
}

impl DockNode {
    /// Create a dock around the given body.
    pub fn new(body: LayoutNode) -> Self {
        Self {
            style: NodeStyle::default(),
            edges: Vec::new(),
            body: Box::new(body),
        }
    }

    /// Set the style.
    pub fn style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }

    /// Append an edge widget.
    pub fn edge(mut self, edge: DockEdge, node: LayoutNode) -> Self {
        self.edges.push((edge, node));
        self
    }
}

/// Absolute offsets for a positioned stack child.
///
/// Any subset may be present, any sign; negative offsets deliberately
/// overflow the stack's bounds. Both offsets on one axis override the
/// child's own dimension with `container − near − far`, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchors {
    pub top: Option<i32>,
    pub left: Option<i32>,
    pub bottom: Option<i32>,
    pub right: Option<i32>,
}

impl Anchors {
    /// No offsets.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, offset: i32) -> Self {
        self.top = Some(offset);
        self
    }

    pub fn left(mut self, offset: i32) -> Self {
        self.left = Some(offset);
        self
    }

    pub fn bottom(mut self, offset: i32) -> Self {
        self.bottom = Some(offset);
        self
    }

    pub fn right(mut self, offset: i32) -> Self {
        self.right = Some(offset);
        self
    }
}

/// How one stack child is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Natural size, placed by 2-D alignment within the content box.
    Aligned(Alignment),
    /// Anchored by absolute offsets.
    Anchored(Anchors),
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Aligned(Alignment::TOP_LEFT)
    }
}

/// One stack child with its placement.
#[derive(Debug)]
pub struct StackChild {
    pub node: LayoutNode,
    pub placement: Placement,
}

impl StackChild {
    /// A non-positioned child placed by alignment.
    pub fn aligned(node: LayoutNode, alignment: Alignment) -> Self {
        Self {
            node,
            placement: Placement::Aligned(alignment),
        }
    }

    /// A positioned child anchored by offsets.
    pub fn anchored(node: LayoutNode, anchors: Anchors) -> Self {
        Self {
            node,
            placement: Placement::Anchored(anchors),
        }
    }
}

/// An overlay container: children share the content box, painted in
/// declaration order (later children cover earlier ones).
#[derive(Debug, Default)]
pub struct StackNode {
    pub style: NodeStyle,
    pub children: Vec<StackChild>,
}

impl StackNode {
    /// Create a stack with the given children.
    pub fn new(children: Vec<StackChild>) -> Self {
        Self {
            style: NodeStyle::default(),
            children,
        }
    }

    /// Set the style.
    pub fn style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }
}

/// Decorates a child with a percentage of the container's resolved size.
#[derive(Debug)]
pub struct PercentWrap {
    /// Percentage of the container's width, if overridden.
    pub width: Option<f32>,
    /// Percentage of the container's height, if overridden.
    pub height: Option<f32>,
    pub child: Box<LayoutNode>,
}

/// Decorates a child with a weighted share of leftover main-axis space.
#[derive(Debug)]
pub struct FlexWrap {
    pub weight: u16,
    pub child: Box<LayoutNode>,
}

/// Applies percentage min/max bounds to a child after it resolves.
#[derive(Debug)]
pub struct PercentBoundsWrap {
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
    pub child: Box<LayoutNode>,
}

/// A polymorphic layout-tree node, built once per frame.
#[derive(Debug)]
pub enum LayoutNode {
    Box(BoxNode),
    Row(FlexContainer),
    Column(FlexContainer),
    Dock(DockNode),
    Stack(StackNode),
    Percent(PercentWrap),
    Flexed(FlexWrap),
    PercentBounds(PercentBoundsWrap),
}

impl LayoutNode {
    /// A content-less leaf box.
    pub fn leaf(style: NodeStyle) -> Self {
        LayoutNode::Box(BoxNode::leaf(style))
    }

    /// A leaf box measured by a callback.
    pub fn measured(style: NodeStyle, measure: impl Fn(Constraints) -> Size + 'static) -> Self {
        LayoutNode::Box(BoxNode::measured(style, measure))
    }

    /// A row of children (main axis horizontal).
    pub fn row(children: Vec<LayoutNode>) -> Self {
        LayoutNode::Row(FlexContainer::new(children))
    }

    /// A column of children (main axis vertical).
    pub fn column(children: Vec<LayoutNode>) -> Self {
        LayoutNode::Column(FlexContainer::new(children))
    }

    /// Wrap a child with a flex weight.
    pub fn flexed(weight: u16, child: LayoutNode) -> Self {
        LayoutNode::Flexed(FlexWrap {
            weight,
            child: Box::new(child),
        })
    }

    /// Wrap a child with percentage dimensions.
    pub fn percent(width: Option<f32>, height: Option<f32>, child: LayoutNode) -> Self {
        LayoutNode::Percent(PercentWrap {
            width,
            height,
            child: Box::new(child),
        })
    }

    /// The style governing this node's own box.
    ///
    /// Wrappers are transparent and report the wrapped child's style, so
    /// margins and insets survive wrapping.
    pub fn style(&self) -> &NodeStyle {
        match self {
            LayoutNode::Box(node) => &node.style,
            LayoutNode::Row(node) | LayoutNode::Column(node) => &node.style,
            LayoutNode::Dock(node) => &node.style,
            LayoutNode::Stack(node) => &node.style,
            LayoutNode::Percent(wrap) => wrap.child.style(),
            LayoutNode::Flexed(wrap) => wrap.child.style(),
            LayoutNode::PercentBounds(wrap) => wrap.child.style(),
        }
    }

    /// The effective size preference along an axis, looking through
    /// wrappers.
    ///
    /// A [`FlexWrap`] reads as `Flex(weight)` on either axis; a
    /// [`PercentWrap`] reads as `Percent` on the axes it overrides; a
    /// [`PercentBoundsWrap`] reads as `Auto`, since its measured size
    /// already carries the bounds and must be preserved.
    pub fn effective_dim(&self, axis: Axis) -> Dimension {
        match self {
            LayoutNode::Flexed(wrap) => Dimension::Flex(wrap.weight),
            LayoutNode::Percent(wrap) => {
                let pct = match axis {
                    Axis::Horizontal => wrap.width,
                    Axis::Vertical => wrap.height,
                };
                match pct {
                    Some(p) => Dimension::Percent(p),
                    None => wrap.child.effective_dim(axis),
                }
            }
            LayoutNode::PercentBounds(_) => Dimension::Auto,
            _ => self.style().dim(axis),
        }
    }
}

impl From<BoxNode> for LayoutNode {
    fn from(node: BoxNode) -> Self {
        LayoutNode::Box(node)
    }
}

impl From<DockNode> for LayoutNode {
    fn from(node: DockNode) -> Self {
        LayoutNode::Dock(node)
    }
}

impl From<StackNode> for LayoutNode {
    fn from(node: StackNode) -> Self {
        LayoutNode::Stack(node)
    }
}
