#![forbid(unsafe_code)]

//! Container composition: turning widgets into layout trees.
//!
//! The containers here are plain widgets whose [`LayoutContribution`]
//! assembles the corresponding [`LayoutNode`] from their children's
//! layouts. [`layout_of`] is the single entry point the frame loop uses
//! for the root; it handles the build chain, the measured-box fallback,
//! and the `Flexed`/`Percent` wrapping for advertised dimensions.

use std::rc::Rc;

use weft_core::style::Insets;
use weft_core::{Alignment, CrossAlign, Dimension, MainAlign};
use weft_layout::{
    Anchors, DockEdge, DockNode, FlexContainer, LayoutNode, NodeStyle, StackChild, StackNode,
};

use crate::context::BuildCx;
use crate::widget::{Build, DimensionHints, LayoutContribution, MeasureContent, StyleHints, Widget};

/// The layout subtree for one widget, built inside its own fresh node.
///
/// Resolution order: a built child wins, then an explicit layout
/// contribution, then the measured-box fallback. Advertised
/// `Flex`/`Percent` dimensions wrap the result so the parent container
/// classifies the widget correctly.
pub fn layout_of(widget: &Rc<dyn Widget>, cx: &mut BuildCx) -> LayoutNode {
    cx.scoped(|cx| {
        let node = if let Some(child) = widget.build(cx) {
            layout_of(&child, cx)
        } else if let Some(node) = widget.layout_node(cx) {
            node
        } else {
            let style = style_of(widget.as_ref());
            let handle = Rc::clone(widget);
            return LayoutNode::measured(style, move |bounds| handle.measure(bounds));
        };
        wrap_hints(widget.as_ref(), node)
    })
}

/// The node style a widget's hints describe.
fn style_of(widget: &dyn Widget) -> NodeStyle {
    NodeStyle::new()
        .width(widget.width())
        .height(widget.height())
        .insets(widget.insets())
}

/// Wrap a contributed node so the widget's advertised `Flex`/`Percent`
/// dimensions survive into the parent's classification.
///
/// The percent wrap goes outermost: it overrides only the axes it
/// states, letting a flex weight on the other axis show through.
fn wrap_hints(widget: &dyn Widget, node: LayoutNode) -> LayoutNode {
    let width = widget.width();
    let height = widget.height();
    let mut node = node;
    if let Some(weight) = width.flex_weight().or(height.flex_weight()) {
        node = LayoutNode::flexed(weight, node);
    }
    let width_pct = width.percent();
    let height_pct = height.percent();
    if width_pct.is_some() || height_pct.is_some() {
        node = LayoutNode::percent(width_pct, height_pct, node);
    }
    node
}

macro_rules! hint_fields {
    () => {
        /// Set the advertised width.
        pub fn width(mut self, width: Dimension) -> Self {
            self.width = width;
            self
        }

        /// Set the advertised height.
        pub fn height(mut self, height: Dimension) -> Self {
            self.height = height;
            self
        }

        /// Set the insets.
        pub fn insets(mut self, insets: Insets) -> Self {
            self.insets = insets;
            self
        }
    };
}

macro_rules! hint_impls {
    ($ty:ty) => {
        impl DimensionHints for $ty {
            fn width(&self) -> Dimension {
                self.width
            }

            fn height(&self) -> Dimension {
                self.height
            }
        }

        impl StyleHints for $ty {
            fn insets(&self) -> Insets {
                self.insets
            }
        }

        impl Build for $ty {}
        impl MeasureContent for $ty {}
    };
}

/// A horizontal sequence of widgets.
#[derive(Default)]
pub struct Row {
    children: Vec<Rc<dyn Widget>>,
    spacing: u16,
    main_align: MainAlign,
    cross_align: CrossAlign,
    width: Dimension,
    height: Dimension,
    insets: Insets,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child.
    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Rc::new(child));
        self
    }

    /// Append an already-shared child.
    pub fn child_rc(mut self, child: Rc<dyn Widget>) -> Self {
        self.children.push(child);
        self
    }

    /// Cells between children.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn main_align(mut self, align: MainAlign) -> Self {
        self.main_align = align;
        self
    }

    pub fn cross_align(mut self, align: CrossAlign) -> Self {
        self.cross_align = align;
        self
    }

    hint_fields!();

    fn container(&self, cx: &mut BuildCx) -> FlexContainer {
        let children = self
            .children
            .iter()
            .map(|child| layout_of(child, cx))
            .collect();
        FlexContainer::new(children)
            .style(style_of_parts(self.width, self.height, self.insets))
            .spacing(self.spacing)
            .main_align(self.main_align)
            .cross_align(self.cross_align)
    }
}

impl LayoutContribution for Row {
    fn layout_node(&self, cx: &mut BuildCx) -> Option<LayoutNode> {
        Some(LayoutNode::Row(self.container(cx)))
    }
}

hint_impls!(Row);

/// A vertical sequence of widgets.
#[derive(Default)]
pub struct Column {
    inner: Row,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.inner = self.inner.child(child);
        self
    }

    pub fn child_rc(mut self, child: Rc<dyn Widget>) -> Self {
        self.inner = self.inner.child_rc(child);
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.inner = self.inner.spacing(spacing);
        self
    }

    pub fn main_align(mut self, align: MainAlign) -> Self {
        self.inner = self.inner.main_align(align);
        self
    }

    pub fn cross_align(mut self, align: CrossAlign) -> Self {
        self.inner = self.inner.cross_align(align);
        self
    }

    pub fn width(mut self, width: Dimension) -> Self {
        self.inner = self.inner.width(width);
        self
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.inner = self.inner.height(height);
        self
    }

    pub fn insets(mut self, insets: Insets) -> Self {
        self.inner = self.inner.insets(insets);
        self
    }
}

impl LayoutContribution for Column {
    fn layout_node(&self, cx: &mut BuildCx) -> Option<LayoutNode> {
        Some(LayoutNode::Column(self.inner.container(cx)))
    }
}

impl DimensionHints for Column {
    fn width(&self) -> Dimension {
        self.inner.width
    }

    fn height(&self) -> Dimension {
        self.inner.height
    }
}

impl StyleHints for Column {
    fn insets(&self) -> Insets {
        self.inner.insets
    }
}

impl Build for Column {}
impl MeasureContent for Column {}

/// Edge bands around a body.
pub struct Dock {
    edges: Vec<(DockEdge, Rc<dyn Widget>)>,
    body: Rc<dyn Widget>,
    width: Dimension,
    height: Dimension,
    insets: Insets,
}

impl Dock {
    /// A dock around the given body.
    pub fn new(body: impl Widget + 'static) -> Self {
        Self {
            edges: Vec::new(),
            body: Rc::new(body),
            width: Dimension::Unset,
            height: Dimension::Unset,
            insets: Insets::NONE,
        }
    }

    /// Append an edge widget; declaration order is peel order.
    pub fn edge(mut self, edge: DockEdge, child: impl Widget + 'static) -> Self {
        self.edges.push((edge, Rc::new(child)));
        self
    }

    pub fn top(self, child: impl Widget + 'static) -> Self {
        self.edge(DockEdge::Top, child)
    }

    pub fn bottom(self, child: impl Widget + 'static) -> Self {
        self.edge(DockEdge::Bottom, child)
    }

    pub fn left(self, child: impl Widget + 'static) -> Self {
        self.edge(DockEdge::Left, child)
    }

    pub fn right(self, child: impl Widget + 'static) -> Self {
        self.edge(DockEdge::Right, child)
    }

    hint_fields!();
}

impl LayoutContribution for Dock {
    fn layout_node(&self, cx: &mut BuildCx) -> Option<LayoutNode> {
        let mut dock = DockNode::new(layout_of(&self.body, cx))
            .style(style_of_parts(self.width, self.height, self.insets));
        for (edge, child) in &self.edges {
            dock = dock.edge(*edge, layout_of(child, cx));
        }
        Some(LayoutNode::Dock(dock))
    }
}

hint_impls!(Dock);

/// Overlaid widgets sharing one box, painted in declaration order.
#[derive(Default)]
pub struct Stack {
    children: Vec<(StackPlacement, Rc<dyn Widget>)>,
    width: Dimension,
    height: Dimension,
    insets: Insets,
}

enum StackPlacement {
    Aligned(Alignment),
    Anchored(Anchors),
}

impl Default for StackPlacement {
    fn default() -> Self {
        StackPlacement::Aligned(Alignment::TOP_LEFT)
    }
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a non-positioned child.
    pub fn aligned(mut self, child: impl Widget + 'static, alignment: Alignment) -> Self {
        self.children
            .push((StackPlacement::Aligned(alignment), Rc::new(child)));
        self
    }

    /// Append a positioned child.
    pub fn anchored(mut self, child: impl Widget + 'static, anchors: Anchors) -> Self {
        self.children
            .push((StackPlacement::Anchored(anchors), Rc::new(child)));
        self
    }

    hint_fields!();
}

impl LayoutContribution for Stack {
    fn layout_node(&self, cx: &mut BuildCx) -> Option<LayoutNode> {
        let children = self
            .children
            .iter()
            .map(|(placement, child)| {
                let node = layout_of(child, cx);
                match placement {
                    StackPlacement::Aligned(alignment) => StackChild::aligned(node, *alignment),
                    StackPlacement::Anchored(anchors) => StackChild::anchored(node, *anchors),
                }
            })
            .collect();
        Some(LayoutNode::Stack(StackNode::new(children).style(
            style_of_parts(self.width, self.height, self.insets),
        )))
    }
}

hint_impls!(Stack);

fn style_of_parts(width: Dimension, height: Dimension, insets: Insets) -> NodeStyle {
    NodeStyle::new().width(width).height(height).insets(insets)
}
