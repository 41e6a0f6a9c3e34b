#![forbid(unsafe_code)]

//! The two-pass layout resolver.
//!
//! Pass one ([`measure`]) walks bottom-up computing natural border-box
//! sizes under a [`Constraints`] window. Pass two ([`arrange`]) walks
//! top-down assigning concrete rectangles. [`resolve`] runs both.
//!
//! Coordinate convention: every [`ComputedLayout`] rect is relative to
//! its parent's border-box origin, with the parent's padding/border (and
//! the child's own margin) already folded into the origin. The root sits
//! at the origin. Declared `Cells` sizes are border-box sizes.
//!
//! Failure policy is defensive clamping throughout: negative spans clamp
//! to zero and over-large children clamp at the container boundary.

use weft_core::{Axis, Constraints, CrossAlign, Dimension, MainAlign, Rect, Size, percent_of};

use crate::distribute::distribute_weighted;
use crate::node::{BoxNode, FlexContainer, LayoutNode, NodeStyle, PercentBoundsWrap, PercentWrap};
use crate::{dock, stack};

/// The resolved rectangle tree for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComputedLayout {
    /// This node's rect, relative to the parent's border-box origin.
    pub rect: Rect,
    /// Child layouts in declaration order (paint order for stacks).
    pub children: Vec<ComputedLayout>,
}

impl ComputedLayout {
    /// This node's size.
    #[inline]
    pub const fn size(&self) -> Size {
        self.rect.size()
    }

    /// Walk a child-index path down the tree.
    pub fn find(&self, path: &[u32]) -> Option<&ComputedLayout> {
        let mut node = self;
        for &index in path {
            node = node.children.get(index as usize)?;
        }
        Some(node)
    }
}

/// Measure and arrange a tree under the given constraints.
pub fn resolve(node: &LayoutNode, bounds: Constraints) -> ComputedLayout {
    let size = measure(node, bounds);
    arrange(node, Rect::from_size(size))
}

/// Bottom-up natural border-box size of a node under `bounds`.
///
/// Margin is external and never part of the returned size; containers add
/// it back when reserving a slot for the child.
pub fn measure(node: &LayoutNode, bounds: Constraints) -> Size {
    match node {
        LayoutNode::Box(b) => measure_box(b, bounds),
        LayoutNode::Row(c) => measure_flex(c, Axis::Horizontal, bounds),
        LayoutNode::Column(c) => measure_flex(c, Axis::Vertical, bounds),
        LayoutNode::Dock(d) => dock::measure_dock(d, bounds),
        LayoutNode::Stack(s) => stack::measure_stack(s, bounds),
        LayoutNode::Percent(w) => measure_percent(w, bounds),
        LayoutNode::Flexed(w) => measure(&w.child, bounds),
        LayoutNode::PercentBounds(w) => measure_percent_bounds(w, bounds),
    }
}

/// Top-down rect assignment. `rect` is the node's border box in its
/// parent's coordinates; the returned children are in this node's own
/// coordinates.
pub fn arrange(node: &LayoutNode, rect: Rect) -> ComputedLayout {
    let children = match node {
        LayoutNode::Box(b) => arrange_box(b, rect.size()),
        LayoutNode::Row(c) => arrange_flex(c, Axis::Horizontal, rect.size()),
        LayoutNode::Column(c) => arrange_flex(c, Axis::Vertical, rect.size()),
        LayoutNode::Dock(d) => dock::arrange_dock(d, rect.size()),
        LayoutNode::Stack(s) => stack::arrange_stack(s, rect.size()),
        LayoutNode::Percent(w) => arrange_percent(w, rect.size()),
        LayoutNode::Flexed(w) => {
            // Sized by the parent container; the child fills the box.
            vec![arrange(&w.child, Rect::from_size(rect.size()))]
        }
        LayoutNode::PercentBounds(w) => arrange_percent_bounds(w, rect.size()),
    };
    ComputedLayout { rect, children }
}

/// Fold a content size into the node's own border-box size under bounds.
pub(crate) fn own_size(style: &NodeStyle, content: Size, bounds: Constraints) -> Size {
    let framed = content.inflate(style.insets.frame());
    let width = resolve_axis(style.width, framed.width, bounds.max_w);
    let height = resolve_axis(style.height, framed.height, bounds.max_h);
    bounds.clamp_size(Size::new(width, height))
}

/// Resolve one axis of a declared dimension against a bounded ancestor
/// span, falling back to the natural extent.
fn resolve_axis(dim: Dimension, natural: u16, max: u16) -> u16 {
    match dim {
        Dimension::Cells(n) => n,
        Dimension::Percent(p) if max < u16::MAX => percent_of(p, max),
        _ => natural,
    }
}

/// Allocate one axis of a child inside a known slot: stated sizes clamp
/// at the slot boundary, content-fit keeps the measured extent, and
/// stretchable children fill.
pub(crate) fn fill_or_natural(dim: Dimension, natural: u16, avail: u16) -> u16 {
    match dim {
        Dimension::Cells(n) => n.min(avail),
        Dimension::Percent(p) => percent_of(p, avail).min(avail),
        Dimension::Auto => natural.min(avail),
        Dimension::Flex(_) | Dimension::Unset => avail,
    }
}

fn measure_box(node: &BoxNode, bounds: Constraints) -> Size {
    let frame = node.style.insets.frame();
    let inner = Constraints::loose(bounds.max_size()).deflate(frame);
    let content = if let Some(measure_fn) = &node.measure {
        measure_fn(inner)
    } else if let Some(child) = &node.child {
        measure(child, inner).inflate(child.style().insets.margin)
    } else {
        Size::ZERO
    };
    own_size(&node.style, content, bounds)
}

fn arrange_box(node: &BoxNode, size: Size) -> Vec<ComputedLayout> {
    let Some(child) = &node.child else {
        return Vec::new();
    };
    let frame = node.style.insets.frame();
    let slot = Rect::from_size(size)
        .inner(frame)
        .inner(child.style().insets.margin);
    let natural = measure(child, Constraints::loose(slot.size()));
    let width = fill_or_natural(child.effective_dim(Axis::Horizontal), natural.width, slot.width);
    let height = fill_or_natural(child.effective_dim(Axis::Vertical), natural.height, slot.height);
    vec![arrange(child, Rect::new(slot.x, slot.y, width, height))]
}

fn measure_flex(node: &FlexContainer, axis: Axis, bounds: Constraints) -> Size {
    let frame = node.style.insets.frame();
    let inner = Constraints::loose(bounds.max_size()).deflate(frame);
    let mut main: u32 = 0;
    let mut cross: u16 = 0;
    for child in &node.children {
        let slot = measure(child, inner).inflate(child.style().insets.margin);
        main += axis.main_of(slot) as u32;
        cross = cross.max(axis.cross().main_of(slot));
    }
    if node.children.len() > 1 {
        main += node.spacing as u32 * (node.children.len() as u32 - 1);
    }
    let content = axis.pack(main.min(u16::MAX as u32) as u16, cross);
    own_size(&node.style, content, bounds)
}

/// Main-axis margin (near, far) of a child for the given axis.
fn main_margins(node: &LayoutNode, axis: Axis) -> (u16, u16) {
    let margin = node.style().insets.margin;
    match axis {
        Axis::Horizontal => (margin.left, margin.right),
        Axis::Vertical => (margin.top, margin.bottom),
    }
}

fn arrange_flex(node: &FlexContainer, axis: Axis, size: Size) -> Vec<ComputedLayout> {
    let n = node.children.len();
    if n == 0 {
        return Vec::new();
    }
    let frame = node.style.insets.frame();
    let content = Rect::from_size(size).inner(frame);
    let main_avail = axis.main_of(content.size());
    let cross_avail = axis.cross().main_of(content.size());

    let spacing_total = if n > 1 {
        (node.spacing as u32 * (n as u32 - 1)).min(u16::MAX as u32) as u16
    } else {
        0
    };

    // Margins consume main-axis space like content; reserve them up
    // front so every class is sized against what is actually left.
    let mut budget = main_avail.saturating_sub(spacing_total);
    for child in &node.children {
        let (near, far) = main_margins(child, axis);
        budget = budget.saturating_sub(near).saturating_sub(far);
    }

    let mut sizes = vec![0u16; n];
    let mut natural: Vec<Option<Size>> = (0..n).map(|_| None).collect();
    let mut flex_indices = Vec::new();
    let mut flex_weights = Vec::new();

    // 1. Fixed-class children: exact cells, and content-fit measured
    //    against the span still available.
    for (i, child) in node.children.iter().enumerate() {
        match child.effective_dim(axis) {
            Dimension::Flex(weight) => {
                flex_indices.push(i);
                flex_weights.push(weight);
            }
            Dimension::Percent(_) => {}
            Dimension::Cells(cells) => {
                let allocated = cells.min(budget);
                sizes[i] = allocated;
                budget -= allocated;
            }
            Dimension::Auto | Dimension::Unset => {
                let probe = Constraints::loose(axis.pack(budget, cross_avail));
                let measured = measure(child, probe);
                natural[i] = Some(measured);
                let allocated = axis.main_of(measured).min(budget);
                sizes[i] = allocated;
                budget -= allocated;
            }
        }
    }

    // 2. Percent children resolve against the container's own resolved
    //    content span, independent of sibling flex distribution; nested
    //    percent chains therefore resolve level by level.
    for (i, child) in node.children.iter().enumerate() {
        if let Dimension::Percent(pct) = child.effective_dim(axis) {
            let allocated = percent_of(pct, main_avail).min(budget);
            sizes[i] = allocated;
            budget -= allocated;
        }
    }

    // 3. Flex children share what remains, summing to it exactly.
    let shares = distribute_weighted(budget, &flex_weights);
    for (k, &i) in flex_indices.iter().enumerate() {
        sizes[i] = shares[k];
    }

    // 4. Main-axis slack; alignment never shrinks children.
    let mut used: u32 = spacing_total as u32;
    for (i, child) in node.children.iter().enumerate() {
        let (near, far) = main_margins(child, axis);
        used += sizes[i] as u32 + near as u32 + far as u32;
    }
    let leftover = main_avail.saturating_sub(used.min(u16::MAX as u32) as u16);
    let slack = match node.main_align {
        MainAlign::Start => 0,
        MainAlign::Center => leftover / 2,
        MainAlign::End => leftover,
    };

    let (main_origin, cross_origin) = match axis {
        Axis::Horizontal => (content.x, content.y),
        Axis::Vertical => (content.y, content.x),
    };

    let mut out = Vec::with_capacity(n);
    let mut cursor = main_origin + slack as i32;
    for (i, child) in node.children.iter().enumerate() {
        let (m_near, m_far) = main_margins(child, axis);
        let (c_near, c_far) = main_margins(child, axis.cross());
        cursor += m_near as i32;

        let cross_space = cross_avail.saturating_sub(c_near).saturating_sub(c_far);
        let cross_dim = child.effective_dim(axis.cross());
        let natural_cross = match cross_dim {
            Dimension::Cells(cells) => cells,
            Dimension::Percent(pct) => percent_of(pct, cross_avail),
            _ => {
                let measured = natural[i].unwrap_or_else(|| {
                    measure(child, Constraints::loose(axis.pack(sizes[i], cross_space)))
                });
                axis.cross().main_of(measured)
            }
        }
        .min(cross_space);

        let (cross_size, cross_off) = match node.cross_align {
            CrossAlign::Stretch if !cross_dim.preserves_content() => (cross_space, 0),
            CrossAlign::Stretch | CrossAlign::Start => (natural_cross, 0),
            CrossAlign::Center => (natural_cross, (cross_space - natural_cross) / 2),
            CrossAlign::End => (natural_cross, cross_space - natural_cross),
        };

        let cross_pos = cross_origin + c_near as i32 + cross_off as i32;
        let child_rect = match axis {
            Axis::Horizontal => Rect::new(cursor, cross_pos, sizes[i], cross_size),
            Axis::Vertical => Rect::new(cross_pos, cursor, cross_size, sizes[i]),
        };
        out.push(arrange(child, child_rect));

        cursor += sizes[i] as i32 + m_far as i32;
        if i + 1 < n {
            cursor += node.spacing as i32;
        }
    }
    out
}

fn measure_percent(wrap: &PercentWrap, bounds: Constraints) -> Size {
    let natural = measure(&wrap.child, bounds);
    let width = match wrap.width {
        Some(pct) if bounds.max_w < u16::MAX => percent_of(pct, bounds.max_w),
        _ => natural.width,
    };
    let height = match wrap.height {
        Some(pct) if bounds.max_h < u16::MAX => percent_of(pct, bounds.max_h),
        _ => natural.height,
    };
    bounds.clamp_size(Size::new(width, height))
}

fn arrange_percent(wrap: &PercentWrap, size: Size) -> Vec<ComputedLayout> {
    // The parent already resolved the percentage when it sized this
    // wrapper's box; the child simply fills it.
    vec![arrange(&wrap.child, Rect::from_size(size))]
}

/// Percentage bounds become a concrete constraints window against the
/// available box, then clamp the child's resolved size post-hoc.
fn percent_window(wrap: &PercentBoundsWrap, avail: Size) -> Constraints {
    let min_w = wrap.min_width.map_or(0, |p| percent_of(p, avail.width));
    let max_w = wrap
        .max_width
        .map_or(avail.width, |p| percent_of(p, avail.width));
    let min_h = wrap.min_height.map_or(0, |p| percent_of(p, avail.height));
    let max_h = wrap
        .max_height
        .map_or(avail.height, |p| percent_of(p, avail.height));
    Constraints::new(min_w, max_w, min_h, max_h)
}

fn measure_percent_bounds(wrap: &PercentBoundsWrap, bounds: Constraints) -> Size {
    let natural = measure(&wrap.child, bounds);
    let window = percent_window(wrap, bounds.max_size());
    bounds.clamp_size(window.clamp_size(natural))
}

fn arrange_percent_bounds(wrap: &PercentBoundsWrap, size: Size) -> Vec<ComputedLayout> {
    // The window was applied when this wrapper's box was measured; the
    // child fills the box, clamping at its boundary.
    vec![arrange(&wrap.child, Rect::from_size(size))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::DockNode;
    use weft_core::Sides;
    use weft_core::style::Insets;

    fn cells(w: u16, h: u16) -> LayoutNode {
        LayoutNode::leaf(
            NodeStyle::new()
                .width(Dimension::Cells(w))
                .height(Dimension::Cells(h)),
        )
    }

    fn wide(dim: Dimension) -> LayoutNode {
        LayoutNode::leaf(NodeStyle::new().width(dim))
    }

    #[test]
    fn row_fixed_then_flex_fills_exactly() {
        let row = LayoutNode::row(vec![
            wide(Dimension::Cells(10)),
            wide(Dimension::Flex(1)),
            wide(Dimension::Flex(2)),
        ]);
        let layout = resolve(&row, Constraints::tight(Size::new(100, 4)));
        let widths: Vec<u16> = layout.children.iter().map(|c| c.rect.width).collect();
        assert_eq!(widths, vec![10, 30, 60]);
        assert_eq!(widths.iter().sum::<u16>(), 100);
    }

    #[test]
    fn flex_proportionality_exact() {
        let row = LayoutNode::row(vec![wide(Dimension::Flex(1)), wide(Dimension::Flex(2))]);
        let layout = resolve(&row, Constraints::tight(Size::new(90, 1)));
        assert_eq!(layout.children[0].rect.width, 30);
        assert_eq!(layout.children[1].rect.width, 60);
    }

    #[test]
    fn spacing_between_children_only() {
        let row = LayoutNode::Row(
            FlexContainer::new(vec![wide(Dimension::Cells(10)), wide(Dimension::Cells(10))])
                .spacing(5),
        );
        let layout = resolve(&row, Constraints::tight(Size::new(100, 1)));
        assert_eq!(layout.children[0].rect.x, 0);
        assert_eq!(layout.children[1].rect.x, 15);
    }

    #[test]
    fn percent_resolves_against_container_not_remainder() {
        // 25% of the 40-cell container is 10, regardless of the flex
        // sibling's share.
        let row = LayoutNode::row(vec![
            wide(Dimension::Cells(20)),
            wide(Dimension::Percent(25.0)),
            wide(Dimension::Flex(1)),
        ]);
        let layout = resolve(&row, Constraints::tight(Size::new(40, 1)));
        assert_eq!(layout.children[1].rect.width, 10);
        assert_eq!(layout.children[2].rect.width, 10);
    }

    #[test]
    fn nested_percent_resolves_level_by_level() {
        // Percent(50) inside Percent(50) inside Cells(40) resolves to 10.
        let inner = LayoutNode::row(vec![wide(Dimension::Percent(50.0))]);
        let middle = LayoutNode::row(vec![LayoutNode::percent(Some(50.0), None, inner)]);
        let outer = LayoutNode::Box(BoxNode::wrapping(
            NodeStyle::new()
                .width(Dimension::Cells(40))
                .height(Dimension::Cells(1)),
            middle,
        ));
        let layout = resolve(&outer, Constraints::UNBOUNDED);
        assert_eq!(layout.rect.width, 40);
        let wrap_layout = &layout.children[0].children[0];
        assert_eq!(wrap_layout.rect.width, 20);
        // The wrap's child row fills it; the leaf inside takes 50% again.
        assert_eq!(wrap_layout.children[0].children[0].rect.width, 10);
    }

    #[test]
    fn main_align_distributes_slack_without_shrinking() {
        for (align, x0) in [
            (MainAlign::Start, 0),
            (MainAlign::Center, 40),
            (MainAlign::End, 80),
        ] {
            let row = LayoutNode::Row(
                FlexContainer::new(vec![wide(Dimension::Cells(10)), wide(Dimension::Cells(10))])
                    .main_align(align),
            );
            let layout = resolve(&row, Constraints::tight(Size::new(100, 1)));
            assert_eq!(layout.children[0].rect.x, x0, "align {align:?}");
            assert_eq!(layout.children[0].rect.width, 10);
            assert_eq!(layout.children[1].rect.x, x0 + 10);
        }
    }

    #[test]
    fn cross_stretch_fills_unless_preserved() {
        let row = LayoutNode::Row(
            FlexContainer::new(vec![
                cells(5, 2),
                LayoutNode::leaf(
                    NodeStyle::new()
                        .width(Dimension::Cells(5))
                        .height(Dimension::Auto),
                ),
            ])
            .cross_align(CrossAlign::Stretch),
        );
        let layout = resolve(&row, Constraints::tight(Size::new(20, 8)));
        // Cells(2) is a stated size, but Stretch overrides everything
        // except an explicit preserve.
        assert_eq!(layout.children[0].rect.height, 8);
        // Explicit Auto preserves content height (zero content here).
        assert_eq!(layout.children[1].rect.height, 0);
    }

    #[test]
    fn cross_alignment_places_natural_size() {
        for (align, y) in [
            (CrossAlign::Start, 0),
            (CrossAlign::Center, 3),
            (CrossAlign::End, 6),
        ] {
            let row =
                LayoutNode::Row(FlexContainer::new(vec![cells(5, 2)]).cross_align(align));
            let layout = resolve(&row, Constraints::tight(Size::new(10, 8)));
            assert_eq!(layout.children[0].rect.y, y, "align {align:?}");
            assert_eq!(layout.children[0].rect.height, 2);
        }
    }

    #[test]
    fn column_swaps_axes() {
        let column = LayoutNode::column(vec![
            LayoutNode::leaf(NodeStyle::new().height(Dimension::Cells(3))),
            LayoutNode::leaf(NodeStyle::new().height(Dimension::Flex(1))),
        ]);
        let layout = resolve(&column, Constraints::tight(Size::new(10, 10)));
        assert_eq!(layout.children[0].rect.height, 3);
        assert_eq!(layout.children[1].rect.height, 7);
        assert_eq!(layout.children[1].rect.y, 3);
    }

    #[test]
    fn padding_and_border_shift_children() {
        let row = LayoutNode::Row(
            FlexContainer::new(vec![wide(Dimension::Flex(1))]).style(
                NodeStyle::new().insets(Insets::NONE.padding(Sides::all(2)).bordered()),
            ),
        );
        let layout = resolve(&row, Constraints::tight(Size::new(20, 10)));
        // frame = padding 2 + border 1 per side
        assert_eq!(layout.children[0].rect.x, 3);
        assert_eq!(layout.children[0].rect.y, 3);
        assert_eq!(layout.children[0].rect.width, 14);
    }

    #[test]
    fn margin_offsets_without_joining_size() {
        let row = LayoutNode::row(vec![
            LayoutNode::leaf(
                NodeStyle::new()
                    .width(Dimension::Cells(5))
                    .insets(Insets::NONE.margin(Sides::new(1, 2, 0, 3))),
            ),
            wide(Dimension::Cells(5)),
        ]);
        let layout = resolve(&row, Constraints::tight(Size::new(30, 4)));
        // First child shifted right by its left margin, down by top margin.
        assert_eq!(layout.children[0].rect.x, 3);
        assert_eq!(layout.children[0].rect.y, 1);
        assert_eq!(layout.children[0].rect.width, 5);
        // Second child starts after size + both margins.
        assert_eq!(layout.children[1].rect.x, 10);
    }

    #[test]
    fn oversized_children_clamp_at_container_boundary() {
        let row = LayoutNode::row(vec![wide(Dimension::Cells(50)), wide(Dimension::Cells(50))]);
        let layout = resolve(&row, Constraints::tight(Size::new(60, 1)));
        assert_eq!(layout.children[0].rect.width, 50);
        assert_eq!(layout.children[1].rect.width, 10);
    }

    #[test]
    fn measured_leaf_contributes_content_size() {
        let row = LayoutNode::row(vec![
            LayoutNode::measured(NodeStyle::new(), |_| Size::new(12, 1)),
            wide(Dimension::Flex(1)),
        ]);
        let layout = resolve(&row, Constraints::tight(Size::new(40, 2)));
        assert_eq!(layout.children[0].rect.width, 12);
        assert_eq!(layout.children[1].rect.width, 28);
    }

    #[test]
    fn box_child_fills_content_unless_sized() {
        let boxed = LayoutNode::Box(BoxNode::wrapping(
            NodeStyle::new()
                .width(Dimension::Cells(20))
                .height(Dimension::Cells(10))
                .insets(Insets::NONE.bordered()),
            wide(Dimension::Unset),
        ));
        let layout = resolve(&boxed, Constraints::UNBOUNDED);
        assert_eq!(layout.children[0].rect, Rect::new(1, 1, 18, 8));
    }

    #[test]
    fn percent_bounds_clamp_post_hoc() {
        let node = LayoutNode::PercentBounds(PercentBoundsWrap {
            min_width: Some(25.0),
            max_width: Some(50.0),
            min_height: None,
            max_height: None,
            child: Box::new(cells(30, 1)),
        });
        let boxed = LayoutNode::Box(BoxNode::wrapping(
            NodeStyle::new()
                .width(Dimension::Cells(40))
                .height(Dimension::Cells(1)),
            node,
        ));
        let layout = resolve(&boxed, Constraints::UNBOUNDED);
        // Child wants 30, max bound is 50% of 40 = 20.
        assert_eq!(layout.children[0].children[0].rect.width, 20);
    }

    #[test]
    fn computed_layout_find_walks_paths() {
        let tree = LayoutNode::row(vec![
            LayoutNode::column(vec![cells(2, 2), cells(3, 3)]),
            cells(4, 4),
        ]);
        let layout = resolve(&tree, Constraints::tight(Size::new(20, 10)));
        assert_eq!(layout.find(&[0, 1]).map(|l| l.rect.height), Some(3));
        assert_eq!(layout.find(&[1]).map(|l| l.rect.width), Some(4));
        assert!(layout.find(&[5]).is_none());
    }

    #[test]
    fn dock_via_resolve_smoke() {
        let dock = LayoutNode::Dock(
            DockNode::new(wide(Dimension::Unset))
                .edge(crate::node::DockEdge::Top, {
                    LayoutNode::leaf(NodeStyle::new().height(Dimension::Cells(2)))
                }),
        );
        let layout = resolve(&dock, Constraints::tight(Size::new(10, 10)));
        assert_eq!(layout.children.len(), 2);
    }
}
