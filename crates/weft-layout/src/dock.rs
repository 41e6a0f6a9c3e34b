#![forbid(unsafe_code)]

//! Dock resolution: edge bands peeled off a rectangle in declaration
//! order, body last.
//!
//! Each edge widget takes a band along its edge of the *running*
//! rectangle, then shrinks it for everyone after; percentages therefore
//! resolve against the rectangle as it stands at that widget's turn, not
//! the dock's original size. Consecutive same-edge widgets stack inward.
//! The band can consume at most what remains, so edge widgets never
//! overlap; an exhausted rectangle leaves later widgets (and the body)
//! with empty rects.

use weft_core::{Axis, Constraints, Dimension, Rect, Size, percent_of};

use crate::node::{DockEdge, DockNode, LayoutNode};
use crate::resolve::{ComputedLayout, arrange, measure, own_size};

pub(crate) fn measure_dock(node: &DockNode, bounds: Constraints) -> Size {
    let frame = node.style.insets.frame();
    let inner = Constraints::loose(bounds.max_size()).deflate(frame);

    // Natural size: the body plus the bands stacked along each axis.
    let body = measure(&node.body, inner).inflate(node.body.style().insets.margin);
    let mut width = body.width;
    let mut height = body.height;
    for (edge, child) in &node.edges {
        let slot = measure(child, inner).inflate(child.style().insets.margin);
        match edge {
            DockEdge::Top | DockEdge::Bottom => {
                height = height.saturating_add(slot.height);
                width = width.max(slot.width);
            }
            DockEdge::Left | DockEdge::Right => {
                width = width.saturating_add(slot.width);
                height = height.max(slot.height);
            }
        }
    }
    own_size(&node.style, Size::new(width, height), bounds)
}

pub(crate) fn arrange_dock(node: &DockNode, size: Size) -> Vec<ComputedLayout> {
    let frame = node.style.insets.frame();
    let mut avail = Rect::from_size(size).inner(frame);
    let mut out = Vec::with_capacity(node.edges.len() + 1);

    for (edge, child) in &node.edges {
        let margin = child.style().insets.margin;
        let (band, rest) = match edge {
            DockEdge::Top => {
                let span = band_span(child, Axis::Vertical, avail, margin.vertical_sum());
                (
                    Rect::new(avail.x, avail.y, avail.width, span),
                    Rect::new(
                        avail.x,
                        avail.y + span as i32,
                        avail.width,
                        avail.height - span,
                    ),
                )
            }
            DockEdge::Bottom => {
                let span = band_span(child, Axis::Vertical, avail, margin.vertical_sum());
                (
                    Rect::new(avail.x, avail.bottom() - span as i32, avail.width, span),
                    Rect::new(avail.x, avail.y, avail.width, avail.height - span),
                )
            }
            DockEdge::Left => {
                let span = band_span(child, Axis::Horizontal, avail, margin.horizontal_sum());
                (
                    Rect::new(avail.x, avail.y, span, avail.height),
                    Rect::new(
                        avail.x + span as i32,
                        avail.y,
                        avail.width - span,
                        avail.height,
                    ),
                )
            }
            DockEdge::Right => {
                let span = band_span(child, Axis::Horizontal, avail, margin.horizontal_sum());
                (
                    Rect::new(avail.right() - span as i32, avail.y, span, avail.height),
                    Rect::new(avail.x, avail.y, avail.width - span, avail.height),
                )
            }
        };
        out.push(arrange(child, band.inner(margin)));
        avail = rest;
    }

    out.push(arrange(&node.body, avail.inner(node.body.style().insets.margin)));
    out
}

/// The main-axis span an edge widget's band occupies, margin included,
/// clamped to what remains of the running rectangle.
fn band_span(child: &LayoutNode, axis: Axis, avail: Rect, margin_sum: u16) -> u16 {
    let remaining = axis.main_of(avail.size());
    let wanted = match child.effective_dim(axis) {
        Dimension::Cells(cells) => cells,
        // Percentage of the running rectangle as of this widget's turn.
        Dimension::Percent(pct) => percent_of(pct, remaining),
        _ => axis.main_of(measure(child, Constraints::loose(avail.size()))),
    };
    wanted.saturating_add(margin_sum).min(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeStyle;
    use crate::resolve::resolve;
    use weft_core::Sides;
    use weft_core::style::Insets;

    fn tall(cells: u16) -> LayoutNode {
        LayoutNode::leaf(NodeStyle::new().height(Dimension::Cells(cells)))
    }

    fn body() -> LayoutNode {
        LayoutNode::leaf(NodeStyle::new())
    }

    fn resolve_dock(node: DockNode, width: u16, height: u16) -> ComputedLayout {
        resolve(
            &LayoutNode::Dock(node),
            Constraints::tight(Size::new(width, height)),
        )
    }

    #[test]
    fn top_band_then_body_remainder() {
        let layout = resolve_dock(DockNode::new(body()).edge(DockEdge::Top, tall(2)), 20, 10);
        assert_eq!(layout.children[0].rect, Rect::new(0, 0, 20, 2));
        assert_eq!(layout.children[1].rect, Rect::new(0, 2, 20, 8));
    }

    #[test]
    fn same_edge_widgets_stack_inward() {
        let layout = resolve_dock(
            DockNode::new(body())
                .edge(DockEdge::Top, tall(2))
                .edge(DockEdge::Top, tall(3)),
            20,
            10,
        );
        assert_eq!(layout.children[0].rect, Rect::new(0, 0, 20, 2));
        assert_eq!(layout.children[1].rect, Rect::new(0, 2, 20, 3));
        // Body gets the original height minus both bands.
        assert_eq!(layout.children[2].rect, Rect::new(0, 5, 20, 5));
    }

    #[test]
    fn four_edges_peel_in_declaration_order() {
        let layout = resolve_dock(
            DockNode::new(body())
                .edge(DockEdge::Top, tall(1))
                .edge(
                    DockEdge::Left,
                    LayoutNode::leaf(NodeStyle::new().width(Dimension::Cells(4))),
                )
                .edge(DockEdge::Bottom, tall(2))
                .edge(
                    DockEdge::Right,
                    LayoutNode::leaf(NodeStyle::new().width(Dimension::Cells(3))),
                ),
            20,
            10,
        );
        assert_eq!(layout.children[0].rect, Rect::new(0, 0, 20, 1));
        // Left band spans the height left after the top peel.
        assert_eq!(layout.children[1].rect, Rect::new(0, 1, 4, 9));
        assert_eq!(layout.children[2].rect, Rect::new(4, 8, 16, 2));
        assert_eq!(layout.children[3].rect, Rect::new(17, 1, 3, 7));
        assert_eq!(layout.children[4].rect, Rect::new(4, 1, 13, 7));
    }

    #[test]
    fn percent_edge_uses_running_rect() {
        // Second band: 50% of the 8 rows remaining, not of the full 10.
        let layout = resolve_dock(
            DockNode::new(body())
                .edge(DockEdge::Top, tall(2))
                .edge(
                    DockEdge::Top,
                    LayoutNode::leaf(NodeStyle::new().height(Dimension::Percent(50.0))),
                ),
            20,
            10,
        );
        assert_eq!(layout.children[1].rect.height, 4);
        assert_eq!(layout.children[2].rect, Rect::new(0, 6, 20, 4));
    }

    #[test]
    fn oversized_band_exhausts_without_overlap() {
        let layout = resolve_dock(
            DockNode::new(body())
                .edge(DockEdge::Top, tall(8))
                .edge(DockEdge::Top, tall(8)),
            20,
            10,
        );
        assert_eq!(layout.children[0].rect.height, 8);
        // Only 2 rows remain; the second band clamps, the body gets none.
        assert_eq!(layout.children[1].rect.height, 2);
        assert!(layout.children[2].rect.is_empty());
    }

    #[test]
    fn edge_margin_insets_the_band() {
        let layout = resolve_dock(
            DockNode::new(body()).edge(
                DockEdge::Top,
                LayoutNode::leaf(
                    NodeStyle::new()
                        .height(Dimension::Cells(2))
                        .insets(Insets::NONE.margin(Sides::all(1))),
                ),
            ),
            20,
            10,
        );
        // Band is 2 + margins = 4 rows; the widget sits inside it.
        assert_eq!(layout.children[0].rect, Rect::new(1, 1, 18, 2));
        assert_eq!(layout.children[1].rect, Rect::new(0, 4, 20, 6));
    }

    #[test]
    fn dock_frame_insets_apply() {
        let layout = resolve_dock(
            DockNode::new(body())
                .style(NodeStyle::new().insets(Insets::NONE.bordered()))
                .edge(DockEdge::Top, tall(2)),
            20,
            10,
        );
        assert_eq!(layout.children[0].rect, Rect::new(1, 1, 18, 2));
        assert_eq!(layout.children[1].rect, Rect::new(1, 3, 18, 6));
    }

    #[test]
    fn measure_sums_bands_and_body() {
        let node = DockNode::new(LayoutNode::leaf(
            NodeStyle::new()
                .width(Dimension::Cells(10))
                .height(Dimension::Cells(4)),
        ))
        .edge(DockEdge::Top, tall(2))
        .edge(
            DockEdge::Left,
            LayoutNode::leaf(NodeStyle::new().width(Dimension::Cells(3))),
        );
        let size = measure(&LayoutNode::Dock(node), Constraints::UNBOUNDED);
        assert_eq!(size, Size::new(13, 6));
    }
}
