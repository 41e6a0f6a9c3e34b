#![forbid(unsafe_code)]

//! Stack resolution: overlay children sharing one content box.
//!
//! Non-positioned children take their natural size and are placed by
//! 2-D alignment; positioned children are anchored by absolute signed
//! offsets from the content-box edges, and may deliberately overflow the
//! stack (negative coordinates included). Children never influence each
//! other; output order is declaration order, which is paint order.

use weft_core::{Alignment, Axis, Constraints, Dimension, Rect, Size, percent_of};

use crate::node::{Anchors, LayoutNode, Placement, StackNode};
use crate::resolve::{ComputedLayout, arrange, measure, own_size};

pub(crate) fn measure_stack(node: &StackNode, bounds: Constraints) -> Size {
    let frame = node.style.insets.frame();
    let inner = Constraints::loose(bounds.max_size()).deflate(frame);

    // Natural size: the bounding box of the aligned children only.
    // Anchored children are positioned against the final box and cannot
    // feed back into it.
    let mut content = Size::ZERO;
    for child in &node.children {
        if let Placement::Aligned(_) = child.placement {
            let slot = measure(&child.node, inner).inflate(child.node.style().insets.margin);
            content = content.max(slot);
        }
    }
    own_size(&node.style, content, bounds)
}

pub(crate) fn arrange_stack(node: &StackNode, size: Size) -> Vec<ComputedLayout> {
    let frame = node.style.insets.frame();
    let content = Rect::from_size(size).inner(frame);

    let mut out = Vec::with_capacity(node.children.len());
    for child in &node.children {
        let rect = match &child.placement {
            Placement::Aligned(alignment) => aligned_rect(&child.node, *alignment, content),
            Placement::Anchored(anchors) => anchored_rect(&child.node, *anchors, content),
        };
        out.push(arrange(&child.node, rect));
    }
    out
}

fn aligned_rect(child: &LayoutNode, alignment: Alignment, content: Rect) -> Rect {
    let slot = content.inner(child.style().insets.margin);
    let natural = natural_size(child, slot.size());
    Rect::new(
        slot.x + alignment.offset_x(slot.width, natural.width) as i32,
        slot.y + alignment.offset_y(slot.height, natural.height) as i32,
        natural.width,
        natural.height,
    )
}

/// Anchored children are placed by offsets alone; margin does not apply.
/// Both offsets on one axis override the child's own dimension with
/// `container − near − far`, clamped at zero; a single offset anchors the
/// natural size to that edge; none means the start edge.
fn anchored_rect(child: &LayoutNode, anchors: Anchors, content: Rect) -> Rect {
    let natural = natural_size(child, content.size());

    let (x, width) = anchored_axis(
        anchors.left,
        anchors.right,
        content.x,
        content.width,
        natural.width,
    );
    let (y, height) = anchored_axis(
        anchors.top,
        anchors.bottom,
        content.y,
        content.height,
        natural.height,
    );
    Rect::new(x, y, width, height)
}

fn anchored_axis(
    near: Option<i32>,
    far: Option<i32>,
    origin: i32,
    extent: u16,
    natural: u16,
) -> (i32, u16) {
    match (near, far) {
        (Some(n), Some(f)) => {
            let span = (extent as i32 - n - f).clamp(0, u16::MAX as i32) as u16;
            (origin + n, span)
        }
        (Some(n), None) => (origin + n, natural),
        (None, Some(f)) => (origin + extent as i32 - f - natural as i32, natural),
        (None, None) => (origin, natural),
    }
}

/// A stack child's own size within the available box: stated sizes clamp
/// at the box, content-fit keeps the measured extent. Flex has no
/// siblings to share with here, so it fills.
fn natural_size(child: &LayoutNode, avail: Size) -> Size {
    let measured = measure(child, Constraints::loose(avail));
    let width = axis_size(
        child.effective_dim(Axis::Horizontal),
        measured.width,
        avail.width,
    );
    let height = axis_size(
        child.effective_dim(Axis::Vertical),
        measured.height,
        avail.height,
    );
    Size::new(width, height)
}

fn axis_size(dim: Dimension, measured: u16, avail: u16) -> u16 {
    match dim {
        Dimension::Cells(cells) => cells.min(avail),
        Dimension::Percent(pct) => percent_of(pct, avail).min(avail),
        Dimension::Flex(_) => avail,
        _ => measured.min(avail),
    }
}
