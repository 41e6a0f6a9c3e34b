//! Property tests for the resolver's structural invariants.

use proptest::prelude::*;

use weft_layout::{
    Constraints, Dimension, FlexContainer, LayoutNode, NodeStyle, Size, distribute_weighted,
    measure, resolve,
};

fn arb_dimension() -> impl Strategy<Value = Dimension> {
    prop_oneof![
        Just(Dimension::Unset),
        Just(Dimension::Auto),
        (0u16..200).prop_map(Dimension::Cells),
        (0u16..8).prop_map(Dimension::Flex),
        (0.0f32..150.0).prop_map(Dimension::Percent),
    ]
}

fn arb_row(width: u16) -> impl Strategy<Value = (LayoutNode, u16)> {
    (
        prop::collection::vec(arb_dimension(), 1..8),
        0u16..4,
    )
        .prop_map(move |(dims, spacing)| {
            let children = dims
                .into_iter()
                .map(|dim| LayoutNode::leaf(NodeStyle::new().width(dim)))
                .collect();
            (
                LayoutNode::Row(FlexContainer::new(children).spacing(spacing)),
                width,
            )
        })
}

proptest! {
    #[test]
    fn distribution_sums_exactly(total in 0u16..=u16::MAX, weights in prop::collection::vec(0u16..=u16::MAX, 0..16)) {
        let sizes = distribute_weighted(total, &weights);
        prop_assert_eq!(sizes.len(), weights.len());
        let sum: u64 = sizes.iter().map(|&s| s as u64).sum();
        if weights.iter().any(|&w| w > 0) {
            prop_assert_eq!(sum, total as u64);
        } else {
            prop_assert_eq!(sum, 0);
        }
    }

    #[test]
    fn distribution_shares_are_floor_or_ceiling(total in 0u16..=10_000, weights in prop::collection::vec(1u16..=100, 1..12)) {
        let sizes = distribute_weighted(total, &weights);
        let weight_sum: u64 = weights.iter().map(|&w| w as u64).sum();
        for (i, &size) in sizes.iter().enumerate() {
            let exact = total as u64 * weights[i] as u64;
            let floor = (exact / weight_sum) as u16;
            prop_assert!(size == floor || size == floor + 1);
        }
    }

    #[test]
    fn row_children_never_exceed_container((row, width) in (10u16..300).prop_flat_map(|w| arb_row(w))) {
        if let LayoutNode::Row(container) = &row {
            let n = container.children.len() as u64;
            prop_assume!(container.spacing as u64 * (n - 1) <= width as u64);
        }
        let layout = resolve(&row, Constraints::tight(Size::new(width, 4)));
        let mut total: u64 = 0;
        for child in &layout.children {
            prop_assert!(child.rect.x >= 0);
            prop_assert!(child.rect.right() <= width as i32);
            total += child.rect.width as u64;
        }
        prop_assert!(total <= width as u64);
    }

    #[test]
    fn row_with_flex_fills_container((row, width) in (10u16..300).prop_flat_map(|w| arb_row(w))) {
        let has_flex = match &row {
            LayoutNode::Row(container) => container.children.iter().any(|c| {
                matches!(c.effective_dim(weft_layout::Axis::Horizontal), Dimension::Flex(n) if n > 0)
            }),
            _ => false,
        };
        let (spacing, n) = match &row {
            LayoutNode::Row(container) => (container.spacing, container.children.len() as u64),
            _ => (0, 0),
        };
        prop_assume!(has_flex);
        // Spacing alone must fit, otherwise everything degenerates to zero.
        prop_assume!(spacing as u64 * (n - 1) <= width as u64);
        let layout = resolve(&row, Constraints::tight(Size::new(width, 4)));
        let widths: u64 = layout.children.iter().map(|c| c.rect.width as u64).sum();
        prop_assert_eq!(widths + spacing as u64 * (n - 1), width as u64);
    }

    #[test]
    fn measure_respects_constraints(
        width_dim in arb_dimension(),
        height_dim in arb_dimension(),
        max_w in 1u16..500,
        max_h in 1u16..500,
    ) {
        let node = LayoutNode::leaf(NodeStyle::new().width(width_dim).height(height_dim));
        let bounds = Constraints::loose(Size::new(max_w, max_h));
        let size = measure(&node, bounds);
        prop_assert!(size.width <= max_w);
        prop_assert!(size.height <= max_h);
    }

    #[test]
    fn resolve_is_deterministic((row, width) in (10u16..300).prop_flat_map(|w| arb_row(w))) {
        let bounds = Constraints::tight(Size::new(width, 4));
        prop_assert_eq!(resolve(&row, bounds), resolve(&row, bounds));
    }
}
