#![forbid(unsafe_code)]

//! Box insets and alignment vocabulary.
//!
//! Padding and border are part of a widget's own box: they enlarge the
//! min/max window during the content-box to border-box conversion, and a
//! border contributes exactly one cell per active side. Margin is external;
//! it offsets the box among its siblings without joining the measured size.

use crate::geometry::Sides;

/// Padding, border, and margin for one widget box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    /// Space between the border and the content.
    pub padding: Sides,
    /// Border cells, one per active side (0 or 1 each).
    pub border: Sides,
    /// External offset among siblings; not part of the measured box.
    pub margin: Sides,
}

impl Insets {
    /// No padding, border, or margin.
    pub const NONE: Self = Self {
        padding: Sides::ZERO,
        border: Sides::ZERO,
        margin: Sides::ZERO,
    };

    /// Set the padding.
    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Enable a one-cell border on all four sides.
    pub fn bordered(mut self) -> Self {
        self.border = Sides::all(1);
        self
    }

    /// Set border sides explicitly. Each side is clamped to at most one
    /// cell.
    pub fn border(mut self, border: impl Into<Sides>) -> Self {
        let b = border.into();
        self.border = Sides::new(
            b.top.min(1),
            b.right.min(1),
            b.bottom.min(1),
            b.left.min(1),
        );
        self
    }

    /// Set the margin.
    pub fn margin(mut self, margin: impl Into<Sides>) -> Self {
        self.margin = margin.into();
        self
    }

    /// The per-side frame around the content: padding plus border.
    ///
    /// This is what converts a content box into the widget's own
    /// border box. Margin is deliberately excluded.
    #[inline]
    pub const fn frame(&self) -> Sides {
        self.padding.add(self.border)
    }
}

/// Main-axis alignment for rows and columns.
///
/// Applies slack only when the children underfill the container; it never
/// shrinks children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainAlign {
    /// Pack children at the start (left/top).
    #[default]
    Start,
    /// Center the packed children in the leftover space.
    Center,
    /// Pack children at the end (right/bottom).
    End,
}

/// Cross-axis alignment for rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossAlign {
    /// Place each child's natural cross size at the start.
    Start,
    /// Center each child's natural cross size.
    Center,
    /// Place each child's natural cross size at the end.
    End,
    /// Force every child to fill the container's cross extent
    /// (unless the child preserves its content size). The default.
    #[default]
    Stretch,
}

/// Horizontal placement within a stack's content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement within a stack's content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Two-dimensional placement for non-positioned stack children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alignment {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl Alignment {
    /// Top-left corner (the default).
    pub const TOP_LEFT: Self = Self {
        horizontal: HAlign::Left,
        vertical: VAlign::Top,
    };

    /// Dead center.
    pub const CENTER: Self = Self {
        horizontal: HAlign::Center,
        vertical: VAlign::Middle,
    };

    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self {
        horizontal: HAlign::Right,
        vertical: VAlign::Bottom,
    };

    /// Create an alignment from both components.
    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Offset of a child span within an available span, horizontally.
    #[inline]
    pub const fn offset_x(&self, available: u16, child: u16) -> u16 {
        align_span(available, child, matches!(self.horizontal, HAlign::Center), matches!(
            self.horizontal,
            HAlign::Right
        ))
    }

    /// Offset of a child span within an available span, vertically.
    #[inline]
    pub const fn offset_y(&self, available: u16, child: u16) -> u16 {
        align_span(available, child, matches!(self.vertical, VAlign::Middle), matches!(
            self.vertical,
            VAlign::Bottom
        ))
    }
}

/// Start/center/end placement of a span inside an available extent.
#[inline]
const fn align_span(available: u16, child: u16, center: bool, end: bool) -> u16 {
    let slack = available.saturating_sub(child);
    if center {
        slack / 2
    } else if end {
        slack
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Sides;

    #[test]
    fn frame_is_padding_plus_border() {
        let insets = Insets::NONE.padding(Sides::all(2)).bordered();
        assert_eq!(insets.frame(), Sides::all(3));
    }

    #[test]
    fn margin_excluded_from_frame() {
        let insets = Insets::NONE.margin(Sides::all(4));
        assert_eq!(insets.frame(), Sides::ZERO);
    }

    #[test]
    fn border_clamps_to_one_cell() {
        let insets = Insets::NONE.border(Sides::all(3));
        assert_eq!(insets.border, Sides::all(1));
    }

    #[test]
    fn alignment_offsets() {
        let end = Alignment::BOTTOM_RIGHT;
        assert_eq!(end.offset_x(20, 6), 14);
        assert_eq!(end.offset_y(10, 4), 6);

        let center = Alignment::CENTER;
        assert_eq!(center.offset_x(20, 6), 7);
        assert_eq!(center.offset_y(11, 4), 3);

        let start = Alignment::TOP_LEFT;
        assert_eq!(start.offset_x(20, 6), 0);
        assert_eq!(start.offset_y(10, 4), 0);
    }

    #[test]
    fn alignment_child_larger_than_available() {
        // Slack saturates at zero; the child overflows from the start edge.
        assert_eq!(Alignment::CENTER.offset_x(4, 10), 0);
        assert_eq!(Alignment::BOTTOM_RIGHT.offset_y(4, 10), 0);
    }
}
