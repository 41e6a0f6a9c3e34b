#![forbid(unsafe_code)]

//! Size preferences and constraint windows.
//!
//! A widget advertises a [`Dimension`] per axis; the resolver turns those
//! preferences into concrete cell counts inside a [`Constraints`] window
//! propagated down the tree.

use crate::geometry::{Sides, Size};

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Project a size onto this axis.
    #[inline]
    pub const fn main_of(self, size: Size) -> u16 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Build a size from main/cross components along this axis.
    #[inline]
    pub const fn pack(self, main: u16, cross: u16) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }
}

/// A size preference along one axis.
///
/// `Auto` and `Unset` both mean content-fit, but an explicit `Auto` also
/// sets the preserve flag: the child keeps its content size even when the
/// parent would otherwise stretch it on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// No preference stated; content-fit, stretchable by the parent.
    #[default]
    Unset,
    /// Content-fit, preserved against parent stretching.
    Auto,
    /// An exact size in cells.
    Cells(u16),
    /// A weighted share of the container's leftover main-axis space.
    Flex(u16),
    /// A percentage of the nearest resolved ancestor size on this axis.
    ///
    /// Values above 100 are allowed; the result is clamped by the
    /// container's constraint window, not at the multiply.
    Percent(f32),
}

impl Dimension {
    /// Whether this dimension is resolved from leftover/ancestor space
    /// rather than measured directly.
    #[inline]
    pub const fn is_flexible(&self) -> bool {
        matches!(self, Dimension::Flex(_) | Dimension::Percent(_))
    }

    /// Whether the child keeps its content-fit size when the parent would
    /// stretch it (explicit `Auto` only).
    #[inline]
    pub const fn preserves_content(&self) -> bool {
        matches!(self, Dimension::Auto)
    }

    /// Flex weight, if this is a `Flex` dimension.
    #[inline]
    pub const fn flex_weight(&self) -> Option<u16> {
        match self {
            Dimension::Flex(weight) => Some(*weight),
            _ => None,
        }
    }

    /// Percentage, if this is a `Percent` dimension.
    #[inline]
    pub const fn percent(&self) -> Option<f32> {
        match self {
            Dimension::Percent(pct) => Some(*pct),
            _ => None,
        }
    }
}

/// Resolve a percentage of a base span, rounded to the nearest cell.
///
/// Negative percentages clamp to zero.
#[inline]
pub fn percent_of(percent: f32, base: u16) -> u16 {
    let cells = (base as f32 * percent / 100.0).round();
    cells.clamp(0.0, u16::MAX as f32) as u16
}

/// A min/max window for width and height, propagated downward.
///
/// Always satisfiable: constructors normalize `min > max` by clamping the
/// minimum down to the maximum, consistent with the defensive-clamping
/// policy used throughout the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Minimum width in cells.
    pub min_w: u16,
    /// Maximum width in cells.
    pub max_w: u16,
    /// Minimum height in cells.
    pub min_h: u16,
    /// Maximum height in cells.
    pub max_h: u16,
}

impl Constraints {
    /// No minimum, unbounded maximum.
    pub const UNBOUNDED: Self = Self {
        min_w: 0,
        max_w: u16::MAX,
        min_h: 0,
        max_h: u16::MAX,
    };

    /// Create a constraints window, clamping each minimum down to its
    /// maximum if the pair is inverted.
    pub const fn new(min_w: u16, max_w: u16, min_h: u16, max_h: u16) -> Self {
        Self {
            min_w: if min_w > max_w { max_w } else { min_w },
            max_w,
            min_h: if min_h > max_h { max_h } else { min_h },
            max_h,
        }
    }

    /// Exact-size window (min == max on both axes).
    pub const fn tight(size: Size) -> Self {
        Self {
            min_w: size.width,
            max_w: size.width,
            min_h: size.height,
            max_h: size.height,
        }
    }

    /// Zero minimum, the given size as maximum.
    pub const fn loose(size: Size) -> Self {
        Self {
            min_w: 0,
            max_w: size.width,
            min_h: 0,
            max_h: size.height,
        }
    }

    /// Clamp a width into this window.
    #[inline]
    pub const fn clamp_width(&self, width: u16) -> u16 {
        if width < self.min_w {
            self.min_w
        } else if width > self.max_w {
            self.max_w
        } else {
            width
        }
    }

    /// Clamp a height into this window.
    #[inline]
    pub const fn clamp_height(&self, height: u16) -> u16 {
        if height < self.min_h {
            self.min_h
        } else if height > self.max_h {
            self.max_h
        } else {
            height
        }
    }

    /// Clamp a size into this window on both axes.
    #[inline]
    pub const fn clamp_size(&self, size: Size) -> Size {
        Size::new(self.clamp_width(size.width), self.clamp_height(size.height))
    }

    /// The largest size this window admits.
    #[inline]
    pub const fn max_size(&self) -> Size {
        Size::new(self.max_w, self.max_h)
    }

    /// The smallest size this window admits.
    #[inline]
    pub const fn min_size(&self) -> Size {
        Size::new(self.min_w, self.min_h)
    }

    /// Shrink the window by per-side insets (content-box conversion).
    ///
    /// Both bounds shrink; minima saturate at zero.
    pub fn deflate(&self, sides: Sides) -> Constraints {
        let h = sides.horizontal_sum();
        let v = sides.vertical_sum();
        Constraints::new(
            self.min_w.saturating_sub(h),
            self.max_w.saturating_sub(h),
            self.min_h.saturating_sub(v),
            self.max_h.saturating_sub(v),
        )
    }

    /// Whether the window pins the width to a single value.
    #[inline]
    pub const fn is_width_tight(&self) -> bool {
        self.min_w == self.max_w
    }

    /// Whether the window pins the height to a single value.
    #[inline]
    pub const fn is_height_tight(&self) -> bool {
        self.min_h == self.max_h
    }

    /// Project the min/max pair for one axis.
    #[inline]
    pub const fn axis_bounds(&self, axis: Axis) -> (u16, u16) {
        match axis {
            Axis::Horizontal => (self.min_w, self.max_w),
            Axis::Vertical => (self.min_h, self.max_h),
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_bounds_clamp_min_down() {
        let c = Constraints::new(10, 4, 20, 3);
        assert_eq!(c.min_w, 4);
        assert_eq!(c.max_w, 4);
        assert_eq!(c.min_h, 3);
        assert_eq!(c.max_h, 3);
    }

    #[test]
    fn tight_pins_both_axes() {
        let c = Constraints::tight(Size::new(8, 3));
        assert!(c.is_width_tight());
        assert!(c.is_height_tight());
        assert_eq!(c.clamp_size(Size::new(100, 0)), Size::new(8, 3));
    }

    #[test]
    fn loose_admits_zero() {
        let c = Constraints::loose(Size::new(8, 3));
        assert_eq!(c.clamp_size(Size::ZERO), Size::ZERO);
        assert_eq!(c.clamp_size(Size::new(100, 100)), Size::new(8, 3));
    }

    #[test]
    fn deflate_saturates_and_stays_satisfiable() {
        let c = Constraints::new(4, 10, 4, 10).deflate(Sides::all(3));
        assert_eq!(c.min_w, 0);
        assert_eq!(c.max_w, 4);
        assert!(c.min_w <= c.max_w);

        let crushed = Constraints::tight(Size::new(2, 2)).deflate(Sides::all(5));
        assert_eq!(crushed.max_size(), Size::ZERO);
    }

    #[test]
    fn percent_of_rounds() {
        assert_eq!(percent_of(50.0, 41), 21);
        assert_eq!(percent_of(50.0, 40), 20);
        assert_eq!(percent_of(0.0, 40), 0);
        assert_eq!(percent_of(-25.0, 40), 0);
        assert_eq!(percent_of(150.0, 40), 60);
    }

    #[test]
    fn dimension_classification() {
        assert!(Dimension::Flex(1).is_flexible());
        assert!(Dimension::Percent(25.0).is_flexible());
        assert!(!Dimension::Cells(5).is_flexible());
        assert!(!Dimension::Unset.is_flexible());
        assert!(Dimension::Auto.preserves_content());
        assert!(!Dimension::Unset.preserves_content());
        assert_eq!(Dimension::Flex(3).flex_weight(), Some(3));
        assert_eq!(Dimension::Percent(12.5).percent(), Some(12.5));
    }

    #[test]
    fn axis_projection() {
        let size = Size::new(7, 9);
        assert_eq!(Axis::Horizontal.main_of(size), 7);
        assert_eq!(Axis::Vertical.main_of(size), 9);
        assert_eq!(Axis::Horizontal.pack(7, 9), size);
        assert_eq!(Axis::Vertical.pack(9, 7), size);
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
    }
}
