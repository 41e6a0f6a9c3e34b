#![forbid(unsafe_code)]

//! A static text leaf.
//!
//! Exists mostly to exercise the measure fallback: a widget with no
//! layout contribution of its own becomes a measured box node, and the
//! resolver calls back into [`MeasureContent`] for its intrinsic size.
//! Width is display columns via `unicode-width`, not `len()`, so wide
//! CJK glyphs count as two cells.

use unicode_width::UnicodeWidthStr;

use weft_core::style::Insets;
use weft_core::{Constraints, Dimension, Size};

use crate::widget::{Build, DimensionHints, LayoutContribution, MeasureContent, StyleHints};

/// One or more lines of static text.
#[derive(Debug, Clone, Default)]
pub struct Label {
    text: String,
    width: Dimension,
    height: Dimension,
    insets: Insets,
}

impl Label {
    /// A label with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Override the advertised width.
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    /// Override the advertised height.
    pub fn height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    /// Set the insets.
    pub fn insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Intrinsic content size: widest line by display columns, one row
    /// per line.
    fn content_size(&self) -> Size {
        if self.text.is_empty() {
            return Size::ZERO;
        }
        let mut width = 0u16;
        let mut lines = 0u16;
        for line in self.text.lines() {
            let cols = UnicodeWidthStr::width(line).min(u16::MAX as usize) as u16;
            width = width.max(cols);
            lines = lines.saturating_add(1);
        }
        Size::new(width, lines.max(1))
    }
}

impl MeasureContent for Label {
    fn measure(&self, bounds: Constraints) -> Size {
        self.content_size().min(bounds.max_size())
    }
}

impl DimensionHints for Label {
    fn width(&self) -> Dimension {
        self.width
    }

    fn height(&self) -> Dimension {
        self.height
    }
}

impl StyleHints for Label {
    fn insets(&self) -> Insets {
        self.insets
    }
}

impl Build for Label {}
impl LayoutContribution for Label {}
