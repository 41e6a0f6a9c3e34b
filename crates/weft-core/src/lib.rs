#![forbid(unsafe_code)]

//! Core primitives for the Weft declarative terminal-UI engine.
//!
//! This crate holds the shared vocabulary the layout resolver and the
//! reactive runtime are built on:
//!
//! - [`geometry`] - rectangles, sizes, and per-side insets
//! - [`dimension`] - size preferences ([`Dimension`]) and the min/max
//!   window propagated down the layout tree ([`Constraints`])
//! - [`style`] - box insets and alignment vocabulary
//! - [`logging`] - optional tracing support
//!
//! Layout positions are signed ([`i32`]) while extents are cell counts
//! ([`u16`]): overlay children may be anchored at negative offsets and
//! deliberately overflow their container, and the painter clips.

pub mod dimension;
pub mod geometry;
pub mod logging;
pub mod style;

pub use dimension::{Axis, Constraints, Dimension, percent_of};
pub use geometry::{Rect, Sides, Size};
pub use style::{Alignment, CrossAlign, HAlign, Insets, MainAlign, VAlign};
