#![forbid(unsafe_code)]

//! Widget capability traits and composition helpers.
//!
//! A widget is anything implementing the closed set of capability traits
//! ([`Build`], [`LayoutContribution`], [`DimensionHints`], [`StyleHints`],
//! [`MeasureContent`]), each with a default so a minimal widget
//! implements nothing at all. [`Widget`] is the blanket supertrait the
//! rest of the system works with.
//!
//! [`layout_of`] turns a widget into its [`LayoutNode`], allocating a
//! build node per widget so reactive cells read during the build
//! subscribe the right instance, and wrapping the result in
//! `Flexed`/`Percent` nodes when the widget advertises those dimensions.

pub mod compose;
pub mod context;
pub mod label;
pub mod widget;

pub use compose::{Column, Dock, Row, Stack, layout_of};
pub use context::BuildCx;
pub use label::Label;
pub use widget::{Build, DimensionHints, LayoutContribution, MeasureContent, StyleHints, Widget};
