#![forbid(unsafe_code)]

//! The frame loop: coalesced reactive writes in, resolved layouts out.
//!
//! Single-threaded and cooperative. Writers on any thread mark nodes
//! dirty and try-send into the bounded(1) frame channel; the loop drains
//! one request, runs a full synchronous pass (retire stale nodes → build
//! the widget tree → resolve layout → rebuild the frame cache → present),
//! and goes back to sleep. There is no cancellation mid-pass and no
//! incremental re-layout; a pass is always whole.

pub mod frame;

pub use frame::{FrameLoop, FrameOutput, RunError};
