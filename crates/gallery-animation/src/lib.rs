//! Animation primitives for the gallery widgets
//!
//! Easing curves plus the fling physics that drive post-release scrolling.
//! Nothing here owns a clock: callers feed frame times in milliseconds.

mod easing;
mod fling;

pub use easing::*;
pub use fling::*;
