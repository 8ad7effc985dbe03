//! Pure geometry & units for the gallery widgets
//!
//! Points, sizes, rectangles, insets and density-independent units shared by
//! the drawer and pavement crates.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::unit::Dp;
}
