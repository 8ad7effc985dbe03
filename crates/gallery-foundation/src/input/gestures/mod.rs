pub mod drag;
pub mod fling;

pub use drag::{DragGesture, Interception, TrackingState};
pub use fling::{ActiveFling, FlingGesture};
