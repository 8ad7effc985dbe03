//! Pointer input, gesture recognisers and the sliding drawer controller

pub mod drawer;
pub mod gesture_constants;
pub mod input;
pub mod velocity_tracker;

pub use drawer::{DrawerConfig, DrawerController, DrawerError};
pub use input::gestures::{ActiveFling, DragGesture, FlingGesture, Interception, TrackingState};
pub use input::{PointerEvent, PointerEventKind};
pub use velocity_tracker::{VelocityEstimator, VelocityTracker1D};

pub mod prelude {
    pub use crate::drawer::{DrawerConfig, DrawerController, DrawerError};
    pub use crate::input::gestures::Interception;
    pub use crate::input::{PointerEvent, PointerEventKind};
}
