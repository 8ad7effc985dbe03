//! Vertical drag recogniser.
//!
//! Decides whether a pointer stream is a vertical drag (claimed) or belongs to
//! a horizontal consumer such as a pager (yielded), and converts pointer Y into
//! a target position once tracking.

use gallery_ui_graphics::Point;

/// Outcome of offering an event to the interception phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interception {
    /// Motion is still below slop on both axes; keep offering events.
    Observing,
    /// Vertical motion crossed slop first; the gesture belongs to the drag.
    Claimed,
    /// Horizontal motion crossed slop first; the gesture is left to others
    /// until the next press.
    Yielded,
}

impl Interception {
    /// Whether the event was consumed by the drag.
    #[inline]
    pub fn is_handled(self) -> bool {
        matches!(self, Interception::Claimed)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TrackingState {
    #[default]
    Idle,
    /// `touch_delta` is pointer Y minus the content top when tracking began.
    Tracking { touch_delta: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragGesture {
    touch_slop: f32,
    origin: Option<Point>,
    yielded: bool,
    state: TrackingState,
}

impl DragGesture {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            origin: None,
            yielded: false,
            state: TrackingState::Idle,
        }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackingState::Tracking { .. })
    }

    /// Whether the current gesture was left to another consumer.
    pub fn is_yielded(&self) -> bool {
        self.yielded
    }

    /// Press position of the current gesture.
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Begins observing a new gesture at `position`.
    pub fn press(&mut self, position: Point) {
        self.origin = Some(position);
        self.yielded = false;
    }

    /// Classifies a move made before the drag is claimed.
    ///
    /// Vertical slop wins when both axes cross on the same event.
    pub fn classify(&self, position: Point) -> Interception {
        if self.is_tracking() {
            return Interception::Claimed;
        }
        if self.yielded {
            return Interception::Yielded;
        }
        let Some(origin) = self.origin else {
            return Interception::Observing;
        };

        let distance_y = (position.y - origin.y).abs();
        if distance_y >= self.touch_slop {
            return Interception::Claimed;
        }
        let distance_x = (position.x - origin.x).abs();
        if distance_x >= self.touch_slop {
            return Interception::Yielded;
        }
        Interception::Observing
    }

    /// Records a yield so later moves of this gesture stay unclaimed.
    pub fn yield_gesture(&mut self) {
        self.yielded = true;
    }

    /// Starts tracking with the pointer at `pointer_y` and content top at `top`.
    pub fn start_tracking(&mut self, pointer_y: f32, top: f32) {
        self.state = TrackingState::Tracking {
            touch_delta: pointer_y - top,
        };
    }

    /// Content top that follows the pointer, or `None` when not tracking.
    pub fn target_position(&self, pointer_y: f32) -> Option<f32> {
        match self.state {
            TrackingState::Tracking { touch_delta } => Some(pointer_y - touch_delta),
            TrackingState::Idle => None,
        }
    }

    pub fn stop_tracking(&mut self) {
        self.state = TrackingState::Idle;
    }

    /// Ends the gesture entirely: no origin, no tracking.
    pub fn reset(&mut self) {
        self.origin = None;
        self.yielded = false;
        self.state = TrackingState::Idle;
    }
}
