//! Sliding drawer: a single child dragged vertically inside a viewport.
//!
//! The child's on-screen top moves between two resting edges:
//!
//! - `top_edge = viewport_height - child_height` (drawer pulled fully up)
//! - `bottom_edge = viewport_height - bottom_offset` (drawer lowered, with
//!   `bottom_offset` of it still visible)
//!
//! The host feeds pointer events through [`DrawerController::on_intercept_touch_event`]
//! until the drag is claimed, then through [`DrawerController::on_touch_event`].
//! After release it calls [`DrawerController::compute_scroll`] once per frame
//! while that keeps returning `true`, and translates the child by
//! [`DrawerController::scroll_offset`] whenever
//! [`DrawerController::take_invalidation`] reports a change.

use gallery_animation::{DecelerationSimulator, EasedFlingSimulator};
use thiserror::Error;

use crate::gesture_constants::{
    DEFAULT_BOTTOM_OFFSET, FLING_VELOCITY_DAMPING, MAX_FLING_VELOCITY, TOUCH_SLOP,
};
use crate::input::gestures::{DragGesture, FlingGesture, Interception, TrackingState};
use crate::input::{PointerEvent, PointerEventKind};
use crate::velocity_tracker::{VelocityEstimator, VelocityTracker1D};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawerError {
    #[error("drawer can host only one direct child (already holding one {existing_height}px tall)")]
    MultipleChildren { existing_height: f32 },
}

/// Drawer configuration in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    pub bottom_offset: f32,
    pub touch_slop: f32,
    /// Release velocity cap, applied after the pointer velocity is scaled
    /// by `density`.
    pub max_fling_velocity: f32,
    /// Fraction of the release velocity the fling starts with.
    pub fling_damping: f32,
    pub density: f32,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl DrawerConfig {
    /// Default dp values converted for `density`.
    pub fn with_density(density: f32) -> Self {
        Self {
            bottom_offset: DEFAULT_BOTTOM_OFFSET.to_px(density),
            touch_slop: TOUCH_SLOP * density,
            max_fling_velocity: MAX_FLING_VELOCITY * density,
            fling_damping: FLING_VELOCITY_DAMPING,
            density,
        }
    }

    pub fn bottom_offset(mut self, bottom_offset: f32) -> Self {
        self.bottom_offset = bottom_offset;
        self
    }

    pub fn touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn max_fling_velocity(mut self, max_fling_velocity: f32) -> Self {
        self.max_fling_velocity = max_fling_velocity;
        self
    }
}

pub struct DrawerController<V = VelocityTracker1D, S = EasedFlingSimulator> {
    config: DrawerConfig,
    viewport_height: f32,
    child_height: Option<f32>,
    /// On-screen top of the child; the scroll offset is its negation.
    top: f32,
    drag: DragGesture,
    velocity: V,
    fling: FlingGesture<S>,
    needs_repaint: bool,
}

impl DrawerController {
    pub fn new(config: DrawerConfig) -> Self {
        Self::with_strategies(
            config,
            VelocityTracker1D::new(),
            EasedFlingSimulator::with_density(config.density),
        )
    }
}

impl Default for DrawerController {
    fn default() -> Self {
        Self::new(DrawerConfig::default())
    }
}

impl<V: VelocityEstimator, S: DecelerationSimulator> DrawerController<V, S> {
    pub fn with_strategies(config: DrawerConfig, velocity: V, simulator: S) -> Self {
        Self {
            config,
            viewport_height: 0.0,
            child_height: None,
            top: 0.0,
            drag: DragGesture::new(config.touch_slop),
            velocity,
            fling: FlingGesture::new(simulator, config.fling_damping),
            needs_repaint: false,
        }
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Resizes the viewport, keeping the child inside the new edges.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
        self.reclamp();
    }

    /// Attaches the drawer's only child.
    pub fn attach_child(&mut self, height: f32) -> Result<(), DrawerError> {
        if let Some(existing_height) = self.child_height {
            log::error!("rejected a second drawer child; the drawer already holds one");
            return Err(DrawerError::MultipleChildren { existing_height });
        }
        self.child_height = Some(height.max(0.0));
        self.reclamp();
        Ok(())
    }

    /// Updates the height of the attached child after it re-measures.
    pub fn set_child_height(&mut self, height: f32) {
        if self.child_height.is_some() {
            self.child_height = Some(height.max(0.0));
            self.reclamp();
        }
    }

    /// Detaches the child, returning its height.
    pub fn detach_child(&mut self) -> Option<f32> {
        let height = self.child_height.take();
        if height.is_some() {
            self.fling.force_finish();
            self.drag.reset();
            self.reclamp();
        }
        height
    }

    pub fn has_child(&self) -> bool {
        self.child_height.is_some()
    }

    /// Lowest allowed top, reached with the drawer pulled fully up.
    pub fn top_edge(&self) -> f32 {
        match self.child_height {
            Some(height) => self.viewport_height - height,
            None => self.bottom_edge(),
        }
    }

    /// Highest allowed top, reached with the drawer lowered.
    pub fn bottom_edge(&self) -> f32 {
        self.viewport_height - self.config.bottom_offset
    }

    /// `(min, max)` bounds for the top; a child shorter than the reserved
    /// area collapses them onto the bottom edge.
    fn bounds(&self) -> (f32, f32) {
        let bottom = self.bottom_edge();
        (self.top_edge().min(bottom), bottom)
    }

    /// Current on-screen top of the child.
    pub fn top_position(&self) -> f32 {
        self.top
    }

    /// Vertical translation the host applies to the child.
    pub fn scroll_offset(&self) -> f32 {
        -self.top
    }

    pub fn tracking_state(&self) -> TrackingState {
        self.drag.state()
    }

    pub fn is_tracking(&self) -> bool {
        self.drag.is_tracking()
    }

    pub fn is_flinging(&self) -> bool {
        self.fling.is_active()
    }

    /// Damped velocity of the most recent fling.
    pub fn last_fling_velocity(&self) -> Option<f32> {
        self.fling.last_fling_velocity()
    }

    /// Whether the offset changed since the last [`take_invalidation`](Self::take_invalidation).
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Returns and clears the repaint signal.
    pub fn take_invalidation(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    /// Interception phase: decides whether the drawer takes over the gesture.
    ///
    /// Returns [`Interception::Claimed`] once vertical motion crosses the
    /// touch slop; from then on the host must route events to
    /// [`on_touch_event`](Self::on_touch_event).
    pub fn on_intercept_touch_event(&mut self, event: &PointerEvent) -> Interception {
        match event.kind {
            PointerEventKind::Down => {
                self.begin_gesture(event);
                Interception::Observing
            }
            PointerEventKind::Move => {
                if self.drag.is_tracking() {
                    return Interception::Claimed;
                }
                if self.drag.is_yielded() {
                    return Interception::Yielded;
                }
                self.velocity.add_sample(event.time_ms, event.position.y);
                let decision = self.drag.classify(event.position);
                match decision {
                    Interception::Claimed => {
                        log::debug!("drawer claimed drag at y={}", event.position.y);
                        self.start_tracking(event.position.y);
                    }
                    Interception::Yielded => {
                        log::debug!("drawer yielded horizontal gesture");
                        self.drag.yield_gesture();
                    }
                    Interception::Observing => {}
                }
                decision
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.drag.is_tracking() {
                    return Interception::Claimed;
                }
                self.drag.reset();
                self.velocity.reset();
                Interception::Observing
            }
        }
    }

    /// Drag phase. Returns whether the drawer is tracking after the event.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down {
            self.begin_gesture(event);
            if !self.drag.is_tracking() {
                self.start_tracking(event.position.y);
            }
            return true;
        }

        if !self.drag.is_tracking() {
            return false;
        }
        self.velocity.add_sample(event.time_ms, event.position.y);

        match event.kind {
            PointerEventKind::Move => {
                if let Some(target) = self.drag.target_position(event.position.y) {
                    self.move_to(target);
                }
            }
            PointerEventKind::Cancel => {
                log::debug!("drawer drag cancelled at top={}", self.top);
                self.stop_tracking();
            }
            PointerEventKind::Up => {
                let velocity = self.release_velocity();
                self.stop_tracking();
                self.perform_fling(velocity, event.time_ms);
            }
            PointerEventKind::Down => {}
        }

        self.drag.is_tracking()
    }

    /// Frame tick. Returns whether another frame is needed.
    pub fn compute_scroll(&mut self, frame_time_ms: i64) -> bool {
        match self.fling.tick(frame_time_ms) {
            Some(position) => {
                log::trace!("drawer fling frame at {frame_time_ms}ms: top={position}");
                self.set_top(position);
                self.fling.is_active()
            }
            None => false,
        }
    }

    /// Stops a running fling where it is.
    pub fn force_finish_fling(&mut self) {
        if let Some(position) = self.fling.force_finish() {
            self.set_top(position);
        }
    }

    fn begin_gesture(&mut self, event: &PointerEvent) {
        self.force_finish_fling();
        self.drag.press(event.position);
        self.velocity.reset();
        self.velocity.add_sample(event.time_ms, event.position.y);
    }

    fn start_tracking(&mut self, pointer_y: f32) {
        self.drag.start_tracking(pointer_y, self.top);
        self.force_finish_fling();
    }

    fn stop_tracking(&mut self) {
        self.drag.stop_tracking();
        self.velocity.reset();
    }

    /// Pointer velocity scaled by density, then capped at the configured
    /// maximum.
    fn release_velocity(&self) -> f32 {
        let density = if self.config.density > 0.0 {
            self.config.density
        } else {
            1.0
        };
        self.velocity
            .velocity(self.config.max_fling_velocity / density)
            * density
    }

    fn perform_fling(&mut self, velocity: f32, time_ms: i64) {
        let (min, max) = self.bounds();
        if let Some(position) = self.fling.start(self.top, velocity, min, max, time_ms) {
            self.set_top(position);
        }
    }

    fn move_to(&mut self, position: f32) {
        let (min, max) = self.bounds();
        self.set_top(position.max(min).min(max));
    }

    fn reclamp(&mut self) {
        if self.fling.is_active() {
            self.force_finish_fling();
        }
        let top = self.top;
        self.move_to(top);
    }

    fn set_top(&mut self, top: f32) {
        if top != self.top {
            self.top = top;
            self.needs_repaint = true;
        }
    }
}

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod tests;
