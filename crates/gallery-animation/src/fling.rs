//! Fling physics for post-release scrolling.
//!
//! [`FlingCalculator`] uses the Android scroller constants to turn a release
//! velocity into a travel distance and a duration. [`EasedFlingSimulator`]
//! walks that distance over that duration through an [`Easing`] curve, clamped
//! inelastically to a pair of bounds.

use crate::easing::Easing;

/// Tension curve inflection point
const INFLECTION: f32 = 0.35;

/// Earth's gravity in SI units (m/s²)
const GRAVITY_EARTH: f32 = 9.80665;
/// Inches per meter (for density conversion)
const INCHES_PER_METER: f32 = 39.37;
/// Deceleration rate constant (from Android Scroller)
const DECELERATION_RATE: f32 = 2.358_201_6; // (ln(0.78) / ln(0.9)).abs()

/// Remaining distance below which a fling is considered at rest.
pub const REST_THRESHOLD: f32 = 0.5;

/// Computes physical deceleration based on density and friction.
fn compute_deceleration(friction: f32, density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * friction
}

/// Information about a fling animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingInfo {
    /// Initial velocity in px/sec.
    pub initial_velocity: f32,
    /// Total distance that will be traveled, always non-negative.
    pub distance: f32,
    /// Total duration in milliseconds.
    pub duration: i64,
}

impl FlingInfo {
    /// Signed travel, pointing in the direction of the initial velocity.
    pub fn displacement(&self) -> f32 {
        self.distance * self.initial_velocity.signum()
    }
}

/// Calculator for Android-feel fling animations.
///
/// This uses the Android Scroller physics to compute natural fling behavior
/// based on physical constants and screen density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCalculator {
    friction: f32,
    magic_physical_coefficient: f32,
}

impl FlingCalculator {
    /// Default friction value (matches Android default)
    pub const DEFAULT_FRICTION: f32 = 0.015;

    /// Create a new fling calculator.
    ///
    /// # Arguments
    /// * `friction` - Scroll friction coefficient (higher = faster deceleration)
    /// * `density` - Screen density in dp (e.g., 1.0 for mdpi, 2.0 for xhdpi)
    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            magic_physical_coefficient: compute_deceleration(0.84, density),
        }
    }

    /// Create a calculator with default friction for the given density.
    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64
            / (self.friction * self.magic_physical_coefficient) as f64)
            .ln()
    }

    /// Compute the duration of a fling in milliseconds.
    pub fn fling_duration(&self, velocity: f32) -> i64 {
        if velocity == 0.0 || !velocity.is_finite() {
            return 0;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        (1000.0 * (l / decel_minus_one).exp()) as i64
    }

    /// Compute the total distance a fling will travel.
    pub fn fling_distance(&self, velocity: f32) -> f32 {
        if velocity == 0.0 || !velocity.is_finite() {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        self.friction
            * self.magic_physical_coefficient
            * (DECELERATION_RATE as f64 / decel_minus_one * l).exp() as f32
    }

    /// Get complete fling information for a given initial velocity.
    pub fn fling_info(&self, velocity: f32) -> FlingInfo {
        FlingInfo {
            initial_velocity: velocity,
            distance: self.fling_distance(velocity),
            duration: self.fling_duration(velocity),
        }
    }
}

/// Strategy that turns a release velocity into positions over time.
///
/// Implementations are driven by frame callbacks: the owner starts a fling,
/// then calls [`compute_position`](Self::compute_position) once per frame
/// until it reports completion.
pub trait DecelerationSimulator {
    /// Starts a fling from `start` with `velocity` (px/sec) at `start_time_ms`,
    /// bounded to `[min, max]`. Any running fling is replaced.
    fn fling(&mut self, start: f32, velocity: f32, min: f32, max: f32, start_time_ms: i64);

    /// Advances the fling to `frame_time_ms`.
    ///
    /// Returns the new position while the fling runs, including the frame on
    /// which it finishes, and `None` once it has already finished.
    fn compute_position(&mut self, frame_time_ms: i64) -> Option<f32>;

    /// Stops the fling where it is.
    fn force_finish(&mut self);

    fn is_finished(&self) -> bool;

    /// Position reached by the last computed frame.
    fn current_position(&self) -> f32;

    /// Position the fling settles at if it runs to completion.
    fn final_position(&self) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FlingRun {
    start: f32,
    displacement: f32,
    min: f32,
    max: f32,
    start_time_ms: i64,
    duration_ms: i64,
}

/// Fling that covers the physical fling distance along an easing curve.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedFlingSimulator {
    calculator: FlingCalculator,
    easing: Easing,
    run: Option<FlingRun>,
    current: f32,
    final_position: f32,
    finished: bool,
}

impl Default for EasedFlingSimulator {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl EasedFlingSimulator {
    /// Quintic ease-out over Android fling physics for `density`.
    pub fn with_density(density: f32) -> Self {
        Self::new(FlingCalculator::with_density(density), Easing::QuinticOut)
    }

    pub fn new(calculator: FlingCalculator, easing: Easing) -> Self {
        Self {
            calculator,
            easing,
            run: None,
            current: 0.0,
            final_position: 0.0,
            finished: true,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    fn settle(&mut self, position: f32) {
        self.current = position;
        self.final_position = position;
        self.finished = true;
        self.run = None;
    }
}

/// Clamps into `[min, max]`; a collapsed range resolves to `max`.
#[inline]
fn clamp_to_bounds(position: f32, min: f32, max: f32) -> f32 {
    position.max(min).min(max)
}

impl DecelerationSimulator for EasedFlingSimulator {
    fn fling(&mut self, start: f32, velocity: f32, min: f32, max: f32, start_time_ms: i64) {
        let clamped_start = clamp_to_bounds(start, min, max);
        if clamped_start != start {
            log::debug!("fling started outside [{min}, {max}] at {start}; snapping to bound");
            self.settle(clamped_start);
            return;
        }

        let info = self.calculator.fling_info(velocity);
        if info.duration <= 0 || info.distance <= 0.0 {
            self.settle(start);
            return;
        }

        self.run = Some(FlingRun {
            start,
            displacement: info.displacement(),
            min,
            max,
            start_time_ms,
            duration_ms: info.duration,
        });
        self.current = start;
        self.final_position = clamp_to_bounds(start + info.displacement(), min, max);
        self.finished = false;
        log::trace!(
            "fling from {start} at {velocity}px/s: {}px over {}ms, settles at {}",
            info.displacement(),
            info.duration,
            self.final_position
        );
    }

    fn compute_position(&mut self, frame_time_ms: i64) -> Option<f32> {
        if self.finished {
            return None;
        }
        let Some(run) = self.run else {
            self.finished = true;
            return None;
        };

        let elapsed = (frame_time_ms - run.start_time_ms).max(0);
        if elapsed >= run.duration_ms {
            let final_position = self.final_position;
            self.settle(final_position);
            return Some(final_position);
        }

        let progress = self
            .easing
            .transform(elapsed as f32 / run.duration_ms as f32);
        let position = run.start + run.displacement * progress;
        let clamped = clamp_to_bounds(position, run.min, run.max);

        if clamped != position || (self.final_position - position).abs() < REST_THRESHOLD {
            let final_position = self.final_position;
            self.settle(final_position);
            return Some(final_position);
        }

        self.current = position;
        Some(position)
    }

    fn force_finish(&mut self) {
        if !self.finished {
            log::trace!("fling force-finished at {}", self.current);
        }
        let current = self.current;
        self.settle(current);
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn current_position(&self) -> f32 {
        self.current
    }

    fn final_position(&self) -> f32 {
        self.final_position
    }
}
