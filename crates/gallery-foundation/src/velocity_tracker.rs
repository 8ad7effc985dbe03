//! Release velocity estimation for fling support.
//!
//! [`VelocityTracker1D`] keeps a short pointer history and estimates velocity
//! with the impulse strategy: the velocity is derived from the kinetic energy
//! the recent motion would impart.

use smallvec::SmallVec;

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only use samples within the last 100ms for velocity calculation.
const HORIZON_MS: i64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

/// Strategy turning pointer history into a release velocity.
pub trait VelocityEstimator {
    /// Records the pointer position along the tracked axis at `time_ms`.
    fn add_sample(&mut self, time_ms: i64, position: f32);

    /// Velocity in px/sec, clamped to `[-max_velocity, max_velocity]`.
    fn velocity(&self, max_velocity: f32) -> f32;

    /// Forgets all recorded samples.
    fn reset(&mut self);
}

/// A position with timestamp.
#[derive(Clone, Copy, Default, Debug)]
struct DataPointAtTime {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker using impulse-based velocity calculation.
///
/// ```ignore
/// let mut tracker = VelocityTracker1D::new();
/// tracker.add_data_point(time_ms, position);
/// // ... more points ...
/// let velocity = tracker.calculate_velocity(); // px/sec
/// ```
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    /// Ring buffer of samples.
    samples: [Option<DataPointAtTime>; HISTORY_SIZE],
    /// Current write index in ring buffer.
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Adds a position at the given time (milliseconds).
    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(DataPointAtTime { time_ms, position });
    }

    /// Calculates the velocity in units/second.
    ///
    /// Returns 0.0 if there aren't enough samples or if the pointer hasn't moved.
    pub fn calculate_velocity(&self) -> f32 {
        let mut positions: SmallVec<[f32; HISTORY_SIZE]> = SmallVec::new();
        let mut times: SmallVec<[f32; HISTORY_SIZE]> = SmallVec::new();

        let newest_sample = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut current_index = self.index;
        let mut previous_sample = newest_sample;

        // Walk backwards from the newest sample until the history gets too
        // old or shows a pause.
        while let Some(sample) = self.samples[current_index] {
            let age = newest_sample.time_ms - sample.time_ms;
            let gap = (sample.time_ms - previous_sample.time_ms).abs();
            previous_sample = sample;

            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }

            positions.push(sample.position);
            times.push(-(age as f32));

            current_index = if current_index == 0 {
                HISTORY_SIZE - 1
            } else {
                current_index - 1
            };

            if positions.len() >= HISTORY_SIZE {
                break;
            }
        }

        if positions.len() < 2 {
            return 0.0;
        }

        calculate_impulse_velocity(&positions, &times) * 1000.0
    }

    /// Calculates the velocity in units/second, capped to `max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }

        velocity.clamp(-max_velocity, max_velocity)
    }

    /// Clears all tracked data.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

impl VelocityEstimator for VelocityTracker1D {
    fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.add_data_point(time_ms, position);
    }

    fn velocity(&self, max_velocity: f32) -> f32 {
        self.calculate_velocity_with_max(max_velocity)
    }

    fn reset(&mut self) {
        VelocityTracker1D::reset(self);
    }
}

/// Impulse velocity (units/ms) over samples ordered newest first.
fn calculate_impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let sample_count = positions.len();
    if sample_count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let start = sample_count - 1;
    let mut next_time = times[start];

    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let v_curr = (positions[i - 1] - positions[i]) / (next_time - current_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// Converts kinetic energy to velocity using E = 0.5 * m * v^2 (with m = 1).
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker_returns_zero() {
        let tracker = VelocityTracker1D::new();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn test_single_point_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn test_constant_velocity() {
        let mut tracker = VelocityTracker1D::new();
        // Moving at 100 px per 10ms = 10000 px/s
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);
        tracker.add_data_point(20, 200.0);
        tracker.add_data_point(30, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10000.0).abs() < 1000.0,
            "Expected ~10000, got {}",
            velocity
        );
    }

    #[test]
    fn test_negative_velocity() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 300.0);
        tracker.add_data_point(10, 200.0);
        tracker.add_data_point(20, 100.0);

        let velocity = tracker.calculate_velocity();
        assert!(
            velocity < 0.0,
            "Expected negative velocity, got {}",
            velocity
        );
    }

    #[test]
    fn test_duplicate_timestamps_are_skipped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 50.0);
        tracker.add_data_point(20, 100.0);

        let velocity = tracker.calculate_velocity();
        assert!(velocity.is_finite());
        assert!((velocity - 5000.0).abs() < 1000.0, "got {velocity}");
    }

    #[test]
    fn test_velocity_capped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(1, 10_000.0);

        let velocity = tracker.calculate_velocity_with_max(8_000.0);
        assert_eq!(velocity, 8_000.0);

        tracker.reset();
        tracker.add_data_point(0, 10_000.0);
        tracker.add_data_point(1, 0.0);

        let velocity = tracker.calculate_velocity_with_max(8_000.0);
        assert_eq!(velocity, -8_000.0);
    }

    #[test]
    fn test_old_samples_ignored() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(150, 100.0);
        tracker.add_data_point(160, 200.0);
        tracker.add_data_point(170, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10000.0).abs() < 1000.0,
            "Should use only recent samples, got {velocity}"
        );
    }

    #[test]
    fn test_gap_over_stopped_threshold_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);

        let velocity = tracker.calculate_velocity();
        assert_eq!(velocity, 0.0);
    }

    #[test]
    fn test_estimator_trait_resets() {
        let mut tracker = VelocityTracker1D::new();
        let estimator: &mut dyn VelocityEstimator = &mut tracker;
        estimator.add_sample(0, 0.0);
        estimator.add_sample(10, 100.0);
        assert!(estimator.velocity(MAX) > 0.0);

        estimator.reset();
        assert_eq!(estimator.velocity(MAX), 0.0);
    }

    const MAX: f32 = 8_000.0;
}
