//! Fling recogniser: owns the deceleration strategy between release and rest.

use gallery_animation::DecelerationSimulator;

/// Bookkeeping for the fling currently in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveFling {
    /// Velocity handed to the simulator, after damping.
    pub velocity: f32,
    pub started_at_ms: i64,
    pub min: f32,
    pub max: f32,
}

#[derive(Clone, Debug)]
pub struct FlingGesture<S> {
    simulator: S,
    damping: f32,
    active: Option<ActiveFling>,
    last_velocity: Option<f32>,
}

impl<S: DecelerationSimulator> FlingGesture<S> {
    /// `damping` scales every release velocity before it reaches `simulator`.
    pub fn new(simulator: S, damping: f32) -> Self {
        Self {
            simulator,
            damping,
            active: None,
            last_velocity: None,
        }
    }

    pub fn active(&self) -> Option<&ActiveFling> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Damped velocity of the most recent fling, for diagnostics.
    pub fn last_fling_velocity(&self) -> Option<f32> {
        self.last_velocity
    }

    pub fn simulator(&self) -> &S {
        &self.simulator
    }

    /// Launches a fling from `position` with the pointer's `release_velocity`.
    ///
    /// Any running fling is finished first. Returns the settled position when
    /// the fling has nothing to animate.
    pub fn start(
        &mut self,
        position: f32,
        release_velocity: f32,
        min: f32,
        max: f32,
        time_ms: i64,
    ) -> Option<f32> {
        self.force_finish();

        let velocity = release_velocity * self.damping;
        self.last_velocity = Some(velocity);
        self.simulator.fling(position, velocity, min, max, time_ms);

        if self.simulator.is_finished() {
            log::debug!(
                "fling at {velocity}px/s settled immediately at {}",
                self.simulator.final_position()
            );
            return Some(self.simulator.final_position());
        }

        log::debug!(
            "fling at {velocity}px/s from {position} within [{min}, {max}] toward {}",
            self.simulator.final_position()
        );
        self.active = Some(ActiveFling {
            velocity,
            started_at_ms: time_ms,
            min,
            max,
        });
        None
    }

    /// Advances the fling to `frame_time_ms`.
    ///
    /// Returns the new position, or `None` when no fling is running. The fling
    /// is inactive after the call that returns its final position.
    pub fn tick(&mut self, frame_time_ms: i64) -> Option<f32> {
        if self.active.is_none() {
            return None;
        }
        let position = self.simulator.compute_position(frame_time_ms);
        if self.simulator.is_finished() {
            if let Some(fling) = self.active.take() {
                log::debug!(
                    "fling finished at {} within [{}, {}] after {}ms",
                    self.simulator.current_position(),
                    fling.min,
                    fling.max,
                    frame_time_ms - fling.started_at_ms
                );
            }
        }
        position
    }

    /// Stops a running fling where it is. Returns the position it stopped at.
    pub fn force_finish(&mut self) -> Option<f32> {
        let fling = self.active.take()?;
        self.simulator.force_finish();
        log::debug!(
            "fling at {}px/s interrupted at {}",
            fling.velocity,
            self.simulator.current_position()
        );
        Some(self.simulator.current_position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_animation::EasedFlingSimulator;

    fn gesture() -> FlingGesture<EasedFlingSimulator> {
        FlingGesture::new(EasedFlingSimulator::default(), 0.5)
    }

    #[test]
    fn damping_scales_release_velocity() {
        let mut fling = gesture();
        assert_eq!(fling.start(400.0, -3_000.0, 0.0, 800.0, 0), None);
        assert_eq!(fling.last_fling_velocity(), Some(-1_500.0));
        assert_eq!(fling.active().map(|active| active.velocity), Some(-1_500.0));
    }

    #[test]
    fn active_fling_keeps_its_bounds() {
        let mut fling = gesture();
        fling.start(400.0, 2_000.0, 100.0, 800.0, 0);
        assert_eq!(
            fling.active().map(|active| (active.min, active.max)),
            Some((100.0, 800.0))
        );

        let mut time = 0;
        while let Some(position) = fling.tick(time + 16) {
            time += 16;
            assert!((100.0..=800.0).contains(&position));
        }
        assert!(fling.active().is_none());
    }

    #[test]
    fn zero_velocity_settles_without_activating() {
        let mut fling = gesture();
        assert_eq!(fling.start(400.0, 0.0, 0.0, 800.0, 0), Some(400.0));
        assert!(!fling.is_active());
        assert_eq!(fling.tick(16), None);
    }

    #[test]
    fn tick_runs_until_final_position() {
        let mut fling = gesture();
        fling.start(400.0, 2_000.0, 0.0, 800.0, 0);
        let target = fling.simulator().final_position();

        let mut time = 0;
        let mut last = None;
        while fling.is_active() {
            time += 16;
            last = fling.tick(time);
            assert!(time < 10_000);
        }
        assert_eq!(last, Some(target));
        assert_eq!(fling.tick(time + 16), None);
    }

    #[test]
    fn restarting_finishes_previous_fling() {
        let mut fling = gesture();
        fling.start(0.0, 6_000.0, 0.0, 5_000.0, 0);
        let mid = fling.tick(48).expect("running");
        assert!(mid > 0.0);

        fling.start(mid, -2_000.0, 0.0, 5_000.0, 48);
        assert_eq!(fling.active().map(|active| active.started_at_ms), Some(48));
        assert_eq!(fling.simulator().current_position(), mid);
    }

    #[test]
    fn force_finish_reports_stop_position() {
        let mut fling = gesture();
        assert_eq!(fling.force_finish(), None);

        fling.start(0.0, 6_000.0, 0.0, 5_000.0, 0);
        let mid = fling.tick(32).expect("running");
        assert_eq!(fling.force_finish(), Some(mid));
        assert!(!fling.is_active());
    }
}
