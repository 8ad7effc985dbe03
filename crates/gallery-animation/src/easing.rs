//! Easing curves mapping linear progress to perceived progress.

/// Easing functions applied to a linear fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Quintic ease-out, `(t - 1)^5 + 1`.
    ///
    /// Starts at full speed and flattens out completely at the end, so a fling
    /// resampled through it settles instead of stopping abruptly.
    #[default]
    QuinticOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction, clamped to [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::LinearEasing => fraction,
            Easing::QuinticOut => quintic_out(fraction),
        }
    }
}

#[inline]
fn quintic_out(fraction: f32) -> f32 {
    let t = fraction - 1.0;
    t * t * t * t * t + 1.0
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
