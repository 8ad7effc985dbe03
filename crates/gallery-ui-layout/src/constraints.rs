//! Layout constraints system

/// How a single dimension of [`Constraints`] restricts the measured size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureMode {
    /// The parent imposes a fixed size.
    Exactly,
    /// The parent imposes an upper bound.
    AtMost,
    /// No limit; the size is derived from the content.
    Unspecified,
}

/// One dimension of [`Constraints`] reduced to a size and a mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureSpec {
    pub size: f32,
    pub mode: MeasureMode,
}

impl MeasureSpec {
    fn from_bounds(min: f32, max: f32) -> Self {
        if !max.is_finite() {
            Self {
                size: 0.0,
                mode: MeasureMode::Unspecified,
            }
        } else if min == max {
            Self {
                size: max,
                mode: MeasureMode::Exactly,
            }
        } else {
            Self {
                size: max,
                mode: MeasureMode::AtMost,
            }
        }
    }
}

/// Constraints used during layout measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Creates constraints with no upper bound on either axis.
    pub fn unbounded() -> Self {
        Self::loose(f32::INFINITY, f32::INFINITY)
    }

    /// Creates new constraints with the given width bounds.
    pub fn copy_with_width(self, min_width: f32, max_width: f32) -> Self {
        Self {
            min_width,
            max_width,
            ..self
        }
    }

    /// Horizontal constraint as a [`MeasureSpec`].
    pub fn width_spec(&self) -> MeasureSpec {
        MeasureSpec::from_bounds(self.min_width, self.max_width)
    }

    /// Vertical constraint as a [`MeasureSpec`].
    pub fn height_spec(&self) -> MeasureSpec {
        MeasureSpec::from_bounds(self.min_height, self.max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_follow_bounds() {
        let exact = Constraints::tight(300.0, 200.0);
        assert_eq!(exact.width_spec().mode, MeasureMode::Exactly);
        assert_eq!(exact.height_spec().size, 200.0);

        let bounded = Constraints::loose(300.0, 200.0);
        assert_eq!(bounded.width_spec().mode, MeasureMode::AtMost);
        assert_eq!(bounded.width_spec().size, 300.0);

        let open = Constraints::unbounded().copy_with_width(120.0, 120.0);
        assert_eq!(open.width_spec().mode, MeasureMode::Exactly);
        assert_eq!(open.height_spec().mode, MeasureMode::Unspecified);
        assert_eq!(open.height_spec().size, 0.0);
    }
}
