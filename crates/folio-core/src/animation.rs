pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// Linear map from an input range onto two output values.
///
/// Inputs below the first stop yield the first output and inputs above the
/// last stop yield the last output. There is no easing and no hysteresis: the
/// same input always samples to the same value.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes<T> {
    start: (f32, T),
    end: (f32, T),
}

impl<T: Interpolate + Clone> Keyframes<T> {
    /// Two-stop curve. Stops given out of order are swapped.
    pub fn between(start: (f32, T), end: (f32, T)) -> Self {
        if end.0 < start.0 {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    pub fn sample(&self, x: f32) -> T {
        let (x0, y0) = (self.start.0, &self.start.1);
        let (x1, y1) = (self.end.0, &self.end.1);
        if x.is_nan() || x <= x0 {
            return y0.clone();
        }
        if x >= x1 {
            return y1.clone();
        }
        // x0 < x < x1, so the span is positive.
        y0.interpolate(y1, (x - x0) / (x1 - x0))
    }
}
