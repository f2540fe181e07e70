use derive_more::Display;

/// A closed interval `[min, max]` on the real line. Used for the encodable
/// bounds of each galactic axis, and for the linear mappings between screen,
/// image, and canvas space.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange {
    pub min: f64,
    pub max: f64,
}

impl NumRange {
    /// The unit interval, which screen space uses on both axes
    pub const UNIT: Self = Self::new(0.0, 1.0);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[-bound, bound]`
    pub const fn symmetric(bound: f64) -> Self {
        Self::new(-bound, bound)
    }

    /// An interval that starts at `start` and is `length` long
    pub fn from_start(start: f64, length: f64) -> Self {
        Self::new(start, start + length)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive on both ends. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Linearly map a value from this interval onto `dest`. Values outside
    /// this interval extrapolate past the ends of `dest`. An empty interval
    /// maps everything onto `dest.min`.
    pub fn map_to(&self, dest: &Self, value: f64) -> f64 {
        let span = self.span();
        if span > 0.0 {
            dest.min + (value - self.min) / span * dest.span()
        } else {
            dest.min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_contains() {
        let y_bounds = NumRange::symmetric(127.0);
        assert_approx_eq!(y_bounds.span(), 254.0);
        assert!(y_bounds.contains(-127.0));
        assert!(y_bounds.contains(127.0));
        assert!(!y_bounds.contains(127.5));
        assert!(!y_bounds.contains(f64::NAN));
        assert!(!y_bounds.contains(f64::NEG_INFINITY));
    }

    #[test]
    fn test_map_to() {
        let region = NumRange::from_start(642.0, 1920.0);
        assert_approx_eq!(NumRange::UNIT.map_to(&region, 0.0), 642.0);
        assert_approx_eq!(NumRange::UNIT.map_to(&region, 0.5), 1602.0);
        // Off the map extrapolates
        assert_approx_eq!(NumRange::UNIT.map_to(&region, -0.5), -318.0);

        // Empty image maps everything to the start of the viewport
        let empty = NumRange::new(3.0, 3.0);
        assert_approx_eq!(empty.map_to(&region, 100.0), 642.0);
    }
}
