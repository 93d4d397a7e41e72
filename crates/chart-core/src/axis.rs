// File: crates/chart-core/src/axis.rs
// Summary: Axis domains (min/max on each axis) and the running extrema used to build them.

use crate::error::FormatError;
use crate::time::Moment;

/// Running min/max over a stream of moments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extent {
    bounds: Option<(Moment, Moment)>,
}

impl Extent {
    pub fn include(&mut self, m: Moment) {
        self.bounds = Some(match self.bounds {
            None => (m, m),
            Some((lo, hi)) => (lo.min(m), hi.max(m)),
        });
    }

    pub fn merge(&mut self, other: &Extent) {
        if let Some((lo, hi)) = other.bounds {
            self.include(lo);
            self.include(hi);
        }
    }

    pub fn bounds(&self) -> Option<(Moment, Moment)> { self.bounds }
}

/// Shared x (date axis) and y (value axis) domains.
/// Contract: both spans are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
    pub x_min: Moment,
    pub x_max: Moment,
    pub y_min: Moment,
    pub y_max: Moment,
}

impl Domain {
    pub fn new(x: Extent, y: Extent) -> Result<Self, FormatError> {
        let (x_min, x_max) = x.bounds().ok_or(FormatError::NoDates)?;
        let (y_min, y_max) = y.bounds().ok_or(FormatError::NoSeriesValues)?;
        if x_max <= x_min {
            return Err(FormatError::DegenerateXDomain);
        }
        if y_max <= y_min {
            return Err(FormatError::DegenerateYDomain);
        }
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    /// Width of the date axis domain in seconds.
    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }

    /// Height of the value axis domain in seconds.
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: f64) -> Moment { Moment::from_epoch(s).unwrap() }

    #[test]
    fn extent_tracks_min_and_max() {
        let mut e = Extent::default();
        assert!(e.bounds().is_none());
        for s in [5.0, 2.0, 9.0] {
            e.include(at(s));
        }
        assert_eq!(e.bounds(), Some((at(2.0), at(9.0))));
    }

    #[test]
    fn zero_width_domains_are_rejected() {
        let mut x = Extent::default();
        x.include(at(1.0));
        let mut y = Extent::default();
        y.include(at(1.0));
        y.include(at(2.0));
        assert_eq!(Domain::new(x, y), Err(FormatError::DegenerateXDomain));
        x.include(at(3.0));
        let mut flat = Extent::default();
        flat.include(at(4.0));
        assert_eq!(Domain::new(x, flat), Err(FormatError::DegenerateYDomain));
        assert_eq!(Domain::new(x, Extent::default()), Err(FormatError::NoSeriesValues));
        assert!(Domain::new(x, y).is_ok());
    }
}
