// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-canvas mapping plus plain origin-relative offsets for non-data elements.

use crate::axis::Domain;
use crate::geometry::Point;
use crate::time::Moment;
use crate::types::Layout;

/// Maps (date, value) pairs into canvas pixels.
///
/// The origin sits at `(left_margin, height - bottom_margin)`. Offsets grow to the
/// right and upward from there.
#[derive(Clone, Copy, Debug)]
pub struct CanvasMapper {
    x0: f64,
    y0: f64,
    plot_width: f64,
    plot_height: f64,
    domain: Domain,
}

impl CanvasMapper {
    pub fn new(width: u32, height: u32, layout: &Layout, domain: Domain) -> Self {
        let width = f64::from(width);
        let height = f64::from(height);
        let vsum = f64::from(layout.top_margin) + f64::from(layout.bottom_margin);
        Self {
            x0: f64::from(layout.left_margin),
            y0: height - f64::from(layout.bottom_margin),
            plot_width: width - (f64::from(layout.left_margin) + f64::from(layout.right_margin)),
            // Doubled margin sum: the value axis is compressed below the drawable height.
            plot_height: height - 2.0 * vsum,
            domain,
        }
    }

    pub fn origin(&self) -> Point { Point::new(self.x0, self.y0) }

    pub fn plot_width(&self) -> f64 { self.plot_width }

    pub fn plot_height(&self) -> f64 { self.plot_height }

    /// Translate an offset from the origin; `dy` counts upward.
    #[inline]
    pub fn origin_offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x0 + dx, self.y0 - dy)
    }

    #[inline]
    pub fn to_canvas(&self, x: Moment, y: Moment) -> Point {
        let d = &self.domain;
        let dx = (x - d.x_min) * self.plot_width / d.x_span();
        let dy = (y - d.y_min) * self.plot_height / d.y_span();
        self.origin_offset(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Extent;

    fn at(s: f64) -> Moment { Moment::from_epoch(s).unwrap() }

    fn domain(x: (f64, f64), y: (f64, f64)) -> Domain {
        let mut xe = Extent::default();
        xe.include(at(x.0));
        xe.include(at(x.1));
        let mut ye = Extent::default();
        ye.include(at(y.0));
        ye.include(at(y.1));
        Domain::new(xe, ye).unwrap()
    }

    #[test]
    fn domain_endpoints_hit_plot_edges() {
        let m = CanvasMapper::new(800, 400, &Layout::default(), domain((100.0, 400.0), (0.0, 50.0)));
        assert_eq!(m.origin(), Point::new(40.0, 370.0));
        assert_eq!(m.plot_width(), 610.0);
        assert_eq!(m.plot_height(), 280.0);

        let lo = m.to_canvas(at(100.0), at(0.0));
        let hi = m.to_canvas(at(400.0), at(50.0));
        assert_eq!(lo, Point::new(40.0, 370.0));
        assert_eq!(hi, Point::new(650.0, 90.0));
    }

    #[test]
    fn midpoint_maps_linearly() {
        let m = CanvasMapper::new(800, 400, &Layout::default(), domain((0.0, 10.0), (0.0, 10.0)));
        let p = m.to_canvas(at(5.0), at(5.0));
        assert_eq!(p, Point::new(40.0 + 305.0, 370.0 - 140.0));
    }

    #[test]
    fn origin_offset_ignores_domain() {
        let m = CanvasMapper::new(500, 300, &Layout::default(), domain((0.0, 1.0), (0.0, 1.0)));
        assert_eq!(m.origin_offset(0.0, 0.0), Point::new(40.0, 270.0));
        assert_eq!(m.origin_offset(10.0, 20.0), Point::new(50.0, 250.0));
    }
}
