// File: crates/chart-core/src/marker.rs
// Summary: Deterministic per-series marker shape and its primitive at a canvas point.

use crate::drawing::{Primitive, Style};
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Diamond,
    Square,
    TriangleDown,
    TriangleUp,
    Circle,
}

impl MarkerShape {
    pub const ALL: [MarkerShape; 5] = [
        MarkerShape::Diamond,
        MarkerShape::Square,
        MarkerShape::TriangleDown,
        MarkerShape::TriangleUp,
        MarkerShape::Circle,
    ];

    /// Primitive for this shape centered on `c` with radius `r`.
    pub fn primitive(&self, c: Point, r: f64, style: Style) -> Primitive {
        let closed = |pts: &[(f64, f64)]| {
            let mut points: Vec<Point> = pts.iter().map(|&(dx, dy)| c.offset(dx, dy)).collect();
            points.push(points[0]);
            Primitive::Polyline { points, style }
        };
        match self {
            MarkerShape::Diamond => closed(&[(-r, 0.0), (0.0, r), (r, 0.0), (0.0, -r)]),
            MarkerShape::Square => Primitive::Rect {
                origin: c.offset(-r, -r),
                width: 2.0 * r,
                height: 2.0 * r,
                style,
            },
            MarkerShape::TriangleDown => closed(&[(-r, -r), (0.0, r), (r, -r)]),
            MarkerShape::TriangleUp => closed(&[(-r, r), (0.0, -r), (r, r)]),
            MarkerShape::Circle => Primitive::Circle { center: c, radius: r, style },
        }
    }
}

/// Shape of series `index`: changes every 5 series, repeats every 25.
pub fn shape_for(index: usize) -> MarkerShape {
    match (index / 5) % 5 {
        0 => MarkerShape::Diamond,
        1 => MarkerShape::Square,
        2 => MarkerShape::TriangleDown,
        3 => MarkerShape::TriangleUp,
        _ => MarkerShape::Circle,
    }
}
