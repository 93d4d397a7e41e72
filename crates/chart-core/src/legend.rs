// File: crates/chart-core/src/legend.rs
// Summary: Fixed legend entry positions stacked to the right of the plot area.

use crate::geometry::Point;
use crate::types::Layout;

/// Canvas positions of one legend entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendEntry {
    pub marker_center: Point,
    pub line_start: Point,
    pub line_end: Point,
    /// Baseline origin of the label text.
    pub label_origin: Point,
}

#[derive(Clone, Copy, Debug)]
pub struct LegendLayout {
    marker_x: f64,
    label_x: f64,
    marker_width: f64,
    top: f64,
    label_height: u32,
}

impl LegendLayout {
    pub fn new(width: u32, layout: &Layout) -> Self {
        let marker_x =
            (f64::from(width) + f64::from(layout.legend_gap) - f64::from(layout.right_margin)).max(0.0);
        let marker_width = f64::from(layout.marker_width);
        Self {
            marker_x,
            label_x: marker_x + marker_width + f64::from(layout.marker_gap),
            marker_width,
            top: f64::from(layout.top_margin),
            label_height: layout.label_height,
        }
    }

    pub fn entry(&self, index: usize) -> LegendEntry {
        let h = f64::from(self.label_height);
        let half = f64::from(self.label_height / 2);
        let label_y = self.top + half + index as f64 * h;
        let marker_y = label_y + half;
        LegendEntry {
            marker_center: Point::new(self.marker_x + (self.marker_width / 2.0).floor(), marker_y),
            line_start: Point::new(self.marker_x, marker_y),
            line_end: Point::new(self.marker_x + self.marker_width, marker_y),
            label_origin: Point::new(self.label_x, label_y + h - 5.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_stack_by_label_height() {
        let legend = LegendLayout::new(800, &Layout::default());
        let first = legend.entry(0);
        assert_eq!(first.line_start, Point::new(670.0, 50.0));
        assert_eq!(first.line_end, Point::new(690.0, 50.0));
        assert_eq!(first.marker_center, Point::new(680.0, 50.0));
        assert_eq!(first.label_origin, Point::new(695.0, 55.0));

        let third = legend.entry(2);
        assert_eq!(third.marker_center.y - first.marker_center.y, 40.0);
        assert_eq!(third.label_origin.x, first.label_origin.x);
    }

    #[test]
    fn oversized_layout_values_do_not_overflow() {
        let layout = Layout {
            legend_gap: u32::MAX,
            marker_width: u32::MAX,
            marker_gap: u32::MAX,
            ..Layout::default()
        };
        let entry = LegendLayout::new(u32::MAX, &layout).entry(0);
        assert!(entry.label_origin.x > entry.line_end.x);
        assert!(entry.line_end.x.is_finite());
    }
}
