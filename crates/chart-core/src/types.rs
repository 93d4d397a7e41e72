// File: crates/chart-core/src/types.rs
// Summary: Shared layout constants and construction options (sizes, margins, stroke widths).

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 400;

/// Fixed visual parameters of the chart, in canvas pixels.
///
/// ```text
///   +---------------------------------------------
///   |            ^ top
///   |            v            legend_gap
///   |             |           <-> -x- foo
///   |<--left----->|               -x- bar
///   |             +------------
///   |            ^ bottom     <----right-------->
///   +---------------------------------------------
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub top_margin: u32,
    pub bottom_margin: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    /// Space between the plot area's right edge and the legend markers.
    pub legend_gap: u32,
    /// Length of the legend sample line.
    pub marker_width: u32,
    /// Space between the sample line and the label text.
    pub marker_gap: u32,
    /// Vertical pitch of legend entries.
    pub label_height: u32,
    pub marker_radius: u32,
    pub series_stroke_width: u32,
    pub axis_stroke_width: u32,
    pub font_size: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            top_margin: 30,
            bottom_margin: 30,
            left_margin: 40,
            right_margin: 150,
            legend_gap: 20,
            marker_width: 20,
            marker_gap: 5,
            label_height: 20,
            marker_radius: 4,
            series_stroke_width: 3,
            axis_stroke_width: 1,
            font_size: 11,
        }
    }
}

/// Construction input next to the raw table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub layout: Layout,
}

impl ChartOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, layout: Layout::default() }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

impl Default for ChartOptions {
    fn default() -> Self { Self::new(WIDTH, HEIGHT) }
}
