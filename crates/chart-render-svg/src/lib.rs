// File: crates/chart-render-svg/src/lib.rs
// Summary: SVG surface backed by plotters; replays chart-core primitives into markup.

use anyhow::Result;
use chart_core::{ChartPlotter, Color, Point, Style, Surface};
use plotters::coord::Shift;
use plotters::element::{Circle, PathElement, Polygon, Rectangle, Text};
use plotters::prelude::{DrawingArea, IntoDrawingArea, IntoFont, RGBColor, SVGBackend, ShapeStyle};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::Color as _;

pub const FONT_FAMILY: &str = "sans-serif";

/// plotters writes `font-size` as the requested size divided by this factor.
const SVG_FONT_SCALE: f64 = 1.24;

/// Fraction of the font size that the backend's bottom anchor (`dy="-0.5ex"`) lifts text
/// above its baseline.
const BOTTOM_ANCHOR_LIFT: f64 = 0.25;

/// Vector surface writing SVG markup.
///
/// Coordinates are snapped to whole pixels: every point, radius and stroke width is
/// rounded to the nearest integer before it reaches the backend, so sub-pixel positions
/// from the canvas mapping do not survive into the markup.
pub struct SvgSurface<'a> {
    area: DrawingArea<SVGBackend<'a>, Shift>,
}

impl<'a> SvgSurface<'a> {
    /// Draw into `buf`; the markup lands there once the surface is finished.
    pub fn new(buf: &'a mut String, width: u32, height: u32) -> Self {
        let area = SVGBackend::with_string(buf, (width, height)).into_drawing_area();
        Self { area }
    }

    pub fn with_background(self, color: Color) -> Result<Self> {
        self.area.fill(&rgb(color))?;
        Ok(self)
    }
}

fn rgb(color: Color) -> RGBColor {
    let (r, g, b) = color.to_rgb();
    RGBColor(r, g, b)
}

/// Nearest whole-pixel backend coordinate.
fn px(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

fn stroke(style: &Style) -> ShapeStyle {
    ShapeStyle {
        color: rgb(style.stroke).to_rgba(),
        filled: false,
        stroke_width: style.stroke_width.round().max(0.0) as u32,
    }
}

fn fill(style: &Style) -> Option<ShapeStyle> {
    style.fill.map(|c| ShapeStyle { color: rgb(c).to_rgba(), filled: true, stroke_width: 0 })
}

impl Surface for SvgSurface<'_> {
    type Output = ();

    fn line(&mut self, from: Point, to: Point, style: &Style) -> Result<()> {
        self.area.draw(&PathElement::new(vec![px(from), px(to)], stroke(style)))?;
        Ok(())
    }

    fn rect(&mut self, origin: Point, width: f64, height: f64, style: &Style) -> Result<()> {
        let corners = [px(origin), px(origin.offset(width, height))];
        if let Some(f) = fill(style) {
            self.area.draw(&Rectangle::new(corners, f))?;
        }
        self.area.draw(&Rectangle::new(corners, stroke(style)))?;
        Ok(())
    }

    fn polyline(&mut self, points: &[Point], style: &Style) -> Result<()> {
        let pts: Vec<(i32, i32)> = points.iter().copied().map(px).collect();
        if let Some(f) = fill(style) {
            self.area.draw(&Polygon::new(pts.clone(), f))?;
        }
        self.area.draw(&PathElement::new(pts, stroke(style)))?;
        Ok(())
    }

    fn circle(&mut self, center: Point, radius: f64, style: &Style) -> Result<()> {
        let r = radius.round() as i32;
        if let Some(f) = fill(style) {
            self.area.draw(&Circle::new(px(center), r, f))?;
        }
        self.area.draw(&Circle::new(px(center), r, stroke(style)))?;
        Ok(())
    }

    fn text(&mut self, origin: Point, text: &str, style: &Style) -> Result<()> {
        let font = (FONT_FAMILY, style.font_size * SVG_FONT_SCALE)
            .into_font()
            .color(&rgb(style.fill.unwrap_or(style.stroke)))
            .pos(Pos::new(HPos::Left, VPos::Bottom));
        // Lower the anchor by the amount the bottom `dy` raises it so the glyphs sit on `origin`.
        let baseline = origin.offset(0.0, (style.font_size * BOTTOM_ANCHOR_LIFT).round());
        self.area.draw(&Text::new(text.to_string(), px(baseline), font))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.area.present()?;
        Ok(())
    }
}

/// Serialize a generated chart to an SVG document sized to its drawing.
pub fn to_svg(plotter: &ChartPlotter) -> Result<String> {
    let drawing = plotter
        .drawing()
        .ok_or_else(|| anyhow::anyhow!("to_svg called before a successful generate"))?;
    let mut buf = String::new();
    plotter.serialize(SvgSurface::new(&mut buf, drawing.width(), drawing.height()))?;
    Ok(buf)
}
