// File: crates/chart-core/src/drawing.rs
// Summary: Ordered drawing primitives, the drawing handle, and the surface trait that serializes them.

use anyhow::Result;

use crate::geometry::Point;
use crate::theme::Color;

/// Paint attributes attached to each primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub stroke: Color,
    pub fill: Option<Color>,
    pub stroke_width: f64,
    pub font_size: f64,
}

impl Style {
    pub fn stroke(color: Color, width: f64) -> Self {
        Self { stroke: color, fill: None, stroke_width: width, font_size: 0.0 }
    }

    pub fn filled(color: Color, width: f64) -> Self {
        Self { stroke: color, fill: Some(color), stroke_width: width, font_size: 0.0 }
    }

    pub fn text(color: Color, font_size: f64) -> Self {
        Self { stroke: color, fill: Some(color), stroke_width: 0.0, font_size }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { from: Point, to: Point, style: Style },
    /// Axis-aligned box; `origin` is the top-left corner.
    Rect { origin: Point, width: f64, height: f64, style: Style },
    /// Closed polyline: the last point repeats the first.
    Polyline { points: Vec<Point>, style: Style },
    Circle { center: Point, radius: f64, style: Style },
    /// `origin` is the left end of the text baseline.
    Text { origin: Point, text: String, style: Style },
}

impl Primitive {
    pub fn style(&self) -> &Style {
        match self {
            Primitive::Line { style, .. }
            | Primitive::Rect { style, .. }
            | Primitive::Polyline { style, .. }
            | Primitive::Circle { style, .. }
            | Primitive::Text { style, .. } => style,
        }
    }
}

/// Low-level vector drawing target.
pub trait Surface {
    type Output;

    fn line(&mut self, from: Point, to: Point, style: &Style) -> Result<()>;
    fn rect(&mut self, origin: Point, width: f64, height: f64, style: &Style) -> Result<()>;
    fn polyline(&mut self, points: &[Point], style: &Style) -> Result<()>;
    fn circle(&mut self, center: Point, radius: f64, style: &Style) -> Result<()>;
    fn text(&mut self, origin: Point, text: &str, style: &Style) -> Result<()>;

    /// Serialize everything drawn so far.
    fn finish(self) -> Result<Self::Output>;
}

/// Accumulated output of one chart generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drawing {
    width: u32,
    height: u32,
    primitives: Vec<Primitive>,
}

impl Drawing {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, primitives: Vec::new() }
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn primitives(&self) -> &[Primitive] { &self.primitives }

    pub(crate) fn extend(&mut self, ps: impl IntoIterator<Item = Primitive>) {
        self.primitives.extend(ps);
    }

    /// Feed every primitive, in order, to `surface`.
    pub fn replay<S: Surface>(&self, surface: &mut S) -> Result<()> {
        for p in &self.primitives {
            match p {
                Primitive::Line { from, to, style } => surface.line(*from, *to, style)?,
                Primitive::Rect { origin, width, height, style } => {
                    surface.rect(*origin, *width, *height, style)?
                }
                Primitive::Polyline { points, style } => surface.polyline(points, style)?,
                Primitive::Circle { center, radius, style } => surface.circle(*center, *radius, style)?,
                Primitive::Text { origin, text, style } => surface.text(*origin, text, style)?,
            }
        }
        Ok(())
    }
}
