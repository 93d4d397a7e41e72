// File: crates/chart-core/src/chart.rs
// Summary: Chart plotter; runs analysis, lays out axes, series and legend, then serializes through a surface.

use anyhow::Result;
use tracing::debug;

use crate::analyze::analyze;
use crate::drawing::{Drawing, Primitive, Style, Surface};
use crate::error::FormatError;
use crate::geometry::Point;
use crate::legend::LegendLayout;
use crate::marker::shape_for;
use crate::scale::CanvasMapper;
use crate::series::{Dataset, SeriesColumn};
use crate::table::RawTable;
use crate::theme::{color_for, Color};
use crate::time::Moment;
use crate::types::{ChartOptions, Layout};

/// Builds one chart from one table. Use a fresh plotter per chart.
pub struct ChartPlotter {
    options: ChartOptions,
    table: RawTable,
    dataset: Option<Dataset>,
    drawing: Option<Drawing>,
}

impl ChartPlotter {
    pub fn new(options: ChartOptions, table: RawTable) -> Self {
        Self { options, table, dataset: None, drawing: None }
    }

    pub fn options(&self) -> &ChartOptions { &self.options }

    /// Typed data from the last successful `generate`.
    pub fn dataset(&self) -> Option<&Dataset> { self.dataset.as_ref() }

    pub fn drawing(&self) -> Option<&Drawing> { self.drawing.as_ref() }

    /// Analyze the table and lay out every primitive. Nothing is drawn on failure.
    pub fn generate(&mut self) -> Result<&Drawing, FormatError> {
        let dataset = analyze(&self.table)?;
        let drawing = self.lay_out(&dataset);
        debug!(
            series = dataset.series.len(),
            skipped = dataset.skipped.len(),
            primitives = drawing.primitives().len(),
            "chart laid out"
        );
        self.dataset = Some(dataset);
        let drawing: &Drawing = self.drawing.insert(drawing);
        Ok(drawing)
    }

    /// Replay the generated drawing onto `surface` and return its serialized form.
    pub fn serialize<S: Surface>(&self, mut surface: S) -> Result<S::Output> {
        let drawing = self
            .drawing
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("serialize called before a successful generate"))?;
        drawing.replay(&mut surface)?;
        surface.finish()
    }

    fn lay_out(&self, dataset: &Dataset) -> Drawing {
        let ChartOptions { width, height, layout } = self.options;
        let mapper = CanvasMapper::new(width, height, &layout, dataset.domain);
        let legend = LegendLayout::new(width, &layout);
        let mut drawing = Drawing::new(width, height);

        drawing.extend(axes(&mapper, width, height, &layout));
        for (index, series) in dataset.series.iter().enumerate() {
            let pen = SeriesPen::new(index, &layout);
            drawing.extend(pen.trace(&dataset.dates, series, &mapper));
            drawing.extend(pen.legend_entry(&legend, &series.label));
        }
        drawing
    }
}

/// One-call convenience: generate and serialize.
pub fn render<S: Surface>(options: ChartOptions, table: RawTable, surface: S) -> Result<S::Output> {
    let mut plotter = ChartPlotter::new(options, table);
    plotter.generate()?;
    plotter.serialize(surface)
}

fn axes(mapper: &CanvasMapper, width: u32, height: u32, layout: &Layout) -> [Primitive; 2] {
    let style = Style::stroke(Color::BLACK, f64::from(layout.axis_stroke_width));
    let origin = mapper.origin_offset(0.0, 0.0);
    let x_len = f64::from(width) - f64::from(layout.left_margin) - f64::from(layout.right_margin);
    let y_len = f64::from(height) - f64::from(layout.top_margin) - f64::from(layout.bottom_margin);
    [
        Primitive::Line { from: origin, to: mapper.origin_offset(x_len, 0.0), style },
        Primitive::Line { from: origin, to: mapper.origin_offset(0.0, y_len), style },
    ]
}

/// Pen position while tracing a series.
#[derive(Clone, Copy, Debug, PartialEq)]
enum PenState {
    Up,
    Down(Point),
}

/// Per-series visual identity plus the primitives derived from it.
struct SeriesPen {
    index: usize,
    style: Style,
    text_style: Style,
    radius: f64,
}

impl SeriesPen {
    fn new(index: usize, layout: &Layout) -> Self {
        let color = color_for(index);
        Self {
            index,
            style: Style::filled(color, f64::from(layout.series_stroke_width)),
            text_style: Style::text(Color::BLACK, f64::from(layout.font_size)),
            radius: f64::from(layout.marker_radius),
        }
    }

    fn marker(&self, at: Point) -> Primitive {
        shape_for(self.index).primitive(at, self.radius, self.style)
    }

    /// Line segments and markers in row order; a gap lifts the pen.
    fn trace(&self, dates: &[Moment], series: &SeriesColumn, mapper: &CanvasMapper) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(series.values.len() * 2);
        let mut pen = PenState::Up;
        for (date, value) in dates.iter().zip(&series.values) {
            pen = match value {
                None => PenState::Up,
                Some(y) => {
                    let p = mapper.to_canvas(*date, *y);
                    if let PenState::Down(last) = pen {
                        out.push(Primitive::Line { from: last, to: p, style: self.style });
                    }
                    out.push(self.marker(p));
                    PenState::Down(p)
                }
            };
        }
        out
    }

    fn legend_entry(&self, legend: &LegendLayout, label: &str) -> [Primitive; 3] {
        let entry = legend.entry(self.index);
        [
            self.marker(entry.marker_center),
            Primitive::Line { from: entry.line_start, to: entry.line_end, style: self.style },
            Primitive::Text { origin: entry.label_origin, text: label.to_string(), style: self.text_style },
        ]
    }
}
