// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the table model, analyzer, layout helpers and chart plotter.

pub mod analyze;
pub mod axis;
pub mod chart;
pub mod drawing;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod marker;
pub mod scale;
pub mod series;
pub mod table;
pub mod theme;
pub mod time;
pub mod types;

pub use analyze::{analyze, DATE_HEADER};
pub use axis::Domain;
pub use chart::{render, ChartPlotter};
pub use drawing::{Drawing, Primitive, Style, Surface};
pub use error::FormatError;
pub use geometry::Point;
pub use legend::{LegendEntry, LegendLayout};
pub use marker::{shape_for, MarkerShape};
pub use scale::CanvasMapper;
pub use series::{Dataset, SeriesColumn, SkippedColumn};
pub use table::{Cell, RawTable, Value};
pub use theme::{color_for, Color, NamedColor};
pub use time::Moment;
pub use types::{ChartOptions, Layout};
