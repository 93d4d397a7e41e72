// File: crates/chart-core/src/series.rs
// Summary: Typed column-major data produced by the analyzer: date axis, plotted series, skipped columns.

use crate::axis::Domain;
use crate::time::Moment;

/// A valid series column: every row is either a date value or a gap.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesColumn {
    pub label: String,
    pub values: Vec<Option<Moment>>,
}

impl SeriesColumn {
    pub fn new(label: impl Into<String>, values: Vec<Option<Moment>>) -> Self {
        Self { label: label.into(), values }
    }

    /// Number of non-gap values.
    pub fn point_count(&self) -> usize { self.values.iter().flatten().count() }
}

/// A column dropped from plotting, with the first cell that disqualified it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedColumn {
    /// Raw table column index (1-based, column 0 is the date axis).
    pub index: usize,
    pub label: String,
    /// Raw table row of the offending cell.
    pub row: usize,
    pub value: String,
}

/// Everything the plotter needs, derived once per `generate` call.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub dates: Vec<Moment>,
    pub series: Vec<SeriesColumn>,
    pub skipped: Vec<SkippedColumn>,
    pub domain: Domain,
}

impl Dataset {
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.label.as_str())
    }
}
