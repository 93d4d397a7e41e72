// File: crates/chart-core/src/error.rs
// Summary: The single ingestion error kind; raised before any drawing happens.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("table has no header row")]
    EmptyTable,
    #[error("first column must have a 'Date' header instead of '{found}'")]
    MissingDateHeader { found: String },
    #[error("first column must be all dates; row {row} holds '{value}'")]
    NonDateCell { row: usize, value: String },
    #[error("first column does not contain valid dates")]
    NoDates,
    #[error("columns don't contain any valid dates")]
    NoSeriesValues,
    #[error("date axis spans a single instant; cannot scale the x axis")]
    DegenerateXDomain,
    #[error("all series values are the same instant; cannot scale the y axis")]
    DegenerateYDomain,
}
