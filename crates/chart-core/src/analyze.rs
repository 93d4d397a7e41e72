// File: crates/chart-core/src/analyze.rs
// Summary: Column type analysis: transpose rows, validate the date axis, classify series columns, compute domains.

use tracing::{debug, trace};

use crate::axis::{Domain, Extent};
use crate::error::FormatError;
use crate::series::{Dataset, SeriesColumn, SkippedColumn};
use crate::table::{Cell, RawTable, Value};
use crate::time::Moment;

/// Required header text of column 0.
pub const DATE_HEADER: &str = "Date";

/// Column-major view of a table, header cell kept apart from the parsed body.
struct Column {
    header: Cell,
    body: Vec<Value>,
}

fn transpose(table: &RawTable) -> Vec<Column> {
    let width = table.width();
    let rows = table.rows();
    let body_len = rows.len().saturating_sub(1);
    let mut columns: Vec<Column> = rows
        .first()
        .map(|header| {
            header
                .iter()
                .map(|h| Column { header: h.clone(), body: Vec::with_capacity(body_len) })
                .collect()
        })
        .unwrap_or_default();

    for (ri, row) in rows.iter().enumerate().skip(1) {
        if row.len() > width {
            debug!(row = ri, extra = row.len() - width, "ignoring cells beyond header width");
        }
        for (ci, column) in columns.iter_mut().enumerate() {
            let value = row.get(ci).map_or(Value::Empty, Value::parse);
            column.body.push(value);
        }
    }
    columns
}

/// Validate `table` and derive the typed dataset used for plotting.
pub fn analyze(table: &RawTable) -> Result<Dataset, FormatError> {
    let mut columns = transpose(table).into_iter();
    let date_column = columns.next().ok_or(FormatError::EmptyTable)?;

    match &date_column.header {
        Cell::Text(h) if h == DATE_HEADER => {}
        other => return Err(FormatError::MissingDateHeader { found: other.display_text() }),
    }

    let mut x_extent = Extent::default();
    let mut dates = Vec::with_capacity(date_column.body.len());
    for (i, value) in date_column.body.iter().enumerate() {
        let date = value
            .as_date()
            .ok_or_else(|| FormatError::NonDateCell { row: i + 1, value: value.display_text() })?;
        x_extent.include(date);
        dates.push(date);
    }
    if x_extent.bounds().is_none() {
        return Err(FormatError::NoDates);
    }

    let mut y_extent = Extent::default();
    let mut series = Vec::new();
    let mut skipped = Vec::new();
    for (offset, column) in columns.enumerate() {
        let label = column.header.display_text();
        match classify(&column.body) {
            Ok((values, extent)) => {
                y_extent.merge(&extent);
                series.push(SeriesColumn::new(label, values));
            }
            Err((row, value)) => {
                let index = offset + 1;
                debug!(column = index, label = %label, row, value = %value, "skipping non-date series column");
                skipped.push(SkippedColumn { index, label, row, value });
            }
        }
    }

    let domain = Domain::new(x_extent, y_extent)?;
    trace!(
        x_min = %domain.x_min, x_max = %domain.x_max,
        y_min = %domain.y_min, y_max = %domain.y_max,
        "domain extrema"
    );
    Ok(Dataset { dates, series, skipped, domain })
}

/// Accept a column only if every body cell is a date or a gap.
/// On rejection returns the 1-based table row and text of the first offending cell.
fn classify(body: &[Value]) -> Result<(Vec<Option<Moment>>, Extent), (usize, String)> {
    let mut extent = Extent::default();
    let mut values = Vec::with_capacity(body.len());
    for (i, value) in body.iter().enumerate() {
        match value {
            Value::Empty => values.push(None),
            Value::Date(m) => {
                extent.include(*m);
                values.push(Some(*m));
            }
            other => return Err((i + 1, other.display_text())),
        }
    }
    Ok((values, extent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_read_as_gaps() {
        let t = RawTable::from_strings([
            vec!["Date", "A", "B"],
            vec!["2024-01-01", "1", "5"],
            vec!["2024-01-02", "2"],
        ]);
        let ds = analyze(&t).unwrap();
        assert_eq!(ds.series.len(), 2);
        assert_eq!(ds.series[1].values[1], None);
    }

    #[test]
    fn header_must_be_text_date() {
        let t = RawTable::from_rows([vec![Cell::Number(1.0)], vec![Cell::from("2024-01-01")]]);
        assert_eq!(
            analyze(&t),
            Err(FormatError::MissingDateHeader { found: "1".into() })
        );
        assert_eq!(analyze(&RawTable::default()), Err(FormatError::EmptyTable));
    }

    #[test]
    fn header_only_table_has_no_dates() {
        let t = RawTable::from_strings([vec!["Date", "A"]]);
        assert_eq!(analyze(&t), Err(FormatError::NoDates));
    }
}
