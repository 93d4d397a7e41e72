// File: crates/chart-core/src/table.rs
// Summary: Untyped row-major input table and the typed per-cell value produced by one parse attempt.

use crate::time::Moment;

/// Raw input cell as supplied by the surrounding pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Empty cells and blank text both count as missing.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Text used for header labels and error messages.
    pub fn display_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Cell::Text(s.to_string()) }
}

impl From<String> for Cell {
    fn from(s: String) -> Self { Cell::Text(s) }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self { Cell::Number(n) }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Cell::Empty) }
}

/// A cell after the single date-parse attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Empty,
    Text(String),
    Number(f64),
    Date(Moment),
}

impl Value {
    pub fn parse(cell: &Cell) -> Self {
        if cell.is_blank() {
            return Value::Empty;
        }
        match cell {
            Cell::Text(s) => match Moment::parse_str(s) {
                Some(m) => Value::Date(m),
                None => Value::Text(s.clone()),
            },
            Cell::Number(n) => match Moment::from_epoch(*n) {
                Some(m) => Value::Date(m),
                None => Value::Number(*n),
            },
            Cell::Empty => Value::Empty,
        }
    }

    pub fn as_date(&self) -> Option<Moment> {
        match self {
            Value::Date(m) => Some(*m),
            _ => None,
        }
    }

    pub fn display_text(&self) -> String {
        match self {
            Value::Empty => String::new(),
            Value::Text(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Date(m) => m.to_string(),
        }
    }
}

/// Row-major table. Row 0 is the header row, column 0 the date axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let rows = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        Self { rows }
    }

    /// Build from string cells; blank strings become `Cell::Empty`.
    pub fn from_strings<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|r| {
                r.into_iter()
                    .map(|s| {
                        let s = s.as_ref();
                        if s.trim().is_empty() { Cell::Empty } else { Cell::Text(s.to_string()) }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) { self.rows.push(row); }

    pub fn rows(&self) -> &[Vec<Cell>] { &self.rows }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Number of columns, as defined by the header row.
    pub fn width(&self) -> usize { self.rows.first().map_or(0, Vec::len) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dispatches_on_cell_kind() {
        assert_eq!(Value::parse(&Cell::Empty), Value::Empty);
        assert_eq!(Value::parse(&Cell::from("  ")), Value::Empty);
        assert_eq!(Value::parse(&Cell::from("abc")), Value::Text("abc".into()));
        assert!(matches!(Value::parse(&Cell::from("2024-05-01")), Value::Date(_)));
        assert!(matches!(Value::parse(&Cell::Number(3.0)), Value::Date(_)));
        assert!(matches!(Value::parse(&Cell::Number(f64::NAN)), Value::Number(_)));
    }

    #[test]
    fn from_strings_blanks_become_empty() {
        let t = RawTable::from_strings([vec!["Date", "A"], vec!["2024-01-01", ""]]);
        assert_eq!(t.width(), 2);
        assert_eq!(t.rows()[1][1], Cell::Empty);
    }
}
