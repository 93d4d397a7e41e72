// File: crates/demo/src/load.rs
// Summary: CSV to RawTable loading; header row kept as row 0, ragged rows allowed.

use anyhow::{Context, Result};
use chart_core::{Cell, RawTable};
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub fn load_csv(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_table(file)
}

pub fn read_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = RawTable::default();
    for rec in rdr.records() {
        let rec = rec?;
        let row = rec
            .iter()
            .map(|s| if s.is_empty() { Cell::Empty } else { Cell::Text(s.to_string()) })
            .collect();
        table.push_row(row);
    }
    debug!(rows = table.rows().len(), "parsed csv records");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn header_and_blanks_survive() {
        let t = read_table("Date,A,B\n2024-01-01,1,\n2024-01-02, 2 ,3\n".as_bytes()).unwrap();
        assert_eq!(t.rows().len(), 3);
        assert_eq!(t.rows()[0][0], Cell::Text("Date".into()));
        assert_eq!(t.rows()[1][2], Cell::Empty);
        assert_eq!(t.rows()[2][1], Cell::Text("2".into()));
    }

    #[test]
    fn loads_from_disk_and_charts() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "Date,Load\n2024-01-01,5\n2024-01-02\n2024-01-03,9\n").unwrap();
        let table = load_csv(f.path()).unwrap();
        let ds = chart_core::analyze(&table).unwrap();
        assert_eq!(ds.series[0].values[1], None);
    }
}
