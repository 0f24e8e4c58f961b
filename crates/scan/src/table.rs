//! Tabular export of indexes and timesteps
//!
//! Reports share fixed column names so they can be compared across tools:
//!
//! | Row type             | Columns                                   |
//! | -------------------- | ----------------------------------------- |
//! | [RecordEntry]        | `KEYWORD, TYPE, NITEMS, BYTESTART`        |
//! | [DatedRecordEntry]   | `KEYWORD, TYPE, NITEMS, BYTESTART, DATE`  |
//! | [TimeStep]           | `SEQNUM, DATE`                            |

// crate modules
use crate::error::Result;
use crate::record::{DatedRecordEntry, RecordEntry, TimeStep};

// standard library
use std::fs::File;
use std::io::Write;
use std::path::Path;

// external crates
use log::debug;

/// Anything that can be written as a row of a report
pub trait Tabular {
    /// Column headers, identical for every row of the type
    fn columns() -> &'static [&'static str];

    /// Values of this row in the same order as [Tabular::columns]
    fn row(&self) -> Vec<String>;
}

impl Tabular for RecordEntry {
    fn columns() -> &'static [&'static str] {
        &["KEYWORD", "TYPE", "NITEMS", "BYTESTART"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.kind.tag().to_string(),
            self.item_count.to_string(),
            self.byte_offset.to_string(),
        ]
    }
}

impl Tabular for DatedRecordEntry {
    fn columns() -> &'static [&'static str] {
        &["KEYWORD", "TYPE", "NITEMS", "BYTESTART", "DATE"]
    }

    fn row(&self) -> Vec<String> {
        let mut row = self.entry.row();
        row.push(self.date.to_string());
        row
    }
}

impl Tabular for TimeStep {
    fn columns() -> &'static [&'static str] {
        &["SEQNUM", "DATE"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.sequence.to_string(), self.date.to_string()]
    }
}

/// Write rows as CSV with a header line to any writer
///
/// ```rust
/// # use restools_scan::{write_csv, TimeStep};
/// let steps = [TimeStep::from_ymd(1, 2000, 1, 1), TimeStep::from_ymd(2, 2000, 2, 1)];
/// let mut buffer = Vec::new();
/// write_csv(&steps, &mut buffer).unwrap();
///
/// let text = String::from_utf8(buffer).unwrap();
/// assert_eq!(text, "SEQNUM,DATE\n1,20000101\n2,20000201\n");
/// ```
pub fn write_csv<T: Tabular, W: Write>(rows: &[T], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(T::columns())?;
    for row in rows {
        writer.write_record(row.row())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write rows as CSV to a new file at `path`
pub fn write_csv_file<T: Tabular, P: AsRef<Path>>(rows: &[T], path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} rows to {}", rows.len(), path.display());
    let file = File::create(path)?;
    write_csv(rows, file)
}
