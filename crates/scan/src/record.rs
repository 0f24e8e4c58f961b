//! Index entries produced by the scanners

// crate modules
use crate::kind::RecordType;

// external crates
use serde::Serialize;

/// Position and shape of a single named record
///
/// Only the header is interpreted during a scan, the payload is skipped. The
/// entry holds enough to seek straight back to the data later.
///
/// - `byte_offset` is the first byte after the record header
/// - `byte_length` is every payload byte up to the next record, including
///   any block markers the dialect frames the data with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordEntry {
    /// Keyword with padding removed, `tag!key` for ROFF files
    pub name: String,
    /// Element type of the payload
    pub kind: RecordType,
    /// Number of elements declared in the header
    pub item_count: u64,
    /// Start of the payload in the file
    pub byte_offset: u64,
    /// Length of the payload in the file
    pub byte_length: u64,
}

impl RecordEntry {
    /// First byte after the payload
    ///
    /// ```rust
    /// # use restools_scan::{EclType, RecordEntry, RecordType};
    /// let entry = RecordEntry {
    ///     name: "PRESSURE".into(),
    ///     kind: RecordType::Ecl(EclType::Real),
    ///     item_count: 100,
    ///     byte_offset: 64,
    ///     byte_length: 408,
    /// };
    /// assert_eq!(entry.end(), 472);
    /// ```
    pub fn end(&self) -> u64 {
        self.byte_offset + self.byte_length
    }
}

/// A [RecordEntry] stamped with the report step date it belongs to
///
/// Records found before the first report step marker have a date of `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedRecordEntry {
    /// The indexed record
    pub entry: RecordEntry,
    /// Report date as YYYYMMDD
    pub date: i32,
}

/// Report step number and its date
///
/// ```rust
/// # use restools_scan::TimeStep;
/// let step = TimeStep::from_ymd(3, 2001, 7, 15);
/// assert_eq!(step.date, 20010715);
/// assert_eq!(step.year(), 2001);
/// assert_eq!(step.month(), 7);
/// assert_eq!(step.day(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeStep {
    /// Report step counter
    pub sequence: i32,
    /// Report date as YYYYMMDD
    pub date: i32,
}

impl TimeStep {
    /// Build from the separate calendar fields used in simulator headers
    pub fn from_ymd(sequence: i32, year: i32, month: i32, day: i32) -> Self {
        Self {
            sequence,
            date: year * 10000 + month * 100 + day,
        }
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.date / 10000
    }

    /// Calendar month, 1-12
    pub fn month(&self) -> i32 {
        (self.date / 100) % 100
    }

    /// Day of the month
    pub fn day(&self) -> i32 {
        self.date % 100
    }
}

impl std::fmt::Display for TimeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>6}  {:04}-{:02}-{:02}",
            self.sequence,
            self.year(),
            self.month(),
            self.day()
        )
    }
}

impl std::fmt::Display for RecordEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<16} {:<6} {:>10} {:>12}",
            self.name, self.kind, self.item_count, self.byte_offset
        )
    }
}

impl std::fmt::Display for DatedRecordEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:>9}", self.entry, self.date)
    }
}
