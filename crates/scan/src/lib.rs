//! Keyword and report step indexing for reservoir simulation binaries
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod dialect;
mod error;
mod kind;
mod merge;
mod reader;
mod record;
mod scan;
mod table;
mod timesteps;

// Inline anything important for a nice public API
#[doc(inline)]
pub use dialect::Dialect;

#[doc(inline)]
pub use kind::{EclType, RecordType, RoffType};

#[doc(inline)]
pub use record::{DatedRecordEntry, RecordEntry, TimeStep};

#[doc(inline)]
pub use scan::{scan_keywords, DEFAULT_MAX_DATES, DEFAULT_MAX_KEYS, MAX_KEYS_CEILING};

#[doc(inline)]
pub use timesteps::{extract_timesteps, DATE_HEADER, REPORT_STEP_MARKER};

#[doc(inline)]
pub use merge::{merge_dates, scan_keywords_with_dates};

#[doc(inline)]
pub use table::{write_csv, write_csv_file, Tabular};

#[doc(inline)]
pub use error::{Error, Result};
