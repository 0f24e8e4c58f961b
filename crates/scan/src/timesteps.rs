//! Report step dates from restart files

// crate modules
use crate::error::{Error, Result};
use crate::kind::EclType;
use crate::reader::ecl::EclReader;
use crate::record::TimeStep;

// standard library
use std::io::{Read, Seek};

// restools modules
use restools_utils::f;

// external crates
use log::{debug, trace, warn};

/// Keyword opening every report step
pub const REPORT_STEP_MARKER: &str = "SEQNUM";

/// Integer header holding the calendar date of a report step
pub const DATE_HEADER: &str = "INTEHEAD";

// zero-based positions of the date fields in INTEHEAD
const DAY: usize = 64;
const MONTH: usize = 65;
const YEAR: usize = 66;

/// Collect the sequence number and date of every report step
///
/// Only big-endian Fortran record files carry report steps. Each
/// [REPORT_STEP_MARKER] gives the sequence number and the next
/// [DATE_HEADER] gives the date. Everything else is skipped, so this is
/// a separate pass from [scan_keywords](crate::scan_keywords).
///
/// Fails with [Error::CapacityExceeded] beyond `max_dates` steps, and with
/// [Error::MalformedHeader] for a date header too short to hold a date.
pub fn extract_timesteps<R: Read + Seek>(
    source: &mut R,
    max_dates: usize,
) -> Result<Vec<TimeStep>> {
    let mut reader = EclReader::new(source)?;
    let mut timesteps = Vec::new();
    let mut pending: Option<i32> = None;

    while let Some(header) = reader.next_header()? {
        if header.name == REPORT_STEP_MARKER && header.kind == EclType::Inte && header.count > 0 {
            let values = reader.read_ints(&header)?;
            if let Some(previous) = pending.replace(values[0]) {
                warn!("Report step {previous} has no {DATE_HEADER}, ignored");
            }
        } else if let Some(sequence) =
            pending.filter(|_| header.name == DATE_HEADER && header.kind == EclType::Inte)
        {
            let values = reader.read_ints(&header)?;
            if values.len() <= YEAR {
                return Err(Error::MalformedHeader {
                    offset: header.payload_start,
                    reason: f!(
                        "{DATE_HEADER} has {} items, a date needs at least {}",
                        values.len(),
                        YEAR + 1
                    ),
                });
            }

            if timesteps.len() == max_dates {
                return Err(Error::CapacityExceeded {
                    limit: max_dates,
                    reason: f!("more than {max_dates} report steps"),
                });
            }

            pending = None;
            let step = TimeStep::from_ymd(sequence, values[YEAR], values[MONTH], values[DAY]);
            trace!("  step {step}");
            timesteps.push(step);
        } else {
            reader.skip_payload(&header)?;
        }
    }

    debug!("Found {} report steps", timesteps.len());
    Ok(timesteps)
}
