//! Stamp indexed records with their report step dates

// crate modules
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::record::{DatedRecordEntry, RecordEntry, TimeStep};
use crate::scan::scan_keywords;
use crate::timesteps::{extract_timesteps, REPORT_STEP_MARKER};

// standard library
use std::io::{Read, Seek};

// external crates
use log::{debug, warn};

/// Attach a date to every record of an index
///
/// The n-th [REPORT_STEP_MARKER] in `index` belongs to the n-th entry of
/// `timesteps`. Every record from a marker up to the next one gets that
/// step's date, and anything before the first marker gets `0`.
///
/// Matching is purely by position, so the two lists must come from the same
/// file. More markers than timesteps is an [Error::InconsistentTimeSeries].
///
/// ```rust
/// # use restools_scan::{merge_dates, EclType, RecordEntry, RecordType, TimeStep};
/// let entry = |name: &str, byte_offset| RecordEntry {
///     name: name.into(),
///     kind: RecordType::Ecl(EclType::Inte),
///     item_count: 1,
///     byte_offset,
///     byte_length: 12,
/// };
/// let index = [entry("INTEHEAD", 24), entry("SEQNUM", 60), entry("PRESSURE", 96)];
/// let timesteps = [TimeStep::from_ymd(1, 2000, 1, 1)];
///
/// let dated = merge_dates(&index, &timesteps).unwrap();
/// let dates: Vec<i32> = dated.iter().map(|d| d.date).collect();
/// assert_eq!(dates, [0, 20000101, 20000101]);
/// ```
pub fn merge_dates(
    index: &[RecordEntry],
    timesteps: &[TimeStep],
) -> Result<Vec<DatedRecordEntry>> {
    let mut markers = 0;
    let mut date = 0;

    let dated = index
        .iter()
        .map(|entry| {
            if entry.name == REPORT_STEP_MARKER {
                let step = timesteps
                    .get(markers)
                    .ok_or(Error::InconsistentTimeSeries {
                        markers: markers + 1,
                        timesteps: timesteps.len(),
                    })?;
                markers += 1;
                date = step.date;
            }
            Ok(DatedRecordEntry {
                entry: entry.clone(),
                date,
            })
        })
        .collect::<Result<Vec<DatedRecordEntry>>>()?;

    if markers < timesteps.len() {
        warn!(
            "Only {markers} of {} timesteps matched a {REPORT_STEP_MARKER} record",
            timesteps.len()
        );
    }

    Ok(dated)
}

/// Index a restart file and date every record in one call
///
/// Runs [scan_keywords] and [extract_timesteps] over the same source, using
/// `max_keys` as the bound for both, then [merge_dates] on the results.
pub fn scan_keywords_with_dates<R: Read + Seek>(
    source: &mut R,
    max_keys: usize,
) -> Result<Vec<DatedRecordEntry>> {
    let index = scan_keywords(source, Dialect::Ecl, max_keys)?;
    let timesteps = extract_timesteps(source, max_keys)?;
    debug!(
        "Merging {} records with {} timesteps",
        index.len(),
        timesteps.len()
    );
    merge_dates(&index, &timesteps)
}
