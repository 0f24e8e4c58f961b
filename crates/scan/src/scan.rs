//! Keyword index of a whole file

// crate modules
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::kind::RecordType;
use crate::reader::ecl::EclReader;
use crate::reader::roff::RoffReader;
use crate::record::RecordEntry;

// standard library
use std::io::{Read, Seek};

// restools modules
use restools_utils::f;

// external crates
use log::{debug, trace};

/// Index capacity used when the caller has no better estimate
pub const DEFAULT_MAX_KEYS: usize = 100_000;

/// Timestep capacity used when the caller has no better estimate
pub const DEFAULT_MAX_DATES: usize = 1_000;

/// Largest `max_keys` accepted by [scan_keywords]
///
/// Derived from a one million byte budget at nine bytes per index slot.
pub const MAX_KEYS_CEILING: usize = 1_000_000 / 9;

/// Index every record in `source` without reading any payload
///
/// Entries come back in file order with strictly increasing offsets. Fails
/// with [Error::CapacityExceeded] when the file holds more than `max_keys`
/// records, so raise the bound and try again. A `max_keys` above
/// [MAX_KEYS_CEILING] is rejected before anything is read.
///
/// ```rust
/// # use restools_scan::{scan_keywords, Dialect, DEFAULT_MAX_KEYS};
/// # use std::io::Cursor;
/// // header of an empty LOGIHEAD record
/// let mut bytes = Vec::new();
/// bytes.extend(16i32.to_be_bytes());
/// bytes.extend(b"LOGIHEAD");
/// bytes.extend(0i32.to_be_bytes());
/// bytes.extend(b"LOGI");
/// bytes.extend(16i32.to_be_bytes());
///
/// let index = scan_keywords(&mut Cursor::new(bytes), Dialect::Ecl, DEFAULT_MAX_KEYS).unwrap();
/// assert_eq!(index[0].name, "LOGIHEAD");
/// assert_eq!(index[0].byte_offset, 24);
/// ```
pub fn scan_keywords<R: Read + Seek>(
    source: &mut R,
    dialect: Dialect,
    max_keys: usize,
) -> Result<Vec<RecordEntry>> {
    check_ceiling(max_keys)?;
    debug!("Scanning {dialect} records, capacity {max_keys}");

    let index = match dialect {
        Dialect::Ecl => scan_ecl(source, max_keys)?,
        Dialect::Roff => scan_roff(source, max_keys)?,
    };

    debug!("Indexed {} records", index.len());
    Ok(index)
}

fn scan_ecl<R: Read + Seek>(source: &mut R, max_keys: usize) -> Result<Vec<RecordEntry>> {
    let mut reader = EclReader::new(source)?;
    let mut index = Vec::new();

    while let Some(header) = reader.next_header()? {
        let byte_length = reader.skip_payload(&header)?;
        push_entry(
            &mut index,
            RecordEntry {
                name: header.name,
                kind: RecordType::Ecl(header.kind),
                item_count: header.count,
                byte_offset: header.payload_start,
                byte_length,
            },
            max_keys,
        )?;
    }

    Ok(index)
}

fn scan_roff<R: Read + Seek>(source: &mut R, max_keys: usize) -> Result<Vec<RecordEntry>> {
    let mut reader = RoffReader::new(source)?;
    let mut index = Vec::new();

    while let Some(entry) = reader.next_record()? {
        push_entry(&mut index, entry, max_keys)?;
    }

    debug!("Values were {:?} endian", reader.endian());
    Ok(index)
}

/// Append with the capacity check, nothing is ever dropped silently
fn push_entry(index: &mut Vec<RecordEntry>, entry: RecordEntry, max_keys: usize) -> Result<()> {
    if index.len() == max_keys {
        return Err(Error::CapacityExceeded {
            limit: max_keys,
            reason: f!(
                "more than {max_keys} records, \"{}\" at byte {} did not fit",
                entry.name,
                entry.byte_offset
            ),
        });
    }
    trace!("  {entry}");
    index.push(entry);
    Ok(())
}

pub(crate) fn check_ceiling(max_keys: usize) -> Result<()> {
    if max_keys > MAX_KEYS_CEILING {
        return Err(Error::CapacityExceeded {
            limit: MAX_KEYS_CEILING,
            reason: f!("max_keys of {max_keys} is above the hard ceiling"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ceiling_checked_before_reading() {
        // not even a valid stream, the bound fails first
        let mut source = Cursor::new(vec![0xff; 3]);
        match scan_keywords(&mut source, Dialect::Ecl, MAX_KEYS_CEILING + 1) {
            Err(Error::CapacityExceeded { limit, .. }) => assert_eq!(limit, MAX_KEYS_CEILING),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn ceiling_value() {
        assert_eq!(MAX_KEYS_CEILING, 111_111);
        assert!(check_ceiling(MAX_KEYS_CEILING).is_ok());
    }

    #[test]
    fn empty_stream_is_empty_index() {
        let mut source = Cursor::new(Vec::new());
        let index = scan_keywords(&mut source, Dialect::Ecl, 10).unwrap();
        assert!(index.is_empty());
    }
}
