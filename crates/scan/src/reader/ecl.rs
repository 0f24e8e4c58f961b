//! Reader for big-endian Fortran record files
//!
//! Every keyword is a 24 byte header record followed by zero or more data
//! blocks, all framed by leading and trailing byte counts:
//!
//! ```text
//! [16] NAME____ COUNT TYPE [16]      header
//! [n]  n bytes of items    [n]       data block, repeated
//! ```
//!
//! Writers split data into blocks of at most 1000 numeric or 105 character
//! items, but nothing here relies on that.

// crate modules
use crate::error::{Error, Result};
use crate::kind::EclType;
use crate::reader::ByteSource;

// standard library
use std::io::{Read, Seek};

// restools modules
use restools_utils::{f, StringExt};

// external crates
use byteorder::{BigEndian, ByteOrder};
use log::{trace, warn};

/// Byte count framing every header record
const HEADER_MARKER: i32 = 16;

/// Full header record length including both markers
const HEADER_LENGTH: u64 = 24;

/// Interpreted header record
#[derive(Debug, Clone)]
pub(crate) struct EclHeader {
    /// Keyword with padding removed
    pub name: String,
    /// Raw 4 character type tag
    pub tag: String,
    /// Symbolic type, possibly unknown
    pub kind: EclType,
    /// Declared number of items
    pub count: u64,
    /// Position of the first byte after the header
    pub payload_start: u64,
}

impl EclHeader {
    /// Bytes per item if the type can be sized at all
    ///
    /// Unknown tags in the `C0nn` style are character records of width `nn`.
    fn width(&self) -> Option<u64> {
        self.kind.width().or_else(|| custom_char_width(&self.tag))
    }
}

pub(crate) struct EclReader<R: Read + Seek> {
    source: ByteSource<R>,
}

impl<R: Read + Seek> EclReader<R> {
    pub(crate) fn new(inner: R) -> Result<Self> {
        Ok(Self {
            source: ByteSource::new(inner)?,
        })
    }

    /// Read the next header, `None` when the stream ends on a boundary
    pub(crate) fn next_header(&mut self) -> Result<Option<EclHeader>> {
        if self.source.remaining() == 0 {
            return Ok(None);
        }

        let start = self.source.position();
        self.source.require(HEADER_LENGTH)?;

        let mut buffer = [0u8; HEADER_LENGTH as usize];
        self.source.read_exact(&mut buffer)?;

        let head = BigEndian::read_i32(&buffer[0..4]);
        let tail = BigEndian::read_i32(&buffer[20..24]);
        if head != HEADER_MARKER || tail != HEADER_MARKER {
            return Err(Error::MalformedHeader {
                offset: start,
                reason: f!("header markers {head}/{tail}, expected {HEADER_MARKER}"),
            });
        }

        let name = String::from_utf8_lossy(&buffer[4..12]).trim_padding();
        let count = BigEndian::read_i32(&buffer[12..16]);
        let tag = String::from_utf8_lossy(&buffer[16..20]).into_owned();

        if count < 0 {
            return Err(Error::MalformedHeader {
                offset: start,
                reason: f!("negative item count {count} for \"{name}\""),
            });
        }

        let kind = EclType::from_tag(&tag);
        if kind == EclType::Unknown {
            warn!("Unknown type \"{tag}\" for keyword \"{name}\" at byte {start}");
        }

        Ok(Some(EclHeader {
            name,
            tag,
            kind,
            count: count as u64,
            payload_start: self.source.position(),
        }))
    }

    /// Move past the data blocks of a record, returns their total length
    pub(crate) fn skip_payload(&mut self, header: &EclHeader) -> Result<u64> {
        match header.width() {
            Some(0) => {}
            Some(width) => {
                let mut outstanding = header.count;
                while outstanding > 0 {
                    let n = self.skip_block()?;
                    outstanding = outstanding.saturating_sub(self.items_in_block(n, width)?);
                }
            }
            None => {
                // no way to count items, walk blocks until something that
                // looks like the next header
                while self.source.remaining() > 0 && !self.at_header()? {
                    self.skip_block()?;
                }
            }
        }
        Ok(self.source.position() - header.payload_start)
    }

    /// Read every item of an integer record into memory
    pub(crate) fn read_ints(&mut self, header: &EclHeader) -> Result<Vec<i32>> {
        // the header count is untrusted until the stream can hold it
        self.source.require(header.count * 4)?;
        let mut values = Vec::new();
        while (values.len() as u64) < header.count {
            let n = self.block_start()?;
            self.items_in_block(n, 4)?;
            let mut buffer = vec![0u8; n as usize];
            self.source.read_exact(&mut buffer)?;
            self.block_end(n)?;
            values.extend(buffer.chunks_exact(4).map(BigEndian::read_i32));
        }
        values.truncate(header.count as usize);
        Ok(values)
    }

    /// Skip one `[n] data [n]` block, returns `n`
    fn skip_block(&mut self) -> Result<u64> {
        let n = self.block_start()?;
        self.source.skip(n)?;
        self.block_end(n)?;
        Ok(n)
    }

    fn block_start(&mut self) -> Result<u64> {
        let start = self.source.position();
        let n = self.source.read_i32::<BigEndian>()?;
        if n < 0 {
            return Err(Error::MalformedHeader {
                offset: start,
                reason: f!("negative block length {n}"),
            });
        }
        Ok(n as u64)
    }

    fn block_end(&mut self, n: u64) -> Result<()> {
        let start = self.source.position();
        let tail = self.source.read_i32::<BigEndian>()?;
        if tail as i64 != n as i64 {
            return Err(Error::MalformedHeader {
                offset: start,
                reason: f!("block closed with {tail}, opened with {n}"),
            });
        }
        trace!("  block of {n} bytes ends at {}", self.source.position());
        Ok(())
    }

    /// Items held by a block of `n` bytes
    fn items_in_block(&self, n: u64, width: u64) -> Result<u64> {
        if n == 0 || n % width != 0 {
            return Err(Error::MalformedHeader {
                offset: self.source.position(),
                reason: f!("block of {n} bytes can not hold items of width {width}"),
            });
        }
        Ok(n / width)
    }

    /// Checks if the next 24 bytes have the shape of a header record
    fn at_header(&mut self) -> Result<bool> {
        Ok(self
            .source
            .peek(HEADER_LENGTH as usize)?
            .is_some_and(|bytes| is_header_shaped(&bytes)))
    }
}

/// Framing markers of 16 and a printable keyword
fn is_header_shaped(bytes: &[u8]) -> bool {
    bytes.len() == HEADER_LENGTH as usize
        && BigEndian::read_i32(&bytes[0..4]) == HEADER_MARKER
        && BigEndian::read_i32(&bytes[20..24]) == HEADER_MARKER
        && bytes[4..12].iter().all(|b| (0x20..0x7f).contains(b))
}

/// Width of `C0nn` style character types, e.g. `C042` is 42 bytes
fn custom_char_width(tag: &str) -> Option<u64> {
    tag.strip_prefix("C0")
        .filter(|digits| digits.len() == 2)
        .and_then(|digits| digits.parse::<u64>().ok())
        .filter(|width| *width > 0)
}
