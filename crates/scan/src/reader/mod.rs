//! Low level readers for both container dialects
//!
//! Every byte read by the crate goes through [ByteSource], which wraps the
//! caller's seekable stream in a buffer and keeps its own cursor. Knowing the
//! stream length up front means a header that promises more data than the
//! file holds is caught before any read is attempted, and reported as
//! [Error::TruncatedFile] with the exact position.
//!
//! The dialect readers build on this:
//!
//! - [ecl] walks big-endian Fortran records, header then data blocks
//! - [roff] walks null-terminated tokens inside `tag ... endtag` groups
//!
//! Neither holds on to the stream after a scan returns.

// reader modules
pub(crate) mod ecl;
pub(crate) mod roff;

// crate modules
use crate::error::{Error, Result};

// standard library
use std::io::{BufReader, Read, Seek, SeekFrom};

// external crates
use byteorder::{ByteOrder, ReadBytesExt};

/// Buffered, position-tracking view over a seekable stream
#[derive(Debug)]
pub(crate) struct ByteSource<R: Read + Seek> {
    reader: BufReader<R>,
    position: u64,
    length: u64,
}

impl<R: Read + Seek> ByteSource<R> {
    /// Measure the stream and rewind it to byte 0
    pub(crate) fn new(mut inner: R) -> Result<Self> {
        let length = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self {
            reader: BufReader::new(inner),
            position: 0,
            length,
        })
    }

    /// Current cursor position from the start of the stream
    pub(crate) fn position(&self) -> u64 {
        self.position
    }

    /// Bytes left between the cursor and the end of the stream
    pub(crate) fn remaining(&self) -> u64 {
        self.length - self.position
    }

    /// Fail early if fewer than `needed` bytes are left
    pub(crate) fn require(&self, needed: u64) -> Result<()> {
        if needed > self.remaining() {
            return Err(Error::TruncatedFile {
                offset: self.position,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    pub(crate) fn read_exact(&mut self, buffer: &mut [u8]) -> Result<()> {
        self.require(buffer.len() as u64)?;
        self.reader.read_exact(buffer)?;
        self.position += buffer.len() as u64;
        Ok(())
    }

    pub(crate) fn read_i32<B: ByteOrder>(&mut self) -> Result<i32> {
        self.require(4)?;
        let value = self.reader.read_i32::<B>()?;
        self.position += 4;
        Ok(value)
    }

    /// Move forward without reading anything into memory
    pub(crate) fn skip(&mut self, n: u64) -> Result<()> {
        self.require(n)?;
        let step = i64::try_from(n).map_err(|_| Error::TruncatedFile {
            offset: self.position,
            needed: n,
            available: self.remaining(),
        })?;
        self.reader.seek_relative(step)?;
        self.position += n;
        Ok(())
    }

    /// Look at the next `n` bytes without consuming them
    ///
    /// Returns `None` if the stream ends first.
    pub(crate) fn peek(&mut self, n: usize) -> Result<Option<Vec<u8>>> {
        if (n as u64) > self.remaining() {
            return Ok(None);
        }
        let mut buffer = vec![0u8; n];
        self.reader.read_exact(&mut buffer)?;
        self.reader.seek_relative(-(n as i64))?;
        Ok(Some(buffer))
    }

    /// Read a null-terminated token, the terminator is consumed
    pub(crate) fn read_token(&mut self) -> Result<String> {
        let start = self.position;
        let mut bytes = Vec::new();
        loop {
            if self.remaining() == 0 {
                return Err(Error::TruncatedFile {
                    offset: start,
                    needed: bytes.len() as u64 + 1,
                    available: bytes.len() as u64,
                });
            }
            let byte = self.reader.read_u8()?;
            self.position += 1;
            if byte == 0 {
                break;
            }
            bytes.push(byte);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
