//! Reader for binary ROFF files
//!
//! The file is a flat stream of null-terminated tokens with binary values
//! embedded between them. Values are grouped into tags:
//!
//! ```text
//! roff-bin
//! #comment#
//! tag dimensions
//!     int nX <4 bytes>
//!     array float data <i32 count> <count * 4 bytes>
//! endtag
//! tag eof
//! ```
//!
//! Each scalar and array becomes one record named `tag!key`.

// crate modules
use crate::error::{Error, Result};
use crate::kind::{RecordType, RoffType};
use crate::reader::ByteSource;
use crate::record::RecordEntry;

// standard library
use std::io::{Read, Seek};

// restools modules
use restools_utils::f;

// external crates
use byteorder::{BigEndian, LittleEndian};
use log::{debug, trace};

/// Every binary ROFF file starts with this
const MAGIC: &[u8] = b"roff-bin\0";

/// Integer written as `1` by the file author to fix the byte order
const BYTESWAP_TEST: &str = "filedata!byteswaptest";

/// Byte order of the numbers in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endian {
    Little,
    Big,
}

pub(crate) struct RoffReader<R: Read + Seek> {
    source: ByteSource<R>,
    endian: Endian,
    tag: Option<String>,
    finished: bool,
}

impl<R: Read + Seek> RoffReader<R> {
    /// Check the magic bytes and prepare to read the first tag
    pub(crate) fn new(inner: R) -> Result<Self> {
        let mut source = ByteSource::new(inner)?;

        match source.peek(MAGIC.len())? {
            Some(bytes) if bytes == MAGIC => source.skip(MAGIC.len() as u64)?,
            _ => {
                return Err(Error::MalformedHeader {
                    offset: 0,
                    reason: "missing roff-bin signature".to_string(),
                })
            }
        }

        Ok(Self {
            source,
            endian: Endian::Little,
            tag: None,
            finished: false,
        })
    }

    /// Byte order currently in use
    pub(crate) fn endian(&self) -> Endian {
        self.endian
    }

    /// Read up to and including the next scalar or array
    ///
    /// Returns `None` at the `eof` tag, or when the stream ends cleanly
    /// between tags.
    pub(crate) fn next_record(&mut self) -> Result<Option<RecordEntry>> {
        while !self.finished {
            match self.tag.clone() {
                None => self.open_tag()?,
                Some(tag) => {
                    let start = self.source.position();
                    let token = self.next_token()?;
                    match token.as_str() {
                        "endtag" => {
                            trace!("  closed tag \"{tag}\"");
                            self.tag = None;
                        }
                        "array" => return self.array(&tag).map(Some),
                        _ => return self.scalar(&tag, &token, start).map(Some),
                    }
                }
            }
        }
        Ok(None)
    }

    /// Expect `tag <name>` between groups
    fn open_tag(&mut self) -> Result<()> {
        if !self.skip_comments()? {
            self.finished = true;
            return Ok(());
        }

        let start = self.source.position();
        let token = self.next_token()?;
        if token != "tag" {
            return Err(Error::MalformedHeader {
                offset: start,
                reason: f!("expected \"tag\", found \"{token}\""),
            });
        }

        let name = self.next_token()?;
        if name == "eof" {
            debug!("Reached eof tag at byte {}", self.source.position());
            self.finished = true;
        } else {
            trace!("  opened tag \"{name}\"");
            self.tag = Some(name);
        }
        Ok(())
    }

    /// `<type> <key> <value>`
    fn scalar(&mut self, tag: &str, type_token: &str, start: u64) -> Result<RecordEntry> {
        let kind = self.lookup_type(type_token, start)?;
        let name = f!("{tag}!{}", self.next_token()?);
        let byte_offset = self.source.position();

        if name == BYTESWAP_TEST && kind == RoffType::Int {
            self.detect_endian()?;
        } else {
            self.skip_values(kind, 1)?;
        }

        Ok(RecordEntry {
            name,
            kind: RecordType::Roff(kind),
            item_count: 1,
            byte_offset,
            byte_length: self.source.position() - byte_offset,
        })
    }

    /// `array <type> <key> <count> <values>`
    fn array(&mut self, tag: &str) -> Result<RecordEntry> {
        let start = self.source.position();
        let type_token = self.next_token()?;
        let kind = self.lookup_type(&type_token, start)?;
        let name = f!("{tag}!{}", self.next_token()?);

        let count_start = self.source.position();
        let count = self.read_i32()?;
        if count < 0 {
            return Err(Error::MalformedHeader {
                offset: count_start,
                reason: f!("negative array length {count} for \"{name}\""),
            });
        }

        let byte_offset = self.source.position();
        self.skip_values(kind, count as u64)?;

        Ok(RecordEntry {
            name,
            kind: RecordType::Roff(kind),
            item_count: count as u64,
            byte_offset,
            byte_length: self.source.position() - byte_offset,
        })
    }

    fn lookup_type(&self, token: &str, offset: u64) -> Result<RoffType> {
        RoffType::from_tag(token).ok_or_else(|| Error::MalformedHeader {
            offset,
            reason: f!("unknown type \"{token}\""),
        })
    }

    fn skip_values(&mut self, kind: RoffType, count: u64) -> Result<()> {
        match kind.width() {
            Some(width) => self.source.skip(width * count),
            None => {
                for _ in 0..count {
                    self.source.read_token()?;
                }
                Ok(())
            }
        }
    }

    /// The test value is `1`, whichever order reads it so wins
    fn detect_endian(&mut self) -> Result<()> {
        let mut bytes = [0u8; 4];
        self.source.read_exact(&mut bytes)?;
        if i32::from_le_bytes(bytes) != 1 && i32::from_be_bytes(bytes) == 1 {
            debug!("Switching to big-endian values");
            self.endian = Endian::Big;
        }
        Ok(())
    }

    fn read_i32(&mut self) -> Result<i32> {
        match self.endian {
            Endian::Little => self.source.read_i32::<LittleEndian>(),
            Endian::Big => self.source.read_i32::<BigEndian>(),
        }
    }

    /// Next token that is not a `#...#` comment
    fn next_token(&mut self) -> Result<String> {
        loop {
            let token = self.source.read_token()?;
            if !token.starts_with('#') {
                return Ok(token);
            }
        }
    }

    /// Consume comments between tags, `false` if the stream ended
    fn skip_comments(&mut self) -> Result<bool> {
        loop {
            match self.source.peek(1)? {
                None => return Ok(false),
                Some(byte) if byte[0] == b'#' => {
                    self.source.read_token()?;
                }
                Some(_) => return Ok(true),
            }
        }
    }
}
