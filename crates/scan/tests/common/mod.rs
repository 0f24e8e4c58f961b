//! Builders for small synthetic binaries used across the integration tests
#![allow(dead_code)]

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use restools_utils::StringExt;
use std::io::Cursor;

/// Items per data block as written by the simulators
const NUMERIC_BLOCK: usize = 1000;
const CHAR_BLOCK: usize = 105;

/// Big-endian Fortran record file builder
#[derive(Default)]
pub struct EclWriter {
    bytes: Vec<u8>,
}

impl EclWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn header(mut self, name: &str, count: i32, tag: &str) -> Self {
        self.bytes.write_i32::<BigEndian>(16).unwrap();
        self.bytes.extend(name.to_fixed_width(8).as_bytes());
        self.bytes.write_i32::<BigEndian>(count).unwrap();
        self.bytes.extend(tag.as_bytes());
        self.bytes.write_i32::<BigEndian>(16).unwrap();
        self
    }

    pub fn block(mut self, data: &[u8]) -> Self {
        self.bytes.write_i32::<BigEndian>(data.len() as i32).unwrap();
        self.bytes.extend(data);
        self.bytes.write_i32::<BigEndian>(data.len() as i32).unwrap();
        self
    }

    pub fn raw(mut self, data: &[u8]) -> Self {
        self.bytes.extend(data);
        self
    }

    pub fn ints(self, name: &str, values: &[i32]) -> Self {
        let mut writer = self.header(name, values.len() as i32, "INTE");
        for chunk in values.chunks(NUMERIC_BLOCK) {
            let mut data = vec![0u8; chunk.len() * 4];
            BigEndian::write_i32_into(chunk, &mut data);
            writer = writer.block(&data);
        }
        writer
    }

    pub fn reals(self, name: &str, values: &[f32]) -> Self {
        let mut writer = self.header(name, values.len() as i32, "REAL");
        for chunk in values.chunks(NUMERIC_BLOCK) {
            let mut data = vec![0u8; chunk.len() * 4];
            BigEndian::write_f32_into(chunk, &mut data);
            writer = writer.block(&data);
        }
        writer
    }

    pub fn doubles(self, name: &str, values: &[f64]) -> Self {
        let mut writer = self.header(name, values.len() as i32, "DOUB");
        for chunk in values.chunks(NUMERIC_BLOCK) {
            let mut data = vec![0u8; chunk.len() * 8];
            BigEndian::write_f64_into(chunk, &mut data);
            writer = writer.block(&data);
        }
        writer
    }

    pub fn chars(self, name: &str, values: &[&str]) -> Self {
        let mut writer = self.header(name, values.len() as i32, "CHAR");
        for chunk in values.chunks(CHAR_BLOCK) {
            let data: String = chunk.iter().map(|v| v.to_fixed_width(8)).collect();
            writer = writer.block(data.as_bytes());
        }
        writer
    }

    pub fn message(self, name: &str) -> Self {
        self.header(name, 0, "MESS")
    }

    /// `SEQNUM` marker followed by its dated `INTEHEAD`
    pub fn report_step(self, sequence: i32, year: i32, month: i32, day: i32) -> Self {
        self.ints("SEQNUM", &[sequence])
            .ints("INTEHEAD", &intehead(year, month, day))
    }

    pub fn finish(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.bytes)
    }
}

/// Integer header of the usual 95 items with the date filled in
pub fn intehead(year: i32, month: i32, day: i32) -> Vec<i32> {
    let mut values = vec![0; 95];
    values[64] = day;
    values[65] = month;
    values[66] = year;
    values
}

/// Binary ROFF builder, little-endian unless created with `big_endian`
pub struct RoffWriter {
    bytes: Vec<u8>,
    big_endian: bool,
}

impl RoffWriter {
    pub fn new() -> Self {
        Self::with_order(false)
    }

    pub fn big_endian() -> Self {
        Self::with_order(true)
    }

    fn with_order(big_endian: bool) -> Self {
        let mut writer = Self {
            bytes: Vec::new(),
            big_endian,
        };
        writer.token("roff-bin");
        writer.token("#ROFF file#");
        writer.token("#Creator: restools test suite#");
        writer
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn token(&mut self, text: &str) {
        self.bytes.extend(text.as_bytes());
        self.bytes.push(0);
    }

    fn int_bytes(&mut self, value: i32) {
        if self.big_endian {
            self.bytes.write_i32::<BigEndian>(value).unwrap();
        } else {
            self.bytes.write_i32::<LittleEndian>(value).unwrap();
        }
    }

    fn float_bytes(&mut self, value: f32) {
        if self.big_endian {
            self.bytes.write_f32::<BigEndian>(value).unwrap();
        } else {
            self.bytes.write_f32::<LittleEndian>(value).unwrap();
        }
    }

    /// `filedata` tag carrying the byte order test value
    pub fn filedata(mut self) -> Self {
        self = self.tag("filedata").int("byteswaptest", 1);
        self.token("char");
        self.token("filetype");
        self.token("grid");
        self.endtag()
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.token(&format!("#{text}#"));
        self
    }

    pub fn tag(mut self, name: &str) -> Self {
        self.token("tag");
        self.token(name);
        self
    }

    pub fn endtag(mut self) -> Self {
        self.token("endtag");
        self
    }

    pub fn int(mut self, key: &str, value: i32) -> Self {
        self.token("int");
        self.token(key);
        self.int_bytes(value);
        self
    }

    pub fn float(mut self, key: &str, value: f32) -> Self {
        self.token("float");
        self.token(key);
        self.float_bytes(value);
        self
    }

    pub fn bool(mut self, key: &str, value: bool) -> Self {
        self.token("bool");
        self.token(key);
        self.bytes.push(value as u8);
        self
    }

    pub fn scalar_char(mut self, key: &str, value: &str) -> Self {
        self.token("char");
        self.token(key);
        self.token(value);
        self
    }

    pub fn array_float(mut self, key: &str, values: &[f32]) -> Self {
        self.token("array");
        self.token("float");
        self.token(key);
        self.int_bytes(values.len() as i32);
        for value in values {
            self.float_bytes(*value);
        }
        self
    }

    pub fn array_byte(mut self, key: &str, values: &[u8]) -> Self {
        self.token("array");
        self.token("byte");
        self.token(key);
        self.int_bytes(values.len() as i32);
        self.bytes.extend(values);
        self
    }

    pub fn array_char(mut self, key: &str, values: &[&str]) -> Self {
        self.token("array");
        self.token("char");
        self.token(key);
        self.int_bytes(values.len() as i32);
        for value in values {
            self.token(value);
        }
        self
    }

    /// Anything at all in place of a type token
    pub fn raw_token(mut self, text: &str) -> Self {
        self.token(text);
        self
    }

    pub fn eof(self) -> Self {
        self.tag("eof").bool("eof", true).endtag()
    }

    pub fn finish(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.bytes)
    }
}
