//! Integration tests for indexing binary ROFF files

mod common;

use common::RoffWriter;
use restools_scan::{scan_keywords, Dialect, Error, RecordType, RoffType, DEFAULT_MAX_KEYS};
use rstest::{fixture, rstest};
use std::io::Cursor;

/// Grid property file with the usual tags
fn property_file(writer: RoffWriter) -> RoffWriter {
    writer
        .filedata()
        .tag("version")
        .int("major", 2)
        .int("minor", 0)
        .endtag()
        .tag("dimensions")
        .int("nX", 4)
        .int("nY", 3)
        .int("nZ", 2)
        .endtag()
        .comment("property values follow")
        .tag("parameter")
        .scalar_char("name", "PORO")
        .array_float("data", &[0.2; 24])
        .array_char("codeNames", &["sand", "shale"])
        .array_byte("active", &[1; 24])
        .endtag()
        .eof()
}

#[fixture]
fn little_endian() -> RoffWriter {
    property_file(RoffWriter::new())
}

#[fixture]
fn big_endian() -> RoffWriter {
    property_file(RoffWriter::big_endian())
}

#[rstest]
fn records_named_by_tag_and_key(little_endian: RoffWriter) {
    let mut source = little_endian.finish();
    let index = scan_keywords(&mut source, Dialect::Roff, DEFAULT_MAX_KEYS).unwrap();

    let names: Vec<&str> = index.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "filedata!byteswaptest",
            "filedata!filetype",
            "version!major",
            "version!minor",
            "dimensions!nX",
            "dimensions!nY",
            "dimensions!nZ",
            "parameter!name",
            "parameter!data",
            "parameter!codeNames",
            "parameter!active",
        ]
    );
}

#[rstest]
#[case::little(property_file(RoffWriter::new()))]
#[case::big(property_file(RoffWriter::big_endian()))]
fn both_byte_orders_give_the_same_index(#[case] writer: RoffWriter) {
    let mut source = writer.finish();
    let index = scan_keywords(&mut source, Dialect::Roff, DEFAULT_MAX_KEYS).unwrap();

    let data = &index[8];
    assert_eq!(data.kind, RecordType::Roff(RoffType::Float));
    assert_eq!(data.item_count, 24);
    assert_eq!(data.byte_length, 96);

    let codes = &index[9];
    assert_eq!(codes.kind, RecordType::Roff(RoffType::Char));
    assert_eq!(codes.item_count, 2);
    assert_eq!(codes.byte_length, 5 + 6);

    let active = &index[10];
    assert_eq!(active.kind.tag(), "byte");
    assert_eq!(active.byte_length, 24);
}

#[rstest]
fn offsets_point_at_values(little_endian: RoffWriter) {
    let mut source = little_endian.finish();
    let bytes = source.get_ref().clone();
    let index = scan_keywords(&mut source, Dialect::Roff, DEFAULT_MAX_KEYS).unwrap();

    let nx = &index[4];
    let start = nx.byte_offset as usize;
    assert_eq!(i32::from_le_bytes(bytes[start..start + 4].try_into().unwrap()), 4);

    let name = &index[7];
    let start = name.byte_offset as usize;
    assert_eq!(&bytes[start..start + 5], b"PORO\0");

    assert!(index
        .windows(2)
        .all(|pair| pair[0].end() <= pair[1].byte_offset));
}

#[rstest]
fn big_endian_counts(big_endian: RoffWriter) {
    let mut source = big_endian.finish();
    let bytes = source.get_ref().clone();
    let index = scan_keywords(&mut source, Dialect::Roff, DEFAULT_MAX_KEYS).unwrap();

    let nz = &index[6];
    let start = nz.byte_offset as usize;
    assert_eq!(i32::from_be_bytes(bytes[start..start + 4].try_into().unwrap()), 2);

    // the count sits right before the values
    let data = &index[8];
    let start = data.byte_offset as usize - 4;
    assert_eq!(i32::from_be_bytes(bytes[start..start + 4].try_into().unwrap()), 24);
}

#[rstest]
fn scan_stops_at_eof_tag(little_endian: RoffWriter) {
    // anything after the eof tag is never looked at
    let mut source = little_endian.raw_token("garbage").finish();
    let index = scan_keywords(&mut source, Dialect::Roff, DEFAULT_MAX_KEYS).unwrap();
    assert_eq!(index.len(), 11);
}

#[test]
fn clean_end_without_eof_tag() {
    let mut source = RoffWriter::new()
        .tag("dimensions")
        .int("nX", 1)
        .endtag()
        .finish();
    let index = scan_keywords(&mut source, Dialect::Roff, DEFAULT_MAX_KEYS).unwrap();
    assert_eq!(index.len(), 1);
}

#[test]
fn end_inside_tag_is_truncation() {
    let mut source = RoffWriter::new().tag("dimensions").int("nX", 1).finish();
    assert!(matches!(
        scan_keywords(&mut source, Dialect::Roff, DEFAULT_MAX_KEYS),
        Err(Error::TruncatedFile { .. })
    ));
}

#[test]
fn array_past_end_is_truncation() {
    let mut bytes = RoffWriter::new()
        .tag("parameter")
        .raw_token("array")
        .raw_token("float")
        .raw_token("data")
        .finish()
        .into_inner();
    bytes.extend(100i32.to_le_bytes());
    bytes.extend([0; 12]);
    let mut source = Cursor::new(bytes);

    match scan_keywords(&mut source, Dialect::Roff, DEFAULT_MAX_KEYS) {
        Err(Error::TruncatedFile {
            needed, available, ..
        }) => {
            assert_eq!(needed, 400);
            assert_eq!(available, 12);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[rstest]
#[case::unknown_scalar_type(RoffWriter::new().tag("grid").raw_token("short").raw_token("nX"))]
#[case::unknown_array_type(RoffWriter::new().tag("grid").raw_token("array").raw_token("int64"))]
#[case::value_outside_tag(RoffWriter::new().int("nX", 1))]
fn malformed_files(#[case] writer: RoffWriter) {
    let mut source = writer.finish();
    assert!(matches!(
        scan_keywords(&mut source, Dialect::Roff, DEFAULT_MAX_KEYS),
        Err(Error::MalformedHeader { .. })
    ));
}

#[test]
fn missing_signature() {
    let mut source = Cursor::new(b"roff-asc\0tag\0eof\0".to_vec());
    assert!(matches!(
        scan_keywords(&mut source, Dialect::Roff, DEFAULT_MAX_KEYS),
        Err(Error::MalformedHeader { offset: 0, .. })
    ));
}

#[rstest]
fn capacity_exceeded(little_endian: RoffWriter) {
    let mut source = little_endian.finish();
    assert!(matches!(
        scan_keywords(&mut source, Dialect::Roff, 10),
        Err(Error::CapacityExceeded { limit: 10, .. })
    ));
}
