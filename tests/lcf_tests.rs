use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use lightframe::error::CodecError;
use lightframe::grid::Grid;
use lightframe::lcf::has_lcf_extension;
use lightframe::palettes::Code;

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/frames").join(name)
}

fn grid(rows: &[&[u8]]) -> Grid<Code> {
	Grid::from_rows(rows.iter().map(|r| r.iter().map(|&c| Code(c)).collect()).collect()).unwrap()
}

fn well_formed_grids() -> Vec<Grid<Code>> {
	vec![
		Grid::empty(),
		grid(&[&[0x07]]),
		grid(&[&[0x07, 0xFE, 0x10]]),
		grid(&[&[0x07], &[0xFE], &[0xFF]]),
		grid(&[&[0x00, 0xA7], &[0xFD, 0x01]]),
		Grid::filled(20, 20, Code(0xB7)),
	]
}

#[test]
fn lcf_parsing_from_file() {
	let frame = Grid::from_lcf_file(fixture("frame.lcf")).unwrap();

	assert_eq!(frame.rows(), 3);
	assert_eq!(frame.cols(), 4);
	assert_eq!(frame.get(0, 0), Some(&Code(0x07)));
	assert_eq!(frame.get(1, 3), Some(&Code(0x00)));
	assert_eq!(frame.get(2, 0), Some(&Code::WHITE));
	assert_eq!(frame.get(3, 0), None);

	let text = fs::read_to_string(fixture("frame.lcf")).unwrap();
	assert_eq!(frame.to_lcf_string(), text);
}

#[test]
fn lcf_empty_frame() {
	let frame = Grid::from_lcf_file(fixture("frame_empty.lcf")).unwrap();
	assert!(frame.is_empty());
	assert_eq!((frame.rows(), frame.cols()), (0, 0));
}

#[test]
fn lcf_serialization_layout() {
	let g = grid(&[&[0x07, 0xFE], &[0xA0, 0x00]]);
	assert_eq!(g.to_lcf_string(), "2\n2\n07 FE\nA0 00\n");

	let mut out: Vec<u8> = Vec::new();
	g.write_lcf(&mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "2\n2\n07 FE\nA0 00\n");

	assert_eq!(Grid::<Code>::empty().to_lcf_string(), "0\n0\n");
}

#[test]
fn lcf_round_trip() {
	for (i, g) in well_formed_grids().iter().enumerate() {
		let text = g.to_lcf_string();
		let parsed = Grid::from_lcf_string(text.as_str()).unwrap();
		assert_eq!(&parsed, g, "{i}: round trip changed the grid");
	}
}

#[test]
fn lcf_lenient_reading() {
	// lowercase codes and codes outside the catalog are accepted as-is
	let g = Grid::from_lcf_string("1\n2\nfe 01\n").unwrap();
	assert_eq!(g, grid(&[&[0xFE, 0x01]]));
	assert_eq!(g.to_lcf_string(), "1\n2\nFE 01\n");

	assert_eq!(Grid::from_lcf_string("1\n1\n07\n\n\n").unwrap(), grid(&[&[0x07]]));
	assert_eq!(Grid::from_lcf_string("1\r\n1\r\n07\r\n").unwrap(), grid(&[&[0x07]]));
}

#[test]
fn lcf_malformed_headers() {
	let headers = [
		("", 1),
		("2\nabc\n07 07\n", 2),
		("-1\n1\n07\n", 1),
		("+1\n1\n07\n", 1),
		("01\n1\n07\n", 1),
		("1\n 1\n07\n", 2),
		("1.0\n1\n07\n", 1),
		("1\n", 2),
		("0\n3\n", 2),
		("99999999999999999999999\n1\n", 1),
	];

	for (text, expected_line) in headers {
		match Grid::from_lcf_string(text) {
			Err(CodecError::MalformedHeader { line, .. }) => assert_eq!(line, expected_line, "{text:?}"),
			other => panic!("{text:?}: expected a malformed header, got {other:?}"),
		}
	}
}

#[test]
fn lcf_malformed_rows() {
	let rows = [
		("2\n2\n07 07\n07\n", 1),
		("1\n2\n07 G7\n", 0),
		("1\n2\n07  07\n", 0),
		("1\n2\n07 07 \n", 0),
		("1\n1\n007\n", 0),
		("2\n1\n07\n", 1),
		("1\n1\n07\n08\n", 1),
		("1\n1\n\n", 0),
	];

	for (text, expected_row) in rows {
		match Grid::from_lcf_string(text) {
			Err(CodecError::MalformedRow { row, .. }) => assert_eq!(row, expected_row, "{text:?}"),
			other => panic!("{text:?}: expected a malformed row, got {other:?}"),
		}
	}
}

#[test]
fn lcf_invalid_utf8() {
	let cases: [(&[u8], &str); 4] = [
		(b"\xFF\xFE\n1\n07\n", "header 1"),
		(b"1\n\xC3\x28\n07\n", "header 2"),
		(b"1\n1\n\xC3\x28\n", "row 0"),
		(b"1\n1\n07\n\xFF\n", "row 1"),
	];

	for (bytes, expected) in cases {
		let found = match Grid::from_lcf_reader(Cursor::new(bytes)) {
			Err(CodecError::MalformedHeader { line, .. }) => format!("header {line}"),
			Err(CodecError::MalformedRow { row, .. }) => format!("row {row}"),
			other => panic!("{bytes:?}: expected a malformed line, got {other:?}"),
		};
		assert_eq!(found, expected, "{bytes:?}");
	}

	// still fine when the bytes are valid
	let frame = Grid::from_lcf_reader(Cursor::new(&b"1\r\n2\r\n07 fe\r\n"[..])).unwrap();
	assert_eq!(frame.to_rows(), vec![vec![Code(0x07), Code::OFF]]);
}

#[test]
#[should_panic(expected = "MalformedHeader { line: 2, msg: \"column count \\\"x\\\" is not a non-negative integer\" }")]
fn lcf_parsing_broken_header() {
	Grid::from_lcf_file(fixture("frame_broken_header.lcf")).unwrap();
}

#[test]
#[should_panic(expected = "MalformedRow { row: 1, msg: \"expected 3 codes, found 2\" }")]
fn lcf_parsing_broken_row() {
	Grid::from_lcf_file(fixture("frame_broken_row.lcf")).unwrap();
}

#[test]
#[should_panic(expected = "MalformedRow { row: 0, msg: \"\\\"ZZ\\\" is not a 2-digit hexadecimal code\" }")]
fn lcf_parsing_broken_code() {
	Grid::from_lcf_file(fixture("frame_broken_code.lcf")).unwrap();
}

#[test]
fn lcf_missing_file() {
	let err = Grid::from_lcf_file(fixture("does_not_exist.lcf")).unwrap_err();
	assert!(matches!(err, CodecError::IoFailure(_)), "{err:?}");
}

#[test]
fn lcf_save_and_load() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("frame.lcf");

	for g in well_formed_grids() {
		g.save_lcf_file(&path).unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), g.to_lcf_string());
		assert_eq!(Grid::from_lcf_file(&path).unwrap(), g);
	}

	// only the target is left behind, no temporary files
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn lcf_save_into_missing_directory() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing").join("frame.lcf");

	let err = grid(&[&[0x07]]).save_lcf_file(&path).unwrap_err();
	assert!(matches!(err, CodecError::IoFailure(_)), "{err:?}");
	assert!(!path.exists());
}

#[test]
fn lcf_extension() {
	assert!(has_lcf_extension("frame.lcf"));
	assert!(has_lcf_extension("frames/Frame.LCF"));
	assert!(!has_lcf_extension("frame.txt"));
	assert!(!has_lcf_extension("frame"));
}
