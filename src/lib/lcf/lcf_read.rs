use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{CodecError, Result};
use crate::grid::Grid;
use crate::palettes::Code;

// decimal, no sign, no leading zeros
static COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(0|[1-9][0-9]*)$").unwrap());

/// Reads one line without its `\n` or `\r\n`, `None` at the end of the input.
/// A line that isn't UTF-8 is reported through `malformed`, not as an I/O error.
fn read_line<R: BufRead, F: FnOnce(String) -> CodecError>(reader: &mut R, malformed: F) -> Result<Option<String>> {
	let mut buf: Vec<u8> = Vec::new();
	if reader.read_until(b'\n', &mut buf)? == 0 {
		return Ok(None);
	}

	if buf.last() == Some(&b'\n') {
		buf.pop();
		if buf.last() == Some(&b'\r') {
			buf.pop();
		}
	}

	String::from_utf8(buf)
		.map(Some)
		.map_err(|e| malformed(format!("not valid UTF-8 ({e})")))
}

fn read_count<R: BufRead>(reader: &mut R, line: usize, what: &str) -> Result<usize> {
	let malformed = |msg: String| CodecError::MalformedHeader { line, msg };

	let text = match read_line(reader, malformed)? {
		None => {
			return Err(malformed(format!("missing {what}")));
		}
		Some(text) => text
	};

	if !COUNT.is_match(&text) {
		return Err(malformed(format!("{what} \"{text}\" is not a non-negative integer")));
	}

	text.parse::<usize>()
		.map_err(|_| malformed(format!("{what} {text} is too large")))
}

fn parse_row(line: &str, row: usize, col_count: usize) -> Result<Vec<Code>> {
	let tokens = if line.is_empty() { vec![] } else { line.split(' ').collect::<Vec<&str>>() };

	if tokens.len() != col_count {
		return Err(CodecError::MalformedRow {
			row,
			msg: format!("expected {col_count} codes, found {}", tokens.len()),
		});
	}

	tokens.iter().map(|t| {
		t.parse::<Code>().map_err(|_| CodecError::MalformedRow {
			row,
			msg: format!("\"{t}\" is not a 2-digit hexadecimal code"),
		})
	}).collect::<Result<Vec<Code>>>()
}

impl Grid<Code> {
	fn from_lcf_internal<R: BufRead>(mut reader: R) -> Result<Grid<Code>> {
		let row_count = read_count(&mut reader, 1, "row count")?;
		let col_count = read_count(&mut reader, 2, "column count")?;
		if row_count == 0 && col_count != 0 {
			return Err(CodecError::MalformedHeader {
				line: 2,
				msg: format!("a grid without rows has 0 columns, not {col_count}"),
			});
		}

		let mut rows: Vec<Vec<Code>> = Vec::new();
		for row in 0..row_count {
			let malformed = |msg: String| CodecError::MalformedRow { row, msg };

			let line = match read_line(&mut reader, malformed)? {
				None => {
					return Err(malformed("missing row".to_string()));
				}
				Some(line) => line
			};

			rows.push(parse_row(&line, row, col_count)?);
		}

		// trailing blank lines are harmless, trailing data is not
		let trailing = |msg: String| CodecError::MalformedRow { row: row_count, msg };
		while let Some(line) = read_line(&mut reader, trailing)? {
			if !line.trim().is_empty() {
				return Err(trailing("unexpected data after the last row".to_string()));
			}
		}

		Grid::from_rows(rows)
	}

	pub fn from_lcf_reader<R: BufRead>(reader: R) -> Result<Grid<Code>> {
		Self::from_lcf_internal(reader)
	}

	pub fn from_lcf_file<P: AsRef<Path>>(path: P) -> Result<Grid<Code>> {
		let f = File::open(&path)?;
		let reader = BufReader::new(f);
		let grid = Self::from_lcf_internal(reader)?;

		debug!(path = %path.as_ref().display(), rows = grid.rows(), cols = grid.cols(), "loaded frame");
		Ok(grid)
	}

	pub fn from_lcf_string<S: Into<String>>(s: S) -> Result<Grid<Code>> {
		let s = s.into();
		let reader = BufReader::new(s.as_bytes());
		Self::from_lcf_internal(reader)
	}
}
