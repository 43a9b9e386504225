use std::io;

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
	#[error("invalid color \"{input}\": {msg}")]
	InvalidColorFormat { input: String, msg: String },
	#[error("\"{0}\" is not a 2-digit hexadecimal palette code")]
	InvalidCode(String),
	#[error("code {0} is not in the device palette")]
	UnknownCode(crate::palettes::Code),
	#[error("malformed header in line {line}: {msg}")]
	MalformedHeader { line: usize, msg: String },
	#[error("malformed row {row}: {msg}")]
	MalformedRow { row: usize, msg: String },
	#[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
	RaggedGrid { row: usize, expected: usize, found: usize },
	#[error("io error: {0}")]
	IoFailure(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
	pub(crate) fn invalid_color<S: Into<String>, M: Into<String>>(input: S, msg: M) -> Self {
		CodecError::InvalidColorFormat { input: input.into(), msg: msg.into() }
	}
}
