use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CodecError, Result};
use crate::grid::Grid;
use crate::palettes::{quantize, Code, Color};

/// One editor position: a color as painted, or a code that was already resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
	Raw(Color),
	Coded(Code),
}

impl Cell {
	/// The cell's palette code. A pre-resolved code outside the catalog and the
	/// reserved codes is rejected with [`CodecError::UnknownCode`].
	pub fn code(&self) -> Result<Code> {
		match self {
			Cell::Raw(color) => Ok(quantize(*color)),
			Cell::Coded(code) if code.is_known() => Ok(*code),
			Cell::Coded(code) => Err(CodecError::UnknownCode(*code)),
		}
	}
}

impl Default for Cell {
	fn default() -> Self {
		Cell::Coded(Code::OFF)
	}
}

impl From<Color> for Cell {
	fn from(c: Color) -> Self {
		Cell::Raw(c)
	}
}

impl From<Code> for Cell {
	fn from(c: Code) -> Self {
		Cell::Coded(c)
	}
}

impl Display for Cell {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Cell::Raw(color) => write!(f, "{color}"),
			Cell::Coded(code) => write!(f, "{code}"),
		}
	}
}

impl FromStr for Cell {
	type Err = CodecError;

	/// `#RRGGBB` is a painted color, two hex digits are a device code.
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		if s.starts_with('#') {
			return Color::from_hex(s).map(Cell::Raw);
		}

		let code = s.parse::<Code>()?;
		if !code.is_known() {
			return Err(CodecError::UnknownCode(code));
		}
		Ok(Cell::Coded(code))
	}
}

impl Serialize for Cell {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Cell {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse::<Cell>().map_err(de::Error::custom)
	}
}

impl Grid<Cell> {
	/// Resolves every cell to a palette code, keeping the layout.
	pub fn quantized(&self) -> Result<Grid<Code>> {
		self.try_map(Cell::code)
	}
}

/// Builds the frame handed to the controller from a row-major editor grid.
///
/// The device addresses frames column-major: row `j`, column `i` of the result
/// is the editor's row `i`, column `j`.
pub fn device_payload(editor: &Grid<Cell>) -> Result<Grid<Code>> {
	Ok(editor.quantized()?.transposed())
}
