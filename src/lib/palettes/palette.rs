use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CodecError;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^#?(?P<r>[0-9A-Fa-f]{2})(?P<g>[0-9A-Fa-f]{2})(?P<b>[0-9A-Fa-f]{2})$").unwrap()
});

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const BLACK: Color = Color::new(0, 0, 0);
	pub const WHITE: Color = Color::new(255, 255, 255);

	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parses `RRGGBB` or `#RRGGBB`. Exactly six hex digits are required.
	pub fn from_hex(s: &str) -> Result<Color, CodecError> {
		let groups: Captures = match HEX_COLOR.captures(s) {
			None => {
				return Err(CodecError::invalid_color(s, "expected 6 hexadecimal digits with an optional leading '#'"));
			}
			Some(captures) => captures
		};

		let channel = |name: &str| {
			let digits = groups.name(name).map(|m| m.as_str()).unwrap_or_default();
			u8::from_str_radix(digits, 16)
				.map_err(|_| CodecError::invalid_color(s, format!("invalid {name} channel \"{digits}\"")))
		};

		Ok(Color::new(channel("r")?, channel("g")?, channel("b")?))
	}

	/// Squared euclidean distance, no square root needed for ranking.
	pub fn distance_sq(&self, other: &Color) -> u32 {
		let dr = self.r as i32 - other.r as i32;
		let dg = self.g as i32 - other.g as i32;
		let db = self.b as i32 - other.b as i32;
		(dr * dr + dg * dg + db * db) as u32
	}
}

impl From<[u8; 3]> for Color {
	fn from([r, g, b]: [u8; 3]) -> Self {
		Color::new(r, g, b)
	}
}

impl From<(u8, u8, u8)> for Color {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		Color::new(r, g, b)
	}
}

/// Packed `0xRRGGBB`; the top byte is ignored.
impl From<u32> for Color {
	fn from(v: u32) -> Self {
		let [_, r, g, b] = v.to_be_bytes();
		Color::new(r, g, b)
	}
}

impl TryFrom<[i32; 3]> for Color {
	type Error = CodecError;

	/// Channels outside `0..=255` are rejected, never clamped.
	fn try_from(v: [i32; 3]) -> Result<Self, Self::Error> {
		let channel = |c: i32| {
			u8::try_from(c).map_err(|_| {
				CodecError::invalid_color(format!("({}, {}, {})", v[0], v[1], v[2]), format!("channel value {c} is outside 0..=255"))
			})
		};

		Ok(Color::new(channel(v[0])?, channel(v[1])?, channel(v[2])?))
	}
}

impl FromStr for Color {
	type Err = CodecError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Color::from_hex(s)
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		Color::from_hex(&s).map_err(de::Error::custom)
	}
}

/// A device palette code, written as two uppercase hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(pub u8);

impl Code {
	/// "off", also the empty cell marker
	pub const OFF: Code = Code(0xFE);
	pub const WHITE: Code = Code(0xFF);

	pub fn is_off(&self) -> bool {
		*self == Code::OFF
	}

	/// Catalog or reserved code, i.e. one the device can display.
	pub fn is_known(&self) -> bool {
		color_of(*self).is_some()
	}
}

impl Default for Code {
	fn default() -> Self {
		Code::OFF
	}
}

impl Display for Code {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:02X}", self.0)
	}
}

impl FromStr for Code {
	type Err = CodecError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
			return Err(CodecError::InvalidCode(s.to_string()));
		}

		u8::from_str_radix(s, 16)
			.map(Code)
			.map_err(|_| CodecError::InvalidCode(s.to_string()))
	}
}

impl Serialize for Code {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Code {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse::<Code>().map_err(de::Error::custom)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
	pub code: Code,
	pub color: Color,
}

const fn entry(code: u8, r: u8, g: u8, b: u8) -> PaletteEntry {
	PaletteEntry { code: Code(code), color: Color::new(r, g, b) }
}

/// The hardware's reference colors. Search order is significant: on equal
/// distance the earlier entry wins.
pub const DEVICE_PALETTE: [PaletteEntry; 34] = [
	entry(0x00, 255, 0, 0),
	entry(0x07, 252, 136, 59),
	entry(0x10, 251, 250, 110),
	entry(0x17, 218, 240, 91),
	entry(0x20, 178, 240, 83),
	entry(0x27, 139, 243, 69),
	entry(0x30, 18, 245, 79),
	entry(0x37, 0, 247, 78),
	entry(0x40, 0, 255, 182),
	entry(0x47, 0, 255, 255),
	entry(0x50, 0, 196, 250),
	entry(0x57, 0, 174, 254),
	entry(0x60, 0, 137, 251),
	entry(0x67, 0, 117, 253),
	entry(0x70, 0, 64, 253),
	entry(0x77, 0, 1, 255),
	entry(0x80, 91, 0, 255),
	entry(0x87, 103, 0, 255),
	entry(0x90, 146, 0, 255),
	entry(0x97, 164, 0, 254),
	entry(0xA0, 190, 0, 254),
	entry(0xA7, 255, 0, 253),
	entry(0xB0, 255, 0, 191),
	entry(0xB7, 255, 80, 14),
	entry(0xC0, 250, 198, 85),
	entry(0xC7, 245, 237, 91),
	entry(0xD0, 203, 236, 83),
	entry(0xD7, 168, 239, 93),
	entry(0xE0, 106, 242, 95),
	entry(0xE7, 14, 245, 93),
	entry(0xF0, 0, 249, 85),
	entry(0xF7, 0, 242, 211),
	entry(0xFC, 0, 234, 243),
	entry(0xFD, 252, 181, 141),
];

/// Matched by exact color only, never searched.
pub const RESERVED: [PaletteEntry; 2] = [
	entry(0xFE, 0, 0, 0),
	entry(0xFF, 255, 255, 255),
];

/// Reverse lookup of a code's reference color, reserved codes included.
pub fn color_of(code: Code) -> Option<Color> {
	DEVICE_PALETTE.iter()
		.chain(RESERVED.iter())
		.find(|e| e.code == code)
		.map(|e| e.color)
}
