use crate::error::CodecError;
use crate::palettes::palette::{Code, Color, PaletteEntry, DEVICE_PALETTE};

/// Returns the code of the entry in `table` closest to `color`.
///
/// Entries are compared by squared euclidean distance. When several entries share
/// the minimum distance, the one that appears first in `table` wins, so the result
/// only depends on the table's order. Returns `None` for an empty table.
pub fn nearest_code(color: Color, table: &[PaletteEntry]) -> Option<Code> {
	let mut best: Option<(u32, Code)> = None;

	for entry in table {
		let d = color.distance_sq(&entry.color);
		// strictly less keeps the earliest entry on ties
		let closer = match best {
			Some((best_d, _)) => d < best_d,
			None => true,
		};
		if closer {
			best = Some((d, entry.code));
		}

		if d == 0 {
			break;
		}
	}

	best.map(|(_, code)| code)
}

/// Maps a color to the nearest device palette code.
///
/// Pure black and pure white short-circuit to [`Code::OFF`] and [`Code::WHITE`];
/// everything else is matched against [`DEVICE_PALETTE`].
pub fn quantize(color: Color) -> Code {
	if color == Color::BLACK {
		return Code::OFF;
	}
	if color == Color::WHITE {
		return Code::WHITE;
	}

	// the device palette is a non-empty constant
	nearest_code(color, &DEVICE_PALETTE).unwrap_or(Code::OFF)
}

/// Parses a `#RRGGBB` (or `RRGGBB`) string and quantizes it.
pub fn quantize_hex(s: &str) -> Result<Code, CodecError> {
	Color::from_hex(s).map(quantize)
}
