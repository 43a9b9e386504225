use std::path::Path;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use lightframe::grid::Grid;
use lightframe::palettes::palette::color_of;
use lightframe::palettes::Code;

pub(crate) fn load_frame<P: AsRef<Path>>(path: P) -> Result<Grid<Code>> {
	let path = path.as_ref();
	Grid::from_lcf_file(path).with_context(|| format!("Couldn't load frame {}", path.display()))
}

/// A terminal swatch in the code's reference color. Unknown codes render as `?`.
pub(crate) fn swatch(code: Code) -> ColoredString {
	if code.is_off() {
		return "·".dimmed();
	}

	match color_of(code) {
		Some(c) => "●".truecolor(c.r, c.g, c.b),
		None => "?".red(),
	}
}
