use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::palettes::Code;

impl Grid<Code> {
	pub fn to_lcf_string(&self) -> String {
		let mut out = format!("{}\n{}\n", self.rows(), self.cols());

		for row in self.iter_rows() {
			let line = row.iter().map(Code::to_string).collect::<Vec<String>>().join(" ");
			out.push_str(&line);
			out.push('\n');
		}

		out
	}

	pub fn write_lcf<W: Write>(&self, writer: &mut W) -> Result<()> {
		writer.write_all(self.to_lcf_string().as_bytes())?;
		Ok(())
	}

	/// Writes the grid to `path` through a temporary file in the same directory that
	/// is renamed over the target once complete. A failed save leaves the target untouched.
	pub fn save_lcf_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let path = path.as_ref();
		let dir = match path.parent() {
			Some(p) if !p.as_os_str().is_empty() => p,
			_ => Path::new("."),
		};

		let mut temp_file = Builder::new()
			.prefix(".lcf")
			.suffix(".tmp")
			.tempfile_in(dir)?;

		{
			let mut writer = BufWriter::new(&mut temp_file);
			self.write_lcf(&mut writer)?;
			writer.flush()?;
		}
		temp_file.as_file().sync_all()?;
		temp_file.persist(path).map_err(|e| e.error)?;

		debug!(path = %path.display(), rows = self.rows(), cols = self.cols(), "saved frame");
		Ok(())
	}
}
