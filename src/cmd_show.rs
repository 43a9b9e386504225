use anyhow::Result;
use colored::Colorize;

use crate::commands::ShowArgs;
use crate::common::{load_frame, swatch};

pub(crate) fn lcf_show(args: &ShowArgs) -> Result<()> {
	let frame = load_frame(&args.input)?;

	println!("{} rows x {} columns", frame.rows().to_string().bold(), frame.cols().to_string().bold());
	if frame.is_empty() {
		eprintln!("NOTE: The frame is empty!");
		return Ok(());
	}

	for row in frame.iter_rows() {
		let swatches = row.iter().map(|c| swatch(*c).to_string()).collect::<Vec<String>>().join(" ");
		let codes = row.iter().map(|c| c.to_string()).collect::<Vec<String>>().join(" ");
		println!("{swatches}   {}", codes.dimmed());
	}

	Ok(())
}
