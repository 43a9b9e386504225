use std::fs::{self, File};
use std::io::BufReader;

use anyhow::{Context, Result};
use humansize::DECIMAL;

use lightframe::grid::{device_payload, Cell, Grid};
use lightframe::lcf::{has_lcf_extension, LCF_EXTENSION};

use crate::commands::PackArgs;

pub(crate) fn lcf_pack(args: &PackArgs) -> Result<()> {
	let f = File::open(&args.input)
		.with_context(|| format!("Couldn't open editor grid {}", args.input.display()))?;
	let editor: Grid<Cell> = serde_json::from_reader(BufReader::new(f))
		.with_context(|| format!("Couldn't parse editor grid {}", args.input.display()))?;

	let payload = device_payload(&editor)
		.with_context(|| format!("Couldn't quantize editor grid {}", args.input.display()))?;
	let frame = args.trim.apply(&payload);

	if !has_lcf_extension(&args.output) {
		eprintln!("NOTE: The output file doesn't have the .{LCF_EXTENSION} extension!")
	}

	frame.save_lcf_file(&args.output)
		.with_context(|| format!("Couldn't save frame {}", args.output.display()))?;

	println!(
		"Packed {}x{} editor grid into a {}x{} frame (trim: {})",
		editor.rows(), editor.cols(), frame.rows(), frame.cols(), args.trim
	);

	match fs::metadata(&args.output) {
		Ok(m) => println!("Output file size: {}", humansize::format_size(m.len(), DECIMAL)),
		Err(err) => eprintln!("Can't determine output file size: {err}"),
	}

	Ok(())
}
