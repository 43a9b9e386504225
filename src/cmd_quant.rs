use anyhow::Result;

use lightframe::palettes::quantize_hex;

use crate::commands::QuantArgs;
use crate::common::swatch;

pub(crate) fn lcf_quant(args: &QuantArgs) -> Result<()> {
	let mut failed = 0;

	for color in &args.colors {
		match quantize_hex(color) {
			Ok(code) => println!("{color} -> {code} {}", swatch(code)),
			Err(e) => {
				eprintln!("{e}");
				failed += 1;
			}
		}
	}

	if failed > 0 {
		anyhow::bail!("{failed} of {} colors couldn't be parsed", args.colors.len())
	}

	Ok(())
}
