use anyhow::Result;

use crate::commands::PayloadArgs;
use crate::common::load_frame;

pub(crate) fn lcf_payload(args: &PayloadArgs) -> Result<()> {
	let frame = load_frame(&args.input)?;

	let json = if args.pretty {
		serde_json::to_string_pretty(&frame)?
	} else {
		serde_json::to_string(&frame)?
	};
	println!("{json}");

	Ok(())
}
