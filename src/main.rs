use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use crate::commands::{Cli, Commands};

mod cmd_pack;
mod cmd_payload;
mod cmd_quant;
mod cmd_show;
mod commands;
mod common;

fn init_logging(debug: bool) {
	let level = if debug { Level::DEBUG } else { Level::WARN };
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn run(command: &Commands) -> anyhow::Result<()> {
	match command {
		Commands::Quant(args) => cmd_quant::lcf_quant(args),
		Commands::Pack(args) => cmd_pack::lcf_pack(args),
		Commands::Show(args) => cmd_show::lcf_show(args),
		Commands::Payload(args) => cmd_payload::lcf_payload(args),
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.debug);

	let Some(command) = &cli.command else {
		return ExitCode::FAILURE;
	};

	if let Err(e) = run(command) {
		eprintln!("execution failed: {e:#}");
		return ExitCode::FAILURE;
	}

	ExitCode::SUCCESS
}
