use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use lightframe::grid::TrimMode;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Inspects and packs light display frames")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Prints debug logging to stderr.")]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct QuantArgs {
	#[arg(required = true, help = "Colors to quantize. Format RRGGBB or #RRGGBB.")]
	pub colors: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct PackArgs {
	#[arg(short, help = "The editor grid. A JSON array of rows, each cell a \"#RRGGBB\" color or a 2-digit code.")]
	pub input: PathBuf,
	#[arg(help = "The output LCF file.")]
	pub output: PathBuf,

	#[arg(short, long, value_enum, help = "Which empty rows and columns to remove.", default_value_t = TrimMode::default())]
	pub trim: TrimMode,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ShowArgs {
	#[arg(short, help = "The LCF file.")]
	pub input: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct PayloadArgs {
	#[arg(short, help = "The LCF file.")]
	pub input: PathBuf,

	#[arg(short, long, help = "Pretty-prints the JSON output.")]
	pub pretty: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Maps colors to device palette codes")]
	Quant(QuantArgs),

	#[command(about = "Quantizes, transposes and trims an editor grid into an LCF file")]
	Pack(PackArgs),

	#[command(about = "Renders an LCF file to the terminal")]
	Show(ShowArgs),

	#[command(about = "Prints an LCF file as the JSON frame sent to the controller")]
	Payload(PayloadArgs),
}
