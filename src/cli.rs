use clap::{clap_derive::ArgEnum, Parser};

#[derive(Debug, Clone, Parser)]
#[clap(
	name = "wacheck-cli",
	bin_name = "wacheck",
	author,
	version,
	about = "Check whether phone numbers are registered on WhatsApp from the command line.",
	long_about = None,
	after_help = "EXAMPLES:\n    wacheck +1234567890\n    wacheck +1234567890 +14155552671\n    wacheck --file numbers.json\n    wacheck --file numbers.csv --json\n\nFor more information visit https://github.com/wassengerhq/wacheck"
)]
pub(crate) struct Args {
	#[clap(help = "Phone numbers to verify, in international format, eg. +14155552671.")]
	pub phone_numbers: Vec<String>,

	#[clap(
		short,
		long,
		help = "Input file with phone numbers (JSON or CSV). Takes precedence over numbers passed as arguments."
	)]
	pub file: Option<String>,

	#[clap(
		short,
		long,
		env = "WASSENGER_API_TOKEN",
		hide_env_values = true,
		help = "Wassenger API token. Defaults to the WASSENGER_API_TOKEN environment variable."
	)]
	pub token: String,

	#[clap(short, long, help = "Output results as JSON.")]
	pub json: bool,

	#[clap(short, long, help = "Save results to a file as JSON.")]
	pub output: Option<String>,

	#[clap(short, long, arg_enum, default_value_t = Verbosity::Info, help = "Set the log level.")]
	pub verbosity: Verbosity,
}

#[derive(Debug, Clone, Copy, ArgEnum)]
pub(crate) enum Verbosity {
	Error = 0,
	Warn = 1,
	Info = 2,
	Debug = 3,
	Trace = 4,
}

impl std::fmt::Display for Verbosity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!(
			"{}",
			match self {
				Verbosity::Error => "error",
				Verbosity::Warn => "warn",
				Verbosity::Info => "info",
				Verbosity::Debug => "debug",
				Verbosity::Trace => "trace",
			}
		))
	}
}
