use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use log::*;
use wacheck::{verify_numbers, NumberClient, WebApiTransport};

mod cli;
mod errors;
mod output;

use crate::errors::UserError;

fn main() {
	let args = cli::Args::parse();

	stderrlog::new()
		.verbosity(args.verbosity as usize)
		.module(module_path!())
		.module("wacheck")
		.init()
		.unwrap();

	if let Err(e) = run(args) {
		error!("{}", e);
		std::process::exit(1);
	}
}

fn run(args: cli::Args) -> anyhow::Result<()> {
	let phone_numbers = if let Some(file) = &args.file {
		info!("Reading phone numbers from {}...", file);
		wacheck::parse_input_file(Path::new(file))?
	} else if !args.phone_numbers.is_empty() {
		args.phone_numbers.clone()
	} else {
		let _ = cli::Args::command().print_help();
		return Err(UserError::NoPhoneNumbers.into());
	};

	info!("Verifying {} phone number(s)...", phone_numbers.len());
	let client = NumberClient::new(WebApiTransport::new(), args.token.as_str());
	let results = verify_numbers(&client, &phone_numbers);
	info!("Verified {} phone number(s)", results.len());

	if args.json {
		println!("{}", output::render_json(&results)?);
	} else {
		print!("{}", output::render_console(&results));
	}

	if let Some(path) = &args.output {
		output::save_results(Path::new(path), &results)?;
		println!("{}", format!("\nResults saved to {}", path).blue());
	}

	Ok(())
}
