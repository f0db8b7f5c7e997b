use clap::Parser;
use loxwalk::{LoxError, cli::*};

fn main() {
	let lox = loxwalk::Lox;

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(error) = lox.run_file(&path) {
				// Pipeline diagnostics were reported as they were found; only
				// internal failures still need printing here.
				if matches!(error, LoxError::InternalError(_)) {
					eprintln!("{error}");
				}
				std::process::exit(error.exit_code());
			}
		}
		Mode::Repl => lox.run_prompt(),
	}
}
