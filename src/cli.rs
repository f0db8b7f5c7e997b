use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "loxwalk", about = "A tree-walking interpreter for the Lox expression language")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Evaluate a source file
	File { path: PathBuf },
	/// Start the interactive prompt
	Repl,
}
