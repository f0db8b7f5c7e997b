use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{LoxError, interpreter::Interpreter, parser::Parser, scanner::Scanner};

/// Lox drives the pipeline: scan, parse, evaluate, report.
pub struct Lox;

impl Lox {
	/// Run a whole source file. The returned error, if any, carries the
	/// conventional exit code for the process to finish with.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LoxError> {
		let source = read_to_string(path).context("Failed to open source file")?;
		self.run(&source)
	}

	/// Run the interactive prompt, one expression per line. Errors are
	/// reported and the prompt moves on; they only end the run when the
	/// source comes from a file.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited loxwalk repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			// Diagnostics were already reported inside run; a fresh line gets
			// a fresh start.
			let _ = self.run(input.trim());
		}
	}
}

impl Lox {
	/// Run one source string through the pipeline, reporting every diagnostic
	/// on stderr and printing the evaluated value on stdout.
	fn run(&self, source: &str) -> Result<(), LoxError> {
		let (tokens, scan_errors) = Scanner::new(source).scan_tokens()?;
		for error in &scan_errors {
			eprintln!("{error}");
		}

		// The parser still gets a look at whatever scanned, so one run can
		// surface both lexical and syntax errors.
		let expression = match Parser::new(tokens).parse() {
			Ok(expression) => expression,
			Err(error) => {
				eprintln!("{error}");
				return Err(error.into());
			}
		};
		if !scan_errors.is_empty() {
			return Err(LoxError::ScanErrors(scan_errors));
		}

		match Interpreter.evaluate(&expression) {
			Ok(value) => {
				println!("{value}");
				Ok(())
			}
			Err(error) => {
				eprintln!("{error}");
				Err(error.into())
			}
		}
	}
}
