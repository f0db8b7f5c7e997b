pub mod interpreter;
pub mod parser;
pub mod scanner;

use interpreter::RuntimeError;
use parser::ParseError;
use scanner::ScanError;

/// LoxError is the top-level error type for one run of the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum LoxError {
	/// Internal error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Lexical errors collected over one scan
	#[error("{}", display_scan_errors(.0))]
	ScanErrors(Vec<ScanError>),
	/// The syntax error that aborted the parse
	#[error("{0}")]
	ParseError(#[from] ParseError),
	/// The type error that aborted evaluation
	#[error("{0}")]
	RuntimeError(#[from] RuntimeError),
}

impl LoxError {
	/// The conventional exit code for the driver: 65 for a static error, 70
	/// for a runtime error, 74 for an internal I/O failure.
	pub fn exit_code(&self) -> i32 {
		match self {
			LoxError::InternalError(_) => 74,
			LoxError::ScanErrors(_) | LoxError::ParseError(_) => 65,
			LoxError::RuntimeError(_) => 70,
		}
	}
}

fn display_scan_errors(errors: &[ScanError]) -> String {
	errors.iter().map(|e| format!("{e}")).collect::<Vec<String>>().join("\n")
}
