/// Scanner-stage errors
#[derive(thiserror::Error, Debug)]
pub enum ScannerError {
	/// Internal error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// A lexical error in the source text
	#[error(transparent)]
	ScanError(#[from] ScanError),
}

/// A lexical error, displayed in the driver's reporting format.
#[derive(thiserror::Error, Debug)]
#[error("[line {line}] Error: {type}")]
pub struct ScanError {
	/// The line the error occurred on.
	line:   usize,
	/// What went wrong.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, r#type: ScanErrorType) -> Self { Self { line, r#type } }
}

/// Types of lexical errors.
#[derive(Debug)]
pub enum ScanErrorType {
	/// A character no lexeme can start with.
	UnexpectedCharacter(char),
	/// Input ended inside a string literal.
	UnterminatedString,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => write!(f, "Unexpected character '{c}'."),
			UnterminatedString => write!(f, "Unterminated string."),
		}
	}
}
