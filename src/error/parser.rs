use crate::scanner::{Token, TokenType};

/// A syntax error, pointing at the token the parser could not get past.
#[derive(thiserror::Error, Debug)]
#[error("[line {line}] Error{location}: {type}")]
pub struct ParseError {
	line:     usize,
	location: String,
	r#type:   ParseErrorType,
}

impl ParseError {
	/// Build an error at `token`, located `at end` when the parser ran out of
	/// input and `at '<lexeme>'` otherwise.
	pub(crate) fn at(token: &Token, r#type: ParseErrorType) -> Self {
		let location = match token.r#type {
			TokenType::Eof => " at end".to_string(),
			_ => format!(" at '{}'", token.lexeme),
		};
		Self { line: token.line, location, r#type }
	}
}

/// Types of syntax errors.
#[derive(Debug)]
pub enum ParseErrorType {
	ExpectedExpression,
	UnterminatedParenthesis,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => write!(f, "Expect expression."),
			UnterminatedParenthesis => write!(f, "Expect ')' after expression."),
		}
	}
}
