//! Lexical analysis.
//!
//! The scanner walks the raw source text once, left to right, grouping
//! characters into tokens under maximal munch: the longest lexeme that forms
//! a valid token at the current position always wins, which is why `<=` is
//! one token and `and123` is an identifier rather than a keyword.
//!
//! A lexical error never stops the scan. The offending lexeme is skipped, the
//! error is collected, and scanning resumes at the next character, so a
//! single pass reports every problem in the input.

mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub(crate) use token::*;

use crate::{LoxError, ScanError, ScanErrorType, ScannerError};

/// A scanner for Lox source code
pub(crate) struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Tracks what source line the cursor is on so tokens know their location
	line:        usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1 }
	}

	/// Scan the whole source, collecting lexical errors alongside the tokens.
	///
	/// The token list always ends with exactly one `Eof` token carrying the
	/// final line number. The outer `Err` is reserved for internal failures
	/// that should never happen on any input.
	pub fn scan_tokens(mut self) -> Result<(Vec<Token<'a>>, Vec<ScanError>), LoxError> {
		let mut tokens = Vec::new();
		let mut errors = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = index;
			match self.scan_token(&mut tokens) {
				Ok(()) => {}
				Err(ScannerError::ScanError(error)) => errors.push(error),
				Err(ScannerError::InternalError(error)) => return Err(error.into()),
			}
		}
		tokens.push(Token::new(Eof, "", self.line));
		Ok((tokens, errors))
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self, tokens: &mut Vec<Token<'a>>) -> Result<(), ScannerError> {
		let next_char = self.advance().context("Unexpected EOF")?;
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'.' => Dot,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
            '/' => if self.match_next('/') {
                while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
                Comment
            } else { Slash },
            ' ' | '\r' | '\t' => EmptyChar,
            '\n' => { self.line += 1; NewLine }
            '"' => self.string()?,
            c if c.is_ascii_digit() => self.number()?,
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
            _ => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char)).into()),
		};

		if !r#type.is_ignored() {
			let lexeme = &self.source[self.start..self.cursor];
			tokens.push(Token::new(r#type, lexeme, self.line));
		}

		Ok(())
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Scan a string literal. No escape sequences, newlines allowed inside.
	/// An unterminated string is reported at the line the string opened on.
	fn string(&mut self) -> Result<TokenType<'a>, ScannerError> {
		let opening_line = self.line;
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1
			}
			self.advance();
		}

		self.peek().ok_or_else(|| ScanError::new(opening_line, ScanErrorType::UnterminatedString))?;
		self.advance(); // The closing "
		let value = &self.source[self.start + 1..self.cursor - 1];
		Ok(StringLiteral(value))
	}

	/// Scan a number literal
	fn number(&mut self) -> Result<TokenType<'a>, ScannerError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// Look for a fractional part: the '.' is only consumed when a digit
		// follows it, so `1.` scans as a number and then a dot.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		let s = &self.source[self.start..self.cursor];
		Ok(NumberLiteral(s.parse().context("Failed to parse number literal")?))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scan(input: &str) -> (Vec<Token<'_>>, Vec<ScanError>) { Scanner::new(input).scan_tokens().unwrap() }

	fn tokens(input: &str) -> Vec<Token<'_>> {
		let (tokens, errors) = scan(input);
		assert!(errors.is_empty(), "unexpected scan errors: {errors:?}");
		tokens
	}

	#[test]
	fn single_tokens() {
		let scanned = tokens("123");
		assert_eq!(scanned.len(), 2);
		assert_eq!(scanned[0].r#type, NumberLiteral(123.0));
		assert_eq!(scanned[0].lexeme, "123");
		assert_eq!(scanned[1].r#type, Eof);

		let scanned = tokens(r#""ab""#);
		assert_eq!(scanned.len(), 2);
		assert_eq!(scanned[0].r#type, StringLiteral("ab"));
		assert_eq!(scanned[0].lexeme, r#""ab""#);
	}

	#[test]
	fn scan_operators() {
		for (source, expected) in [
			("(", LeftParen),
			(")", RightParen),
			("{", LeftBrace),
			("}", RightBrace),
			(",", Comma),
			(".", Dot),
			("-", Minus),
			("+", Plus),
			(";", Semicolon),
			("*", Star),
			("/", Slash),
			("!", Bang),
			("!=", BangEqual),
			("=", Equal),
			("==", EqualEqual),
			("<", Less),
			("<=", LessEqual),
			(">", Greater),
			(">=", GreaterEqual),
		] {
			let scanned = tokens(source);
			assert_eq!(scanned.len(), 2, "scanning {source:?}");
			assert_eq!(scanned[0].r#type, expected, "scanning {source:?}");
		}
	}

	#[test]
	fn scan_numbers() {
		assert_eq!(tokens("0")[0].r#type, NumberLiteral(0.0));
		assert_eq!(tokens("42")[0].r#type, NumberLiteral(42.0));
		assert_eq!(tokens("3.14")[0].r#type, NumberLiteral(3.14));
		assert_eq!(tokens("123.456")[0].r#type, NumberLiteral(123.456));

		// The trailing dot is its own token.
		let scanned = tokens("1.");
		assert_eq!(scanned[0].r#type, NumberLiteral(1.0));
		assert_eq!(scanned[1].r#type, Dot);

		// So is a leading one.
		let scanned = tokens(".5");
		assert_eq!(scanned[0].r#type, Dot);
		assert_eq!(scanned[1].r#type, NumberLiteral(5.0));
	}

	#[test]
	fn scan_keywords_and_identifiers() {
		assert_eq!(tokens("nil")[0].r#type, Nil);
		assert_eq!(tokens("true")[0].r#type, True);
		assert_eq!(tokens("false")[0].r#type, False);
		assert_eq!(tokens("while")[0].r#type, While);
		assert_eq!(tokens("nilly")[0].r#type, Identifier("nilly"));
		assert_eq!(tokens("_name")[0].r#type, Identifier("_name"));
		assert_eq!(tokens("and123")[0].r#type, Identifier("and123"));
		assert_eq!(tokens("CamelCase")[0].r#type, Identifier("CamelCase"));
	}

	#[test]
	fn line_comments_produce_no_token() {
		let scanned = tokens("// comment\n1");
		assert_eq!(scanned.len(), 2);
		assert_eq!(scanned[0].r#type, NumberLiteral(1.0));
		assert_eq!(scanned[0].line, 2);
	}

	#[test]
	fn unterminated_string() {
		let (scanned, errors) = scan("\"unterminated");
		assert_eq!(scanned.len(), 1);
		assert_eq!(scanned[0].r#type, Eof);
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].to_string(), "[line 1] Error: Unterminated string.");
	}

	#[test]
	fn unterminated_string_reports_opening_line() {
		let (_, errors) = scan("\n\n\"ab\ncd");
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].to_string(), "[line 3] Error: Unterminated string.");
	}

	#[test]
	fn unexpected_characters_are_skipped() {
		let (scanned, errors) = scan("@1#");
		assert_eq!(errors.len(), 2);
		assert_eq!(errors[0].to_string(), "[line 1] Error: Unexpected character '@'.");
		assert_eq!(errors[1].to_string(), "[line 1] Error: Unexpected character '#'.");
		assert_eq!(scanned.len(), 2);
		assert_eq!(scanned[0].r#type, NumberLiteral(1.0));
	}

	#[test]
	fn string_with_newlines_counts_lines() {
		let scanned = tokens("\"a\nb\"\n2");
		assert_eq!(scanned[0].r#type, StringLiteral("a\nb"));
		assert_eq!(scanned[1].r#type, NumberLiteral(2.0));
		assert_eq!(scanned[1].line, 3);
	}

	#[test]
	fn eof_carries_final_line() {
		let scanned = tokens("1\n\n");
		let eof = scanned.last().unwrap();
		assert_eq!(eof.r#type, Eof);
		assert_eq!(eof.lexeme, "");
		assert_eq!(eof.line, 3);
	}

	#[test]
	fn scan_multiple_tokens() {
		let scanned = tokens("1 + 2");
		assert_eq!(scanned.len(), 4);
		assert_eq!(scanned[0].r#type, NumberLiteral(1.0));
		assert_eq!(scanned[1].r#type, Plus);
		assert_eq!(scanned[2].r#type, NumberLiteral(2.0));
		assert_eq!(scanned[3].r#type, Eof);
	}
}
