use crate::scanner::Token;

/// A runtime type error, in the driver's runtime reporting format. Carries
/// the line of the operator token whose operand check failed.
#[derive(thiserror::Error, Debug)]
#[error("{type}\n[line {line}]")]
pub struct RuntimeError {
	line:   usize,
	r#type: RuntimeErrorType,
}

impl RuntimeError {
	pub(crate) fn new(token: &Token, r#type: RuntimeErrorType) -> Self { Self { line: token.line, r#type } }
}

/// Types of runtime errors.
#[derive(Debug)]
pub enum RuntimeErrorType {
	/// Unary `-` applied to something other than a number.
	UnaryOperand,
	/// An arithmetic or comparison operator met a non-number.
	NumberOperands,
	/// `+` with operands that are neither both numbers nor both strings.
	AdditionOperands,
}

impl std::fmt::Display for RuntimeErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use RuntimeErrorType::*;
		match self {
			UnaryOperand => write!(f, "Operand must be a number."),
			NumberOperands => write!(f, "Operands must be numbers."),
			AdditionOperands => write!(f, "Operands must be two numbers or two strings."),
		}
	}
}
