//! Tree-walking evaluation.
//!
//! The interpreter computes a value by recursing over the expression tree
//! directly, no intermediate form. Types are checked where values meet
//! operators:
//!
//! - **Literals** evaluate to their stored value unchanged
//! - **Grouping** has no runtime effect beyond the precedence it bought
//! - **Unary** `-` wants a number; `!` negates the truthiness of anything
//! - **Binary** evaluates left then right, always both, then dispatches on
//!   the operator

use Expression::*;

use crate::{
	error::interpreter::{RuntimeError, RuntimeErrorType},
	parser::expression::Expression,
	scanner::TokenType::*,
	value::Value,
};

/// Interpreter evaluates expression trees.
pub(crate) struct Interpreter;

impl Interpreter {
	/// Evaluate the given expression and return its value.
	pub fn evaluate(&self, expression: &Expression) -> Result<Value, RuntimeError> {
		Ok(match expression {
			Literal(value) => value.clone(),
			Grouping(inner) => self.evaluate(inner)?,
			Unary { operator, right } => {
				let right_value = self.evaluate(right)?;
				match (&operator.r#type, right_value) {
					(Minus, Value::Num(n)) => Value::Num(-n),
					(Bang, value) => Value::Bool(!value.is_truthy()),
					_ => return Err(RuntimeError::new(operator, RuntimeErrorType::UnaryOperand)),
				}
			}
			Binary { left, operator, right } => {
				let left_value = self.evaluate(left)?;
				let right_value = self.evaluate(right)?;
				left_value.binary_op(&operator.r#type, &right_value).ok_or_else(|| {
					let r#type = match operator.r#type {
						Plus => RuntimeErrorType::AdditionOperands,
						_ => RuntimeErrorType::NumberOperands,
					};
					RuntimeError::new(operator, r#type)
				})?
			}
		})
	}
}
