//! # rpncalc
//!
//! rpncalc is an expression interpreter for arithmetic, comparisons and
//! boolean logic. An expression is tokenized, reordered into postfix form with
//! the shunting-yard algorithm, and evaluated on a value stack with strict
//! type checking.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvaluationError,
    interpreter::{
        converter::to_postfix, evaluator::core::Machine, lexer::tokenize, value::core::Value,
    },
};

/// Provides the error types of the pipeline.
///
/// This module defines every error that can be raised while tokenizing,
/// converting or evaluating an expression. Errors fall into two kinds:
/// syntax errors for malformed text and type errors for operands an operator
/// does not accept.
///
/// # Responsibilities
/// - Defines the error enums for both kinds.
/// - Carries the offending character, keyword, operator or types.
/// - Integrates with `std::error::Error` and `?` between stages.
pub mod error;
/// Runs the three stages of evaluation.
///
/// This module holds the lexer, the shunting-yard converter, the postfix
/// evaluator and the value type they produce. Each stage consumes the
/// previous stage's output and can be used on its own.
pub mod interpreter;
/// Defines the operator symbols and their precedence.
pub mod operator;
/// The interactive read-evaluate-print loop.
pub mod repl;

/// Evaluates expressions, optionally tracing every stage.
///
/// An `Interpreter` holds no state between expressions; the only thing it
/// carries is whether to emit trace events. Events go through `tracing`, so
/// whether they are printed is up to the installed subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    trace: bool,
}

impl Interpreter {
    /// Creates an interpreter that emits no events.
    #[must_use]
    pub const fn new() -> Self {
        Self { trace: false }
    }

    /// Creates an interpreter that emits `debug` events for tokens, postfix
    /// order and results, and `trace` events for every stack step.
    #[must_use]
    pub const fn traced() -> Self {
        Self { trace: true }
    }

    /// Tokenizes, converts and evaluates one expression.
    ///
    /// Stops at the first failing stage and returns its error.
    ///
    /// # Errors
    /// Returns `EvaluationError::Syntax` for malformed text and
    /// `EvaluationError::Type` for operands of the wrong type.
    ///
    /// # Examples
    /// ```
    /// use rpncalc::{Interpreter, interpreter::value::core::Value};
    ///
    /// let interpreter = Interpreter::new();
    /// assert_eq!(interpreter.evaluate("(2 + 3) * 4").unwrap(), Value::Number(20.0));
    /// assert!(interpreter.evaluate("1 == true").unwrap_err().is_type());
    /// ```
    pub fn evaluate(&self, source: &str) -> Result<Value, EvaluationError> {
        let tokens = tokenize(source)?;
        if self.trace {
            tracing::debug!("tokens: {}", join(&tokens));
        }

        let postfix = to_postfix(tokens)?;
        if self.trace {
            tracing::debug!("postfix: {}", join(&postfix));
        }

        let machine = if self.trace { Machine::traced() } else { Machine::new() };
        let value = machine.run(postfix)?;
        if self.trace {
            tracing::debug!("result: {value}");
        }

        Ok(value)
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Evaluates one expression and returns its value.
///
/// This composes tokenizing, conversion to postfix order and evaluation,
/// short-circuiting on the first error. Nothing is shared between calls.
///
/// # Errors
/// Returns an error if the expression is malformed or if an operator receives
/// operands of the wrong type.
///
/// # Examples
/// ```
/// use rpncalc::{evaluate_expression, interpreter::value::core::Value};
///
/// assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), Value::Number(14.0));
/// assert_eq!(evaluate_expression("true and false or true").unwrap(),
///            Value::Boolean(true));
///
/// // `foo` is not a keyword.
/// assert!(evaluate_expression("foo + 1").unwrap_err().is_syntax());
/// ```
pub fn evaluate_expression(source: &str) -> Result<Value, EvaluationError> {
    Interpreter::new().evaluate(source)
}
