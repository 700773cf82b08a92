use crate::{
    error::{EvaluationError, SyntaxError},
    interpreter::{lexer::Token, value::core::Value},
    operator::{Category, Operator},
};

/// Result type used by the evaluator.
///
/// Evaluation fails either with a `TypeError`, or with a `SyntaxError` when
/// the postfix sequence is malformed.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Stack machine executing one postfix sequence.
///
/// A machine is created per evaluation and consumed by [`Machine::run`], so
/// no state survives from one expression to the next.
#[derive(Debug, Default)]
pub struct Machine {
    stack: Vec<Value>,
    trace: bool,
}

impl Machine {
    /// Creates a machine with an empty stack. Stack traces are off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine that emits a `trace` event for every push and every
    /// operator application.
    #[must_use]
    pub const fn traced() -> Self {
        Self { stack: Vec::new(),
               trace: true }
    }

    /// Runs a postfix sequence to completion and returns the single value it
    /// reduces to.
    ///
    /// # Errors
    /// - `TypeError` when an operator receives operands it does not accept.
    /// - `SyntaxError::EmptyExpression` for an empty sequence.
    /// - `SyntaxError::MissingOperand` when an operator finds too few values.
    /// - `SyntaxError::UnexpectedOperand` when several values remain.
    /// - `SyntaxError::MismatchedParentheses` if a parenthesis shows up.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     interpreter::{evaluator::core::Machine, lexer::Token, value::core::Value},
    ///     operator::Operator,
    /// };
    ///
    /// let postfix = vec![Token::Number(2.0), Token::Number(3.0), Token::Operator(Operator::Add)];
    /// assert_eq!(Machine::new().run(postfix).unwrap(), Value::Number(5.0));
    /// ```
    pub fn run(mut self, postfix: Vec<Token>) -> EvalResult<Value> {
        for token in postfix {
            match token {
                Token::Number(n) => self.push(n.into()),
                Token::Boolean(b) => self.push(b.into()),
                Token::Operator(op) => self.apply(op)?,
            }
        }

        match self.stack.len() {
            0 => Err(SyntaxError::EmptyExpression.into()),
            1 => Ok(self.stack.remove(0)),
            count => Err(SyntaxError::UnexpectedOperand { count }.into()),
        }
    }

    fn push(&mut self, value: Value) {
        self.stack.push(value);
        if self.trace {
            tracing::trace!(%value, stack = ?self.stack, "push");
        }
    }

    fn pop(&mut self, operator: Operator) -> Result<Value, SyntaxError> {
        self.stack.pop().ok_or(SyntaxError::MissingOperand { operator })
    }

    /// Pops the operands of `op`, applies it and pushes the result.
    fn apply(&mut self, op: Operator) -> EvalResult<()> {
        let result = match op.category() {
            Category::Negation => {
                let operand = self.pop(op)?;
                let result = Self::eval_unary(op, operand)?;
                if self.trace {
                    tracing::trace!("{op}{operand} -> {result}");
                }
                result
            },
            Category::Arithmetic | Category::Comparison | Category::Logical => {
                let right = self.pop(op)?;
                let left = self.pop(op)?;
                let result = Self::eval_binary(op, left, right)?;
                if self.trace {
                    tracing::trace!("{left} {op} {right} -> {result}");
                }
                result
            },
            Category::Grouping => return Err(SyntaxError::MismatchedParentheses.into()),
        };

        self.stack.push(result);
        Ok(())
    }
}

/// Evaluates a postfix sequence with a fresh, untraced [`Machine`].
///
/// # Errors
/// See [`Machine::run`].
///
/// # Example
/// ```
/// use rpncalc::interpreter::{
///     converter::to_postfix, evaluator::core::evaluate, lexer::tokenize, value::core::Value,
/// };
///
/// let postfix = to_postfix(tokenize("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(evaluate(postfix).unwrap(), Value::Number(14.0));
/// ```
pub fn evaluate(postfix: Vec<Token>) -> EvalResult<Value> {
    Machine::new().run(postfix)
}
