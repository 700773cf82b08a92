use crate::{
    error::TypeError,
    interpreter::{evaluator::core::Machine, value::core::Value},
    operator::{Category, Operator},
};

impl Machine {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operation by operator category: arithmetic operators to
    /// `eval_arithmetic`, comparisons to `eval_comparison` and `and`/`or` to
    /// `eval_logic`. Each handler checks its own operand types.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value, or a `TypeError` if the operands do not fit the
    /// operator.
    ///
    /// # Panics
    /// Panics if `op` is `!` or a parenthesis.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     interpreter::{evaluator::core::Machine, value::core::Value},
    ///     operator::Operator,
    /// };
    ///
    /// let result = Machine::eval_binary(Operator::Add, Value::Number(3.0), Value::Number(4.0));
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: Operator, left: Value, right: Value) -> Result<Value, TypeError> {
        match op.category() {
            Category::Arithmetic => Self::eval_arithmetic(op, left, right),
            Category::Comparison => Self::eval_comparison(op, left, right),
            Category::Logical => Self::eval_logic(op, left, right),
            Category::Negation | Category::Grouping => {
                unreachable!("{op} is not a binary operator")
            },
        }
    }
}
