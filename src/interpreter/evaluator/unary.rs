use crate::{
    error::TypeError,
    interpreter::{evaluator::core::Machine, value::core::Value},
    operator::Operator,
};

impl Machine {
    /// Evaluates a unary operation on a value.
    ///
    /// `!` is the only unary operator left at evaluation time; unary minus
    /// has already been rewritten into a multiplication. The operand must be
    /// a boolean.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The negated boolean, or a `TypeError` naming the operand's type.
    ///
    /// # Panics
    /// Panics if `op` is not `!`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     interpreter::{evaluator::core::Machine, value::core::Value},
    ///     operator::Operator,
    /// };
    ///
    /// let v = Machine::eval_unary(Operator::Not, Value::Boolean(false)).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// assert!(Machine::eval_unary(Operator::Not, Value::Number(1.0)).is_err());
    /// ```
    pub fn eval_unary(op: Operator, value: Value) -> Result<Value, TypeError> {
        match (op, value) {
            (Operator::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
            (Operator::Not, Value::Number(_)) => {
                Err(TypeError::UnaryOperand { operator: op,
                                              operand:  value.type_name(), })
            },
            _ => unreachable!("{op} is not a unary operator"),
        }
    }
}
