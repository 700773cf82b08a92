use crate::{
    error::TypeError,
    interpreter::{evaluator::core::Machine, value::core::Value},
    operator::Operator,
};

impl Machine {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both operands have already been evaluated by the time the operator is
    /// reached, so nothing is skipped; only the combination is computed.
    ///
    /// # Parameters
    /// - `op`: `and` or `or`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A `Value::Boolean`, or `TypeError::LogicalOperands` unless both
    /// operands are booleans.
    ///
    /// # Panics
    /// Panics if `op` is not `and` or `or`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     interpreter::{evaluator::core::Machine, value::core::Value},
    ///     operator::Operator,
    /// };
    ///
    /// let result = Machine::eval_logic(Operator::Or, Value::Boolean(false), Value::Boolean(true));
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_logic(op: Operator, left: Value, right: Value) -> Result<Value, TypeError> {
        let (Some(a), Some(b)) = (left.as_boolean(), right.as_boolean()) else {
            return Err(TypeError::LogicalOperands { operator: op,
                                                    left:     left.type_name(),
                                                    right:    right.type_name(), });
        };

        match op {
            Operator::And => Ok(Value::Boolean(a && b)),
            Operator::Or => Ok(Value::Boolean(a || b)),
            _ => unreachable!("{op} is not a logical operator"),
        }
    }
}
