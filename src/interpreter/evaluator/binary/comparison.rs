use crate::{
    error::TypeError,
    interpreter::{evaluator::core::Machine, value::core::Value},
    operator::Operator,
};

impl Machine {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Both operands must have the same type, for every comparison operator,
    /// equality included. Numbers compare numerically (so `NaN` is unequal to
    /// everything), booleans compare with `false < true`.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Returns
    /// A `Value::Boolean`, or `TypeError::Comparison` for mixed types.
    ///
    /// # Panics
    /// Panics if `op` is not a comparison operator.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     interpreter::{evaluator::core::Machine, value::core::Value},
    ///     operator::Operator,
    /// };
    ///
    /// let result = Machine::eval_comparison(Operator::Less, Value::Number(3.0), Value::Number(5.0));
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    ///
    /// let mixed = Machine::eval_comparison(Operator::Equal, Value::Number(1.0), Value::Boolean(true));
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_comparison(op: Operator, left: Value, right: Value) -> Result<Value, TypeError> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Boolean(compare(op, &a, &b))),
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(compare(op, &a, &b))),
            _ => Err(TypeError::Comparison { operator: op,
                                             left:     left.type_name(),
                                             right:    right.type_name(), }),
        }
    }
}

/// Applies a comparison operator to two values of one type.
fn compare<T: PartialOrd>(op: Operator, a: &T, b: &T) -> bool {
    match op {
        Operator::Equal => a == b,
        Operator::NotEqual => a != b,
        Operator::Less => a < b,
        Operator::Greater => a > b,
        Operator::LessEqual => a <= b,
        Operator::GreaterEqual => a >= b,
        _ => unreachable!("{op} is not a comparison operator"),
    }
}
