use crate::{
    error::TypeError,
    interpreter::{evaluator::core::Machine, value::core::Value},
    operator::Operator,
};

impl Machine {
    /// Evaluates an arithmetic operation on two numbers.
    ///
    /// Results follow IEEE-754: dividing by zero gives an infinity or NaN
    /// rather than an error. `%` is floored, so the result takes the sign of
    /// the divisor (`-7 % 3` is `2`). `^` is `powf`.
    ///
    /// # Parameters
    /// - `op`: One of `+ - * / % ^`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A `Value::Number`, or `TypeError::BinaryOperands` if either operand is
    /// a boolean.
    ///
    /// # Panics
    /// Panics if `op` is not an arithmetic operator.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     interpreter::{evaluator::core::Machine, value::core::Value},
    ///     operator::Operator,
    /// };
    ///
    /// let result = Machine::eval_arithmetic(Operator::Div, Value::Number(1.0), Value::Number(0.0));
    /// assert_eq!(result.unwrap(), Value::Number(f64::INFINITY));
    /// ```
    pub fn eval_arithmetic(op: Operator, left: Value, right: Value) -> Result<Value, TypeError> {
        use Operator::{Add, Div, Mod, Mul, Pow, Sub};

        let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
            return Err(TypeError::BinaryOperands { operator: op,
                                                   left:     left.type_name(),
                                                   right:    right.type_name(), });
        };

        Ok(Value::Number(match op {
                             Add => a + b,
                             Sub => a - b,
                             Mul => a * b,
                             Div => a / b,
                             Mod => floored_rem(a, b),
                             Pow => a.powf(b),
                             _ => unreachable!("{op} is not an arithmetic operator"),
                         }))
    }
}

/// Remainder whose sign follows the divisor.
fn floored_rem(a: f64, b: f64) -> f64 {
    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        rem + b
    } else {
        rem
    }
}
