use crate::operator::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents an operator applied to operands of the wrong type.
///
/// Only the evaluator raises these. Type names are the ones reported by
/// `Value::type_name`, e.g. `NUMBER` or `BOOLEAN`.
pub enum TypeError {
    /// `!` applied to a non-boolean.
    UnaryOperand {
        /// The operator.
        operator: Operator,
        /// The type of the operand.
        operand:  &'static str,
    },
    /// An arithmetic operator applied to something other than two numbers.
    BinaryOperands {
        /// The operator.
        operator: Operator,
        /// The type of the left operand.
        left:     &'static str,
        /// The type of the right operand.
        right:    &'static str,
    },
    /// A comparison between values of different types.
    Comparison {
        /// The operator.
        operator: Operator,
        /// The type of the left operand.
        left:     &'static str,
        /// The type of the right operand.
        right:    &'static str,
    },
    /// `and` or `or` applied to something other than two booleans.
    LogicalOperands {
        /// The operator.
        operator: Operator,
        /// The type of the left operand.
        left:     &'static str,
        /// The type of the right operand.
        right:    &'static str,
    },
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnaryOperand { operator, operand } => {
                write!(f, "Type error: '{operator}' cannot operate on {operand}.")
            },
            Self::BinaryOperands { operator, left, right } => {
                write!(f, "Type error: '{operator}' cannot operate on {left} and {right}.")
            },
            Self::Comparison { operator, left, right } => {
                write!(f, "Type error: '{operator}' cannot compare {left} and {right}.")
            },
            Self::LogicalOperands { operator, left, right } => write!(f,
                                                                      "Type error: '{operator}' requires two BOOLEANS, got {left} and {right}."),
        }
    }
}

impl std::error::Error for TypeError {}
