use crate::operator::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors caused by malformed expression text.
///
/// Raised while tokenizing, while reordering tokens into postfix form, and by
/// the evaluator when a postfix sequence does not reduce to a single value.
pub enum SyntaxError {
    /// A character that starts no token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character offset in the expression.
        position:  usize,
    },
    /// An alphabetic word that is not `true`, `false`, `and` or `or`.
    UnknownKeyword {
        /// The word as written.
        keyword:  String,
        /// Character offset in the expression.
        position: usize,
    },
    /// A run of digits and dots that is not a valid number, e.g. `1.2.3`.
    InvalidNumber {
        /// The literal as written.
        literal:  String,
        /// Character offset in the expression.
        position: usize,
    },
    /// A `)` without a matching `(` or a `(` that is never closed.
    MismatchedParentheses,
    /// The expression contains no tokens.
    EmptyExpression,
    /// An operator found fewer operands than it consumes.
    MissingOperand {
        /// The operator that could not be applied.
        operator: Operator,
    },
    /// More than one value was left once every operator was applied.
    UnexpectedOperand {
        /// How many values were left.
        count: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => write!(f,
                                                                     "Syntax error at position {position}: Invalid character '{character}' in expression."),
            Self::UnknownKeyword { keyword, position } => {
                write!(f, "Syntax error at position {position}: Unknown keyword '{keyword}'.")
            },
            Self::InvalidNumber { literal, position } => write!(f,
                                                                "Syntax error at position {position}: Invalid number literal '{literal}'."),
            Self::MismatchedParentheses => write!(f, "Syntax error: Mismatched parentheses."),
            Self::EmptyExpression => write!(f, "Syntax error: Empty expression."),
            Self::MissingOperand { operator } => {
                write!(f, "Syntax error: Missing operand for '{operator}'.")
            },
            Self::UnexpectedOperand { count } => write!(f,
                                                        "Syntax error: Expression left {count} values where one was expected. Is an operator missing?"),
        }
    }
}

impl std::error::Error for SyntaxError {}
