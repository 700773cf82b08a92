/// Syntax errors.
///
/// Defines every failure caused by malformed text: invalid characters,
/// unknown keywords, invalid number literals, unbalanced parentheses and
/// expressions that do not reduce to a single value.
pub mod syntax_error;
/// Type errors.
///
/// Contains the failures raised during evaluation when an operator receives
/// operands of a type it does not accept.
pub mod type_error;

pub use syntax_error::SyntaxError;
pub use type_error::TypeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The error returned by a full evaluation of one expression.
///
/// Every stage fails fast; the caller receives the first error encountered.
pub enum EvaluationError {
    /// The expression text is malformed.
    Syntax(SyntaxError),
    /// An operator received operands of the wrong type.
    Type(TypeError),
}

impl EvaluationError {
    /// Returns `true` if this is a syntax error.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Returns `true` if this is a type error.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(self, Self::Type(_))
    }
}

impl From<SyntaxError> for EvaluationError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<TypeError> for EvaluationError {
    fn from(e: TypeError) -> Self {
        Self::Type(e)
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Type(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Type(e) => Some(e),
        }
    }
}
