/// Largest magnitude below which an integral number is printed with a
/// trailing `.0` instead of in full.
const INTEGRAL_DISPLAY_LIMIT: f64 = 1e16;

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to exactly one of these. There is no implicit
/// conversion between the two variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by literals, comparison operators and logical operators.
    Boolean(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Returns the name of the value's type as shown in type errors.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(1.0).type_name(), "NUMBER");
    /// assert_eq!(Value::Boolean(true).type_name(), "BOOLEAN");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Boolean(_) => "BOOLEAN",
        }
    }

    /// Returns the number, or `None` for booleans.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Boolean(_) => None,
        }
    }

    /// Returns the boolean, or `None` for numbers.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Number(_) => None,
        }
    }
}

/// Writes a number the way results are printed.
///
/// Integral values keep one decimal (`14.0`), everything else uses the
/// shortest representation that round-trips (`0.1`, `inf`, `NaN`).
pub(crate) fn fmt_number(n: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < INTEGRAL_DISPLAY_LIMIT {
        write!(f, "{n:.1}")
    } else {
        write!(f, "{n}")
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => fmt_number(*n, f),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
