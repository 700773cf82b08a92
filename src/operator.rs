/// Represents an operator symbol.
///
/// Covers the binary arithmetic, comparison and logical operators, the unary
/// logical NOT, and the two parenthesis markers used while reordering tokens.
/// Unary minus has no variant of its own; it is rewritten into a
/// multiplication by `-1` before evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction or unary minus (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Logical NOT (`!`)
    Not,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// Groups operators by the operand types they accept.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    /// `+ - * / % ^`, numbers only.
    Arithmetic,
    /// `== != < > <= >=`, two operands of the same type.
    Comparison,
    /// `and or`, booleans only.
    Logical,
    /// `!`, a single boolean.
    Negation,
    /// `(` and `)`.
    Grouping,
}

impl Operator {
    /// Returns the binding strength of the operator.
    ///
    /// | level | operators                  |
    /// |-------|----------------------------|
    /// | 0     | `or`                       |
    /// | 1     | `and`                      |
    /// | 2     | `==` `!=` `<` `>` `<=` `>=` |
    /// | 3     | `+` `-`                    |
    /// | 4     | `*` `/` `%`                |
    /// | 5     | `^`                        |
    /// | 6     | `!`                        |
    ///
    /// # Panics
    /// Parentheses have no precedence. The converter never asks for it, so
    /// doing so is a bug in the caller.
    ///
    /// # Example
    /// ```
    /// use rpncalc::operator::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Or.precedence(), 0);
    /// ```
    #[must_use]
    pub fn precedence(self) -> u8 {
        use Operator::{
            Add, And, Div, Equal, Greater, GreaterEqual, LParen, Less, LessEqual, Mod, Mul, Not,
            NotEqual, Or, Pow, RParen, Sub,
        };

        match self {
            Or => 0,
            And => 1,
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => 2,
            Add | Sub => 3,
            Mul | Div | Mod => 4,
            Pow => 5,
            Not => 6,
            LParen | RParen => unreachable!("parentheses have no precedence"),
        }
    }

    /// Returns the operand category the evaluator dispatches on.
    #[must_use]
    pub const fn category(self) -> Category {
        use Operator::{
            Add, And, Div, Equal, Greater, GreaterEqual, LParen, Less, LessEqual, Mod, Mul, Not,
            NotEqual, Or, Pow, RParen, Sub,
        };

        match self {
            Add | Sub | Mul | Div | Mod | Pow => Category::Arithmetic,
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => Category::Comparison,
            And | Or => Category::Logical,
            Not => Category::Negation,
            LParen | RParen => Category::Grouping,
        }
    }

    /// Returns `true` for `(` and `)`.
    #[must_use]
    pub const fn is_paren(self) -> bool {
        matches!(self, Self::LParen | Self::RParen)
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        use Operator::{
            Add, And, Div, Equal, Greater, GreaterEqual, LParen, Less, LessEqual, Mod, Mul, Not,
            NotEqual, Or, Pow, RParen, Sub,
        };

        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
            Not => "!",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            And => "and",
            Or => "or",
            LParen => "(",
            RParen => ")",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
