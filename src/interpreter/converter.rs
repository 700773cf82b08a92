use crate::{error::SyntaxError, interpreter::lexer::Token, operator::Operator};

/// Result type used by the converter.
pub type ConvertResult<T> = Result<T, SyntaxError>;

/// Reorders infix tokens into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm. Literals go straight to the output;
/// operators wait on a stack until an operator of lower precedence, a closing
/// parenthesis or the end of input releases them. Operators of equal
/// precedence associate to the left, so `2 ^ 3 ^ 2` becomes `2 3 ^ 2 ^`.
///
/// A `-` or `!` at the start of the expression, or directly after an operator
/// other than `)`, is unary:
/// - unary `-` emits `-1` and pushes `*`, so `-x` becomes `-1 x *`;
/// - unary `!` is pushed without releasing anything, so it binds to the
///   operand on its right and chains (`!!x` becomes `x ! !`).
///
/// # Errors
/// Returns `SyntaxError::MismatchedParentheses` for a `)` with no open `(`
/// and for a `(` that is never closed.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{converter::to_postfix, lexer::tokenize};
///
/// let postfix = to_postfix(tokenize("(2 + 3) * 4").unwrap()).unwrap();
/// let text: Vec<String> = postfix.iter().map(ToString::to_string).collect();
///
/// assert_eq!(text.join(" "), "2.0 3.0 + 4.0 *");
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ConvertResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Operator> = Vec::new();
    let mut previous: Option<Token> = None;

    for token in tokens {
        match token {
            Token::Number(_) | Token::Boolean(_) => output.push(token),

            Token::Operator(Operator::LParen) => stack.push(Operator::LParen),

            Token::Operator(Operator::RParen) => close_group(&mut stack, &mut output)?,

            Token::Operator(op) if in_operand_position(previous) => match op {
                Operator::Sub => {
                    output.push(Token::Number(-1.0));
                    stack.push(Operator::Mul);
                },
                Operator::Not => stack.push(Operator::Not),
                _ => push_binary(op, &mut stack, &mut output),
            },

            Token::Operator(op) => push_binary(op, &mut stack, &mut output),
        }
        previous = Some(token);
    }

    while let Some(op) = stack.pop() {
        if op.is_paren() {
            return Err(SyntaxError::MismatchedParentheses);
        }
        output.push(Token::Operator(op));
    }

    Ok(output)
}

/// Returns `true` when the next token is expected to start an operand, which
/// is where `-` and `!` act as prefix operators.
fn in_operand_position(previous: Option<Token>) -> bool {
    match previous {
        None => true,
        Some(Token::Operator(op)) => op != Operator::RParen,
        Some(Token::Number(_) | Token::Boolean(_)) => false,
    }
}

/// Releases every stacked operator that binds at least as tightly as `op`,
/// then stacks `op`.
fn push_binary(op: Operator, stack: &mut Vec<Operator>, output: &mut Vec<Token>) {
    while let Some(&top) = stack.last() {
        if top == Operator::LParen || top.precedence() < op.precedence() {
            break;
        }
        stack.pop();
        output.push(Token::Operator(top));
    }
    stack.push(op);
}

/// Releases operators up to the innermost `(`, which is dropped.
fn close_group(stack: &mut Vec<Operator>, output: &mut Vec<Token>) -> ConvertResult<()> {
    while let Some(top) = stack.pop() {
        if top == Operator::LParen {
            return Ok(());
        }
        output.push(Token::Operator(top));
    }
    Err(SyntaxError::MismatchedParentheses)
}

#[cfg(test)]
mod tests {
    use super::to_postfix;
    use crate::{error::SyntaxError, interpreter::lexer::tokenize};

    fn postfix(source: &str) -> Result<String, SyntaxError> {
        let tokens = to_postfix(tokenize(source)?)?;
        Ok(tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "))
    }

    #[test]
    fn precedence_orders_operators() {
        assert_eq!(postfix("2 + 3 * 4").unwrap(), "2.0 3.0 4.0 * +");
        assert_eq!(postfix("2 * 3 + 4").unwrap(), "2.0 3.0 * 4.0 +");
    }

    #[test]
    fn parentheses_are_dropped() {
        assert_eq!(postfix("(2 + 3) * 4").unwrap(), "2.0 3.0 + 4.0 *");
        assert_eq!(postfix("((1))").unwrap(), "1.0");
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(postfix("2 ^ 3 ^ 2").unwrap(), "2.0 3.0 ^ 2.0 ^");
        assert_eq!(postfix("8 - 4 - 2").unwrap(), "8.0 4.0 - 2.0 -");
    }

    #[test]
    fn unary_minus_multiplies_by_minus_one() {
        assert_eq!(postfix("-2").unwrap(), "-1.0 2.0 *");
        assert_eq!(postfix("-2 ^ 2").unwrap(), "-1.0 2.0 2.0 ^ *");
        assert_eq!(postfix("2 * -3").unwrap(), "2.0 -1.0 3.0 * *");
        assert_eq!(postfix("-(1 + 2)").unwrap(), "-1.0 1.0 2.0 + *");
    }

    #[test]
    fn minus_after_closing_paren_is_binary() {
        assert_eq!(postfix("(5) - 2").unwrap(), "5.0 2.0 -");
    }

    #[test]
    fn unary_not_binds_to_its_operand() {
        assert_eq!(postfix("!!false").unwrap(), "false ! !");
        assert_eq!(postfix("!true and false").unwrap(), "true ! false and");
        assert_eq!(postfix("true or !false").unwrap(), "true false ! or");
    }

    #[test]
    fn logical_operators_bind_loosest() {
        assert_eq!(postfix("1 < 2 and true or false").unwrap(),
                   "1.0 2.0 < true and false or");
    }

    #[test]
    fn unmatched_parentheses_fail() {
        assert_eq!(postfix("(1 + 2"), Err(SyntaxError::MismatchedParentheses));
        assert_eq!(postfix("1 + 2)"), Err(SyntaxError::MismatchedParentheses));
        assert_eq!(postfix(")("), Err(SyntaxError::MismatchedParentheses));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(postfix("").unwrap(), "");
    }
}
