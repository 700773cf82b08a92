use logos::Logos;

use crate::{error::SyntaxError, interpreter::value::core::fmt_number, operator::Operator};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, SyntaxError>;

/// Represents a lexical token handed to the converter.
/// A token is a minimal but meaningful unit of an expression: a literal or an
/// operator symbol, parentheses included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal, such as `3`, `3.14` or `.5`.
    Number(f64),
    /// Boolean literal, `true` or `false` in any letter case.
    Boolean(bool),
    /// Operator or parenthesis.
    Operator(Operator),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => fmt_number(*n, f),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Raw scanner output.
///
/// Literals and words are only delimited here; turning them into values and
/// keywords happens in [`tokenize`], which can report what was wrong with
/// them.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// Digits and dots, starting with a digit or with a dot followed by a
    /// digit. Several dots are accepted here and rejected when parsed.
    #[regex(r"[0-9][0-9.]*")]
    #[regex(r"\.[0-9][0-9.]*")]
    Number,
    /// A run of letters: a boolean literal, `and`, `or`, or an error.
    #[regex(r"[a-zA-Z]+")]
    Word,
    /// Operator symbols. Two-character symbols win over their prefixes since
    /// the scanner always takes the longest match.
    #[token("==", |_| Operator::Equal)]
    #[token("!=", |_| Operator::NotEqual)]
    #[token("<=", |_| Operator::LessEqual)]
    #[token(">=", |_| Operator::GreaterEqual)]
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("%", |_| Operator::Mod)]
    #[token("^", |_| Operator::Pow)]
    #[token("!", |_| Operator::Not)]
    #[token("<", |_| Operator::Less)]
    #[token(">", |_| Operator::Greater)]
    #[token("(", |_| Operator::LParen)]
    #[token(")", |_| Operator::RParen)]
    Symbol(Operator),
}

/// Converts an expression into its tokens, in source order.
///
/// Whitespace is skipped. An empty or blank expression gives an empty
/// sequence; rejecting it is left to later stages.
///
/// # Errors
/// - `SyntaxError::InvalidCharacter` for a character that starts no token.
/// - `SyntaxError::UnknownKeyword` for a word other than `true`, `false`,
///   `and` and `or`.
/// - `SyntaxError::InvalidNumber` for a literal such as `1.2.3`.
///
/// # Example
/// ```
/// use rpncalc::{
///     interpreter::lexer::{Token, tokenize},
///     operator::Operator,
/// };
///
/// let tokens = tokenize("1 <= 2 AND true").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0),
///                 Token::Operator(Operator::LessEqual),
///                 Token::Number(2.0),
///                 Token::Operator(Operator::And),
///                 Token::Boolean(true)]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let start = lexer.span().start;
        let position = char_offset(source, start);

        let token = match lexeme {
            Ok(Lexeme::Number) => Token::Number(parse_number(lexer.slice(), position)?),
            Ok(Lexeme::Word) => parse_word(lexer.slice(), position)?,
            Ok(Lexeme::Symbol(op)) => Token::Operator(op),
            Err(()) => {
                // The error span may end inside a multi-byte character.
                let character = source.get(start..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or_default();
                return Err(SyntaxError::InvalidCharacter { character, position });
            },
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Parses a floating-point literal.
///
/// # Parameters
/// - `literal`: The scanned digits and dots.
/// - `position`: Character offset of the literal, for error reporting.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(SyntaxError::InvalidNumber)`: If the text is not a valid float.
fn parse_number(literal: &str, position: usize) -> LexResult<f64> {
    literal.parse()
           .map_err(|_| SyntaxError::InvalidNumber { literal: literal.to_string(),
                                                     position })
}

/// Classifies a word as a boolean literal or a logical operator, ignoring
/// letter case.
fn parse_word(word: &str, position: usize) -> LexResult<Token> {
    match word.to_ascii_lowercase().as_str() {
        "true" => Ok(Token::Boolean(true)),
        "false" => Ok(Token::Boolean(false)),
        "and" => Ok(Token::Operator(Operator::And)),
        "or" => Ok(Token::Operator(Operator::Or)),
        _ => Err(SyntaxError::UnknownKeyword { keyword: word.to_string(),
                                               position }),
    }
}

/// Converts a byte offset into a character offset.
fn char_offset(source: &str, byte_offset: usize) -> usize {
    source.get(..byte_offset).map_or(byte_offset, |prefix| prefix.chars().count())
}

#[cfg(test)]
mod tests {
    use super::{Token, tokenize};
    use crate::{error::SyntaxError, operator::Operator};

    #[test]
    fn empty_and_blank_input_give_no_tokens() {
        assert_eq!(tokenize(""), Ok(vec![]));
        assert_eq!(tokenize("   \t "), Ok(vec![]));
    }

    #[test]
    fn numbers_with_leading_and_trailing_dots() {
        assert_eq!(tokenize(".5 1. 42"),
                   Ok(vec![Token::Number(0.5), Token::Number(1.0), Token::Number(42.0)]));
    }

    #[test]
    fn two_character_operators_take_priority() {
        let tokens = tokenize("1<=2>=3==4!=5<6>7").unwrap();
        let ops: Vec<Operator> = tokens.iter()
                                       .filter_map(|token| match token {
                                           Token::Operator(op) => Some(*op),
                                           _ => None,
                                       })
                                       .collect();
        assert_eq!(ops,
                   vec![Operator::LessEqual,
                        Operator::GreaterEqual,
                        Operator::Equal,
                        Operator::NotEqual,
                        Operator::Less,
                        Operator::Greater]);
    }

    #[test]
    fn bang_without_equals_is_not() {
        assert_eq!(tokenize("!true"),
                   Ok(vec![Token::Operator(Operator::Not), Token::Boolean(true)]));
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(tokenize("TRUE Or fAlSe aNd"),
                   Ok(vec![Token::Boolean(true),
                           Token::Operator(Operator::Or),
                           Token::Boolean(false),
                           Token::Operator(Operator::And)]));
    }

    #[test]
    fn words_are_split_from_numbers() {
        assert_eq!(tokenize("2and"),
                   Ok(vec![Token::Number(2.0), Token::Operator(Operator::And)]));
    }

    #[test]
    fn unknown_keyword_is_named_as_written() {
        assert_eq!(tokenize("1 + Foo"),
                   Err(SyntaxError::UnknownKeyword { keyword:  "Foo".to_string(),
                                                     position: 4, }));
    }

    #[test]
    fn invalid_character_is_reported() {
        assert_eq!(tokenize("1 & 2"),
                   Err(SyntaxError::InvalidCharacter { character: '&',
                                                       position:  2, }));
    }

    #[test]
    fn lone_equals_is_invalid() {
        assert!(matches!(tokenize("1 = 1"),
                         Err(SyntaxError::InvalidCharacter { character: '=', .. })));
    }

    #[test]
    fn lone_dot_is_invalid() {
        assert!(matches!(tokenize("1 + ."),
                         Err(SyntaxError::InvalidCharacter { character: '.', .. })));
    }

    #[test]
    fn multiple_dots_fail_when_parsed() {
        assert_eq!(tokenize("1.2.3"),
                   Err(SyntaxError::InvalidNumber { literal:  "1.2.3".to_string(),
                                                    position: 0, }));
    }

    #[test]
    fn positions_count_characters() {
        assert!(matches!(tokenize("é"),
                         Err(SyntaxError::InvalidCharacter { character: 'é',
                                                             position:  0, })));
        assert!(matches!(tokenize("ñ + 1"),
                         Err(SyntaxError::InvalidCharacter { character: 'ñ',
                                                             position:  0, })));
        assert_eq!(tokenize("(1) $"),
                   Err(SyntaxError::InvalidCharacter { character: '$',
                                                       position:  4, }));
    }
}
