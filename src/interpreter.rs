/// The evaluator module executes postfix token sequences.
///
/// The evaluator runs a stack machine over the postfix sequence, checks the
/// operand types of every operator, and reduces the sequence to one value.
/// It is the last phase of the pipeline.
///
/// # Responsibilities
/// - Applies arithmetic, comparison and logical operators.
/// - Reports type errors naming the operator and the offending types.
/// - Rejects malformed sequences instead of panicking.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text and produces a sequence of tokens: numbers,
/// booleans and operator symbols. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens, in source order.
/// - Recognizes keywords without regard to letter case.
/// - Reports invalid characters, unknown keywords and malformed numbers.
pub mod lexer;
/// The converter module reorders tokens into postfix order.
///
/// The converter implements the shunting-yard algorithm: it resolves
/// precedence, associativity, parentheses and prefix operators, so that the
/// evaluator needs none of them.
///
/// # Responsibilities
/// - Produces a postfix sequence from an infix one.
/// - Rewrites unary minus into a multiplication by `-1`.
/// - Reports unbalanced parentheses.
pub mod converter;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the two value types an expression can produce, numbers and
/// booleans, together with their type names and printed form.
pub mod value;
