/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: arithmetic, comparisons
/// and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT, the only operator that consumes a single operand
/// at evaluation time.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the stack machine that runs a postfix sequence and the
/// `evaluate` entry point.
pub mod core;
