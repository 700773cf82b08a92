/// Arithmetic operators: `+ - * / % ^`.
pub mod arithmetic;
/// Comparison operators: `== != < > <= >=`.
pub mod comparison;
/// Routing from an operator to its handler.
pub mod core;
/// Logical operators: `and or`.
pub mod logic;
