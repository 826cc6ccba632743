/// Core evaluation logic.
///
/// Defines the evaluation context, the dispatch over AST node variants, and
/// shared helpers.
pub mod core;

/// Input/output operation evaluation.
///
/// Implements `stdout` (write a value, no trailing separator) and `stdin`
/// (read one line into a variable as a string).
pub mod unary;

/// Binary operator evaluation.
///
/// Implements assignment, checked arithmetic, exponentiation, and
/// comparisons.
pub mod binary;
