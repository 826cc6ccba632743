/// Core parser state.
///
/// Holds the token cursor, the `match_token`/`require` lookahead pair, and
/// the top-level program rule.
pub mod core;

/// Statement parsing.
///
/// Implements the statement-level rules: assignments, `stdout`/`stdin`
/// statements, and the `loop` construct (consumed without building a node).
pub mod statement;

/// Binary operator chain parsing.
///
/// Implements the flat, left-associative formula and condition chains,
/// their parenthesized forms, and primaries.
pub mod binary;
