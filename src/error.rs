/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unmatched input characters, unexpected tokens,
/// and required tokens that were missing.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined variables, type mismatches, arithmetic faults
/// such as division by zero, and I/O failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
