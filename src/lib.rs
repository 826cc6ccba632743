//! # tauscript
//!
//! tauscript is a tree-walking interpreter for TauScript, a tiny imperative
//! scripting language with integers, strings, variables, flat
//! left-associative expressions, and primitive I/O. A program is a sequence
//! of `;`-terminated statements; variables carry a `#` sigil and live in a
//! single global environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, BufReader, Write};

use crate::interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::Parser};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operator types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node variants for all language constructs.
/// - Attaches source offsets to nodes for error reporting.
/// - Keeps the node set closed so consumers match exhaustively.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, so callers can branch on phase and cause. Every error
/// carries the source position where it was detected.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for user feedback.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the variable environment to provide a complete
/// runtime for TauScript source.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Executes a TauScript source unit against the process's standard streams.
///
/// The source is tokenized, parsed into a statement sequence, and evaluated
/// once. All side effects go to process stdout; `stdin` statements block on
/// process stdin.
///
/// # Errors
/// Returns the first lexing, parsing, or runtime error. Errors propagate
/// unrecovered from the point of detection; nothing is swallowed or
/// downgraded.
///
/// # Examples
/// ```
/// use tauscript::run_script;
///
/// // Assigns and prints; no error expected.
/// let res = run_script("#a = 1 + 2; stdout #a;");
/// assert!(res.is_ok());
///
/// // Reading a variable that was never assigned fails.
/// let res = run_script("stdout #missing;");
/// assert!(res.is_err());
/// ```
pub fn run_script(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    run_script_with_io(source, BufReader::new(io::stdin()), io::stdout())
}

/// Executes a TauScript source unit with caller-supplied I/O handles.
///
/// This is the seam tests use to feed `stdin` lines and capture `stdout`
/// bytes; [`run_script`] delegates here with the process streams.
///
/// # Errors
/// Returns the first lexing, parsing, or runtime error.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use tauscript::run_script_with_io;
///
/// let mut output = Vec::new();
/// run_script_with_io("#a = 2 + 3; stdout #a;", Cursor::new(""), &mut output).unwrap();
///
/// assert_eq!(output, b"5");
/// ```
pub fn run_script_with_io<R, W>(source: &str,
                                input: R,
                                output: W)
                                -> Result<(), Box<dyn std::error::Error>>
    where R: BufRead,
          W: Write
{
    let tokens = tokenize(source)?;
    let program = Parser::new(tokens).parse_program()?;

    let mut context = Context::with_io(input, output);
    context.eval(&program)?;

    Ok(())
}
