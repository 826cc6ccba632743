/// The environment module holds the variable store.
///
/// A single flat mapping from variable name to runtime value, created empty
/// at interpreter start and mutated only by assignment and `stdin` reads.
pub mod environment;
/// The evaluator module executes AST nodes and performs side effects.
///
/// The evaluator walks the AST recursively, computes values, applies
/// operators, and performs I/O against the environment and the context's
/// input/output handles. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Owns the environment and the `stdin`/`stdout` handles.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind, literal text, and byte offset. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into classified, positioned tokens.
/// - Keeps whitespace and comments through [`lexer::scan`] and filters them
///   in [`lexer::tokenize`].
/// - Reports a lexical error for input no token rule matches.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser walks the token sequence with a single-token-lookahead cursor
/// and constructs an AST representing the program's statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with the cursor position.
/// - Consumes `loop` constructs without building nodes for them.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, strings, and booleans.
/// - Provides type names for diagnostics and `Display` output for `stdout`.
pub mod value;
