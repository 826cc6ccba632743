use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation state.
///
/// `Context` owns the variable [`Environment`] plus the input and output
/// handles used by `stdin` and `stdout`. The handles are generic so callers
/// (tests in particular) can substitute in-memory buffers; [`Context::new`]
/// wires up the process's standard streams.
///
/// Evaluation is single-threaded and strictly sequential in source order; a
/// `stdin` operation blocks until a line is available.
pub struct Context<R, W> {
    /// The variable store, mutated by assignment and `stdin` reads.
    pub environment: Environment,
    pub(in crate::interpreter::evaluator) input:  R,
    pub(in crate::interpreter::evaluator) output: W,
}

#[allow(clippy::new_without_default)]
impl Context<BufReader<Stdin>, Stdout> {
    /// Creates a context reading from process stdin and writing to stdout,
    /// with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Creates a context around caller-supplied input and output handles.
    pub fn with_io(input: R, output: W) -> Self {
        Self { environment: Environment::new(),
               input,
               output }
    }

    /// Evaluates an AST node.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// by node variant: literals and variable reads produce values, the I/O
    /// and statement-sequence variants perform side effects, and binary
    /// operations evaluate their left operand fully before their right one.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for the
    /// side-effect-only constructs (`stdout`, `stdin`, statement sequences).
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::IntegerLiteral { text, offset } => {
                eval_integer_literal(text, *offset).map(Some)
            },
            Node::StringLiteral { text, .. } => Ok(Some(Value::Str(unquote(text)))),
            Node::Variable { name, offset } => self.eval_variable(name, *offset).map(Some),
            Node::UnaryOp { op, operand, offset } => self.eval_io(*op, operand, *offset),
            Node::BinaryOp { op,
                             left,
                             right,
                             offset, } => self.eval_binary_op(*op, left, right, *offset),
            Node::Statements { statements } => self.eval_statements(statements),
        }
    }

    /// Evaluates each statement in order for its side effects, discarding
    /// results.
    fn eval_statements(&mut self, statements: &[Node]) -> EvalResult<Option<Value>> {
        for statement in statements {
            self.eval(statement)?;
        }
        Ok(None)
    }

    /// Looks up a variable, cloning its current value.
    fn eval_variable(&self, name: &str, offset: usize) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             offset })
    }

    /// Evaluates a subexpression that must produce a value.
    ///
    /// Operand positions require a value; an operand that evaluates to
    /// nothing is reported as a `MissingValue` at the enclosing operation's
    /// offset.
    pub(in crate::interpreter::evaluator) fn eval_child(&mut self,
                                                        node: &Node,
                                                        offset: usize)
                                                        -> EvalResult<Value> {
        self.eval(node)?.ok_or(RuntimeError::MissingValue { offset })
    }
}

/// Parses an integer literal's digit text into a value.
fn eval_integer_literal(text: &str, offset: usize) -> EvalResult<Value> {
    text.parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| RuntimeError::ArithmeticFault { reason: format!("Integer literal '{text}' does not fit in 64 bits"),
                                                     offset })
}

/// Strips the surrounding quotes from a string literal's token text.
fn unquote(text: &str) -> String {
    text.trim_matches('"').to_string()
}
