/// An abstract syntax tree (AST) node.
///
/// `Node` covers every construct the language can express: literals,
/// variable references, the two I/O operations, binary operations, and the
/// top-level statement sequence. The set of variants is closed and consumers
/// match exhaustively, so adding a variant forces every consumer to handle
/// it. A tree is immutable once the parser has built it; only the
/// [`Environment`](crate::interpreter::environment::Environment) changes at
/// evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An integer literal. The digit text is kept verbatim and parsed into a
    /// value at evaluation time.
    IntegerLiteral {
        /// The literal's digit text.
        text:   String,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// A string literal. The text retains its surrounding quotes; they are
    /// stripped at evaluation time.
    StringLiteral {
        /// The literal's token text, quotes included.
        text:   String,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// Reference to a variable by name. The name includes the `#` sigil and
    /// is compared by exact textual equality.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// An input/output operation applied to a single operand.
    UnaryOp {
        /// The I/O operation to perform.
        op:      IoOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Byte offset in the source code.
        offset:  usize,
    },
    /// A binary operation. Operator chains are built flat and
    /// left-associative with no precedence distinction.
    BinaryOp {
        /// The operator.
        op:     BinaryOperator,
        /// Left operand.
        left:   Box<Self>,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// An ordered sequence of statements, evaluated for side effects.
    Statements {
        /// The statements, in source order.
        statements: Vec<Self>,
    },
}

/// Represents a binary operator.
///
/// Binary operators include assignment, arithmetic, and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Assignment (`=`)
    Assign,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Equal to (`==`)
    Equal,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
}

/// Represents an input/output operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IoOperator {
    /// Write a value to standard output (`stdout`).
    Stdout,
    /// Read a line from standard input into a variable (`stdin`).
    Stdin,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Assign, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Pow, Sub,
        };
        let operator = match self {
            Assign => "=",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Equal => "==",
            Greater => ">",
            GreaterEqual => ">=",
            Less => "<",
            LessEqual => "<=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for IoOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Stdout => "stdout",
            Self::Stdin => "stdin",
        };
        write!(f, "{operator}")
    }
}
