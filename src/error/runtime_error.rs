#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable, sigil included.
        name:   String,
        /// Byte offset of the reference in the source.
        offset: usize,
    },
    /// An operator was applied to incompatible value kinds.
    TypeMismatch {
        /// The operator's symbol.
        operator: String,
        /// The runtime type name of the left operand.
        left:     &'static str,
        /// The runtime type name of the right operand.
        right:    &'static str,
        /// Byte offset of the operation in the source.
        offset:   usize,
    },
    /// An arithmetic operation could not produce a value, e.g. division by
    /// zero or integer overflow.
    ArithmeticFault {
        /// Details describing the fault.
        reason: String,
        /// Byte offset of the operation in the source.
        offset: usize,
    },
    /// An operand position evaluated to no value.
    MissingValue {
        /// Byte offset of the enclosing operation in the source.
        offset: usize,
    },
    /// The target of an assignment or `stdin` read was not a variable node.
    InvalidStoreTarget {
        /// The operation whose target was invalid.
        operator: &'static str,
        /// Byte offset of the operation in the source.
        offset:   usize,
    },
    /// Reading from input or writing to output failed.
    Io {
        /// Details from the underlying I/O error.
        details: String,
        /// Byte offset of the operation in the source.
        offset:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, offset } => {
                write!(f, "Error at offset {offset}: Variable '{name}' is not defined.")
            },

            Self::TypeMismatch { operator,
                                 left,
                                 right,
                                 offset, } => write!(f,
                                                     "Error at offset {offset}: Operator '{operator}' cannot be applied to {left} and {right}."),

            Self::ArithmeticFault { reason, offset } => {
                write!(f, "Error at offset {offset}: {reason}.")
            },

            Self::MissingValue { offset } => {
                write!(f, "Error at offset {offset}: Expression produced no value.")
            },

            Self::InvalidStoreTarget { operator, offset } => {
                write!(f, "Error at offset {offset}: Target of '{operator}' must be a variable.")
            },

            Self::Io { details, offset } => {
                write!(f, "Error at offset {offset}: I/O failure: {details}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
