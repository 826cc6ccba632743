#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found input that no token rule matches.
    UnexpectedCharacter {
        /// Byte offset of the offending character in the source.
        offset: usize,
    },
    /// Found a token that no grammar alternative accepts.
    UnexpectedToken {
        /// The offending token text, or `"end of input"`.
        token:    String,
        /// The token cursor position where the error occurred.
        position: usize,
    },
    /// A specific required token was missing.
    ExpectedToken {
        /// The name of the expected token kind.
        expected: String,
        /// The token cursor position where the error occurred.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { offset } => {
                write!(f, "Error at offset {offset}: Unexpected character.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token '{token}'.")
            },

            Self::ExpectedToken { expected, position } => {
                write!(f, "Error at position {position}: Expected '{expected}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
