use crate::{
    ast::Node,
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a filtered token sequence.
///
/// The parser keeps a cursor into the token vector and advances it through
/// [`Parser::match_token`] and [`Parser::require`], which together give
/// exactly one token of lookahead. Each grammar rule is a method that may
/// call other rule methods recursively; the result is an immutable AST.
pub struct Parser {
    pub(in crate::interpreter::parser) tokens: Vec<Token>,
    pub(in crate::interpreter::parser) pos:    usize,
}

impl Parser {
    /// Creates a parser over `tokens` with the cursor at the start.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a complete program.
    ///
    /// Grammar: `program := { statement ";" }`
    ///
    /// Every statement must be terminated by a semicolon. A `loop` statement
    /// is consumed syntactically but contributes no node to the sequence.
    ///
    /// # Errors
    /// Returns a `ParseError` if a statement is malformed or its terminating
    /// `;` is missing.
    ///
    /// # Example
    /// ```
    /// use tauscript::interpreter::{lexer::tokenize, parser::core::Parser};
    ///
    /// let tokens = tokenize("#a = 5; stdout #a;").unwrap();
    /// let program = Parser::new(tokens).parse_program();
    ///
    /// assert!(program.is_ok());
    /// ```
    pub fn parse_program(&mut self) -> ParseResult<Node> {
        let mut statements = Vec::new();

        while self.pos < self.tokens.len() {
            let statement = self.parse_statement()?;
            self.require(&[TokenKind::Semicolon])?;
            if let Some(statement) = statement {
                statements.push(statement);
            }
        }

        Ok(Node::Statements { statements })
    }

    /// Consumes and returns the current token if its kind is in `expected`.
    ///
    /// Otherwise leaves the cursor untouched and returns `None`.
    pub(in crate::interpreter::parser) fn match_token(&mut self,
                                                      expected: &[TokenKind])
                                                      -> Option<Token> {
        let token = self.tokens.get(self.pos)?;
        if expected.contains(&token.kind) {
            let token = token.clone();
            self.pos += 1;
            return Some(token);
        }
        None
    }

    /// Like [`Parser::match_token`], but failing to match is a parse error
    /// naming the first expected kind and the cursor position.
    pub(in crate::interpreter::parser) fn require(&mut self,
                                                  expected: &[TokenKind])
                                                  -> ParseResult<Token> {
        let position = self.pos;
        self.match_token(expected)
            .ok_or_else(|| ParseError::ExpectedToken { expected: expected[0].to_string(),
                                                       position })
    }

    /// The kind of the token under the cursor, if any.
    pub(in crate::interpreter::parser) fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|token| token.kind)
    }

    /// Consumes the current token unconditionally.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        self.pos += 1;
    }

    /// The text of the token under the cursor, for error messages.
    pub(in crate::interpreter::parser) fn found_text(&self) -> String {
        self.tokens
            .get(self.pos)
            .map_or_else(|| "end of input".to_string(), |token| token.text.clone())
    }
}
