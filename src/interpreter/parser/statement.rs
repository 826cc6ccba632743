use crate::{
    ast::{BinaryOperator, IoOperator, Node},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a single statement.
    ///
    /// Grammar: `statement := loop | io_stmt | assignment`
    ///
    /// Returns `Ok(None)` for a `loop`: the construct is consumed
    /// syntactically but builds no node and has no effect at evaluation
    /// time.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self)
                                                          -> ParseResult<Option<Node>> {
        if self.match_token(&[TokenKind::Loop]).is_some() {
            self.parse_loop()?;
            return Ok(None);
        }

        match self.peek_kind() {
            Some(TokenKind::Stdout | TokenKind::Stdin) => self.parse_io().map(Some),
            Some(TokenKind::Variable) => self.parse_assignment().map(Some),
            _ => Err(ParseError::UnexpectedToken { token:    self.found_text(),
                                                   position: self.pos, }),
        }
    }

    /// Parses an assignment statement.
    ///
    /// Grammar: `assignment := variable "=" formula`
    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let target = self.parse_variable()?;
        let assign = self.require(&[TokenKind::Equals])?;
        let value = self.parse_formula()?;

        Ok(Node::BinaryOp { op:     BinaryOperator::Assign,
                            left:   Box::new(target),
                            right:  Box::new(value),
                            offset: assign.offset, })
    }

    /// Parses an input/output statement.
    ///
    /// Grammar: `io_stmt := "stdout" formula | "stdin" variable`
    ///
    /// `stdout` takes a full formula as its operand; `stdin` takes a bare
    /// variable, not an expression.
    fn parse_io(&mut self) -> ParseResult<Node> {
        let keyword = self.require(&[TokenKind::Stdout, TokenKind::Stdin])?;

        let (op, operand) = match keyword.kind {
            TokenKind::Stdout => (IoOperator::Stdout, self.parse_formula()?),
            TokenKind::Stdin => (IoOperator::Stdin, self.parse_variable()?),
            _ => unreachable!("parse_io called without an IO keyword"),
        };

        Ok(Node::UnaryOp { op,
                           operand: Box::new(operand),
                           offset: keyword.offset, })
    }

    /// Parses a `loop` header and its brace-delimited body.
    ///
    /// Grammar: `loop := "loop" "(" variable ";" condition ")" "{" {token} "}"`
    ///
    /// The header is validated and the body tokens are consumed up to the
    /// closing brace, but no node is built: the parsed header is discarded
    /// and the body never executes.
    fn parse_loop(&mut self) -> ParseResult<()> {
        self.require(&[TokenKind::LParen])?;
        self.parse_variable()?;
        self.require(&[TokenKind::Semicolon])?;
        self.parse_condition()?;
        self.require(&[TokenKind::RParen])?;

        self.require(&[TokenKind::LBrace])?;
        while self.peek_kind().is_some_and(|kind| kind != TokenKind::RBrace) {
            self.advance();
        }
        self.require(&[TokenKind::RBrace])?;

        Ok(())
    }

    /// Parses a bare variable reference.
    pub(in crate::interpreter::parser) fn parse_variable(&mut self) -> ParseResult<Node> {
        let token = self.require(&[TokenKind::Variable])?;

        Ok(Node::Variable { name:   token.text,
                            offset: token.offset, })
    }
}
