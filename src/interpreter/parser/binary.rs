use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Operators accepted in a formula chain.
///
/// Arithmetic and comparison operators share a single flat level: `2+3*4`
/// parses as `(2+3)*4`, and a comparison may continue an arithmetic chain.
const FORMULA_OPERATORS: &[TokenKind] = &[TokenKind::Plus,
                                          TokenKind::Minus,
                                          TokenKind::Star,
                                          TokenKind::Slash,
                                          TokenKind::Caret,
                                          TokenKind::EqualEqual,
                                          TokenKind::Greater,
                                          TokenKind::GreaterEqual,
                                          TokenKind::Less,
                                          TokenKind::LessEqual];

/// Operators accepted in a loop-header condition chain.
const CONDITION_OPERATORS: &[TokenKind] = &[TokenKind::EqualEqual,
                                            TokenKind::Greater,
                                            TokenKind::GreaterEqual,
                                            TokenKind::Less,
                                            TokenKind::LessEqual];

/// Maps an operator token kind to its AST operator.
fn binary_operator(kind: TokenKind) -> BinaryOperator {
    match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Caret => BinaryOperator::Pow,
        TokenKind::EqualEqual => BinaryOperator::Equal,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        _ => unreachable!("not a binary operator token"),
    }
}

impl Parser {
    /// Parses a formula: a flat, left-associative operator chain.
    ///
    /// Grammar: `formula := paren_formula { operator paren_formula }`
    ///
    /// There is no precedence between chain links; each operator folds the
    /// chain built so far into its left operand.
    pub(in crate::interpreter::parser) fn parse_formula(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_parenthesized_formula()?;

        while let Some(operator) = self.match_token(FORMULA_OPERATORS) {
            let right = self.parse_parenthesized_formula()?;
            left = Node::BinaryOp { op:     binary_operator(operator.kind),
                                    left:   Box::new(left),
                                    right:  Box::new(right),
                                    offset: operator.offset, };
        }

        Ok(left)
    }

    /// Grammar: `paren_formula := "(" formula ")" | primary`
    fn parse_parenthesized_formula(&mut self) -> ParseResult<Node> {
        if self.match_token(&[TokenKind::LParen]).is_some() {
            let node = self.parse_formula()?;
            self.require(&[TokenKind::RParen])?;
            return Ok(node);
        }
        self.parse_primary()
    }

    /// Parses a loop-header condition: a flat chain of comparisons.
    ///
    /// Grammar: `condition := paren_condition { compare_op paren_condition }`
    pub(in crate::interpreter::parser) fn parse_condition(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_parenthesized_condition()?;

        while let Some(operator) = self.match_token(CONDITION_OPERATORS) {
            let right = self.parse_parenthesized_condition()?;
            left = Node::BinaryOp { op:     binary_operator(operator.kind),
                                    left:   Box::new(left),
                                    right:  Box::new(right),
                                    offset: operator.offset, };
        }

        Ok(left)
    }

    /// Grammar: `paren_condition := "(" condition ")" | primary`
    fn parse_parenthesized_condition(&mut self) -> ParseResult<Node> {
        if self.match_token(&[TokenKind::LParen]).is_some() {
            let node = self.parse_condition()?;
            self.require(&[TokenKind::RParen])?;
            return Ok(node);
        }
        self.parse_primary()
    }

    /// Parses a primary: an integer literal, string literal, or variable.
    fn parse_primary(&mut self) -> ParseResult<Node> {
        if let Some(token) = self.match_token(&[TokenKind::Integer]) {
            return Ok(Node::IntegerLiteral { text:   token.text,
                                             offset: token.offset, });
        }
        if let Some(token) = self.match_token(&[TokenKind::Str]) {
            return Ok(Node::StringLiteral { text:   token.text,
                                            offset: token.offset, });
        }
        if let Some(token) = self.match_token(&[TokenKind::Variable]) {
            return Ok(Node::Variable { name:   token.text,
                                       offset: token.offset, });
        }

        Err(ParseError::UnexpectedToken { token:    self.found_text(),
                                          position: self.pos, })
    }
}
