use logos::Logos;

use crate::error::ParseError;

/// Classifies a lexical token.
///
/// The attribute on each variant is its matching rule. Logos applies maximal
/// munch, so a multi-character operator always wins over its single-character
/// prefix (`==` is never split into two `=` tokens) regardless of the order
/// the variants are declared in.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Variable references: the `#` sigil followed by letters, e.g. `#name`.
    #[regex("#[a-zA-Zа-яА-Я]*")]
    Variable,
    /// Integer literal tokens, such as `42`.
    #[regex("[0-9]+")]
    Integer,
    /// String literal tokens. The quotes are part of the token text and are
    /// stripped at evaluation time.
    #[regex(r#""[^"]*""#)]
    Str,
    /// `stdout`
    #[token("stdout")]
    Stdout,
    /// `stdin`
    #[token("stdin")]
    Stdin,
    /// `loop`
    #[token("loop")]
    Loop,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Whitespace runs. Kept by [`scan`], removed by [`tokenize`].
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    /// `%`-delimited comments, no nesting. Kept by [`scan`], removed by
    /// [`tokenize`].
    #[regex("%[^%]*%")]
    Comment,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Variable => "variable",
            Self::Integer => "integer",
            Self::Str => "string",
            Self::Stdout => "stdout",
            Self::Stdin => "stdin",
            Self::Loop => "loop",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
        };
        write!(f, "{name}")
    }
}

/// A classified, positioned fragment of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's classification.
    pub kind:   TokenKind,
    /// The literal matched text.
    pub text:   String,
    /// Byte offset of the first matched character in the source.
    pub offset: usize,
}

/// Scans the full source into tokens, whitespace and comments included.
///
/// Concatenating the `text` of every returned token reconstructs the source
/// exactly.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` with the byte offset of the
/// first input that no token rule matches.
///
/// # Example
/// ```
/// use tauscript::interpreter::lexer::scan;
///
/// let source = "%note% stdout 1;";
/// let tokens = scan(source).unwrap();
/// let rebuilt: String = tokens.iter().map(|token| token.text.as_str()).collect();
///
/// assert_eq!(rebuilt, source);
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            text: lexer.slice().to_string(),
                                            offset: lexer.span().start, }),
            Err(()) => return Err(ParseError::UnexpectedCharacter { offset: lexer.span().start }),
        }
    }

    Ok(tokens)
}

/// Scans the source and filters out whitespace and comment tokens.
///
/// The result is the order-preserving token sequence the parser consumes.
/// Filtering builds a fresh vector in a single pass over the scanned tokens.
///
/// # Errors
/// Propagates any `ParseError` from [`scan`].
///
/// # Example
/// ```
/// use tauscript::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("#a = 5;").unwrap();
///
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let tokens = scan(source)?;

    Ok(tokens.into_iter()
             .filter(|token| !matches!(token.kind, TokenKind::Whitespace | TokenKind::Comment))
             .collect())
}
