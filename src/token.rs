use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
    pub(crate) position: usize,
}

impl Token {
    pub(crate) fn new<S: Into<String>>(kind: TokenKind, lexeme: S, position: usize) -> Self {
        Token { kind, lexeme: lexeme.into(), position }
    }

    pub(crate) fn end_of_input(position: usize) -> Self {
        Token::new(TokenKind::EndOfInput, "", position)
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn lexeme(&self) -> &str {
        self.lexeme.as_str()
    }

    /// Zero-based character offset of the token's first character.
    pub fn position(&self) -> usize {
        self.position
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    Operator(Operator),
    LeftParen,
    RightParen,
    Semicolon,
    EndOfInput,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operator {
    pub fn symbol(&self) -> char {
        use Operator::*;
        match self {
            Assign => '=',
            Plus => '+',
            Minus => '-',
            Star => '*',
            Slash => '/',
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;
        match self {
            Identifier => write!(f, "identifier"),
            IntegerLiteral => write!(f, "integer literal"),
            Operator(op) => write!(f, "operator '{}'", op.symbol()),
            LeftParen => write!(f, "'('"),
            RightParen => write!(f, "')'"),
            Semicolon => write!(f, "';'"),
            EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Tokens of one statement plus a read cursor that only moves forward.
///
/// Reading past the last token yields a synthetic `EndOfInput` token, so the
/// parser never has to special-case an exhausted stream.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last()
            .map(|t| t.position + t.lexeme.chars().count())
            .unwrap_or(0);
        Self { tokens, cursor: 0, eof: Token::end_of_input(end) }
    }

    pub fn peek(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.eof)
    }

    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.cursor <= self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_at_boundary(&self) -> bool {
        matches!(self.peek().kind, TokenKind::EndOfInput | TokenKind::Semicolon)
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}
