use crate::{
    error::{Error, Result},
    token::{Operator, Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::Chars;

static SINGLE_CHAR_TOKENS: phf::Map<char, TokenKind> = phf_map! {
    '=' => TokenKind::Operator(Operator::Assign),
    '+' => TokenKind::Operator(Operator::Plus),
    '-' => TokenKind::Operator(Operator::Minus),
    '*' => TokenKind::Operator(Operator::Star),
    '/' => TokenKind::Operator(Operator::Slash),
    '(' => TokenKind::LeftParen,
    ')' => TokenKind::RightParen,
    ';' => TokenKind::Semicolon,
};

/// Scans a whole text into tokens, stopping at the first lexical error.
pub fn tokenize(src: &str) -> Result<Vec<Token>> {
    Scanner::new(src).scan_tokens()
}

pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    position: usize,
    start: usize,
    failed: bool,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        if self.failed { return None }

        loop {
            self.start = self.position;
            let kind = self.next_token_kind()?;

            let lexeme = self.lexeme_buffer.clone();
            self.lexeme_buffer.clear();

            match kind {
                Some(Ok(kind)) => {
                    log::trace!("scanned {:?} '{}' at {}", kind, lexeme, self.start);
                    return Some(Ok(Token::new(kind, lexeme, self.start)))
                },
                Some(Err(e)) => {
                    self.failed = true;
                    return Some(Err(e))
                },
                None => continue,
            }
        }
    }
}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            position: 0,
            start: 0,
            failed: false,
        }
    }

    pub fn scan_tokens(self) -> Result<Vec<Token>> {
        self.collect()
    }

    /// `None` once the input is exhausted, `Some(None)` for skipped input.
    fn next_token_kind(&mut self) -> Option<Option<Result<TokenKind>>> {
        let next_char = self.advance()?;

        let kind = match next_char {
            c if is_blank(c) => None,
            c if c.is_ascii_digit() => Some(self.extract_integer(c)),
            c if c.is_ascii_alphabetic() => Some(self.extract_identifier()),
            c => Some(SINGLE_CHAR_TOKENS.get(&c)
                .copied()
                .ok_or_else(|| Error::lexical(self.start, format!("Unexpected character '{}'", c)))),
        };
        Some(kind)
    }

    fn extract_integer(&mut self, first: char) -> Result<TokenKind> {
        if first == '0' {
            if let Some(&next) = self.src.peek() {
                if next.is_ascii_digit() {
                    return Err(Error::lexical(
                        self.start,
                        format!("Invalid literal '0{}': a literal may not start with 0", next),
                    ));
                }
            }
        }

        self.advance_while(|c| c.is_ascii_digit());

        match self.lexeme_buffer.parse::<i64>() {
            Err(_) => Err(Error::lexical(
                self.start,
                format!("Literal {} is out of range", self.lexeme_buffer),
            )),
            Ok(_) => Ok(TokenKind::IntegerLiteral),
        }
    }

    fn extract_identifier(&mut self) -> Result<TokenKind> {
        self.advance_while(is_part_of_valid_identifier);
        Ok(TokenKind::Identifier)
    }

    fn advance(&mut self) -> Option<char> {
        let next = self.src.next()?;
        self.position += 1;
        if !is_blank(next) {
            self.lexeme_buffer.push(next);
        }
        Some(next)
    }

    fn advance_while(&mut self, should_continue: impl Fn(&char) -> bool) {
        while self.src.peek().map_or(false, |c| should_continue(c)) {
            self.advance();
        }
    }
}

/// Separators between tokens; any other whitespace is an unexpected character.
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_part_of_valid_identifier(c: &char) -> bool {
    c.is_ascii_alphanumeric()
}
