use std::result;
use std::fmt::{self, Display};

use crate::token::{Token, TokenKind};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    Lexical { position: usize },
    Syntactic { token: Token },
    Evaluation { token: Token },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn lexical<S: Into<String>>(position: usize, message: S) -> Error {
        let kind = ErrorKind::Lexical { position };
        Error { kind, message: message.into() }
    }

    pub fn syntactic<S: Into<String>>(token: Token, message: S) -> Error {
        let kind = ErrorKind::Syntactic { token };
        Error { kind, message: message.into() }
    }

    pub fn evaluation<S: Into<String>>(token: Token, message: S) -> Error {
        let kind = ErrorKind::Evaluation { token };
        Error { kind, message: message.into() }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, ErrorKind::Lexical { .. })
    }

    pub fn is_syntactic(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntactic { .. })
    }

    pub fn is_evaluation(&self) -> bool {
        matches!(self.kind, ErrorKind::Evaluation { .. })
    }

    /// One-based column, for humans.
    fn column(&self) -> usize {
        use ErrorKind::*;
        let position = match self.kind() {
            Lexical { position } => *position,
            Syntactic { token } | Evaluation { token } => token.position,
        };
        position + 1
    }

    fn loc(&self) -> String {
        use ErrorKind::*;
        match self.kind() {
            Syntactic { token } | Evaluation { token } => {
                if token.kind == TokenKind::EndOfInput {
                    " at end".to_string()
                } else {
                    format!(" at '{}'", token.lexeme)
                }
            },
            Lexical { .. } => "".to_string(),
        }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[col {}] Error{}: {}", self.column(), self.loc(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_errors_report_column() {
        let e = Error::lexical(4, "Unexpected character '#'");
        assert!(e.is_lexical());
        assert_eq!(e.to_string(), "[col 5] Error: Unexpected character '#'");
    }

    #[test]
    fn syntax_errors_name_the_token() {
        let token = Token::new(TokenKind::RightParen, ")", 2);
        let e = Error::syntactic(token, "Expected expression.");
        assert!(e.is_syntactic());
        assert_eq!(e.to_string(), "[col 3] Error at ')': Expected expression.");
    }

    #[test]
    fn errors_at_end_of_input_say_so() {
        let e = Error::syntactic(Token::end_of_input(5), "Expected ')' after expression.");
        assert_eq!(e.to_string(), "[col 6] Error at end: Expected ')' after expression.");
    }
}
