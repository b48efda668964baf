use crate::token::{Token, TokenKind};

/// One `name = value` line per binding.
pub fn bindings(bindings: &[(String, i64)]) -> String {
    let mut s = String::new();
    for (name, value) in bindings.iter() {
        s.push_str(format!("{} = {}\n", name, value).as_str());
    }
    s
}

/// One line per token: position, kind tag and lexeme.
pub fn tokens(tokens: &[Token]) -> String {
    let mut s = String::new();
    for token in tokens.iter() {
        s.push_str(format!("{:>4}  {:<6} {}\n", token.position, tag(&token.kind), token.lexeme).as_str());
    }
    s
}

fn tag(kind: &TokenKind) -> &'static str {
    use TokenKind::*;
    match kind {
        Identifier => "ID",
        IntegerLiteral => "IL",
        Operator(_) => "OP",
        LeftParen => "LP",
        RightParen => "RP",
        Semicolon => "PM",
        EndOfInput => "EOI",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::tokenize;

    #[test]
    fn prints_bindings_in_given_order() {
        let printed = bindings(&[("z".into(), -8), ("a".into(), 1)]);
        assert_eq!(printed, "z = -8\na = 1\n");
    }

    #[test]
    fn prints_nothing_for_no_bindings() {
        assert_eq!(bindings(&[]), "");
    }

    #[test]
    fn prints_tokens_with_tags() -> crate::error::Result<()> {
        let printed = tokens(&tokenize("x=(1);")?);
        let tags: Vec<_> = printed.lines()
            .map(|l| l.split_whitespace().nth(1).unwrap_or("").to_string())
            .collect();
        assert_eq!(tags, vec!["ID", "OP", "LP", "IL", "RP", "PM"]);
        Ok(())
    }
}
