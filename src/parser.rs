use crate::{
    environment::Environment,
    error::{Error, Result},
    evaluator::EvaluationStack,
    token::*,
};

const TERM_OPERATORS: &'static [Operator] = &[
    Operator::Plus,
    Operator::Minus,
];

const FACTOR_OPERATORS: &'static [Operator] = &[
    Operator::Star,
    Operator::Slash,
];

/// Deepest parenthesised nesting accepted before giving up.
pub const MAX_NESTING: usize = 256;

/// Parses and evaluates `Identifier '=' Expression`, returning the binding.
///
/// The environment is only read; writing the result back is up to the caller.
pub fn evaluate_statement<T: Into<TokenStream>>(tokens: T, env: &Environment) -> Result<(String, i64)> {
    Parser::new(tokens, env).statement()
}

/// Parses and evaluates a bare expression.
pub fn evaluate_expression<T: Into<TokenStream>>(tokens: T, env: &Environment) -> Result<i64> {
    Parser::new(tokens, env).expression_only()
}

/// Recursive-descent parser that evaluates as it recognises.
///
/// ```text
/// Statement  := Identifier '=' Expression
/// Expression := Term (('+' | '-') Term)*
/// Term       := Factor (('*' | '/') Factor)*
/// Factor     := IntegerLiteral | Identifier | '(' Expression ')'
/// ```
///
/// All state lives in the parser value, which is consumed by the entry points.
pub struct Parser<'e> {
    tokens: TokenStream,
    env: &'e Environment,
    stack: EvaluationStack,
    depth: usize,
}

impl <'e> Parser<'e> {
    pub fn new<T: Into<TokenStream>>(tokens: T, env: &'e Environment) -> Self {
        Parser { tokens: tokens.into(), env, stack: EvaluationStack::new(), depth: 0 }
    }

    pub fn statement(mut self) -> Result<(String, i64)> {
        let name = self.consume(&TokenKind::Identifier, "Expected variable name.")?;
        self.consume(&TokenKind::Operator(Operator::Assign), "Expected '=' after variable name.")?;
        self.expression()?;
        let value = self.finish()?;
        log::debug!("evaluated {} = {}", name.lexeme, value);
        Ok((name.lexeme, value))
    }

    pub fn expression_only(mut self) -> Result<i64> {
        self.expression()?;
        self.finish()
    }

    fn finish(self) -> Result<i64> {
        let next = self.tokens.peek().clone();
        if !self.tokens.is_at_boundary() {
            return Err(Error::syntactic(next, "Unexpected token after expression."));
        }
        self.stack.finish(&next)
    }

    fn expression(&mut self) -> Result<()> {
        self.fold_binary_with_operators(Self::term, TERM_OPERATORS)
    }

    fn term(&mut self) -> Result<()> {
        self.fold_binary_with_operators(Self::factor, FACTOR_OPERATORS)
    }

    fn factor(&mut self) -> Result<()> {
        let token = self.tokens.advance();

        match token.kind {
            TokenKind::IntegerLiteral => {
                let value = token.lexeme.parse::<i64>()
                    .map_err(|e| Error::evaluation(token.clone(), e.to_string()))?;
                self.stack.push(value);
                Ok(())
            },
            TokenKind::Identifier => {
                let value = self.env.read(&token)?;
                self.stack.push(value);
                Ok(())
            },
            TokenKind::LeftParen => {
                if self.depth == MAX_NESTING {
                    return Err(Error::syntactic(token, "Expression nested too deeply."));
                }
                self.depth += 1;
                self.expression()?;
                self.consume(&TokenKind::RightParen, "Expected ')' after expression.")?;
                self.depth -= 1;
                Ok(())
            },
            kind => Err(Error::syntactic(token, format!("Expected expression, found {}.", kind))),
        }
    }

    fn consume(&mut self, kind: &TokenKind, error_msg: &str) -> Result<Token> {
        if &self.tokens.peek().kind == kind {
            Ok(self.tokens.advance())
        } else {
            Err(Error::syntactic(self.tokens.peek().clone(), error_msg))
        }
    }

    /// Each step folds the two newest stack values, so equal-precedence
    /// operators apply left to right.
    fn fold_binary_with_operators(
        &mut self,
        operand: impl Fn(&mut Self) -> Result<()>,
        operators: &[Operator]
    ) -> Result<()> {
        operand(self)?;

        while let Some((token, operator)) = self.match_any(operators) {
            operand(self)?;
            self.stack.apply(&token, operator)?;
        }

        Ok(())
    }

    fn match_any(&mut self, operators: &[Operator]) -> Option<(Token, Operator)> {
        let kind = self.tokens.peek().kind;
        match kind {
            TokenKind::Operator(op) if operators.contains(&op) => Some((self.tokens.advance(), op)),
            _ => None,
        }
    }
}
