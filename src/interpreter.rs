use std::fmt::{self, Display};
use thiserror::Error;

use crate::{
    config::{Config, ErrorPolicy},
    environment::Environment,
    error,
    parser,
    printer,
    scanner,
};

/// A failure tied to the statement that caused it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("statement {number} `{text}`: {source}")]
pub struct StatementError {
    /// One-based position among the non-empty statements.
    pub number: usize,
    pub text: String,
    #[source]
    pub source: error::Error,
}

/// One `;`-delimited, trimmed, non-empty piece of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    pub index: usize,
    pub text: &'a str,
}

pub fn statements(program: &str) -> impl Iterator<Item = Statement<'_>> {
    program.split(';')
        .map(|s| s.trim_matches(scanner::is_blank))
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(index, text)| Statement { index, text })
}

/// Lexes, parses and evaluates a single statement against `env`.
pub fn execute(statement: &str, env: &Environment) -> error::Result<(String, i64)> {
    let tokens = scanner::tokenize(statement)?;
    parser::evaluate_statement(tokens, env)
}

/// Final bindings of a program run, in first-assignment order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    bindings: Vec<(String, i64)>,
    skipped: Vec<StatementError>,
}

impl Report {
    pub fn bindings(&self) -> &[(String, i64)] {
        &self.bindings
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Statements that failed under [`ErrorPolicy::Continue`].
    pub fn skipped(&self) -> &[StatementError] {
        &self.skipped
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", printer::bindings(&self.bindings))
    }
}

pub struct Interpreter {
    config: Config,
}

impl Interpreter {
    pub fn new(config: Config) -> Self {
        Interpreter { config }
    }

    /// Runs a whole program against a fresh environment.
    pub fn run(&self, program: &str) -> Result<Report, StatementError> {
        let mut session = Session::new(self.config);
        session.feed(program)?;
        Ok(session.into_report())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new(Config::default())
    }
}

/// An environment kept alive across several pieces of program text.
pub struct Session {
    config: Config,
    env: Environment,
    seen: usize,
    skipped: Vec<StatementError>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config, env: Environment::new(), seen: 0, skipped: Vec::new() }
    }

    /// Executes every statement of `text` in order, returning the
    /// assignments it made.
    pub fn feed(&mut self, text: &str) -> Result<Vec<(String, i64)>, StatementError> {
        let mut assigned = Vec::new();

        for statement in statements(text) {
            self.seen += 1;
            match execute(statement.text, &self.env) {
                Ok((name, value)) => {
                    self.env.write(name.as_str(), value);
                    assigned.push((name, value));
                },
                Err(source) => {
                    let e = StatementError {
                        number: self.seen,
                        text: statement.text.to_string(),
                        source,
                    };
                    match self.config.on_error {
                        ErrorPolicy::Halt => return Err(e),
                        ErrorPolicy::Continue => {
                            log::warn!("skipping {}", e);
                            self.skipped.push(e);
                        },
                    }
                },
            }
        }

        Ok(assigned)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_report(self) -> Report {
        Report { bindings: self.env.into_bindings(), skipped: self.skipped }
    }
}
