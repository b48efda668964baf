//! Evaluates programs made of `identifier = expression;` statements over
//! signed integers.
//!
//! ```
//! let report = assign_calc::run("x = 5; y = 3 + x*2; z = x - y;").unwrap();
//! assert_eq!(report.to_string(), "x = 5\ny = 13\nz = -8\n");
//! ```

pub mod config;
pub mod environment;
pub mod error;
mod evaluator;
pub mod interpreter;
pub mod parser;
pub mod printer;
pub mod scanner;
pub mod token;

pub use crate::{
    config::{Config, ErrorPolicy},
    environment::Environment,
    error::{Error, ErrorKind, Result},
    interpreter::{Interpreter, Report, Session, StatementError},
};

/// Runs `program` with the default configuration (halt on first error).
pub fn run(program: &str) -> std::result::Result<Report, StatementError> {
    Interpreter::default().run(program)
}
