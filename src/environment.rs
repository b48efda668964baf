use indexmap::IndexMap;

use crate::{
    error::{Error, Result},
    token::Token,
};

/// Flat variable table for one program run.
///
/// Iteration yields bindings in the order their names were first written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    values: IndexMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, name: &Token) -> Result<i64> {
        self.values.get(&name.lexeme)
            .copied()
            .ok_or_else(|| undefined_var_error(name))
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Overwrites in place, so a re-assigned name keeps its original slot.
    pub fn write<S: Into<String>>(&mut self, name: S, value: i64) {
        self.values.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn into_bindings(self) -> Vec<(String, i64)> {
        self.values.into_iter().collect()
    }
}

fn undefined_var_error(name: &Token) -> Error {
    Error::evaluation(
        name.clone(),
        format!("Undefined variable: {}", name.lexeme)
    )
}
