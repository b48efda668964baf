use crate::{
    error::{Error, Result},
    token::{Operator, Token},
};

/// Pending operands of a syntax-directed evaluation.
///
/// Every factor pushes one value and every binary step folds the two most
/// recent values into one, so a fully matched expression leaves exactly one
/// value behind.
#[derive(Debug, Default)]
pub(crate) struct EvaluationStack {
    values: Vec<i64>,
}

impl EvaluationStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Pops the right then the left operand, applies `op` and pushes the result.
    pub(crate) fn apply(&mut self, op: &Token, operator: Operator) -> Result<()> {
        let right = self.pop(op)?;
        let left = self.pop(op)?;
        self.push(compute(op, operator, left, right)?);
        Ok(())
    }

    pub(crate) fn finish(mut self, at: &Token) -> Result<i64> {
        match self.values.len() {
            1 => self.pop(at),
            n => Err(Error::evaluation(
                at.clone(),
                format!("Expected a single result but {} values remain.", n),
            )),
        }
    }

    fn pop(&mut self, at: &Token) -> Result<i64> {
        self.values.pop()
            .ok_or_else(|| Error::evaluation(at.clone(), "Missing operand."))
    }
}

/// Checked integer arithmetic; `/` truncates toward zero.
pub(crate) fn compute(op: &Token, operator: Operator, left: i64, right: i64) -> Result<i64> {
    use Operator::*;
    let result = match operator {
        Plus => left.checked_add(right),
        Minus => left.checked_sub(right),
        Star => left.checked_mul(right),
        Slash => {
            if right == 0 {
                return Err(Error::evaluation(op.clone(), "Division by zero."));
            }
            left.checked_div(right)
        },
        Assign => return Err(Error::syntactic(op.clone(), "'=' is not an arithmetic operator.")),
    };
    result.ok_or_else(|| Error::evaluation(
        op.clone(),
        format!("Integer overflow in {} {} {}.", left, operator.symbol(), right),
    ))
}
