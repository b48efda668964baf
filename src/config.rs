/// What the driver does when a statement fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first failing statement and report only the error.
    #[default]
    Halt,
    /// Record the failure, skip the statement and carry on.
    Continue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub on_error: ErrorPolicy,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_error(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }
}
