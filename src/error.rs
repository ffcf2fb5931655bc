use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReasonerError {
    #[error("Syntax error: {message}")]
    Syntax { message: String, line: Option<usize>, col: Option<usize> },
    #[error("Invalid query {query}: contains variables {}", variables.join(", "))]
    InvalidQuery { query: String, variables: Vec<String> },
    #[error("Invalid operator in logic expression: {0}")]
    InvalidOperator(String),
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),
    #[error("Internal invariant violated: {0}")]
    Invariant(String),
    #[error("Unrecognized command {command:?}: {message}")]
    Script { command: String, message: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Lock poisoned: {0}")]
    Lock(String),
}

pub type Result<T> = std::result::Result<T, ReasonerError>;

impl ReasonerError {
    /// Errors the caller can fix by correcting its input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Syntax { .. } | Self::InvalidQuery { .. } | Self::InvalidSymbol(_) | Self::Script { .. }
        )
    }
}

// Helper conversions
impl From<::config::ConfigError> for ReasonerError {
    fn from(e: ::config::ConfigError) -> Self { Self::Config(e.to_string()) }
}

impl From<std::io::Error> for ReasonerError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
