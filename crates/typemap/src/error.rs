use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchemaError>;

/// A syntax error reported while parsing SDL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Error message
    pub message: String,
    /// Byte offset where the error occurred
    pub offset: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at offset {})", self.message, self.offset)
    }
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to parse schema SDL: {}", join_errors(.0))]
    Syntax(Vec<SyntaxError>),

    #[error("Schema SDL contains an incomplete {0}")]
    Incomplete(&'static str),
}

impl SchemaError {
    /// Syntax errors behind this failure, empty for other kinds.
    #[must_use]
    pub fn syntax_errors(&self) -> &[SyntaxError] {
        match self {
            Self::Syntax(errors) => errors,
            Self::Incomplete(_) => &[],
        }
    }
}

fn join_errors(errors: &[SyntaxError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
