//! Error types for query parsing.

use thiserror::Error;

/// Errors that can occur while turning a query string into an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Malformed token stream
    #[error("lexical error at position {position}: {message}")]
    Lexical { position: usize, message: String },

    /// Grammar violation
    #[error("syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },
}

impl QueryError {
    pub fn lexical(position: usize, message: impl Into<String>) -> Self {
        QueryError::Lexical {
            position,
            message: message.into(),
        }
    }

    pub fn syntax(position: usize, message: impl Into<String>) -> Self {
        QueryError::Syntax {
            position,
            message: message.into(),
        }
    }

    /// Character offset of the offending input
    pub fn position(&self) -> usize {
        match self {
            QueryError::Lexical { position, .. } | QueryError::Syntax { position, .. } => *position,
        }
    }
}

/// Result type for parsing operations.
pub type QueryResult<T> = Result<T, QueryError>;
