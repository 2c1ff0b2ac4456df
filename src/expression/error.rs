//! Error types for expression evaluation.

use thiserror::Error;

use crate::model::DataType;

/// Errors that can occur while evaluating an expression against a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("field not found: {field}")]
    FieldNotFound { field: String },

    #[error("type mismatch for operator {operator}: left={left}, right={}", .right.map(|t| t.as_str()).unwrap_or("none"))]
    TypeMismatch {
        operator: String,
        left: DataType,
        right: Option<DataType>,
    },

    #[error("operator {operator} expects {expected} operand(s), got {actual}")]
    OperandCount {
        operator: String,
        expected: usize,
        actual: usize,
    },
}

/// Result type for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;
