//! siftql - a small query engine for filtering records.
//!
//! Parse a one-line query such as `age > 30` or
//! `title contains "Pattern" and year > 2000` into an immutable
//! expression tree, then evaluate it against any number of records.

pub mod expression;
pub mod model;
pub mod query;

pub use expression::{
    evaluate_expression, expression_to_predicate, EvalError, Evaluator, Expression,
};
pub use model::{DataType, Record, Schema, Value};
pub use query::{parse, QueryError};
