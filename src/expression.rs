//! Expression trees and their evaluation.
//!
//! This module provides:
//! - Expression AST representation
//! - Closed operator enumerations
//! - Expression evaluation against records
//! - Optional static type checking against a schema

pub mod error;
pub mod eval;
pub mod expr;
pub mod operator;
pub mod type_checker;

pub use error::{EvalError, EvalResult};
pub use eval::{evaluate_expression, expression_to_predicate, Evaluator, Predicate};
pub use expr::{Expression, FieldRef, Literal};
pub use operator::{CombinatorOperator, ComparisonOperator};
pub use type_checker::{validate_predicate, TypeChecker};
