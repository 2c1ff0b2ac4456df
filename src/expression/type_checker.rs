//! Static type checking for expressions.
//!
//! Evaluation performs its own runtime kind checks; this checker is an
//! opt-in pre-validation for callers that know their record schema up
//! front and want mismatches reported before any record is scanned.

use crate::expression::{CombinatorOperator, EvalError, EvalResult, Expression};
use crate::model::{DataType, Schema};

/// Type checker for expressions
pub struct TypeChecker<'a> {
    /// Schema defining the types of record fields
    schema: &'a Schema,
}

impl<'a> TypeChecker<'a> {
    /// Create a new type checker with the given schema
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Type check an expression and return its output type
    pub fn check(&self, expr: &Expression) -> EvalResult<DataType> {
        match expr {
            Expression::Literal(lit) => Ok(lit.value.data_type()),

            Expression::Field(field) => match self.schema.get(&field.name) {
                Some(data_type) => Ok(*data_type),
                None => Err(EvalError::FieldNotFound {
                    field: field.name.clone(),
                }),
            },

            Expression::Comparison { op, left, right } => {
                let left_type = self.check(left)?;
                let right_type = self.check(right)?;
                match op.output_type(left_type, right_type) {
                    Some(output_type) => Ok(output_type),
                    None => Err(EvalError::TypeMismatch {
                        operator: op.as_str().to_string(),
                        left: left_type,
                        right: Some(right_type),
                    }),
                }
            }

            Expression::Combinator { op, operands } => {
                if let Some(expected) = op.arity() {
                    if operands.len() != expected {
                        return Err(EvalError::OperandCount {
                            operator: op.as_str().to_string(),
                            expected,
                            actual: operands.len(),
                        });
                    }
                }
                for operand in operands {
                    let operand_type = self.check(operand)?;
                    if operand_type != DataType::Boolean {
                        return Err(EvalError::TypeMismatch {
                            operator: op.as_str().to_string(),
                            left: operand_type,
                            right: None,
                        });
                    }
                }
                Ok(DataType::Boolean)
            }
        }
    }
}

/// Validate that an expression is usable as a filter predicate
///
/// The expression must type check against the schema and produce a boolean
/// at the root.
pub fn validate_predicate(expr: &Expression, schema: &Schema) -> EvalResult<()> {
    let output_type = TypeChecker::new(schema).check(expr)?;
    if output_type != DataType::Boolean {
        return Err(EvalError::TypeMismatch {
            operator: "predicate".to_string(),
            left: output_type,
            right: None,
        });
    }
    Ok(())
}
