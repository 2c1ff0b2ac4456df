//! Expression evaluation implementation.

use crate::expression::{
    CombinatorOperator, ComparisonOperator, EvalError, EvalResult, Expression, FieldRef,
};
use crate::model::{Record, Value};

/// Evaluator for expressions
///
/// Evaluation is a pure function of (expression, record): it never mutates
/// either and the same pair always yields the same result.
pub struct Evaluator<'a> {
    /// The record to evaluate against
    record: &'a Record,
}

impl<'a> Evaluator<'a> {
    /// Create a new evaluator for a record
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    /// Evaluate an expression and return the result
    pub fn evaluate(&self, expr: &Expression) -> EvalResult<Value> {
        match expr {
            Expression::Literal(lit) => Ok(lit.value.clone()),

            Expression::Field(field) => self.evaluate_field(field),

            Expression::Comparison { op, left, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                self.evaluate_comparison(*op, left_val, right_val)
            }

            Expression::Combinator { op, operands } => self.evaluate_combinator(*op, operands),
        }
    }

    /// Evaluate a field reference
    ///
    /// Absent fields fail fast rather than defaulting to false.
    fn evaluate_field(&self, field: &FieldRef) -> EvalResult<Value> {
        match self.record.get(&field.name) {
            Some(value) => Ok(value.clone()),
            None => Err(EvalError::FieldNotFound {
                field: field.name.clone(),
            }),
        }
    }

    /// Evaluate a comparison between two values
    fn evaluate_comparison(
        &self,
        op: ComparisonOperator,
        left: Value,
        right: Value,
    ) -> EvalResult<Value> {
        match op {
            // Exact, case-sensitive equality over matching kinds
            ComparisonOperator::Eq => {
                let equal = self.compare_equal(op, left, right)?;
                Ok(Value::Boolean(equal))
            }
            ComparisonOperator::Neq => {
                let equal = self.compare_equal(op, left, right)?;
                Ok(Value::Boolean(!equal))
            }

            // Ordering is only defined for numbers
            ComparisonOperator::Lt => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Boolean(a < b)),
                _ => Err(self.operand_mismatch(op, &left, &right)),
            },
            ComparisonOperator::Gt => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Boolean(a > b)),
                _ => Err(self.operand_mismatch(op, &left, &right)),
            },

            // Case-insensitive substring test over text operands
            ComparisonOperator::Contains => match (&left, &right) {
                (Value::String(a), Value::String(b)) => {
                    Ok(Value::Boolean(a.to_lowercase().contains(&b.to_lowercase())))
                }
                _ => Err(self.operand_mismatch(op, &left, &right)),
            },
        }
    }

    fn compare_equal(&self, op: ComparisonOperator, left: Value, right: Value) -> EvalResult<bool> {
        match (&left, &right) {
            (Value::Number(a), Value::Number(b)) => Ok(a == b),
            (Value::String(a), Value::String(b)) => Ok(a == b),
            (Value::Boolean(a), Value::Boolean(b)) => Ok(a == b),
            _ => Err(self.operand_mismatch(op, &left, &right)),
        }
    }

    /// Evaluate a boolean combinator over its operand sequence
    ///
    /// And/Or short-circuit left-to-right: once the result is determined,
    /// remaining operands are not evaluated.
    fn evaluate_combinator(
        &self,
        op: CombinatorOperator,
        operands: &[Expression],
    ) -> EvalResult<Value> {
        if let Some(expected) = op.arity() {
            if operands.len() != expected {
                return Err(EvalError::OperandCount {
                    operator: op.as_str().to_string(),
                    expected,
                    actual: operands.len(),
                });
            }
        }

        match op {
            CombinatorOperator::And => {
                for operand in operands {
                    if !self.evaluate_boolean_operand(op, operand)? {
                        return Ok(Value::Boolean(false));
                    }
                }
                Ok(Value::Boolean(true))
            }

            CombinatorOperator::Or => {
                for operand in operands {
                    if self.evaluate_boolean_operand(op, operand)? {
                        return Ok(Value::Boolean(true));
                    }
                }
                Ok(Value::Boolean(false))
            }

            CombinatorOperator::Not => {
                let value = self.evaluate_boolean_operand(op, &operands[0])?;
                Ok(Value::Boolean(!value))
            }
        }
    }

    fn evaluate_boolean_operand(
        &self,
        op: CombinatorOperator,
        operand: &Expression,
    ) -> EvalResult<bool> {
        match self.evaluate(operand)? {
            Value::Boolean(b) => Ok(b),
            other => Err(EvalError::TypeMismatch {
                operator: op.as_str().to_string(),
                left: other.data_type(),
                right: None,
            }),
        }
    }

    fn operand_mismatch(&self, op: ComparisonOperator, left: &Value, right: &Value) -> EvalError {
        EvalError::TypeMismatch {
            operator: op.as_str().to_string(),
            left: left.data_type(),
            right: Some(right.data_type()),
        }
    }
}

impl Expression {
    /// Evaluate this expression against a record
    pub fn evaluate(&self, record: &Record) -> EvalResult<Value> {
        Evaluator::new(record).evaluate(self)
    }
}

/// Helper function to evaluate an expression against a record
pub fn evaluate_expression(expr: &Expression, record: &Record) -> EvalResult<Value> {
    Evaluator::new(record).evaluate(expr)
}

/// Type alias for predicate functions
pub type Predicate = Box<dyn Fn(&Record) -> bool + Send + 'static>;

/// Helper function to create a predicate function from an expression
///
/// Evaluation errors and non-boolean results are treated as non-matches.
pub fn expression_to_predicate(expr: Expression) -> Predicate {
    Box::new(move |record| {
        matches!(
            evaluate_expression(&expr, record),
            Ok(Value::Boolean(true))
        )
    })
}
