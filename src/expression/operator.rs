//! Operator definitions for expressions.

use crate::model::DataType;

/// Comparison operators supported in queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Eq,
    Neq,
    Lt,
    Gt,
    Contains,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "==",
            ComparisonOperator::Neq => "!=",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Contains => "contains",
        }
    }

    /// Get the output type of this operator given input types
    ///
    /// Returns `None` when the operand types are not comparable.
    pub fn output_type(&self, left: DataType, right: DataType) -> Option<DataType> {
        match self {
            // Equality works on any pair of matching kinds
            ComparisonOperator::Eq | ComparisonOperator::Neq => {
                if left == right {
                    Some(DataType::Boolean)
                } else {
                    None
                }
            }

            // Ordering is only defined for numbers
            ComparisonOperator::Lt | ComparisonOperator::Gt => match (left, right) {
                (DataType::Number, DataType::Number) => Some(DataType::Boolean),
                _ => None,
            },

            // Substring test is only defined for text
            ComparisonOperator::Contains => match (left, right) {
                (DataType::Text, DataType::Text) => Some(DataType::Boolean),
                _ => None,
            },
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean combinators joining sub-expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinatorOperator {
    And,
    Or,
    Not,
}

impl CombinatorOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            CombinatorOperator::And => "and",
            CombinatorOperator::Or => "or",
            CombinatorOperator::Not => "not",
        }
    }

    /// Number of operands this combinator takes, if fixed
    pub fn arity(&self) -> Option<usize> {
        match self {
            CombinatorOperator::Not => Some(1),
            // And/Or accept any flattened run of two or more operands
            CombinatorOperator::And | CombinatorOperator::Or => None,
        }
    }
}

impl std::fmt::Display for CombinatorOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
