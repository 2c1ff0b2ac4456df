//! Expression AST definitions.

use crate::expression::operator::{CombinatorOperator, ComparisonOperator};
use crate::model::Value;

/// Field reference in an expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
    /// Name of the record field to look up
    pub name: String,
}

impl FieldRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Literal value in an expression
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Value,
}

impl Literal {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn bool(val: bool) -> Self {
        Self {
            value: Value::Boolean(val),
        }
    }

    pub fn number(val: f64) -> Self {
        Self {
            value: Value::Number(val),
        }
    }

    pub fn string(val: impl Into<String>) -> Self {
        Self {
            value: Value::String(val.into()),
        }
    }
}

/// Expression tree node
///
/// Trees are immutable after construction and own their children
/// exclusively, so a parsed expression can be evaluated against any
/// number of records, including from multiple threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal constant value
    Literal(Literal),

    /// Record field reference
    Field(FieldRef),

    /// Comparison between two sub-expressions
    Comparison {
        op: ComparisonOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Boolean combinator over an ordered operand sequence
    Combinator {
        op: CombinatorOperator,
        operands: Vec<Expression>,
    },
}

impl Expression {
    /// Create a literal expression
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(Literal::new(value.into()))
    }

    /// Create a field reference expression
    pub fn field(name: impl Into<String>) -> Self {
        Expression::Field(FieldRef::new(name))
    }

    /// Create a comparison expression
    pub fn comparison(op: ComparisonOperator, left: Expression, right: Expression) -> Self {
        Expression::Comparison {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create an equality expression
    pub fn eq(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::Eq, left, right)
    }

    /// Create a not-equal expression
    pub fn neq(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::Neq, left, right)
    }

    /// Create a less-than expression
    pub fn lt(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::Lt, left, right)
    }

    /// Create a greater-than expression
    pub fn gt(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::Gt, left, right)
    }

    /// Create a substring-test expression
    pub fn contains(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::Contains, left, right)
    }

    /// Create an AND expression over two or more operands
    pub fn and(operands: Vec<Expression>) -> Self {
        Expression::Combinator {
            op: CombinatorOperator::And,
            operands,
        }
    }

    /// Create an OR expression over two or more operands
    pub fn or(operands: Vec<Expression>) -> Self {
        Expression::Combinator {
            op: CombinatorOperator::Or,
            operands,
        }
    }

    /// Create a NOT expression
    pub fn not(operand: Expression) -> Self {
        Expression::Combinator {
            op: CombinatorOperator::Not,
            operands: vec![operand],
        }
    }

    /// Check if this expression is a constant (contains no field references)
    pub fn is_constant(&self) -> bool {
        match self {
            Expression::Literal(_) => true,
            Expression::Field(_) => false,
            Expression::Comparison { left, right, .. } => left.is_constant() && right.is_constant(),
            Expression::Combinator { operands, .. } => operands.iter().all(|e| e.is_constant()),
        }
    }

    /// Count the nodes in this tree
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Literal(_) | Expression::Field(_) => 1,
            Expression::Comparison { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expression::Combinator { operands, .. } => {
                1 + operands.iter().map(|e| e.node_count()).sum::<usize>()
            }
        }
    }
}

/// Canonical rendering in the query grammar.
///
/// The grammar has no parentheses, so only parser-shaped trees (combinator
/// operands associating to the left) render to text that re-parses into a
/// structurally equal tree.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(lit) => write!(f, "{}", lit.value),
            Expression::Field(field) => f.write_str(&field.name),
            Expression::Comparison { op, left, right } => {
                write!(f, "{} {} {}", left, op, right)
            }
            Expression::Combinator { op, operands } => match op {
                CombinatorOperator::Not => {
                    f.write_str("not")?;
                    for operand in operands {
                        write!(f, " {}", operand)?;
                    }
                    Ok(())
                }
                CombinatorOperator::And | CombinatorOperator::Or => {
                    for (i, operand) in operands.iter().enumerate() {
                        if i > 0 {
                            write!(f, " {} ", op)?;
                        }
                        write!(f, "{}", operand)?;
                    }
                    Ok(())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ref() {
        let field = FieldRef::new("age");
        assert_eq!(field.name, "age");
    }

    #[test]
    fn test_literal() {
        assert_eq!(Literal::bool(true).value, Value::Boolean(true));
        assert_eq!(Literal::number(42.0).value, Value::Number(42.0));
        assert_eq!(
            Literal::string("hello").value,
            Value::String("hello".to_string())
        );
    }

    #[test]
    fn test_expression_builders() {
        let expr = Expression::gt(Expression::field("age"), Expression::literal(30));
        assert!(matches!(expr, Expression::Comparison { .. }));

        let expr = Expression::and(vec![
            Expression::eq(Expression::field("name"), Expression::literal("John")),
            Expression::lt(Expression::field("age"), Expression::literal(65)),
        ]);
        assert!(matches!(expr, Expression::Combinator { .. }));

        let expr = Expression::not(Expression::contains(
            Expression::field("title"),
            Expression::literal("Draft"),
        ));
        match expr {
            Expression::Combinator { op, operands } => {
                assert_eq!(op, CombinatorOperator::Not);
                assert_eq!(operands.len(), 1);
            }
            _ => panic!("expected combinator"),
        }
    }

    #[test]
    fn test_is_constant() {
        assert!(Expression::literal(42).is_constant());
        assert!(!Expression::field("age").is_constant());

        assert!(Expression::eq(Expression::literal(1), Expression::literal(1)).is_constant());
        assert!(!Expression::eq(Expression::field("x"), Expression::literal(1)).is_constant());

        assert!(Expression::not(Expression::literal(true)).is_constant());
        assert!(!Expression::and(vec![
            Expression::literal(true),
            Expression::field("active"),
        ])
        .is_constant());
    }

    #[test]
    fn test_node_count() {
        assert_eq!(Expression::literal(1).node_count(), 1);
        assert_eq!(
            Expression::gt(Expression::field("age"), Expression::literal(30)).node_count(),
            3
        );
        assert_eq!(
            Expression::and(vec![
                Expression::gt(Expression::field("age"), Expression::literal(30)),
                Expression::not(Expression::field("retired")),
            ])
            .node_count(),
            6
        );
    }

    #[test]
    fn test_display() {
        let expr = Expression::gt(Expression::field("age"), Expression::literal(30));
        assert_eq!(expr.to_string(), "age > 30");

        let expr = Expression::and(vec![
            Expression::contains(Expression::field("title"), Expression::literal("Pattern")),
            Expression::gt(Expression::field("year"), Expression::literal(2000)),
        ]);
        assert_eq!(expr.to_string(), "title contains \"Pattern\" and year > 2000");

        let expr = Expression::not(Expression::eq(
            Expression::field("department"),
            Expression::literal("HR"),
        ));
        assert_eq!(expr.to_string(), "not department == \"HR\"");
    }
}
