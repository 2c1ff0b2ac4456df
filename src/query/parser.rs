// Query parser - converts tokens to an expression tree
//
// Grammar (recursive descent):
//
//   expression := term ( ("and" | "or") term )*
//   term       := "not" term | comparison
//   comparison := IDENT comparator value
//   comparator := "==" | "!=" | "<" | ">" | "contains"
//   value      := STRING | NUMBER
//
// "and" and "or" share a single precedence level and associate to the
// left; runs of the same operator flatten into one combinator node. This
// is a deliberate simplification of the language, not an oversight.

use super::error::{QueryError, QueryResult};
use super::lexer::Lexer;
use super::token::{Token, TokenKind};
use crate::expression::{CombinatorOperator, ComparisonOperator, Expression};
use crate::model::Value;

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(query: &str) -> QueryResult<Self> {
        let tokens = Lexer::new(query).tokenize()?;
        Ok(Parser {
            tokens,
            position: 0,
        })
    }

    /// Parse the token stream into an expression, consuming all input
    pub fn parse(&mut self) -> QueryResult<Expression> {
        let expr = self.parse_expression()?;

        let current = self.current_token();
        if current.kind != TokenKind::Eof {
            return Err(QueryError::syntax(
                current.position,
                format!("unexpected {} after expression", current.kind.describe()),
            ));
        }

        Ok(expr)
    }

    /// Parse and/or combinations (left-associative, single precedence level)
    fn parse_expression(&mut self) -> QueryResult<Expression> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.current_token().kind {
                TokenKind::And => CombinatorOperator::And,
                TokenKind::Or => CombinatorOperator::Or,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;

            // Runs of the same operator flatten into one node
            left = match left {
                Expression::Combinator {
                    op: existing,
                    mut operands,
                } if existing == op => {
                    operands.push(right);
                    Expression::Combinator { op, operands }
                }
                _ => Expression::Combinator {
                    op,
                    operands: vec![left, right],
                },
            };
        }

        Ok(left)
    }

    /// Parse a term: an optional "not" prefix over a comparison
    fn parse_term(&mut self) -> QueryResult<Expression> {
        if self.current_token().kind == TokenKind::Not {
            self.advance();
            let operand = self.parse_term()?;
            return Ok(Expression::not(operand));
        }
        self.parse_comparison()
    }

    /// Parse a comparison: field, comparator, literal value
    fn parse_comparison(&mut self) -> QueryResult<Expression> {
        let field = self.expect_identifier()?;
        let op = self.expect_comparator()?;
        let value_position = self.current_token().position;
        let value = self.expect_value()?;

        // Substring tests only make sense against a string; reject the
        // mismatch here rather than at evaluation time.
        if op == ComparisonOperator::Contains && !matches!(value, Value::String(_)) {
            return Err(QueryError::syntax(
                value_position,
                "'contains' requires a string value",
            ));
        }

        Ok(Expression::comparison(
            op,
            Expression::field(field),
            Expression::literal(value),
        ))
    }

    fn expect_identifier(&mut self) -> QueryResult<String> {
        let current = self.current_token();
        match &current.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            kind => Err(QueryError::syntax(
                current.position,
                format!("expected field name, found {}", kind.describe()),
            )),
        }
    }

    fn expect_comparator(&mut self) -> QueryResult<ComparisonOperator> {
        let current = self.current_token();
        let op = match current.kind {
            TokenKind::Equal => ComparisonOperator::Eq,
            TokenKind::NotEqual => ComparisonOperator::Neq,
            TokenKind::Less => ComparisonOperator::Lt,
            TokenKind::Greater => ComparisonOperator::Gt,
            TokenKind::Contains => ComparisonOperator::Contains,
            ref kind => {
                return Err(QueryError::syntax(
                    current.position,
                    format!("expected comparator, found {}", kind.describe()),
                ));
            }
        };
        self.advance();
        Ok(op)
    }

    fn expect_value(&mut self) -> QueryResult<Value> {
        let current = self.current_token();
        let value = match &current.kind {
            TokenKind::String(text) => Value::String(text.clone()),
            TokenKind::Number(text) => {
                let number = text.parse::<f64>().map_err(|_| {
                    QueryError::syntax(
                        current.position,
                        format!("invalid number literal '{}'", text),
                    )
                })?;
                Value::Number(number)
            }
            kind => {
                return Err(QueryError::syntax(
                    current.position,
                    format!("expected string or number, found {}", kind.describe()),
                ));
            }
        };
        self.advance();
        Ok(value)
    }

    fn current_token(&self) -> &Token {
        // The token stream always ends with Eof
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }
}

/// Parse a query string into an expression tree
pub fn parse(query: &str) -> QueryResult<Expression> {
    Parser::new(query)?.parse()
}
