//! Query language front end.
//!
//! This module provides:
//! - Tokenizer for the query language
//! - Recursive-descent parser producing expression trees
//! - Parse error types with source positions

pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::{QueryError, QueryResult};
pub use lexer::Lexer;
pub use parser::{parse, Parser};
pub use token::{Token, TokenKind};
