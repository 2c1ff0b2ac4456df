//! Data model for query evaluation.
//!
//! This module provides:
//! - Typed values and their data types
//! - Records (field name to value mappings) that queries run against

pub mod record;
pub mod value;

pub use record::{Record, Schema};
pub use value::{DataType, Value};
