//! Error types for structgen

use sqlparser::parser::ParserError;
use thiserror::Error;

/// Errors raised while turning DDL text into a `TableSpec`
#[derive(Error, Debug)]
pub enum StructgenError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParserError),

    #[error("No statement found in input")]
    EmptyInput,

    #[error("Expected a single CREATE TABLE statement, found {0} statements")]
    MultipleStatements(usize),

    #[error("Not a CREATE TABLE statement: {0}")]
    NotCreateTable(String),
}

/// Result type alias for structgen core operations
pub type Result<T> = std::result::Result<T, StructgenError>;
