//! Error types for code generation

use structgen_core::StructgenError;
use thiserror::Error;

/// Errors that can occur while generating a model
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The DDL could not be read into a table
    #[error(transparent)]
    Parse(#[from] StructgenError),
    /// A built-in CRUD template failed to render
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Result type for code generation
pub type CodegenResult<T> = Result<T, CodegenError>;
