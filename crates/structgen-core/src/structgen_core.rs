//! structgen core - table model and DDL parsing
//!
//! This crate provides the types every other structgen crate depends on:
//!
//! - `TableSpec` / `ColumnSpec` - the structured view of one `CREATE TABLE`
//! - `parse_create_table` - turns raw MySQL DDL into a `TableSpec`
//! - `StructgenError` - errors raised while reading DDL

mod error;
mod parser;
mod schema;

pub use error::*;
pub use parser::*;
pub use schema::*;
