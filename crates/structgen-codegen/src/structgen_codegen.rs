//! structgen codegen - Go model generation from parsed tables
//!
//! This crate provides:
//! - Column filtering (dropping index-declaration artifacts)
//! - SQL to Go type resolution with strict and nullable catalogs
//! - Identifier sanitizing, Go field naming and tag rendering
//! - Assembly of the struct, `TableName()` accessor and CRUD stubs

pub mod columns;
mod error;
pub mod generator;
pub mod naming;
pub mod type_mapper;

pub use columns::*;
pub use error::*;
pub use generator::*;
pub use naming::*;
pub use type_mapper::*;
