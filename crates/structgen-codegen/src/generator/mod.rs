//! Model assembly
//!
//! Turns a parsed table into Go source: the struct declaration, the
//! `TableName()` accessor and, optionally, CRUD stubs.

mod builder;
mod config;
mod crud;
mod generator;

#[cfg(test)]
mod tests;

pub use builder::*;
pub use config::*;
pub use crud::*;
pub use generator::*;
