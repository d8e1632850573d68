//! SQL to Go type resolution
//!
//! Resolution goes through two immutable lookup tables: one for NOT NULL
//! columns and one for nullable columns.

mod catalog;


pub use catalog::*;
