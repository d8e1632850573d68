//! Structured description of a parsed table

use serde::{Deserialize, Serialize};

/// One column of a `CREATE TABLE` statement, as read from the DDL.
///
/// Names are kept exactly as written (quotes and backticks included);
/// cleaning them up is the code generator's job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column identifier as written, e.g. `` `user_id` ``
    pub raw_name: String,
    /// Base SQL type name without length or modifiers, e.g. `BIGINT`
    pub sql_type_name: String,
    /// Whether the type carried an `UNSIGNED` modifier
    pub is_unsigned: bool,
    /// Whether the column has an explicit `NOT NULL` constraint
    pub is_not_null: bool,
    /// Free-text `COMMENT '...'` attached to the column
    pub comment: Option<String>,
}

impl ColumnSpec {
    /// Creates a nullable, signed column with no comment
    pub fn new(raw_name: impl Into<String>, sql_type_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            sql_type_name: sql_type_name.into(),
            ..Default::default()
        }
    }

    /// Marks the column type as unsigned
    pub fn unsigned(mut self) -> Self {
        self.is_unsigned = true;
        self
    }

    /// Marks the column as NOT NULL
    pub fn not_null(mut self) -> Self {
        self.is_not_null = true;
        self
    }

    /// Attaches a comment to the column
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A parsed `CREATE TABLE` statement: the table name and its columns in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableSpec {
    /// Unqualified table name as written, e.g. `` `user` ``
    pub table_name: String,
    pub columns: Vec<ColumnSpec>,
}

impl TableSpec {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: Vec::new(),
        }
    }

    /// Appends a column, keeping declaration order
    pub fn with_column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }
}
