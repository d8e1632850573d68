//! `CREATE TABLE` parsing on top of `sqlparser`
//!
//! The parser is a pull interface: parse once, then read the ordered
//! columns off the returned `TableSpec`.

use sqlparser::ast::{ColumnDef, ColumnOption, Statement};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

use crate::{ColumnSpec, Result, StructgenError, TableSpec};

/// Type modifiers that never take part in the type name
const SIGN_MODIFIERS: [&str; 3] = ["UNSIGNED", "SIGNED", "ZEROFILL"];

/// Longest statement excerpt kept in a `NotCreateTable` error
const EXCERPT_LEN: usize = 60;

/// Parses a single MySQL `CREATE TABLE` statement.
pub fn parse_create_table(sql: &str) -> Result<TableSpec> {
    let dialect = MySqlDialect {};
    let mut statements = Parser::parse_sql(&dialect, sql)?;

    match statements.len() {
        0 => return Err(StructgenError::EmptyInput),
        1 => {}
        n => return Err(StructgenError::MultipleStatements(n)),
    }

    let create = match statements.remove(0) {
        Statement::CreateTable(create) => create,
        other => return Err(StructgenError::NotCreateTable(excerpt(&other.to_string()))),
    };

    let table_name = create
        .name
        .0
        .last()
        .map(|ident| ident.to_string())
        .unwrap_or_default();

    let columns: Vec<ColumnSpec> = create.columns.iter().map(column_spec).collect();

    tracing::debug!(
        table = %table_name,
        columns = columns.len(),
        "Parsed CREATE TABLE"
    );

    Ok(TableSpec {
        table_name,
        columns,
    })
}

fn column_spec(column: &ColumnDef) -> ColumnSpec {
    let (sql_type_name, is_unsigned) = split_type_name(&column.data_type.to_string());

    let mut is_not_null = false;
    let mut comment = None;
    for option in &column.options {
        match &option.option {
            ColumnOption::NotNull => is_not_null = true,
            ColumnOption::Comment(text) => comment = Some(text.clone()),
            _ => {}
        }
    }

    ColumnSpec {
        raw_name: column.name.to_string(),
        sql_type_name,
        is_unsigned,
        is_not_null,
        comment,
    }
}

/// Splits a rendered data type such as `INT(10) UNSIGNED` into its base
/// name (`INT`) and unsigned flag.
///
/// Parenthesized arguments are dropped, including quoted enum members that
/// themselves contain parentheses.
pub fn split_type_name(rendered: &str) -> (String, bool) {
    let mut bare = String::with_capacity(rendered.len());
    let mut depth = 0usize;
    let mut in_quote = false;

    for ch in rendered.chars() {
        match ch {
            '\'' if depth > 0 => in_quote = !in_quote,
            '(' if !in_quote => {
                depth += 1;
                bare.push(' ');
            }
            ')' if !in_quote && depth > 0 => depth -= 1,
            _ if depth == 0 => bare.push(ch),
            _ => {}
        }
    }

    let mut is_unsigned = false;
    let mut words = Vec::new();
    for word in bare.split_whitespace() {
        if word.eq_ignore_ascii_case("UNSIGNED") {
            is_unsigned = true;
        } else if !SIGN_MODIFIERS.iter().any(|m| word.eq_ignore_ascii_case(m)) {
            words.push(word);
        }
    }

    (words.join(" "), is_unsigned)
}

fn excerpt(statement: &str) -> String {
    match statement.char_indices().nth(EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &statement[..idx]),
        None => statement.to_string(),
    }
}
