//! Column filtering ahead of generation

use structgen_core::ColumnSpec;

/// Identifier that marks an index declaration rather than a data column
pub const INDEX_MARKER: &str = "KEY";

/// Returns the columns that take part in generation, in declaration order.
///
/// Any column whose identifier is `KEY` (any casing) is dropped. A real
/// column named `key` cannot be told apart from an index declaration here,
/// so it is dropped as well.
pub fn data_columns(columns: &[ColumnSpec]) -> Vec<&ColumnSpec> {
    columns
        .iter()
        .filter(|column| {
            let keep = !is_index_marker(&column.raw_name);
            if !keep {
                tracing::debug!(column = %column.raw_name, "Skipping KEY column");
            }
            keep
        })
        .collect()
}

fn is_index_marker(raw_name: &str) -> bool {
    raw_name.eq_ignore_ascii_case(INDEX_MARKER)
}
