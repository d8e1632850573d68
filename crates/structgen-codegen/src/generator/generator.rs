//! Go model generator

use std::sync::Arc;

use structgen_core::{ColumnSpec, TableSpec, parse_create_table};

use super::{CrudTemplates, GeneratedField, GeneratedModel, GenerationConfig, ModelBuilder};
use crate::columns::data_columns;
use crate::error::CodegenResult;
use crate::naming::{render_comment, sanitize, to_field_name, to_tag};
use crate::type_mapper::{TypeCatalog, UNKNOWN_TYPE};

/// Generates a Go model from a parsed `CREATE TABLE`.
///
/// A generator only reads its catalog and config, so one instance can
/// serve any number of tables.
pub struct StructGenerator {
    config: GenerationConfig,
    catalog: Arc<TypeCatalog>,
    crud: CrudTemplates,
}

impl Default for StructGenerator {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

impl StructGenerator {
    /// Creates a generator using the built-in Go type catalog
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            catalog: TypeCatalog::go(),
            crud: CrudTemplates::new(),
        }
    }

    /// Replaces the type catalog
    pub fn with_catalog(mut self, catalog: Arc<TypeCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// Parses `sql` and generates its model. Parse failures are returned
    /// as-is and produce no output.
    pub fn generate_sql(&self, sql: &str) -> CodegenResult<GeneratedModel> {
        let table = parse_create_table(sql)?;
        self.generate(&table)
    }

    /// Generates the model for one table.
    ///
    /// Columns with unmapped SQL types are emitted with the `unknown` type
    /// rather than failing the run.
    pub fn generate(&self, table: &TableSpec) -> CodegenResult<GeneratedModel> {
        let table_name = sanitize(&table.table_name);
        let type_name = to_field_name(&table_name);

        let mut builder = ModelBuilder::new(&type_name, &table_name);
        for column in data_columns(&table.columns) {
            builder.push_field(self.field(column));
        }

        if self.config.include_cruds {
            builder = builder.with_crud_blocks(self.crud.render_all(&type_name)?);
        }

        let model = builder.build();
        tracing::debug!(
            table = %model.table_name,
            model = %model.type_name,
            fields = model.fields.len(),
            cruds = self.config.include_cruds,
            "Generated model"
        );
        Ok(model)
    }

    /// Derives the struct field for one column
    pub fn field(&self, column: &ColumnSpec) -> GeneratedField {
        let clean_name = sanitize(&column.raw_name);
        let type_name = self.catalog.resolve(
            &column.sql_type_name,
            column.is_unsigned,
            column.is_not_null,
        );

        if type_name == UNKNOWN_TYPE {
            tracing::warn!(
                column = %clean_name,
                sql_type = %column.sql_type_name,
                unsigned = column.is_unsigned,
                "Unmapped SQL type, emitting placeholder"
            );
        }

        GeneratedField {
            name: to_field_name(&clean_name),
            type_name: type_name.to_string(),
            tag: to_tag(&clean_name, &self.config.tag_template),
            comment_text: render_comment(column.comment.as_deref()),
        }
    }
}

/// Convenience function: parse `sql` and return the generated Go source
pub fn generate(sql: &str, config: &GenerationConfig) -> CodegenResult<String> {
    let generator = StructGenerator::new(config.clone());
    Ok(generator.generate_sql(sql)?.body_text)
}
