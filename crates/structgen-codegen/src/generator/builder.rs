//! Section builder for generated Go source

use serde::Serialize;
use std::fmt;

/// One struct field derived from a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedField {
    /// Exported Go field name, e.g. `UserID`
    pub name: String,
    /// Go type, e.g. `sql.NullString`
    pub type_name: String,
    /// Rendered tag, empty when no template is configured
    pub tag: String,
    /// Trailing ` // ...` comment, empty when the column has none
    pub comment_text: String,
}

impl GeneratedField {
    /// Formats the field as a struct line: `\tName\tType\tTag // comment\n`
    pub fn line(&self) -> String {
        let mut line = format!("\t{}\t{}", self.name, self.type_name);
        if !self.tag.is_empty() {
            line.push('\t');
            line.push_str(&self.tag);
        }
        line.push_str(&self.comment_text);
        line.push('\n');
        line
    }
}

/// The finished artifact of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedModel {
    /// Go type name, e.g. `User`
    pub type_name: String,
    /// Table name returned by `TableName()`
    pub table_name: String,
    pub fields: Vec<GeneratedField>,
    /// Complete Go source text
    pub body_text: String,
}

impl fmt::Display for GeneratedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body_text)
    }
}

/// Assembles the struct, accessor and CRUD sections of a model.
///
/// Each section is newline-terminated; sections are separated by one blank
/// line. When CRUD stubs are present the text ends with a blank line.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    type_name: String,
    table_name: String,
    fields: Vec<GeneratedField>,
    crud_blocks: Vec<String>,
}

impl ModelBuilder {
    pub fn new(type_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            table_name: table_name.into(),
            fields: Vec::new(),
            crud_blocks: Vec::new(),
        }
    }

    /// Appends a field; fields keep insertion order
    pub fn push_field(&mut self, field: GeneratedField) {
        self.fields.push(field);
    }

    /// Sets the rendered CRUD stubs
    pub fn with_crud_blocks(mut self, blocks: Vec<String>) -> Self {
        self.crud_blocks = blocks;
        self
    }

    /// `type <Model> struct { ... }`
    pub fn type_block(&self) -> String {
        let mut block = format!("type {} struct {{\n", self.type_name);
        for field in &self.fields {
            block.push_str(&field.line());
        }
        block.push_str("}\n");
        block
    }

    /// `func (m *<Model>) TableName() string`
    pub fn accessor_block(&self) -> String {
        format!(
            "func (m *{}) TableName() string {{\n\treturn \"{}\"\n}}\n",
            self.type_name,
            escape_go_string(&self.table_name)
        )
    }

    /// All CRUD stubs, or `None` when there are none
    pub fn crud_block(&self) -> Option<String> {
        if self.crud_blocks.is_empty() {
            return None;
        }
        let blocks: Vec<String> = self
            .crud_blocks
            .iter()
            .map(|block| format!("{}\n", block))
            .collect();
        Some(blocks.join("\n"))
    }

    /// The sections in emission order
    pub fn sections(&self) -> Vec<String> {
        let mut sections = vec![self.type_block(), self.accessor_block()];
        sections.extend(self.crud_block());
        sections
    }

    /// Joins the sections into the final source text
    pub fn render(&self) -> String {
        let mut text = self.sections().join("\n");
        if !self.crud_blocks.is_empty() {
            text.push('\n');
        }
        text
    }

    pub fn build(self) -> GeneratedModel {
        let body_text = self.render();
        GeneratedModel {
            type_name: self.type_name,
            table_name: self.table_name,
            fields: self.fields,
            body_text,
        }
    }
}

fn escape_go_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
