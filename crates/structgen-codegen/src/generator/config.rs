//! Generation settings

use serde::{Deserialize, Serialize};

/// Tag template used when none is configured
pub const DEFAULT_TAG_TEMPLATE: &str = "`gorm:\"column:%s\" json:\"%s\"`";

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Field tag template; every `%s` is replaced by the column name
    pub tag_template: String,
    /// Whether to append create/get/list/update/delete stubs
    pub include_cruds: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tag_template: DEFAULT_TAG_TEMPLATE.to_string(),
            include_cruds: true,
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tag template
    pub fn with_tag_template(mut self, template: impl Into<String>) -> Self {
        self.tag_template = template.into();
        self
    }

    /// Enables or disables CRUD stubs
    pub fn with_cruds(mut self, include_cruds: bool) -> Self {
        self.include_cruds = include_cruds;
        self
    }
}
