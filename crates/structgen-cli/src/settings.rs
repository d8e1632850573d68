//! Settings file loading
//!
//! Settings live in `<config dir>/structgen/config.toml`:
//!
//! ```toml
//! log_level = "info"
//!
//! [generation]
//! tag_template = "`db:\"%s\"`"
//! include_cruds = false
//!
//! [types]
//! json = { strict = "json.RawMessage", nullable = "[]byte" }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use structgen_codegen::{GenerationConfig, TypeCatalog};

/// Extra or replacement type mapping for one SQL type key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOverride {
    pub strict: String,
    /// Defaults to `strict` when omitted
    pub nullable: Option<String>,
}

/// Contents of the settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generation: GenerationConfig,
    /// Keyed by lookup key, e.g. `"json"` or `"year unsigned"`
    pub types: BTreeMap<String, TypeOverride>,
    pub log_level: Option<String>,
}

impl Settings {
    /// Parses settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid settings file")
    }

    /// Loads settings from `path`, or from the default location when
    /// `path` is `None`. A missing default file yields default settings;
    /// a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match config_file() {
                Ok(path) => (path, false),
                Err(err) => {
                    tracing::debug!(error = %err, "No config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        let settings = Self::from_toml(&text)
            .with_context(|| format!("Failed to load settings file: {:?}", path))?;

        tracing::debug!(
            path = %path.display(),
            type_overrides = settings.types.len(),
            "Loaded settings"
        );
        Ok(settings)
    }

    /// The built-in Go catalog with this file's type overrides applied
    pub fn catalog(&self) -> Arc<TypeCatalog> {
        if self.types.is_empty() {
            return TypeCatalog::go();
        }

        let catalog = self
            .types
            .iter()
            .fold(TypeCatalog::go().as_ref().clone(), |catalog, (key, mapping)| {
                let nullable = mapping.nullable.as_deref().unwrap_or(&mapping.strict);
                catalog.with_override(key, &mapping.strict, nullable)
            });
        Arc::new(catalog)
    }
}

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("structgen"))
}

pub fn config_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}
