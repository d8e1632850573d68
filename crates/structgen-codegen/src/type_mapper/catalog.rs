//! Strict and nullable type catalogs

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Type name emitted for a SQL type missing from the catalog
pub const UNKNOWN_TYPE: &str = "unknown";

/// Suffix appended to the lookup key of unsigned types
const UNSIGNED_SUFFIX: &str = " unsigned";

/// Built-in MySQL to Go catalog: (key, strict type, nullable type)
const GO_TYPES: &[(&str, &str, &str)] = &[
    ("int", "int", "sql.NullInt64"),
    ("integer", "int", "sql.NullInt64"),
    ("tinyint", "int8", "sql.NullInt32"),
    ("smallint", "int16", "sql.NullInt32"),
    ("mediumint", "int32", "sql.NullInt64"),
    ("bigint", "int64", "sql.NullInt64"),
    ("int unsigned", "uint", "sql.NullInt64"),
    ("integer unsigned", "uint", "sql.NullInt64"),
    ("tinyint unsigned", "uint8", "sql.NullInt64"),
    ("smallint unsigned", "uint16", "sql.NullInt64"),
    ("mediumint unsigned", "uint32", "sql.NullInt64"),
    ("bigint unsigned", "uint64", "sql.NullInt64"),
    // bit has no nullable representation
    ("bit", "byte", "byte"),
    ("bool", "bool", "sql.NullBool"),
    ("boolean", "bool", "sql.NullBool"),
    ("enum", "string", "sql.NullString"),
    ("set", "string", "sql.NullString"),
    ("varchar", "string", "sql.NullString"),
    ("char", "string", "sql.NullString"),
    ("tinytext", "string", "sql.NullString"),
    ("mediumtext", "string", "sql.NullString"),
    ("text", "string", "sql.NullString"),
    ("longtext", "string", "sql.NullString"),
    // NULL for raw bytes is left to the caller (nil vs empty slice)
    ("blob", "[]byte", "[]byte"),
    ("tinyblob", "[]byte", "[]byte"),
    ("mediumblob", "[]byte", "[]byte"),
    ("longblob", "[]byte", "[]byte"),
    ("binary", "[]byte", "[]byte"),
    ("varbinary", "[]byte", "[]byte"),
    ("date", "time.Time", "sql.NullTime"),
    ("datetime", "time.Time", "sql.NullTime"),
    ("timestamp", "time.Time", "sql.NullTime"),
    ("time", "time.Time", "sql.NullTime"),
    ("float", "float32", "sql.NullFloat64"),
    ("double", "float64", "sql.NullFloat64"),
    ("decimal", "float64", "sql.NullFloat64"),
];

static GO_CATALOG: LazyLock<Arc<TypeCatalog>> =
    LazyLock::new(|| Arc::new(TypeCatalog::from_entries(GO_TYPES)));

/// Builds the lookup key for a SQL type: lower-cased, with ` unsigned`
/// appended for unsigned types.
pub fn type_key(sql_type_name: &str, is_unsigned: bool) -> String {
    let mut key = sql_type_name.trim().to_lowercase();
    if is_unsigned {
        key.push_str(UNSIGNED_SUFFIX);
    }
    key
}

/// Immutable pair of SQL type lookup tables.
///
/// `strict` serves NOT NULL columns, `nullable` everything else. Both tables
/// always hold the same keys.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    strict: HashMap<String, String>,
    nullable: HashMap<String, String>,
}

impl TypeCatalog {
    /// The shared built-in MySQL to Go catalog
    pub fn go() -> Arc<TypeCatalog> {
        Arc::clone(&GO_CATALOG)
    }

    /// Builds a catalog from `(key, strict, nullable)` rows
    pub fn from_entries(entries: &[(&str, &str, &str)]) -> Self {
        let mut catalog = Self {
            strict: HashMap::with_capacity(entries.len()),
            nullable: HashMap::with_capacity(entries.len()),
        };
        for (key, strict, nullable) in entries {
            catalog.insert(key, strict, nullable);
        }
        catalog
    }

    /// Returns a copy of this catalog with one entry added or replaced.
    ///
    /// The key is normalized the same way lookups are, so `"INT UNSIGNED"`
    /// and `"int unsigned"` address the same entry.
    pub fn with_override(mut self, key: &str, strict: &str, nullable: &str) -> Self {
        self.insert(key, strict, nullable);
        self
    }

    fn insert(&mut self, key: &str, strict: &str, nullable: &str) {
        let key = key.trim().to_lowercase();
        self.strict.insert(key.clone(), strict.to_string());
        self.nullable.insert(key, nullable.to_string());
    }

    /// Resolves a column type.
    ///
    /// Unsigned types are looked up only under their `<type> unsigned` key.
    /// Unmapped types resolve to [`UNKNOWN_TYPE`].
    pub fn resolve(&self, sql_type_name: &str, is_unsigned: bool, is_not_null: bool) -> &str {
        let key = type_key(sql_type_name, is_unsigned);
        let table = if is_not_null {
            &self.strict
        } else {
            &self.nullable
        };

        match table.get(&key) {
            Some(type_name) => type_name,
            None => {
                tracing::trace!(key = %key, "No type mapping");
                UNKNOWN_TYPE
            }
        }
    }

    /// Strict type for a lookup key, if mapped
    pub fn strict_type(&self, key: &str) -> Option<&str> {
        self.strict.get(key).map(String::as_str)
    }

    /// Nullable type for a lookup key, if mapped
    pub fn nullable_type(&self, key: &str) -> Option<&str> {
        self.nullable.get(key).map(String::as_str)
    }

    /// All lookup keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.strict.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.strict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strict.is_empty()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::from_entries(GO_TYPES)
    }
}
