use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Outcome of merging a batch of keys into an inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Keys that were absent and got inserted, in insertion order.
    pub added: Vec<String>,
    /// Keys that were already present and left untouched.
    pub existing: usize,
}

/// The persisted key inventory: a flat, ordered `key -> default value` map.
///
/// Merging only ever adds keys. Entries that already exist keep their value, so
/// hand-edited default texts survive re-extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    entries: Map<String, Value>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an inventory file. A missing file yields an empty inventory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse inventory: {}", path.display()))
    }

    /// Parse an inventory from JSON text. The root must be an object.
    pub fn from_json_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        match serde_json::from_str::<Value>(content)? {
            Value::Object(entries) => Ok(Self { entries }),
            _ => bail!("Root of inventory JSON must be an object"),
        }
    }

    /// Insert each key that is not present yet, with the key itself as its value.
    pub fn merge<'a, I>(&mut self, keys: I) -> MergeSummary
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut summary = MergeSummary::default();
        for key in keys {
            if self.entries.contains_key(key) {
                summary.existing += 1;
                continue;
            }
            self.entries
                .insert(key.to_string(), Value::String(key.to_string()));
            summary.added.push(key.to_string());
        }
        summary
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Pretty JSON with 2-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let content = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize inventory")?;
        Ok(format!("{}\n", content))
    }

    /// Write the inventory, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, self.to_json_string()?)
            .with_context(|| format!("Failed to write inventory: {}", path.display()))?;

        Ok(())
    }
}
