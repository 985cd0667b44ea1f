//! Occurrence data collected during the tree walk.
//!
//! An `Occurrence` is one matched site in the source (a `<Trans>` element or a
//! `t(...)` call) carrying the raw key as written. The key synthesizer turns it
//! into an `ExtractedKey`, whose `key` is the string persisted in the inventory.

use serde::Serialize;

use crate::core::key::synthesize;

/// Pluralization, context and namespace qualifiers attached to an occurrence.
///
/// All fields are optional. `default_value` is informational only and never
/// becomes part of the synthesized key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Name of the variable driving pluralization (`{ count: n }` → `n`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "ns")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Metadata {
    pub fn is_empty(&self) -> bool {
        self.count.is_none()
            && self.context.is_none()
            && self.namespace.is_none()
            && self.default_value.is_none()
    }
}

/// One matched translation site in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub raw_key: String,
    pub metadata: Metadata,
    pub file_path: String,
    /// 1-based line of the element or call.
    pub line: usize,
    /// 1-based display column of the element or call.
    pub column: usize,
}

impl Occurrence {
    /// Synthesize the final inventory key for this occurrence.
    pub fn into_extracted_key(self) -> ExtractedKey {
        ExtractedKey {
            key: synthesize(&self.raw_key, &self.metadata),
            metadata: self.metadata,
            file_path: self.file_path,
            line: self.line,
            column: self.column,
        }
    }
}

/// An occurrence after key synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedKey {
    pub key: String,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    pub file_path: String,
    pub line: usize,
    pub column: usize,
}
