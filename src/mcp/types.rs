use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::extract::ExtractedKey;
use crate::core::pipeline::ExtractionStats;
use crate::issues::ExtractionError;

pub const DEFAULT_KEY_LIMIT: usize = 50;
pub const MAX_KEY_LIMIT: usize = 200;

// ============================================================
// get_config
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
    pub output: String,
    pub trans_components: Vec<String>,
    pub translation_functions: Vec<String>,
    pub source_language: String,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            includes: c.includes,
            ignores: c.ignores,
            ignore_test_files: c.ignore_test_files,
            output: c.output,
            trans_components: c.trans_components,
            translation_functions: c.translation_functions,
            source_language: c.source_language,
        }
    }
}

// ============================================================
// extract_keys
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeysParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Report without writing the inventory (default: false)
    pub dry_run: Option<bool>,
    /// Maximum number of keys to return (default: 50, max: 200)
    pub limit: Option<u32>,
    /// Number of keys to skip (default: 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeysResult {
    /// Inventory path relative to the project root
    pub output: String,
    pub dry_run: bool,
    pub stats: ExtractionStats,
    /// Number of keys added (or that would be added) to the inventory
    pub added_count: usize,
    /// Number of keys in the inventory after merging
    pub total_inventory_keys: usize,
    pub errors: Vec<ExtractionError>,
    pub keys: Vec<ExtractedKey>,
    pub pagination: Pagination,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

impl Pagination {
    /// Resolve `limit`/`offset` request values, clamping the limit.
    pub fn resolve(limit: Option<u32>, offset: Option<u32>) -> (usize, usize) {
        let limit = limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_KEY_LIMIT)
            .min(MAX_KEY_LIMIT);
        let offset = offset.map(|v| v as usize).unwrap_or(0);
        (limit, offset)
    }
}

/// Slice `items` into one page.
pub fn paginate<T>(items: Vec<T>, limit: usize, offset: usize) -> (Vec<T>, Pagination) {
    let total = items.len();
    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total;
    (
        page,
        Pagination {
            offset,
            limit,
            has_more,
        },
    )
}
