//! Extraction orchestration.
//!
//! Each source unit is parsed once and every extractor runs over the same tree.
//! Files are processed in parallel; results are combined in input order so the
//! key list and the inventory insertion order are deterministic.

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::core::extract::{
    CallExtractor, ComponentExtractor, ExtractedKey, Extractor, Occurrence, OccurrenceExtractor,
};
use crate::core::inventory::{Inventory, MergeSummary};
use crate::core::parsers::jsx::parse_jsx_source;
use crate::issues::ExtractionError;

/// A source file handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Used only for attribution in results and errors.
    pub file_path: String,
    pub source_text: String,
}

impl SourceUnit {
    pub fn new(file_path: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            source_text: source_text.into(),
        }
    }
}

/// Names recognized as translation wrappers and translation functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub component_names: Vec<String>,
    pub function_names: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            component_names: vec!["Trans".to_string()],
            function_names: vec!["t".to_string()],
        }
    }
}

impl ExtractOptions {
    /// Component extractor first, then calls.
    fn extractors(&self) -> Vec<Extractor> {
        vec![
            ComponentExtractor::new(self.component_names.clone()).into(),
            CallExtractor::new(self.function_names.clone()).into(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionStats {
    pub files_processed: usize,
    pub keys_extracted: usize,
    #[serde(rename = "processingTime")]
    pub processing_time_ms: u64,
    pub error_count: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub keys: Vec<ExtractedKey>,
    pub errors: Vec<ExtractionError>,
    pub stats: ExtractionStats,
}

impl ExtractionReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn key_strings(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.key.as_str())
    }
}

/// Outcome of a single file.
enum FileOutcome {
    Occurrences(Vec<Occurrence>),
    Failed(ExtractionError),
}

fn extract_unit(unit: &SourceUnit, extractors: &[Extractor]) -> FileOutcome {
    let parsed = match parse_jsx_source(unit.source_text.clone(), &unit.file_path) {
        Ok(parsed) => parsed,
        Err(error) => {
            debug!(file = %unit.file_path, error = %error.message, "failed to parse source file");
            return FileOutcome::Failed(error);
        }
    };

    let mut occurrences = Vec::new();
    for extractor in extractors {
        let found = extractor.extract(&unit.file_path, &parsed);
        debug!(
            file = %unit.file_path,
            extractor = extractor.name(),
            count = found.len(),
            "extracted occurrences"
        );
        occurrences.extend(found);
    }
    FileOutcome::Occurrences(occurrences)
}

/// Run extraction over `units`, collecting keys, errors and stats.
///
/// Keys are deduplicated by their synthesized key; the first occurrence wins.
/// A file that fails to parse contributes one error and no keys.
pub fn extract_units(units: &[SourceUnit], options: &ExtractOptions) -> ExtractionReport {
    let start = Instant::now();
    let extractors = options.extractors();

    let outcomes: Vec<FileOutcome> = units
        .par_iter()
        .map(|unit| extract_unit(unit, &extractors))
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut keys = Vec::new();
    let mut errors = Vec::new();

    for outcome in outcomes {
        match outcome {
            FileOutcome::Occurrences(occurrences) => {
                for occurrence in occurrences {
                    let extracted = occurrence.into_extracted_key();
                    if seen.insert(extracted.key.clone()) {
                        keys.push(extracted);
                    }
                }
            }
            FileOutcome::Failed(error) => errors.push(error),
        }
    }

    let stats = ExtractionStats {
        files_processed: units.len(),
        keys_extracted: keys.len(),
        processing_time_ms: start.elapsed().as_millis() as u64,
        error_count: errors.len(),
    };
    debug!(
        files = stats.files_processed,
        keys = stats.keys_extracted,
        errors = stats.error_count,
        "extraction finished"
    );

    ExtractionReport {
        keys,
        errors,
        stats,
    }
}

/// Extraction report plus the result of merging into the inventory.
#[derive(Debug)]
pub struct InventoryUpdate {
    pub report: ExtractionReport,
    pub merge: MergeSummary,
    pub total_keys: usize,
    /// False for dry runs.
    pub written: bool,
}

/// Extract keys from `units` and merge them into the inventory at `output_path`.
///
/// The inventory is written once, and only when not a dry run.
pub fn extract_to_inventory(
    units: &[SourceUnit],
    options: &ExtractOptions,
    output_path: &Path,
    dry_run: bool,
) -> Result<InventoryUpdate> {
    let report = extract_units(units, options);

    let mut inventory = Inventory::load(output_path)?;
    let merge = inventory.merge(report.key_strings());

    if !dry_run {
        inventory.save(output_path)?;
        debug!(path = %output_path.display(), added = merge.added.len(), "inventory written");
    }

    Ok(InventoryUpdate {
        report,
        merge,
        total_keys: inventory.len(),
        written: !dry_run,
    })
}
