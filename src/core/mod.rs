//! Extraction engine.
//!
//! - `parsers`: source text → syntax tree
//! - `extract`: syntax tree → occurrences
//! - `key`: occurrence → inventory key
//! - `inventory`: add-only merge into the persisted key map
//! - `pipeline`: per-file orchestration, error and stats aggregation
//! - `project`, `file_scanner`, `translate`: caller-side helpers

pub mod extract;
pub mod file_scanner;
pub mod inventory;
pub mod key;
pub mod parsers;
pub mod pipeline;
pub mod project;
pub mod translate;

pub use inventory::{Inventory, MergeSummary};
pub use pipeline::{
    ExtractOptions, ExtractionReport, ExtractionStats, InventoryUpdate, SourceUnit,
    extract_to_inventory, extract_units,
};
pub use project::{LoadedSources, ProjectSettings, load_sources};
