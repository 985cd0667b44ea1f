use std::path::PathBuf;

use crate::core::pipeline::ExtractionReport;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub report: ExtractionReport,
    /// Keys that were (or, for a dry run, would be) added to the inventory.
    pub added_keys: Vec<String>,
    pub existing_count: usize,
    pub total_keys: usize,
    /// Inventory path as shown to the user.
    pub output_path: PathBuf,
    pub is_dry_run: bool,
    /// Files found by the scanner but not readable as UTF-8 text.
    pub unreadable_files: Vec<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a transkit command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of extraction errors. Any error makes the command exit with 1.
    pub error_count: usize,
}

impl CommandResult {
    pub fn init(created: bool) -> Self {
        Self {
            summary: CommandSummary::Init(InitSummary { created }),
            error_count: usize::from(!created),
        }
    }
}
