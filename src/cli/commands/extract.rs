use anyhow::{Context, Result};

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::core::{
    pipeline::extract_to_inventory,
    project::{ProjectSettings, load_sources},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let settings = ProjectSettings::resolve(cmd.common.source_root.as_deref(), cmd.output.as_deref())?;
    let sources = load_sources(&settings.root, &settings.config);

    let update = extract_to_inventory(
        &sources.units,
        &settings.options(),
        &settings.output,
        cmd.dry_run,
    )
    .with_context(|| format!("Failed to update inventory {}", settings.output.display()))?;

    let error_count = update.report.errors.len();
    let output_path = settings.display_output();

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            report: update.report,
            added_keys: update.merge.added,
            existing_count: update.merge.existing,
            total_keys: update.total_keys,
            output_path,
            is_dry_run: cmd.dry_run,
            unreadable_files: sources.unreadable,
        }),
        error_count,
    })
}
