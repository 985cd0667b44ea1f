//! Report formatting and printing utilities.
//!
//! Extraction errors are displayed cargo-style; kept separate from the engine so
//! transkit can be used as a library.

use std::env;
use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::ExtractionError;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Set to hide durations, for stable test output.
pub const DISABLE_TIMING_ENV: &str = "TRANSKIT_DISABLE_TIMING";

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            print_extract_to(summary, verbose, &mut io::stdout().lock());
            print_unreadable_to(&summary.unreadable_files, &mut io::stderr().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print extraction errors in cargo-style format.
pub fn report_errors_to<W: Write>(errors: &[ExtractionError], writer: &mut W) {
    if errors.is_empty() {
        return;
    }

    let mut sorted: Vec<&ExtractionError> = errors.iter().collect();
    sorted.sort_by(|a, b| {
        a.file_path
            .cmp(&b.file_path)
            .then_with(|| a.position().cmp(&b.position()))
    });

    let max_line_width = sorted
        .iter()
        .map(|e| e.position().0)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for error in sorted {
        print_error(error, writer, max_line_width);
    }
}

fn print_error<W: Write>(error: &ExtractionError, writer: &mut W, max_line_width: usize) {
    let _ = writeln!(
        writer,
        "{}{}: {}",
        "error".bold().red(),
        format!("[{}]", error.kind).bold().red(),
        error.message
    );

    let (line, col) = error.position();
    if line == 0 {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), error.file_path);
        let _ = writeln!(writer);
        return;
    }
    let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), error.file_path, line, col);

    if let Some(source_line) = &error.code {
        let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = max_line_width);
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            "^".red(),
            width = max_line_width,
            padding = caret_padding
        );
    }

    let _ = writeln!(writer);
}

pub fn print_extract_to<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    let report = &summary.report;
    report_errors_to(&report.errors, writer);

    let added = summary.added_keys.len();
    if summary.is_dry_run || verbose {
        for key in &summary.added_keys {
            let _ = writeln!(writer, "  {} {}", "+".green(), key);
        }
    }
    if verbose {
        let _ = writeln!(
            writer,
            "{} {} key(s) already in the inventory, {} total",
            "note:".bold(),
            summary.existing_count,
            summary.total_keys
        );
    }

    let stats = &report.stats;
    let timing = if env::var_os(DISABLE_TIMING_ENV).is_some() {
        String::new()
    } else {
        format!(" in {}ms", stats.processing_time_ms)
    };
    let headline = format!(
        "Extracted {} {} from {} {}{}",
        stats.keys_extracted,
        plural(stats.keys_extracted, "key", "keys"),
        stats.files_processed,
        plural(stats.files_processed, "file", "files"),
        timing
    );

    let target = if summary.is_dry_run {
        format!(
            "{} new {} would be added to {} (dry run)",
            added,
            plural(added, "key", "keys"),
            summary.output_path.display()
        )
    } else {
        format!(
            "{} new {} written to {}",
            added,
            plural(added, "key", "keys"),
            summary.output_path.display()
        )
    };

    if report.has_errors() {
        let _ = writeln!(writer, "{} {}; {}", FAILURE_MARK.red(), headline, target);
        let _ = writeln!(
            writer,
            "{} {} {} could not be parsed",
            FAILURE_MARK.red(),
            stats.error_count,
            plural(stats.error_count, "file", "files").red()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{}; {}", headline, target).green()
        );
    }
}

pub fn print_unreadable_to<W: Write>(files: &[String], writer: &mut W) {
    for file in files {
        let _ = writeln!(
            writer,
            "{} skipped unreadable file {}",
            "warning:".bold().yellow(),
            file
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
