//! Project-level context shared by the CLI and the MCP server.
//!
//! Resolves where sources live and where the inventory goes, then reads every
//! scanned source file into [`SourceUnit`]s for the pipeline.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    config::{Config, load_config},
    core::{
        file_scanner::scan_files,
        pipeline::{ExtractOptions, SourceUnit},
        translate::{Translator, translate_file},
    },
};

/// Settings resolved from the config file and caller overrides.
#[derive(Debug)]
pub struct ProjectSettings {
    pub root: PathBuf,
    pub config: Config,
    /// Inventory path. Relative config values are joined onto `root`.
    pub output: PathBuf,
}

impl ProjectSettings {
    pub fn resolve(source_root: Option<&Path>, output: Option<&Path>) -> Result<Self> {
        let root = source_root.unwrap_or(Path::new(".")).to_path_buf();
        if !root.is_dir() {
            bail!("Source root is not a directory: {}", root.display());
        }

        let config = load_config(&root)?.config;
        let output = match output {
            Some(path) => path.to_path_buf(),
            None => root.join(&config.output),
        };

        Ok(Self {
            root,
            config,
            output,
        })
    }

    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            component_names: self.config.trans_components.clone(),
            function_names: self.config.translation_functions.clone(),
        }
    }

    /// Inventory path for display, relative to `root` when it lives under it.
    pub fn display_output(&self) -> PathBuf {
        self.output
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| self.output.clone())
    }

    /// Translate the inventory from the configured `sourceLanguage` into `target_lang`.
    pub fn translate_inventory(
        &self,
        translator: &dyn Translator,
        target_lang: &str,
    ) -> Result<PathBuf> {
        translate_file(
            &self.output,
            translator,
            &self.config.source_language,
            target_lang,
        )
    }
}

/// Files read for extraction plus the ones that could not be read.
pub struct LoadedSources {
    pub units: Vec<SourceUnit>,
    pub unreadable: Vec<String>,
}

/// Scan the project and read every source file.
///
/// File paths in the resulting units are relative to `root` when possible.
pub fn load_sources(root: &Path, config: &Config) -> LoadedSources {
    let scan = scan_files(
        root,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
    );
    debug!(files = scan.files.len(), skipped = scan.skipped_count, "scanned source files");

    let results: Vec<(String, Option<String>)> = scan
        .files
        .par_iter()
        .map(|file| {
            let relative = relative_path(root, Path::new(file));
            match fs::read_to_string(file) {
                Ok(source) => (relative, Some(source)),
                Err(e) => {
                    warn!(file = %relative, error = %e, "cannot read source file");
                    (relative, None)
                }
            }
        })
        .collect();

    let mut units = Vec::with_capacity(results.len());
    let mut unreadable = Vec::new();
    for (file_path, source) in results {
        match source {
            Some(source_text) => units.push(SourceUnit {
                file_path,
                source_text,
            }),
            None => unreadable.push(file_path),
        }
    }

    LoadedSources { units, unreadable }
}

fn relative_path(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .unwrap_or(file)
        .to_string_lossy()
        .replace('\\', "/")
}
