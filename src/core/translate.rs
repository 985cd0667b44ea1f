//! Translation of resource documents through an external translation service.
//!
//! The service itself is opaque: anything implementing [`Translator`] can be
//! plugged in. The walker only decides which values get translated (string
//! leaves) and where the result is written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tracing::debug;

pub trait Translator {
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;
}

impl<F> Translator for F
where
    F: Fn(&str, &str, &str) -> Result<String>,
{
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        self(text, source_lang, target_lang)
    }
}

/// Translate every string leaf of `value`, keeping its shape.
///
/// Object key order is preserved; numbers, booleans and nulls are copied as is.
/// The first translation failure aborts the walk.
pub fn translate_value(
    value: &Value,
    translator: &dyn Translator,
    source_lang: &str,
    target_lang: &str,
) -> Result<Value> {
    match value {
        Value::String(text) => translator
            .translate(text, source_lang, target_lang)
            .map(Value::String)
            .with_context(|| format!("Failed to translate \"{}\"", text)),
        Value::Array(items) => items
            .iter()
            .map(|item| translate_value(item, translator, source_lang, target_lang))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Value::Object(entries) => {
            let mut translated = Map::with_capacity(entries.len());
            for (key, item) in entries {
                translated.insert(
                    key.clone(),
                    translate_value(item, translator, source_lang, target_lang)?,
                );
            }
            Ok(Value::Object(translated))
        }
        other => Ok(other.clone()),
    }
}

/// `locales/en.json` + `ja` → `locales/en.ja.json`.
pub fn translated_output_path(input: &Path, target_lang: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}.{}.{}", stem, target_lang, ext.to_string_lossy()),
        None => format!("{}.{}", stem, target_lang),
    };
    input.with_file_name(file_name)
}

/// Translate a JSON resource file and write the result next to it.
///
/// Returns the path of the written file.
pub fn translate_file(
    input: &Path,
    translator: &dyn Translator,
    source_lang: &str,
    target_lang: &str,
) -> Result<PathBuf> {
    if source_lang == target_lang {
        bail!(
            "Source and target language are both \"{}\"; nothing to translate",
            source_lang
        );
    }

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read resource: {}", input.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse resource: {}", input.display()))?;

    let translated = translate_value(&document, translator, source_lang, target_lang)?;

    let output = translated_output_path(input, target_lang);
    let rendered = serde_json::to_string_pretty(&translated)
        .context("Failed to serialize translated resource")?;
    fs::write(&output, format!("{}\n", rendered))
        .with_context(|| format!("Failed to write resource: {}", output.display()))?;

    debug!(input = %input.display(), output = %output.display(), target_lang, "resource translated");
    Ok(output)
}
