//! Extraction error types.
//!
//! Errors found while extracting keys are plain data: they are collected per file
//! and reported together at the end of a run. A broken file never aborts the batch.

use std::fmt;

use serde::Serialize;

/// Category of an extraction error.
///
/// Only `Parse` is produced by the current extractors. The other variants are
/// reserved for recoverable anomalies inside an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Syntax,
    Parse,
    Extract,
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "syntax"),
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Extract => write!(f, "extract"),
            ErrorKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Source range an error points at. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLocation {
    pub file_path: String,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// A non-fatal error attributed to one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionError {
    pub kind: ErrorKind,
    pub file_path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ErrorLocation>,
    /// The offending source line, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ExtractionError {
    pub fn parse(file_path: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Parse,
            file_path: file_path.to_string(),
            message: message.into(),
            location: None,
            code: None,
        }
    }

    pub fn with_location(mut self, location: ErrorLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// `(line, column)` of the error start, falling back to `(0, 0)`.
    pub fn position(&self) -> (usize, usize) {
        self.location
            .as_ref()
            .map(|loc| (loc.start_line, loc.start_column))
            .unwrap_or((0, 0))
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(
                f,
                "{} error in {}:{}:{}: {}",
                self.kind, self.file_path, loc.start_line, loc.start_column, self.message
            ),
            None => write!(f, "{} error in {}: {}", self.kind, self.file_path, self.message),
        }
    }
}
