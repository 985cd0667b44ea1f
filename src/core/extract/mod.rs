//! Occurrence extraction from a parsed syntax tree.
//!
//! Two independent extractors walk the same tree:
//! - `component`: translation wrapper elements (`<Trans>`)
//! - `call`: translation function calls (`t("key")`)
//!
//! Neither extractor mutates the tree or shares state with the other, so the
//! order they run in only affects the order of their results.

pub mod call;
pub mod component;
pub mod expr_path;
pub mod occurrence;

use enum_dispatch::enum_dispatch;

pub use call::CallExtractor;
pub use component::ComponentExtractor;
pub use occurrence::{ExtractedKey, Metadata, Occurrence};

use crate::core::parsers::jsx::ParsedJSX;

/// An extraction strategy, dispatched statically over the `Extractor` enum.
#[enum_dispatch(OccurrenceExtractor)]
#[derive(Debug, Clone)]
pub enum Extractor {
    Component(ComponentExtractor),
    Call(CallExtractor),
}

#[enum_dispatch]
pub trait OccurrenceExtractor {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Collect every occurrence in the parsed file, in source order.
    fn extract(&self, file_path: &str, parsed: &ParsedJSX) -> Vec<Occurrence>;
}
