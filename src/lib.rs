//! Transkit - translation key extraction for React projects
//!
//! Transkit parses JS/TS/JSX/TSX sources, finds `<Trans>` components and `t()`
//! calls, synthesizes normalized keys (with plural, context and namespace
//! qualifiers) and merges them into a JSON key inventory without touching
//! existing entries.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parse, extract, synthesize, merge)
//! - `issues`: Extraction error types
//! - `logging`: Tracing subscriber setup
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod mcp;
