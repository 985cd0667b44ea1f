//! Model Context Protocol (MCP) server.
//!
//! Exposes configuration lookup and key extraction to AI coding agents over stdio.

mod server;
pub mod types;

pub use server::{TranskitMcpServer, run_server};
