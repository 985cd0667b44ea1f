use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    config::load_config,
    core::{
        pipeline::extract_to_inventory,
        project::{ProjectSettings, load_sources},
    },
};

use super::types::{
    ConfigDto, ConfigValues, ExtractKeysParams, ExtractKeysResult, GetConfigParams, Pagination,
    paginate,
};

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[derive(Clone)]
pub struct TranskitMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TranskitMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TranskitMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current transkit configuration
    #[tool(description = "Get the current transkit configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Extract translation keys and merge them into the inventory
    #[tool(
        description = "Extract translation keys from <Trans> components and t() calls, and merge new keys into the key inventory. Existing inventory entries are never changed. Use dryRun to preview. Returns stats, parse errors and a paginated key list."
    )]
    pub async fn extract_keys(
        &self,
        params: Parameters<ExtractKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = Path::new(&params.project_root_path);
        let dry_run = params.dry_run.unwrap_or(false);
        let (limit, offset) = Pagination::resolve(params.limit, params.offset);

        let settings = ProjectSettings::resolve(Some(root), None)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;
        let sources = load_sources(&settings.root, &settings.config);

        let update = extract_to_inventory(&sources.units, &settings.options(), &settings.output, dry_run)
            .map_err(|e| McpError::internal_error(format!("Extraction failed: {:#}", e), None))?;
        debug!(
            added = update.merge.added.len(),
            dry_run, "extract_keys finished"
        );

        let report = update.report;
        let (keys, pagination) = paginate(report.keys, limit, offset);

        to_json_result(&ExtractKeysResult {
            output: settings.config.output.clone(),
            dry_run,
            stats: report.stats,
            added_count: update.merge.added.len(),
            total_inventory_keys: update.total_keys,
            errors: report.errors,
            keys,
            pagination,
        })
    }
}

#[tool_handler]
impl ServerHandler for TranskitMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Transkit MCP extracts translation keys from React sources into a JSON key inventory.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. extract_keys - Extract keys and merge new ones into the inventory (paginated key list)\n\n\
                 Run extract_keys with dryRun first to preview which keys would be added."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TranskitMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
