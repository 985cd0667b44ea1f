use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use transkit::mcp::{TranskitMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TranskitMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["output"], "locales/en.json");
    assert_eq!(json_result["config"]["transComponents"], json!(["Trans"]));
    assert_eq!(json_result["config"]["translationFunctions"], json!(["t"]));
    assert_eq!(json_result["config"]["ignoreTestFiles"], true);
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "output": "i18n/source.json",
            "sourceLanguage": "de",
            "translationFunctions": ["t", "i18nT"]
        }))
        .unwrap();

    let server = TranskitMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["output"], "i18n/source.json");
    assert_eq!(json_result["config"]["sourceLanguage"], "de");
    assert_eq!(json_result["config"]["translationFunctions"], json!(["t", "i18nT"]));
    assert_eq!(json_result["config"]["includes"], json!(["src"]));
}

#[tokio::test]
async fn test_get_config_invalid_file_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "transComponents": [] }))
        .unwrap();

    let server = TranskitMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
