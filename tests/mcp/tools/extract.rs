use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use transkit::mcp::{TranskitMcpServer, types::ExtractKeysParams};

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json};

fn params(fixture: &McpTestFixture, dry_run: Option<bool>) -> Parameters<ExtractKeysParams> {
    Parameters(ExtractKeysParams {
        project_root_path: fixture.root(),
        dry_run,
        limit: None,
        offset: None,
    })
}

#[tokio::test]
async fn test_extract_keys_writes_inventory() {
    let fixture = McpTestFixture::with_sources(&[
        ("src/a.tsx", r#"export const A = () => <Trans>Welcome</Trans>;"#),
        ("src/b.ts", r#"t("items", { count: n, ns: "shop" });"#),
    ])
    .unwrap();
    let server = TranskitMcpServer::new();

    let result = server.extract_keys(params(&fixture, None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["dryRun"], false);
    assert_eq!(json_result["output"], "locales/en.json");
    assert_eq!(json_result["addedCount"], 2);
    assert_eq!(json_result["totalInventoryKeys"], 2);
    assert_eq!(json_result["stats"]["filesProcessed"], 2);
    assert_eq!(json_result["stats"]["keysExtracted"], 2);
    assert_eq!(json_result["stats"]["errorCount"], 0);
    assert_eq!(json_result["keys"][0]["key"], "Welcome");
    assert_eq!(json_result["keys"][0]["filePath"], "src/a.tsx");
    assert_eq!(json_result["keys"][1]["key"], "items, count={{n}}, ns=shop");
    assert_eq!(
        json_result["keys"][1]["metadata"],
        json!({ "count": "n", "ns": "shop" })
    );
    assert_pagination(&json_result, 0, 50, false);

    let inventory = fixture.read_inventory().unwrap();
    assert_eq!(
        inventory,
        json!({ "Welcome": "Welcome", "items, count={{n}}, ns=shop": "items, count={{n}}, ns=shop" })
    );
}

#[tokio::test]
async fn test_extract_keys_dry_run() {
    let fixture = McpTestFixture::with_sources(&[("src/a.ts", r#"t("a");"#)]).unwrap();
    let server = TranskitMcpServer::new();

    let result = server.extract_keys(params(&fixture, Some(true))).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["dryRun"], true);
    assert_eq!(json_result["addedCount"], 1);
    assert!(!fixture.root_path().join("locales").join("en.json").exists());
}

#[tokio::test]
async fn test_extract_keys_reports_parse_errors() {
    let fixture = McpTestFixture::with_sources(&[
        ("src/ok.ts", r#"t("ok");"#),
        ("src/broken.tsx", "export const B = () => <div>"),
    ])
    .unwrap();
    let server = TranskitMcpServer::new();

    let result = server.extract_keys(params(&fixture, Some(true))).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let errors = json_result["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["kind"], "parse");
    assert_eq!(errors[0]["filePath"], "src/broken.tsx");
    assert_eq!(json_result["stats"]["filesProcessed"], 2);
    assert_eq!(json_result["stats"]["errorCount"], 1);
}

#[tokio::test]
async fn test_extract_keys_pagination() {
    let source: String = (0..5).map(|i| format!("t(\"key.{}\");\n", i)).collect();
    let fixture = McpTestFixture::with_sources(&[("src/keys.ts", source.as_str())]).unwrap();
    let server = TranskitMcpServer::new();

    let result = server
        .extract_keys(Parameters(ExtractKeysParams {
            project_root_path: fixture.root(),
            dry_run: Some(true),
            limit: Some(2),
            offset: Some(2),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    let keys = json_result["keys"].as_array().unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0]["key"], "key.2");
    assert_eq!(keys[1]["key"], "key.3");
    assert_pagination(&json_result, 2, 2, true);
}

#[tokio::test]
async fn test_extract_keys_limit_is_capped() {
    let fixture = McpTestFixture::with_sources(&[("src/a.ts", r#"t("a");"#)]).unwrap();
    let server = TranskitMcpServer::new();

    let result = server
        .extract_keys(Parameters(ExtractKeysParams {
            project_root_path: fixture.root(),
            dry_run: Some(true),
            limit: Some(10_000),
            offset: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 200, false);
}

#[tokio::test]
async fn test_extract_keys_missing_root_is_an_error() {
    let server = TranskitMcpServer::new();
    let result = server
        .extract_keys(Parameters(ExtractKeysParams {
            project_root_path: "/definitely/not/a/project".to_string(),
            dry_run: None,
            limit: None,
            offset: None,
        }))
        .await;

    assert!(result.is_err());
}
