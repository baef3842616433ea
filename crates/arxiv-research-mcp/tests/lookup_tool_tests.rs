//! Tests for the extract_info tool.
//!
//! Lookups read only the local store, so every test here mounts a
//! zero-expectation mock: any HTTP request is a failure.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_research_mcp::catalog::Catalog;
use arxiv_research_mcp::config::Config;
use arxiv_research_mcp::error::ToolError;
use arxiv_research_mcp::models::PaperRecord;
use arxiv_research_mcp::tools::{ExtractInfoTool, McpTool, ToolContext};

/// Context whose mock server rejects all traffic: lookups must stay offline.
async fn setup_offline_context(mock_server: &MockServer, paper_dir: &Path) -> ToolContext {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri(), paper_dir);
    let catalog = Catalog::from_config(&config).unwrap();
    ToolContext::new(Arc::new(catalog))
}

/// Write a partition file by hand, the way a previous search would have.
fn seed_partition(root: &Path, partition: &str, entries: serde_json::Value) {
    let dir = root.join(partition);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("papers_info.json"), entries.to_string()).unwrap();
}

fn sample_record(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "authors": ["A. Author"],
        "summary": "A summary.",
        "pdf_url": "http://arxiv.org/pdf/2401.00001v1",
        "published": "2024-03-01"
    })
}

// =============================================================================
// Sentinel Message Tests
// =============================================================================

#[tokio::test]
async fn test_lookup_before_any_search_reports_missing_directory() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("papers");

    let ctx = setup_offline_context(&mock_server, &root).await;
    let tool = ExtractInfoTool;

    let result = tool.execute(&ctx, json!({"paper_id": "2401.00001v1"})).await.unwrap();
    assert_eq!(result, format!("Papers directory '{}' does not exist.", root.display()));
}

#[tokio::test]
async fn test_lookup_unknown_id_reports_nothing_saved() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    seed_partition(temp.path(), "quantum", json!({"2401.00001v1": sample_record("Known")}));

    let ctx = setup_offline_context(&mock_server, temp.path()).await;
    let tool = ExtractInfoTool;

    let result = tool.execute(&ctx, json!({"paper_id": "9999.00000v1"})).await.unwrap();
    assert_eq!(result, "There's no saved information related to paper 9999.00000v1.");
}

// =============================================================================
// Retrieval Tests
// =============================================================================

#[tokio::test]
async fn test_lookup_found_returns_pretty_json_record() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    seed_partition(
        temp.path(),
        "machine_learning",
        json!({"2401.00001v1": sample_record("Found Paper")}),
    );

    let ctx = setup_offline_context(&mock_server, temp.path()).await;
    let tool = ExtractInfoTool;

    let result = tool.execute(&ctx, json!({"paper_id": "2401.00001v1"})).await.unwrap();
    assert!(result.starts_with("{\n"), "expected pretty JSON, got: {result}");

    let record: PaperRecord = serde_json::from_str(&result).unwrap();
    assert_eq!(record.title, "Found Paper");
    assert_eq!(record.authors, vec!["A. Author"]);
    assert_eq!(record.pdf_url.as_deref(), Some("http://arxiv.org/pdf/2401.00001v1"));
}

#[tokio::test]
async fn test_lookup_scans_every_partition() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    seed_partition(temp.path(), "topic_a", json!({"1111.11111v1": sample_record("In A")}));
    seed_partition(temp.path(), "topic_b", json!({"2222.22222v1": sample_record("In B")}));
    seed_partition(temp.path(), "topic_c", json!({"3333.33333v1": sample_record("In C")}));

    let ctx = setup_offline_context(&mock_server, temp.path()).await;
    let tool = ExtractInfoTool;

    let result = tool.execute(&ctx, json!({"paper_id": "3333.33333v1"})).await.unwrap();
    let record: PaperRecord = serde_json::from_str(&result).unwrap();
    assert_eq!(record.title, "In C");
}

#[tokio::test]
async fn test_lookup_is_idempotent() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    seed_partition(temp.path(), "stable", json!({"2401.00001v1": sample_record("Stable")}));

    let ctx = setup_offline_context(&mock_server, temp.path()).await;
    let tool = ExtractInfoTool;

    let first = tool.execute(&ctx, json!({"paper_id": "2401.00001v1"})).await.unwrap();
    let second = tool.execute(&ctx, json!({"paper_id": "2401.00001v1"})).await.unwrap();
    assert_eq!(first, second, "repeated lookups must render identically");

    let missing_first = tool.execute(&ctx, json!({"paper_id": "none"})).await.unwrap();
    let missing_second = tool.execute(&ctx, json!({"paper_id": "none"})).await.unwrap();
    assert_eq!(missing_first, missing_second);
}

#[tokio::test]
async fn test_lookup_duplicate_id_returns_one_of_the_copies() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    // Same identifier stored under two topics; either copy is acceptable.
    seed_partition(temp.path(), "topic_a", json!({"2401.00001v1": sample_record("Copy A")}));
    seed_partition(temp.path(), "topic_b", json!({"2401.00001v1": sample_record("Copy B")}));

    let ctx = setup_offline_context(&mock_server, temp.path()).await;
    let tool = ExtractInfoTool;

    let result = tool.execute(&ctx, json!({"paper_id": "2401.00001v1"})).await.unwrap();
    let record: PaperRecord = serde_json::from_str(&result).unwrap();
    assert!(record.title == "Copy A" || record.title == "Copy B");
}

// =============================================================================
// Robustness Tests
// =============================================================================

#[tokio::test]
async fn test_lookup_skips_corrupt_and_bare_partitions() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    let corrupt = temp.path().join("corrupt");
    std::fs::create_dir_all(&corrupt).unwrap();
    std::fs::write(corrupt.join("papers_info.json"), "{ broken").unwrap();

    std::fs::create_dir_all(temp.path().join("no_mapping_file")).unwrap();
    std::fs::write(temp.path().join("stray.txt"), "not a partition").unwrap();

    seed_partition(temp.path(), "healthy", json!({"2401.00001v1": sample_record("Survivor")}));

    let ctx = setup_offline_context(&mock_server, temp.path()).await;
    let tool = ExtractInfoTool;

    let result = tool.execute(&ctx, json!({"paper_id": "2401.00001v1"})).await.unwrap();
    let record: PaperRecord = serde_json::from_str(&result).unwrap();
    assert_eq!(record.title, "Survivor");
}

#[tokio::test]
async fn test_lookup_missing_paper_id_is_an_input_error() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    let ctx = setup_offline_context(&mock_server, temp.path()).await;
    let tool = ExtractInfoTool;

    let err = tool.execute(&ctx, json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::Serialization(_)), "unexpected error: {err:?}");
}
