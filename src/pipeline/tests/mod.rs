use super::*;
use crate::config::PipelineConfig;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn item(id: i64, active: bool, value: f64) -> Item {
    Item { id, active, value }
}

fn run_timestamp() -> chrono::DateTime<Utc> {
    "2024-06-01T12:00:00Z".parse().unwrap()
}

// -----------------------------------------------------------------------
// process_items: filter, double, threshold
// -----------------------------------------------------------------------

#[test]
fn active_item_above_threshold_is_doubled_and_kept() {
    let ts = run_timestamp();
    let processed = process_items(&[item(1, true, 6.0)], ts);

    assert_eq!(processed.len(), 1);
    assert_eq!(processed[0].id, 1);
    assert_eq!(processed[0].value, 12.0);
    assert_eq!(processed[0].processed_at, ts);
}

#[test]
fn inactive_item_is_dropped_regardless_of_value() {
    let processed = process_items(&[item(1, false, 100.0)], run_timestamp());
    assert!(processed.is_empty());
}

#[test]
fn doubled_value_must_strictly_exceed_threshold() {
    // 5.0 doubles to exactly 10.0, which does not exceed the threshold
    let processed = process_items(&[item(1, true, 5.0)], run_timestamp());
    assert!(processed.is_empty());

    let processed = process_items(&[item(2, true, 5.01)], run_timestamp());
    assert_eq!(processed.len(), 1);
}

#[test]
fn mixed_items_keep_only_qualifying_ones_in_order() {
    let items = vec![
        item(1, true, 6.0),   // kept: 12.0
        item(2, false, 50.0), // dropped: inactive
        item(3, true, 2.0),   // dropped: 4.0 <= 10
        item(4, true, 8.0),   // kept: 16.0
    ];
    let processed = process_items(&items, run_timestamp());

    let ids: Vec<i64> = processed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn all_items_share_the_run_timestamp() {
    let ts = run_timestamp();
    let items = vec![item(1, true, 10.0), item(2, true, 20.0)];
    let processed = process_items(&items, ts);

    assert!(processed.iter().all(|p| p.processed_at == ts));
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(process_items(&[], run_timestamp()).is_empty());
}

// -----------------------------------------------------------------------
// Wire format: camelCase field names on the output records
// -----------------------------------------------------------------------

#[test]
fn processed_result_serializes_with_camel_case_keys() {
    let result = ProcessedResult {
        user_id: 7,
        processed_items: process_items(&[item(1, true, 6.0)], run_timestamp()),
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["userId"], 7);
    assert_eq!(json["processedItems"][0]["value"], 12.0);
    assert!(json["processedItems"][0].get("processedAt").is_some());
}

#[test]
fn user_with_only_an_id_deserializes() {
    let user: User = serde_json::from_str(r#"{"id": 3}"#).unwrap();
    assert_eq!(user.id, 3);
    assert!(user.name.is_none());
}

#[test]
fn item_missing_optional_fields_deserializes_as_inactive_zero() {
    let parsed: Item = serde_json::from_str(r#"{"id": 9}"#).unwrap();
    assert_eq!(parsed, item(9, false, 0.0));
}

// -----------------------------------------------------------------------
// File I/O: fatal on missing/malformed input
// -----------------------------------------------------------------------

#[tokio::test]
async fn read_users_parses_a_user_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.json");
    tokio::fs::write(&path, r#"[{"id": 1, "name": "ada"}, {"id": 2}]"#)
        .await
        .unwrap();

    let users = read_users(&path).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name.as_deref(), Some("ada"));
}

#[tokio::test]
async fn read_users_fails_on_missing_file() {
    let dir = tempdir().unwrap();
    let result = read_users(&dir.path().join("nope.json")).await;
    assert!(matches!(result, Err(crate::Error::Io(_))));
}

#[tokio::test]
async fn read_users_fails_on_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.json");
    tokio::fs::write(&path, "not json").await.unwrap();

    let result = read_users(&path).await;
    assert!(matches!(result, Err(crate::Error::Serialization(_))));
}

#[tokio::test]
async fn write_results_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let results = vec![ProcessedResult {
        user_id: 1,
        processed_items: vec![],
    }];

    write_results(&path, &results).await.unwrap();

    let data = tokio::fs::read_to_string(&path).await.unwrap();
    let back: Vec<ProcessedResult> = serde_json::from_str(&data).unwrap();
    assert_eq!(back, results);
}

// -----------------------------------------------------------------------
// Full run against a mock item API
// -----------------------------------------------------------------------

async fn test_config(server: &MockServer, dir: &tempfile::TempDir) -> PipelineConfig {
    PipelineConfig {
        users_file: dir.path().join("users.json"),
        output_file: dir.path().join("out.json"),
        api_base_url: server.uri(),
        fetch_timeout_secs: 5,
    }
}

#[tokio::test]
async fn run_aggregates_one_result_per_user() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    tokio::fs::write(
        dir.path().join("users.json"),
        r#"[{"id": 1}, {"id": 2}]"#,
    )
    .await
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/users/1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                {"id": 10, "active": true, "value": 6.0},
                {"id": 11, "active": false, "value": 99.0}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/2/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .mount(&server)
        .await;

    let processor = BatchProcessor::new(test_config(&server, &dir).await).unwrap();
    let results = processor.run().await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].user_id, 1);
    assert_eq!(results[0].processed_items.len(), 1);
    assert_eq!(results[0].processed_items[0].value, 12.0);
    assert_eq!(results[1].user_id, 2);
    assert!(results[1].processed_items.is_empty());

    // Output file mirrors the returned results
    let written = tokio::fs::read_to_string(dir.path().join("out.json"))
        .await
        .unwrap();
    let on_disk: Vec<ProcessedResult> = serde_json::from_str(&written).unwrap();
    assert_eq!(on_disk, results);
}

#[tokio::test]
async fn failed_fetch_yields_empty_list_and_batch_continues() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    tokio::fs::write(
        dir.path().join("users.json"),
        r#"[{"id": 1}, {"id": 2}]"#,
    )
    .await
    .unwrap();

    // User 1's feed is broken; user 2's is fine
    Mock::given(method("GET"))
        .and(path("/users/1/items"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/2/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{"id": 20, "active": true, "value": 50.0}]
        })))
        .mount(&server)
        .await;

    let processor = BatchProcessor::new(test_config(&server, &dir).await).unwrap();
    let results = processor.run().await.unwrap();

    assert_eq!(results.len(), 2, "one failed fetch must not abort the batch");
    assert!(results[0].processed_items.is_empty());
    assert_eq!(results[1].processed_items.len(), 1);
    assert_eq!(results[1].processed_items[0].value, 100.0);
}

#[tokio::test]
async fn missing_items_key_is_treated_as_zero_items() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    tokio::fs::write(dir.path().join("users.json"), r#"[{"id": 1}]"#)
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/users/1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let processor = BatchProcessor::new(test_config(&server, &dir).await).unwrap();
    let results = processor.run().await.unwrap();

    assert!(results[0].processed_items.is_empty());
}

#[tokio::test]
async fn missing_input_file_aborts_the_run() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();

    let processor = BatchProcessor::new(test_config(&server, &dir).await).unwrap();
    assert!(processor.run().await.is_err());
}
