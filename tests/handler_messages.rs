mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_create_message_success() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/api/messages")
        .json(&json!({ "content": "hello" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["content"], "hello");
    assert!(json["createdAt"].is_string());
    assert_eq!(repo.insert_calls(), 1);
}

#[tokio::test]
async fn test_list_returns_created_message() {
    let (server, _repo) = common::create_test_server();

    let created = server
        .post("/api/messages")
        .json(&json!({ "content": "hello" }))
        .await
        .json::<serde_json::Value>();

    let response = server.get("/api/messages").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json, json!([created]));
}

#[tokio::test]
async fn test_list_empty_board() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/api/messages").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_list_after_inserts_has_unique_ids() {
    let (server, _repo) = common::create_test_server();

    for i in 0..5 {
        server
            .post("/api/messages")
            .json(&json!({ "content": format!("message {}", i) }))
            .await
            .assert_status_ok();
    }

    let json = server.get("/api/messages").await.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 5);

    let ids: HashSet<i64> = items.iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids.len(), 5);
    assert_eq!(items[0]["content"], "message 0");
    assert_eq!(items[4]["content"], "message 4");
}

#[tokio::test]
async fn test_repeated_list_is_served_from_cache() {
    let (server, repo) = common::create_test_server();
    server
        .post("/api/messages")
        .json(&json!({ "content": "cached" }))
        .await
        .assert_status_ok();

    let first = server.get("/api/messages").await.json::<serde_json::Value>();
    let second = server.get("/api/messages").await.json::<serde_json::Value>();

    assert_eq!(first, second);
    assert_eq!(repo.list_calls(), 1);
}

#[tokio::test]
async fn test_create_invalidates_cached_list() {
    let (server, repo) = common::create_test_server();

    server.get("/api/messages").await.assert_status_ok();
    assert_eq!(repo.list_calls(), 1);

    server
        .post("/api/messages")
        .json(&json!({ "content": "fresh" }))
        .await
        .assert_status_ok();

    let json = server.get("/api/messages").await.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["content"], "fresh");
    assert_eq!(repo.list_calls(), 2);
}

#[tokio::test]
async fn test_create_rejects_empty_content() {
    let (server, repo) = common::create_test_server();

    for body in [
        json!({ "content": "" }),
        json!({ "content": "   " }),
        json!({ "content": null }),
        json!({}),
    ] {
        let response = server.post("/api/messages").json(&body).await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "Message content cannot be empty");
    }

    assert_eq!(repo.insert_calls(), 0);
    assert!(repo.stored().await.is_empty());
}

#[tokio::test]
async fn test_list_store_failure_returns_500() {
    let (server, repo) = common::create_test_server();
    repo.set_failing(true);

    let response = server.get("/api/messages").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Failed to fetch messages");
    assert_eq!(json["message"], "connection refused");
}

#[tokio::test]
async fn test_create_store_failure_returns_500() {
    let (server, repo) = common::create_test_server();
    repo.set_failing(true);

    let response = server
        .post("/api/messages")
        .json(&json!({ "content": "lost" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Failed to create message");
    assert_eq!(json["message"], "connection refused");
}

#[tokio::test]
async fn test_messages_served_when_cache_unavailable() {
    let (server, repo) = common::create_test_server_with_cache(Arc::new(common::UnavailableCache));

    server
        .post("/api/messages")
        .json(&json!({ "content": "still works" }))
        .await
        .assert_status_ok();

    let first = server.get("/api/messages").await;
    first.assert_status_ok();
    let json = first.json::<serde_json::Value>();
    assert_eq!(json[0]["content"], "still works");

    server.get("/api/messages").await.assert_status_ok();
    assert_eq!(repo.list_calls(), 2);
}
