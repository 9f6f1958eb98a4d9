//! End-to-end tests for the `/commands` resource over an in-memory database.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use command_api::{create_router, ApiConfig, AppState};
use command_persistence::CommandStore;

async fn make_server() -> TestServer {
    let store = CommandStore::connect_in_memory().await.unwrap();
    store.migrate().await.unwrap();
    TestServer::new(create_router(AppState::new(ApiConfig::default(), store))).unwrap()
}

async fn create(server: &TestServer, body: Value) -> Value {
    let response = server.post("/commands").json(&body).await;
    response.assert_status_ok();
    response.json::<Value>()["data"].clone()
}

async fn list(server: &TestServer) -> Vec<Value> {
    let response = server.get("/commands").await;
    response.assert_status_ok();
    response.json::<Value>()["data"].as_array().unwrap().clone()
}

#[tokio::test]
async fn build_lifecycle_scenario() {
    let server = make_server().await;

    let response = server.post("/commands").json(&json!({"name": "build"})).await;
    response.assert_status_ok();
    response.assert_json(&json!({"data": {"id": 1, "name": "build"}}));

    let response = server.get("/commands").await;
    response.assert_status_ok();
    response.assert_json(&json!({"data": [{"id": 1, "name": "build"}]}));

    let response = server.delete("/commands/1").await;
    response.assert_status_ok();
    response.assert_json(&json!({"data": []}));

    let response = server.delete("/commands/1").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn created_row_matches_payload_plus_id() {
    let server = make_server().await;

    let payload = json!({"name": "test", "description": "run the suite"});
    let created = create(&server, payload.clone()).await;

    let mut expected = payload;
    expected["id"] = created["id"].clone();
    assert!(created["id"].is_i64());
    assert_eq!(created, expected);
    assert!(list(&server).await.contains(&expected));
}

#[tokio::test]
async fn identical_payloads_get_distinct_ids() {
    let server = make_server().await;

    let a = create(&server, json!({"name": "same"})).await;
    let b = create(&server, json!({"name": "same"})).await;

    assert_ne!(a["id"], b["id"]);
    assert_eq!(list(&server).await.len(), 2);
}

#[tokio::test]
async fn delete_missing_id_leaves_rows_unchanged() {
    let server = make_server().await;
    create(&server, json!({"name": "one"})).await;
    create(&server, json!({"name": "two"})).await;
    let before = list(&server).await;

    let response = server.delete("/commands/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("999"));

    assert_eq!(list(&server).await, before);
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let server = make_server().await;
    let first = create(&server, json!({"name": "first"})).await;
    let second = create(&server, json!({"name": "second"})).await;
    let third = create(&server, json!({"name": "third"})).await;

    let response = server
        .delete(&format!("/commands/{}", second["id"]))
        .await;
    response.assert_status_ok();

    let remaining = response.json::<Value>()["data"].as_array().unwrap().clone();
    assert_eq!(remaining, vec![first, third]);
    assert_eq!(list(&server).await, remaining);
}

#[tokio::test]
async fn invalid_payloads_insert_nothing() {
    let server = make_server().await;

    let bad_bodies = [
        json!({}),
        json!({"name": ""}),
        json!({"name": null}),
        json!({"name": ["build"]}),
        json!({"name": "   "}),
    ];

    for body in bad_bodies {
        let response = server.post("/commands").json(&body).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    assert!(list(&server).await.is_empty());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let server = make_server().await;
    let first = create(&server, json!({"name": "a"})).await;

    server
        .delete(&format!("/commands/{}", first["id"]))
        .await
        .assert_status_ok();

    let next = create(&server, json!({"name": "b"})).await;
    assert!(next["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
}

#[tokio::test]
async fn payload_values_are_stored_as_sent() {
    let server = make_server().await;

    let payload = json!({"name": " build ", "description": "  "});
    let created = create(&server, payload.clone()).await;

    let mut expected = payload;
    expected["id"] = created["id"].clone();
    assert_eq!(created, expected);
    assert_eq!(list(&server).await, vec![expected]);
}

#[tokio::test]
async fn undeclared_fields_are_ignored() {
    let server = make_server().await;

    let created = create(&server, json!({"name": "ok", "extra": 1})).await;
    assert_eq!(created, json!({"id": created["id"].clone(), "name": "ok"}));
    assert_eq!(list(&server).await.len(), 1);
}

#[tokio::test]
async fn name_length_is_counted_as_sent() {
    let server = make_server().await;

    let longest = format!("a{}", " ".repeat(254));
    let created = create(&server, json!({"name": longest})).await;
    assert_eq!(created["name"].as_str().unwrap().chars().count(), 255);

    let too_long = format!("a{}", " ".repeat(255));
    let response = server.post("/commands").json(&json!({"name": too_long})).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["details"]["name"].is_array());

    assert_eq!(list(&server).await.len(), 1);
}
