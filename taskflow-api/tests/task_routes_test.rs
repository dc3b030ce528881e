/// HTTP tests for the task routes

mod common;

use axum::http::{Method, StatusCode};
use common::TestContext;
use serde_json::json;

#[tokio::test]
async fn test_task_lifecycle() {
    let ctx = TestContext::new();
    let account = ctx.account("Alice").await;
    let auth = account.bearer();

    let (status, task) = ctx
        .send(
            Method::POST,
            "/api/v1/tasks",
            Some(&auth),
            Some(json!({ "title": "Buy milk" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["description"], "");
    assert_eq!(task["completed"], false);
    assert_eq!(task["owner_id"], account.id.to_string());
    let id = task["id"].as_str().unwrap().to_string();

    let (status, list) = ctx.send(Method::GET, "/api/v1/tasks", Some(&auth), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], id);

    let (status, updated) = ctx
        .send(
            Method::PUT,
            &format!("/api/v1/tasks/{}", id),
            Some(&auth),
            Some(json!({ "completed": true })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], "Buy milk");

    let (status, body) = ctx
        .send(Method::DELETE, &format!("/api/v1/tasks/{}", id), Some(&auth), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted successfully");

    let (_, list) = ctx.send(Method::GET, "/api/v1/tasks", Some(&auth), None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_mutations_without_token_leave_task_unchanged() {
    let ctx = TestContext::new();
    let account = ctx.account("Alice").await;
    let task = ctx.create_task(&account, "Keep me").await;
    let uri = format!("/api/v1/tasks/{}", task["id"].as_str().unwrap());

    let (status, _) = ctx
        .send(Method::PUT, &uri, None, Some(json!({ "title": "changed" })))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = ctx.send(Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, list) = ctx
        .send(Method::GET, "/api/v1/tasks", Some(&account.bearer()), None)
        .await;
    assert_eq!(list[0]["title"], "Keep me");
}

#[tokio::test]
async fn test_non_owner_is_forbidden() {
    let ctx = TestContext::new();
    let alice = ctx.account("Alice").await;
    let bob = ctx.account("Bob").await;
    let task = ctx.create_task(&alice, "Alice's").await;
    let uri = format!("/api/v1/tasks/{}", task["id"].as_str().unwrap());

    let (status, body) = ctx
        .send(
            Method::PUT,
            &uri,
            Some(&bob.bearer()),
            Some(json!({ "completed": true })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Not authorized");

    let (status, _) = ctx.send(Method::DELETE, &uri, Some(&bob.bearer()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, list) = ctx
        .send(Method::GET, "/api/v1/tasks", Some(&alice.bearer()), None)
        .await;
    assert_eq!(list[0]["completed"], false);
    assert_eq!(ctx.store.task_count().await, 1);
}

#[tokio::test]
async fn test_list_is_scoped_and_newest_first() {
    let ctx = TestContext::new();
    let alice = ctx.account("Alice").await;
    let bob = ctx.account("Bob").await;

    ctx.create_task(&alice, "first").await;
    ctx.create_task(&bob, "bob's").await;
    ctx.create_task(&alice, "second").await;

    let (_, list) = ctx
        .send(Method::GET, "/api/v1/tasks", Some(&alice.bearer()), None)
        .await;
    let titles: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[tokio::test]
async fn test_blank_title_rejected() {
    let ctx = TestContext::new();
    let account = ctx.account("Alice").await;

    let (status, body) = ctx
        .send(
            Method::POST,
            "/api/v1/tasks",
            Some(&account.bearer()),
            Some(json!({ "title": "   ", "description": "x" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Title is required");
    assert_eq!(body["details"][0]["field"], "title");
}

#[tokio::test]
async fn test_invalid_and_unknown_task_ids() {
    let ctx = TestContext::new();
    let account = ctx.account("Alice").await;

    let (status, body) = ctx
        .send(
            Method::DELETE,
            "/api/v1/tasks/not-a-uuid",
            Some(&account.bearer()),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid task ID");

    let (status, body) = ctx
        .send(
            Method::PUT,
            &format!("/api/v1/tasks/{}", uuid::Uuid::new_v4()),
            Some(&account.bearer()),
            Some(json!({ "completed": true })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task not found");
}

#[tokio::test]
async fn test_update_omitted_fields_unchanged() {
    let ctx = TestContext::new();
    let account = ctx.account("Alice").await;

    let (_, task) = ctx
        .send(
            Method::POST,
            "/api/v1/tasks",
            Some(&account.bearer()),
            Some(json!({ "title": "Write report", "description": "Q3 numbers" })),
        )
        .await;
    let uri = format!("/api/v1/tasks/{}", task["id"].as_str().unwrap());

    let (status, updated) = ctx
        .send(
            Method::PUT,
            &uri,
            Some(&account.bearer()),
            Some(json!({ "title": "Write final report" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Write final report");
    assert_eq!(updated["description"], "Q3 numbers");
    assert_eq!(updated["completed"], false);
    assert_eq!(updated["created_at"], task["created_at"]);
}
