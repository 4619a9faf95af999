//! Router tests against an in-memory SQLite store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt as _;
use uuid::Uuid;
use wall_core::Walls;
use wall_store_sqlite::SqliteStore;

use crate::api_router;

async fn make_walls() -> Walls<SqliteStore> {
  let store = SqliteStore::open_in_memory().await.unwrap();
  Walls::new(Arc::new(store))
}

async fn call(
  walls:  &Walls<SqliteStore>,
  method: &str,
  uri:    &str,
  body:   Option<Value>,
) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  let resp = api_router(walls.clone())
    .oneshot(builder.body(body).unwrap())
    .await
    .unwrap();

  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let json = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, json)
}

async fn create_wall(walls: &Walls<SqliteStore>, owner: Uuid, extra: Value) -> String {
  let (status, wall) = call(
    walls,
    "POST",
    "/walls",
    Some(json!({ "title": "My wall", "owner": owner, "participants": extra })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED, "{wall}");
  wall["wall_id"].as_str().unwrap().to_owned()
}

// ── Walls ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_201_with_owner_last() {
  let walls = make_walls().await;
  let owner = Uuid::new_v4();
  let member = Uuid::new_v4();

  let (status, wall) = call(
    &walls,
    "POST",
    "/walls",
    Some(json!({
      "title": "My wall",
      "owner": owner,
      "participants": [{ "subject": member, "role": "member" }],
    })),
  )
  .await;

  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(wall["title"], "My wall");
  assert_eq!(wall["participants"][0]["subject"], member.to_string());
  assert_eq!(wall["participants"][1]["subject"], owner.to_string());
  assert_eq!(wall["participants"][1]["role"], "admin");
}

#[tokio::test]
async fn create_without_title_is_422() {
  let walls = make_walls().await;
  let (status, body) = call(
    &walls,
    "POST",
    "/walls",
    Some(json!({ "owner": Uuid::new_v4() })),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn create_with_unknown_role_is_422() {
  let walls = make_walls().await;
  let (status, body) = call(
    &walls,
    "POST",
    "/walls",
    Some(json!({
      "title": "Title",
      "owner": Uuid::new_v4(),
      "participants": [{ "subject": Uuid::new_v4(), "role": "invalid" }],
    })),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  assert!(body["error"].as_str().unwrap().contains("participants.0.role"));
}

#[tokio::test]
async fn malformed_json_is_rejected_with_json_error() {
  let walls = make_walls().await;
  let req = Request::builder()
    .method("POST")
    .uri("/walls")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from("{not json"))
    .unwrap();
  let resp = api_router(walls).oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_missing_wall_is_404() {
  let walls = make_walls().await;
  let (status, body) = call(&walls, "GET", &format!("/walls/{}", Uuid::new_v4()), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn delete_is_idempotent() {
  let walls = make_walls().await;
  let id = create_wall(&walls, Uuid::new_v4(), json!([])).await;

  let (status, _) = call(&walls, "DELETE", &format!("/walls/{id}"), None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);
  let (status, _) = call(&walls, "GET", &format!("/walls/{id}"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  let (status, _) = call(&walls, "DELETE", &format!("/walls/{id}"), None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);
}

// ── Roster ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn join_defaults_to_member_role() {
  let walls = make_walls().await;
  let id = create_wall(&walls, Uuid::new_v4(), json!([])).await;

  let (status, wall) = call(
    &walls,
    "POST",
    &format!("/walls/{id}/participants"),
    Some(json!({ "subject": Uuid::new_v4() })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(wall["participants"][1]["role"], "member");
}

#[tokio::test]
async fn leaving_as_last_admin_is_409() {
  let walls = make_walls().await;
  let owner = Uuid::new_v4();
  let id = create_wall(&walls, owner, json!([])).await;

  let (status, body) =
    call(&walls, "DELETE", &format!("/walls/{id}/participants/{owner}"), None).await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert_eq!(body["error"], "the last admin can not be removed");
}

// ── Messages ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn member_posting_is_403_and_admin_posting_is_201() {
  let walls = make_walls().await;
  let owner = Uuid::new_v4();
  let member = Uuid::new_v4();
  let id = create_wall(&walls, owner, json!([{ "subject": member }])).await;
  let uri = format!("/walls/{id}/messages");

  let (status, _) = call(
    &walls,
    "POST",
    &uri,
    Some(json!({ "author": member, "body": "Lorem ipsum" })),
  )
  .await;
  assert_eq!(status, StatusCode::FORBIDDEN);

  let (status, wall) = call(
    &walls,
    "POST",
    &uri,
    Some(json!({ "author": owner, "title": "My message", "body": "Lorem ipsum" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(wall["messages"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn message_without_author_is_422() {
  let walls = make_walls().await;
  let id = create_wall(&walls, Uuid::new_v4(), json!([])).await;
  let (status, body) = call(
    &walls,
    "POST",
    &format!("/walls/{id}/messages"),
    Some(json!({ "body": "Lorem ipsum" })),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  assert!(body["error"].as_str().unwrap().contains("author"));
}

#[tokio::test]
async fn reply_and_read_flow() {
  let walls = make_walls().await;
  let owner = Uuid::new_v4();
  let member = Uuid::new_v4();
  let id = create_wall(&walls, owner, json!([{ "subject": member, "role": "member" }])).await;

  call(
    &walls,
    "POST",
    &format!("/walls/{id}/messages"),
    Some(json!({ "author": owner, "body": "Lorem ipsum" })),
  )
  .await;

  let (status, wall) = call(
    &walls,
    "POST",
    &format!("/walls/{id}/messages/0/replies"),
    Some(json!({ "author": member, "body": "My reply" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(wall["messages"][0]["replies"][0]["body"], "My reply");

  let reader = Uuid::new_v4();
  let (status, wall) = call(
    &walls,
    "POST",
    &format!("/walls/{id}/messages/0/read"),
    Some(json!({ "reader": reader })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(wall["messages"][0]["read_by"][0], reader.to_string());
}

#[tokio::test]
async fn reply_to_missing_message_is_404() {
  let walls = make_walls().await;
  let owner = Uuid::new_v4();
  let id = create_wall(&walls, owner, json!([])).await;
  let (status, _) = call(
    &walls,
    "POST",
    &format!("/walls/{id}/messages/7/replies"),
    Some(json!({ "author": owner, "body": "My reply" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}
