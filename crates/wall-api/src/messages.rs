//! Handlers for message, reply and read-receipt endpoints.
//!
//! Messages are addressed by their position in the wall's message list.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/walls/:id/messages` | Body: `{"author","title"?,"body"}`; admins and editors only |
//! | `POST` | `/walls/:id/messages/:index/replies` | Body: `{"author","body"}`; any participant |
//! | `POST` | `/walls/:id/messages/:index/read` | Body: `{"reader"}`; no roster check |

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use wall_core::{Error, Walls, store::WallStore, wall::Wall};

use crate::{error::ApiError, required};

// ─── Messages ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MessageBody {
  pub author: Option<Uuid>,
  pub title:  Option<String>,
  pub body:   Option<String>,
}

/// `POST /walls/:id/messages` — returns 201 + the updated [`Wall`].
pub async fn create<S>(
  State(walls): State<Walls<S>>,
  Path(id): Path<Uuid>,
  body: Result<Json<MessageBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: WallStore,
  S::Error: Into<Error>,
{
  let Json(body) = body?;
  let author = required(body.author, "author")?;
  let text = required(body.body, "body")?;

  let wall = walls.create_message(id, author, body.title, text).await?;
  Ok((StatusCode::CREATED, Json(wall)))
}

// ─── Replies ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReplyBody {
  pub author: Option<Uuid>,
  pub body:   Option<String>,
}

/// `POST /walls/:id/messages/:index/replies` — returns 201 + the updated
/// [`Wall`].
pub async fn reply<S>(
  State(walls): State<Walls<S>>,
  Path((id, index)): Path<(Uuid, usize)>,
  body: Result<Json<ReplyBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: WallStore,
  S::Error: Into<Error>,
{
  let Json(body) = body?;
  let author = required(body.author, "author")?;
  let text = required(body.body, "body")?;

  let wall = walls.create_comment(id, index, author, text).await?;
  Ok((StatusCode::CREATED, Json(wall)))
}

// ─── Read receipts ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReadBody {
  pub reader: Option<Uuid>,
}

/// `POST /walls/:id/messages/:index/read`
pub async fn read<S>(
  State(walls): State<Walls<S>>,
  Path((id, index)): Path<(Uuid, usize)>,
  body: Result<Json<ReadBody>, JsonRejection>,
) -> Result<Json<Wall>, ApiError>
where
  S: WallStore,
  S::Error: Into<Error>,
{
  let Json(body) = body?;
  let reader = required(body.reader, "reader")?;
  Ok(Json(walls.read_message(id, index, reader).await?))
}
