//! Handlers for wall and roster endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/walls` | Body: `{"title","owner","participants"?}`; 201 |
//! | `GET`    | `/walls/:id` | 404 if not found |
//! | `DELETE` | `/walls/:id` | 204, also when already gone |
//! | `POST`   | `/walls/:id/participants` | Body: `{"subject","role"?}` |
//! | `DELETE` | `/walls/:id/participants/:subject` | 409 when removing the last admin |

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use wall_core::{
  Error, Walls,
  participant::{Participant, Role},
  store::WallStore,
  wall::Wall,
};

use crate::{error::ApiError, required};

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub title:        Option<String>,
  pub owner:        Option<Uuid>,
  #[serde(default)]
  pub participants: Vec<ParticipantBody>,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantBody {
  pub subject: Option<Uuid>,
  pub role:    Option<String>,
}

impl ParticipantBody {
  fn into_participant(self, index: usize) -> Result<Participant, ApiError> {
    let subject = required(self.subject, &format!("participants.{index}.subject"))?;
    let role = parse_role(self.role.as_deref())
      .map_err(|_| Error::invalid_enum(format!("participants.{index}.role")))?;
    Ok(Participant::new(subject, role))
  }
}

/// `POST /walls` — returns 201 + the stored [`Wall`].
pub async fn create<S>(
  State(walls): State<Walls<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: WallStore,
  S::Error: Into<Error>,
{
  let Json(body) = body?;
  let title = required(body.title, "title")?;
  let owner = required(body.owner, "owner")?;
  let participants = body
    .participants
    .into_iter()
    .enumerate()
    .map(|(i, p)| p.into_participant(i))
    .collect::<Result<Vec<_>, _>>()?;

  let wall = walls.create_wall(title, owner, participants).await?;
  Ok((StatusCode::CREATED, Json(wall)))
}

// ─── Get / drop ───────────────────────────────────────────────────────────────

/// `GET /walls/:id`
pub async fn get_one<S>(
  State(walls): State<Walls<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Wall>, ApiError>
where
  S: WallStore,
  S::Error: Into<Error>,
{
  Ok(Json(walls.get_wall(id).await?))
}

/// `DELETE /walls/:id`
pub async fn drop_one<S>(
  State(walls): State<Walls<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: WallStore,
  S::Error: Into<Error>,
{
  walls.drop_wall(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Roster ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JoinBody {
  pub subject: Option<Uuid>,
  /// Defaults to `member`.
  pub role:    Option<String>,
}

/// `POST /walls/:id/participants`
pub async fn join<S>(
  State(walls): State<Walls<S>>,
  Path(id): Path<Uuid>,
  body: Result<Json<JoinBody>, JsonRejection>,
) -> Result<Json<Wall>, ApiError>
where
  S: WallStore,
  S::Error: Into<Error>,
{
  let Json(body) = body?;
  let subject = required(body.subject, "subject")?;
  let role = parse_role(body.role.as_deref())?;
  Ok(Json(walls.join_wall(id, subject, role).await?))
}

/// `DELETE /walls/:id/participants/:subject`
pub async fn leave<S>(
  State(walls): State<Walls<S>>,
  Path((id, subject)): Path<(Uuid, Uuid)>,
) -> Result<Json<Wall>, ApiError>
where
  S: WallStore,
  S::Error: Into<Error>,
{
  Ok(Json(walls.leave_wall(id, subject).await?))
}

fn parse_role(role: Option<&str>) -> Result<Role, Error> {
  role.map_or(Ok(Role::default()), Role::parse)
}
