//! Encoding and decoding helpers between the wall aggregate and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings and UUIDs as hyphenated
//! lowercase strings. Participants and messages are stored together as one
//! compact JSON document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wall_core::{message::Message, participant::Participant, wall::Wall};

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Document ────────────────────────────────────────────────────────────────

/// The nested part of a wall, kept in the `document` column.
#[derive(Deserialize)]
struct WallDocument {
  participants: Vec<Participant>,
  #[serde(default)]
  messages:     Vec<Message>,
}

#[derive(Serialize)]
struct WallDocumentRef<'a> {
  participants: &'a [Participant],
  messages:     &'a [Message],
}

pub fn encode_document(wall: &Wall) -> Result<String> {
  Ok(serde_json::to_string(&WallDocumentRef {
    participants: &wall.participants,
    messages:     &wall.messages,
  })?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column values for a `walls` row, ready to bind.
pub struct EncodedWall {
  pub wall_id:    String,
  pub title:      String,
  pub document:   String,
  pub created_at: String,
  pub updated_at: String,
}

impl EncodedWall {
  pub fn from_wall(wall: &Wall) -> Result<Self> {
    Ok(Self {
      wall_id:    encode_uuid(wall.wall_id),
      title:      wall.title.clone(),
      document:   encode_document(wall)?,
      created_at: encode_dt(wall.created_at),
      updated_at: encode_dt(wall.updated_at),
    })
  }
}

/// Raw strings read directly from a `walls` row.
pub struct RawWall {
  pub wall_id:    String,
  pub title:      String,
  pub document:   String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawWall {
  pub fn into_wall(self) -> Result<Wall> {
    let document: WallDocument = serde_json::from_str(&self.document)?;
    Ok(Wall {
      wall_id:      decode_uuid(&self.wall_id)?,
      title:        self.title,
      participants: document.participants,
      messages:     document.messages,
      created_at:   decode_dt(&self.created_at)?,
      updated_at:   decode_dt(&self.updated_at)?,
    })
  }
}
