//! Messages and their replies.
//!
//! Replies hang one level below a message; a reply cannot itself be replied
//! to. Messages are addressed by their position in the wall's message list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Stored entries ──────────────────────────────────────────────────────────

/// A top-level post on a wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  /// Stable identifier assigned on append. Not used for addressing.
  pub message_id: Uuid,
  pub title:      Option<String>,
  pub author:     Uuid,
  pub body:       String,
  /// Subjects that have read this message; no duplicates.
  #[serde(default)]
  pub read_by:    Vec<Uuid>,
  #[serde(default)]
  pub replies:    Vec<Reply>,
  pub posted_at:  DateTime<Utc>,
}

impl Message {
  pub(crate) fn from_new(input: NewMessage, posted_at: DateTime<Utc>) -> Self {
    Self {
      message_id: Uuid::new_v4(),
      title: input.title,
      author: input.author,
      body: input.body,
      read_by: Vec::new(),
      replies: Vec::new(),
      posted_at,
    }
  }

  /// Record `reader` as having read this message. Returns `false` if they
  /// already had.
  pub fn mark_read(&mut self, reader: Uuid) -> bool {
    if self.is_read_by(reader) {
      return false;
    }
    self.read_by.push(reader);
    true
  }

  pub fn is_read_by(&self, reader: Uuid) -> bool { self.read_by.contains(&reader) }
}

/// A response attached to a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
  pub reply_id:  Uuid,
  pub author:    Uuid,
  pub body:      String,
  #[serde(default)]
  pub read_by:   Vec<Uuid>,
  pub posted_at: DateTime<Utc>,
}

impl Reply {
  pub(crate) fn from_new(input: NewReply, posted_at: DateTime<Utc>) -> Self {
    Self {
      reply_id: Uuid::new_v4(),
      author: input.author,
      body: input.body,
      read_by: Vec::new(),
      posted_at,
    }
  }
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Input to [`Wall::add_message`](crate::wall::Wall::add_message).
#[derive(Debug, Clone)]
pub struct NewMessage {
  pub author: Uuid,
  pub title:  Option<String>,
  pub body:   String,
}

impl NewMessage {
  pub fn new(author: Uuid, body: impl Into<String>) -> Self {
    Self { author, title: None, body: body.into() }
  }

  pub fn with_title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }
}

/// Input to [`Wall::reply_to`](crate::wall::Wall::reply_to).
#[derive(Debug, Clone)]
pub struct NewReply {
  pub author: Uuid,
  pub body:   String,
}

impl NewReply {
  pub fn new(author: Uuid, body: impl Into<String>) -> Self {
    Self { author, body: body.into() }
  }
}
