//! The wall aggregate — one message board with its roster and messages.
//!
//! Every mutation here is in-memory and all-or-nothing: when a method returns
//! an error the wall is left exactly as it was. Persisting the result is the
//! caller's job (see [`crate::directory::Walls`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  message::{Message, NewMessage, NewReply, Reply},
  participant::{Participant, Role},
};

// ─── Wall ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
  /// Assigned by the store on creation.
  pub wall_id:      Uuid,
  pub title:        String,
  pub participants: Vec<Participant>,
  /// Ordered oldest first; positions are the public message addresses.
  pub messages:     Vec<Message>,
  pub created_at:   DateTime<Utc>,
  /// Set by the store on every save.
  pub updated_at:   DateTime<Utc>,
}

impl Wall {
  /// Build a wall from creation input. Used by store backends; `wall_id` and
  /// timestamps are theirs to choose.
  pub fn from_new(wall_id: Uuid, input: NewWall, at: DateTime<Utc>) -> Self {
    Self {
      wall_id,
      title: input.title,
      participants: input.participants,
      messages: Vec::new(),
      created_at: at,
      updated_at: at,
    }
  }

  /// Document-level check run by stores before anything is written.
  pub fn validate(&self) -> Result<()> {
    validate_title(&self.title)?;
    validate_roster(&self.participants)?;

    for (i, message) in self.messages.iter().enumerate() {
      if is_blank(&message.body) {
        return Err(Error::required(format!("messages.{i}.body")));
      }
      for (j, reply) in message.replies.iter().enumerate() {
        if is_blank(&reply.body) {
          return Err(Error::required(format!("messages.{i}.replies.{j}.body")));
        }
      }
    }
    Ok(())
  }

  // ── Roster ──────────────────────────────────────────────────────────────

  /// The first participant matching `subject` whose role is in `allowed`.
  ///
  /// This is the only authorization primitive; pass [`Role::ALL`] to accept
  /// any participant.
  pub fn is_participant(&self, subject: Uuid, allowed: &[Role]) -> Option<&Participant> {
    self
      .participants
      .iter()
      .find(|p| p.subject == subject && allowed.contains(&p.role))
  }

  pub fn admins(&self) -> impl Iterator<Item = &Participant> {
    self.participants.iter().filter(|p| p.is_admin())
  }

  /// Append a participant. Subjects already on the roster are not detected.
  pub fn add_participant(&mut self, subject: Uuid, role: Role) -> &Participant {
    self.participants.push(Participant::new(subject, role));
    &self.participants[self.participants.len() - 1]
  }

  /// Remove every roster entry for `subject` and return how many there were.
  ///
  /// Fails with [`Error::LastAdmin`] if no admin would remain; the roster is
  /// then untouched.
  pub fn remove_participant(&mut self, subject: Uuid) -> Result<usize> {
    let remaining: Vec<Participant> = self
      .participants
      .iter()
      .filter(|p| p.subject != subject)
      .cloned()
      .collect();

    if !remaining.iter().any(Participant::is_admin) {
      return Err(Error::LastAdmin);
    }

    let removed = self.participants.len() - remaining.len();
    self.participants = remaining;
    Ok(removed)
  }

  // ── Messages ────────────────────────────────────────────────────────────

  /// Append a message. Only admins and editors may post.
  pub fn add_message(&mut self, input: NewMessage) -> Result<&Message> {
    if self.is_participant(input.author, Role::AUTHORS).is_none() {
      return Err(Error::Unauthorized {
        subject: input.author,
        action:  "post a message",
      });
    }
    if is_blank(&input.body) {
      return Err(Error::required(format!("messages.{}.body", self.messages.len())));
    }

    self.messages.push(Message::from_new(input, Utc::now()));
    Ok(&self.messages[self.messages.len() - 1])
  }

  /// Append a reply to the message at `index`. Any participant may reply.
  pub fn reply_to(&mut self, index: usize, input: NewReply) -> Result<&Reply> {
    if self.is_participant(input.author, Role::ALL).is_none() {
      return Err(Error::Unauthorized {
        subject: input.author,
        action:  "reply to a message",
      });
    }

    let message = self.message_mut(index)?;
    if is_blank(&input.body) {
      return Err(Error::required(format!(
        "messages.{index}.replies.{}.body",
        message.replies.len()
      )));
    }

    message.replies.push(Reply::from_new(input, Utc::now()));
    Ok(&message.replies[message.replies.len() - 1])
  }

  /// Mark the message at `index` as read by `reader`.
  ///
  /// There is no roster check: anyone may mark a message read. Returns
  /// `false` if `reader` had already read it.
  pub fn read(&mut self, index: usize, reader: Uuid) -> Result<bool> {
    Ok(self.message_mut(index)?.mark_read(reader))
  }

  fn message_mut(&mut self, index: usize) -> Result<&mut Message> {
    let len = self.messages.len();
    self.messages.get_mut(index).ok_or(Error::IndexOutOfRange { index, len })
  }
}

// ─── NewWall ─────────────────────────────────────────────────────────────────

/// Input to [`crate::store::WallStore::create`].
#[derive(Debug, Clone)]
pub struct NewWall {
  pub title:        String,
  pub participants: Vec<Participant>,
}

impl NewWall {
  /// The supplied participants followed by `owner` as an admin.
  pub fn with_owner(
    title: impl Into<String>,
    owner: Uuid,
    mut participants: Vec<Participant>,
  ) -> Self {
    participants.push(Participant::new(owner, Role::Admin));
    Self { title: title.into(), participants }
  }

  pub fn validate(&self) -> Result<()> {
    validate_title(&self.title)?;
    validate_roster(&self.participants)
  }
}

// ─── Checks ──────────────────────────────────────────────────────────────────

fn is_blank(s: &str) -> bool { s.trim().is_empty() }

fn validate_title(title: &str) -> Result<()> {
  if is_blank(title) {
    return Err(Error::required("title"));
  }
  Ok(())
}

fn validate_roster(participants: &[Participant]) -> Result<()> {
  if !participants.iter().any(Participant::is_admin) {
    return Err(Error::LastAdmin);
  }
  Ok(())
}
