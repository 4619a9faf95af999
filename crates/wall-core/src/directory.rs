//! [`Walls`] — the top-level operations application code calls.
//!
//! Each identifier-keyed operation resolves the wall through the store, runs
//! one aggregate method on it and saves the whole document once. A missing
//! wall surfaces as [`Error::WallNotFound`]; nothing is saved when the
//! aggregate rejects a change.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
  Error, Result,
  message::{NewMessage, NewReply},
  participant::{Participant, Role},
  store::WallStore,
  wall::{NewWall, Wall},
};

/// Directory of walls backed by a [`WallStore`].
///
/// Cloning is cheap — the store handle is reference-counted.
pub struct Walls<S> {
  store: Arc<S>,
}

impl<S> Clone for Walls<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S> Walls<S>
where
  S: WallStore,
  S::Error: Into<Error>,
{
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub fn store(&self) -> &S { &self.store }

  /// Create a wall titled `title`. The roster is `participants` followed by
  /// `owner` as admin.
  pub async fn create_wall(
    &self,
    title: impl Into<String>,
    owner: Uuid,
    participants: Vec<Participant>,
  ) -> Result<Wall> {
    let input = NewWall::with_owner(title, owner, participants);
    input.validate()?;

    let wall = self.store.create(input).await.map_err(Into::<Error>::into)?;
    debug!(wall_id = %wall.wall_id, %owner, "created wall");
    Ok(wall)
  }

  pub async fn get_wall(&self, id: Uuid) -> Result<Wall> { self.resolve(id).await }

  /// Delete a wall. Dropping a wall that does not exist succeeds.
  pub async fn drop_wall(&self, id: Uuid) -> Result<()> {
    self.store.remove(id).await.map_err(Into::<Error>::into)?;
    debug!(wall_id = %id, "dropped wall");
    Ok(())
  }

  /// Add `subject` to the roster with `role`.
  pub async fn join_wall(&self, id: Uuid, subject: Uuid, role: Role) -> Result<Wall> {
    self
      .update(id, "join", move |wall| {
        wall.add_participant(subject, role);
        Ok(())
      })
      .await
  }

  /// Remove every roster entry for `subject`. Fails with
  /// [`Error::LastAdmin`] if that would leave the wall without an admin.
  pub async fn leave_wall(&self, id: Uuid, subject: Uuid) -> Result<Wall> {
    self
      .update(id, "leave", move |wall| wall.remove_participant(subject).map(drop))
      .await
  }

  /// Post a message as `author`, who must be an admin or editor.
  pub async fn create_message(
    &self,
    id: Uuid,
    author: Uuid,
    title: Option<String>,
    body: impl Into<String>,
  ) -> Result<Wall> {
    let input = NewMessage { author, title, body: body.into() };
    self
      .update(id, "message", move |wall| wall.add_message(input).map(drop))
      .await
  }

  /// Reply to the message at `message_index` as any participant.
  pub async fn create_comment(
    &self,
    id: Uuid,
    message_index: usize,
    author: Uuid,
    body: impl Into<String>,
  ) -> Result<Wall> {
    let input = NewReply::new(author, body);
    self
      .update(id, "comment", move |wall| {
        wall.reply_to(message_index, input).map(drop)
      })
      .await
  }

  /// Mark the message at `message_index` as read by `reader`.
  pub async fn read_message(
    &self,
    id: Uuid,
    message_index: usize,
    reader: Uuid,
  ) -> Result<Wall> {
    self
      .update(id, "read", move |wall| wall.read(message_index, reader).map(drop))
      .await
  }

  async fn resolve(&self, id: Uuid) -> Result<Wall> {
    self
      .store
      .find_by_id(id)
      .await
      .map_err(Into::<Error>::into)?
      .ok_or(Error::WallNotFound(id))
  }

  /// Fetch, mutate in memory, save. The wall is only saved if `mutate`
  /// succeeds.
  async fn update<F>(&self, id: Uuid, op: &'static str, mutate: F) -> Result<Wall>
  where
    F: FnOnce(&mut Wall) -> Result<()> + Send,
  {
    let mut wall = self.resolve(id).await?;

    if let Err(err) = mutate(&mut wall) {
      warn!(wall_id = %id, op, %err, "wall change rejected");
      return Err(err);
    }

    let saved = self.store.save(&wall).await.map_err(Into::<Error>::into)?;
    debug!(wall_id = %id, op, "saved wall");
    Ok(saved)
  }
}
