//! [`SqliteStore`] — the SQLite implementation of [`WallStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use tracing::debug;
use uuid::Uuid;

use wall_core::{
  store::WallStore,
  wall::{NewWall, Wall},
};

use crate::{
  Error, Result,
  encode::{EncodedWall, RawWall, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A wall store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Number of stored walls.
  pub async fn count(&self) -> Result<usize> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM walls", [], |r| r.get(0))?)
      })
      .await?;
    Ok(usize::try_from(n).unwrap_or_default())
  }
}

// ─── WallStore impl ──────────────────────────────────────────────────────────

impl WallStore for SqliteStore {
  type Error = Error;

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Wall>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawWall> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT wall_id, title, document, created_at, updated_at
             FROM walls WHERE wall_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawWall {
                wall_id:    row.get(0)?,
                title:      row.get(1)?,
                document:   row.get(2)?,
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawWall::into_wall).transpose()
  }

  async fn create(&self, input: NewWall) -> Result<Wall> {
    input.validate()?;

    let wall = Wall::from_new(Uuid::new_v4(), input, Utc::now());
    let row = EncodedWall::from_wall(&wall)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO walls (wall_id, title, document, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            row.wall_id,
            row.title,
            row.document,
            row.created_at,
            row.updated_at,
          ],
        )?;
        Ok(())
      })
      .await?;

    debug!(wall_id = %wall.wall_id, "inserted wall row");
    Ok(wall)
  }

  async fn save(&self, wall: &Wall) -> Result<Wall> {
    wall.validate()?;

    let mut saved = wall.clone();
    saved.updated_at = Utc::now();
    let row = EncodedWall::from_wall(&saved)?;

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE walls SET title = ?2, document = ?3, updated_at = ?4
           WHERE wall_id = ?1",
          rusqlite::params![row.wall_id, row.title, row.document, row.updated_at],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::WallNotFound(wall.wall_id));
    }
    Ok(saved)
  }

  async fn remove(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM walls WHERE wall_id = ?1", rusqlite::params![id_str])?)
      })
      .await?;

    debug!(wall_id = %id, deleted, "removed wall rows");
    Ok(())
  }
}
